//! # Engine
//!
//! [`NmeaEngine`] is the single entry point for a line-oriented transport: it frames,
//! tokenizes and dispatches one raw line per call and pushes every decoded result to
//! the callbacks subscribed for its type.
//!
//! The engine is synchronous and owns all of its state. Share it between threads only
//! behind a lock around [`NmeaEngine::process_line`].

use log::{debug, trace};

use crate::{
    Config, DecodeOutcome, Decoder, DecoderRegistry, Error, Sentence,
    nmea0183::validate,
    nmea_content::{
        ActiveSatellites, CourseOverGround, Message, PositionFix, SatellitesInView, TimeAndDate,
    },
};

type Callback<T> = Box<dyn FnMut(&T) + Send>;

#[derive(Default)]
struct Subscribers {
    position_fix: Vec<Callback<PositionFix>>,
    active_satellites: Vec<Callback<ActiveSatellites>>,
    satellites_in_view: Vec<Callback<SatellitesInView>>,
    course_over_ground: Vec<Callback<CourseOverGround>>,
    time_and_date: Vec<Callback<TimeAndDate>>,
}

impl Subscribers {
    fn notify(&mut self, message: &Message) {
        match message {
            Message::PositionFix(fix) => self.position_fix.iter_mut().for_each(|f| f(fix)),
            Message::ActiveSatellites(active) => {
                self.active_satellites.iter_mut().for_each(|f| f(active))
            }
            Message::SatellitesInView(view) => {
                self.satellites_in_view.iter_mut().for_each(|f| f(view))
            }
            Message::CourseOverGround(course) => {
                self.course_over_ground.iter_mut().for_each(|f| f(course))
            }
            Message::TimeAndDate(time) => self.time_and_date.iter_mut().for_each(|f| f(time)),
        }
    }

    fn len(&self) -> usize {
        self.position_fix.len()
            + self.active_satellites.len()
            + self.satellites_in_view.len()
            + self.course_over_ground.len()
            + self.time_and_date.len()
    }
}

/// Decodes a stream of NMEA 0183 lines.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
///
/// use nmea0183_engine::{DecodeOutcome, NmeaEngine};
///
/// let altitudes = Arc::new(Mutex::new(Vec::new()));
///
/// let mut engine = NmeaEngine::new();
/// let sink = Arc::clone(&altitudes);
/// engine.on_position_fix(move |fix| sink.lock().unwrap().push(fix.altitude));
///
/// let outcome =
///     engine.process_line("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47");
/// assert!(outcome.is_decoded());
///
/// let outcome =
///     engine.process_line("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*48");
/// assert_eq!(outcome, DecodeOutcome::ChecksumMismatch { expected: 0x47, found: 0x48 });
///
/// assert_eq!(*altitudes.lock().unwrap(), [Some(545.4)]);
/// ```
pub struct NmeaEngine {
    config: Config,
    registry: DecoderRegistry,
    subscribers: Subscribers,
}

impl Default for NmeaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NmeaEngine {
    /// An engine with the default [`Config`] and the built-in decoders.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// An engine with the built-in decoders for GGA, GLL, GSA, GSV, RMC, VTG and ZDA.
    pub fn with_config(config: Config) -> Self {
        Self::with_registry(config, DecoderRegistry::builtin())
    }

    /// An engine without any decoder; every sentence type must be registered.
    pub fn bare(config: Config) -> Self {
        Self::with_registry(config, DecoderRegistry::new())
    }

    pub fn with_registry(config: Config, registry: DecoderRegistry) -> Self {
        Self {
            config,
            registry,
            subscribers: Subscribers::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &DecoderRegistry {
        &self.registry
    }

    /// Registers a decoder for an additional sentence type.
    ///
    /// Meant to run at start-up, before the first [`process_line`](Self::process_line).
    ///
    /// # Errors
    ///
    /// [`Error::DuplicatePrefix`] if the sentence type is already handled.
    ///
    /// ```rust
    /// use nmea0183_engine::{
    ///     DecodeOutcome, Error, Message, NmeaEngine, Sentence, sentences::decode_gga,
    /// };
    ///
    /// let mut engine = NmeaEngine::new();
    ///
    /// let result =
    ///     engine.register_decoder("GGA", |s: &Sentence<'_>| decode_gga(s).map(Message::PositionFix));
    /// assert_eq!(result, Err(Error::DuplicatePrefix("GGA".to_owned())));
    ///
    /// engine
    ///     .register_decoder("TXT", |_: &Sentence<'_>| -> Option<Message> { None })
    ///     .unwrap();
    /// let outcome = engine.process_line("$GPTXT,01,01,02,ANTSTATUS=OK*3B");
    /// assert_eq!(outcome, DecodeOutcome::Insufficient);
    /// ```
    pub fn register_decoder(
        &mut self,
        prefix: impl Into<String>,
        decoder: impl Decoder + 'static,
    ) -> Result<(), Error> {
        self.registry.register(prefix, decoder)
    }

    pub fn on_position_fix(&mut self, callback: impl FnMut(&PositionFix) + Send + 'static) {
        self.subscribers.position_fix.push(Box::new(callback));
    }

    pub fn on_active_satellites(
        &mut self,
        callback: impl FnMut(&ActiveSatellites) + Send + 'static,
    ) {
        self.subscribers.active_satellites.push(Box::new(callback));
    }

    /// Called once per complete GSV group.
    pub fn on_satellites_in_view(
        &mut self,
        callback: impl FnMut(&SatellitesInView) + Send + 'static,
    ) {
        self.subscribers.satellites_in_view.push(Box::new(callback));
    }

    pub fn on_course_over_ground(
        &mut self,
        callback: impl FnMut(&CourseOverGround) + Send + 'static,
    ) {
        self.subscribers.course_over_ground.push(Box::new(callback));
    }

    pub fn on_time_and_date(&mut self, callback: impl FnMut(&TimeAndDate) + Send + 'static) {
        self.subscribers.time_and_date.push(Box::new(callback));
    }

    /// Processes one raw line.
    ///
    /// Bad input is never an error: it is reported through the returned
    /// [`DecodeOutcome`] and logged at debug level. Subscribers run before this
    /// returns, and only for [`DecodeOutcome::Decoded`].
    pub fn process_line(&mut self, line: &str) -> DecodeOutcome {
        let outcome = match validate(line, &self.config).and_then(Sentence::tokenize) {
            Ok(sentence) => self.registry.dispatch(&sentence),
            Err(error) => error.into(),
        };

        match &outcome {
            DecodeOutcome::Decoded(message) => {
                trace!("decoded {line:?}: {message:?}");
                self.subscribers.notify(message);
            }
            DecodeOutcome::Pending => trace!("buffered {line:?}"),
            DecodeOutcome::Insufficient => {
                debug!("dropping {line:?}: missing or unreadable fields")
            }
            DecodeOutcome::MalformedSentence(error) => debug!("dropping {line:?}: {error}"),
            DecodeOutcome::ChecksumMismatch { expected, found } => {
                debug!(
                    "dropping {line:?}: checksum mismatch, calculated {expected:02X}, found {found:02X}"
                )
            }
            DecodeOutcome::UnknownSentenceType => {
                debug!("ignoring {line:?}: no decoder registered")
            }
        }

        outcome
    }
}

impl std::fmt::Debug for NmeaEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NmeaEngine")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
