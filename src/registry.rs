//! # Decoder Registry
//!
//! Maps a sentence type (`GGA`, `GSV`, ...) to the [`Decoder`] that handles it.
//!
//! A registry is a plain value owned by its engine, so two engines never share
//! decoders or GSV state.

use std::collections::{HashMap, hash_map::Entry};

use crate::{
    Error, SatelliteViewAssembler, Sentence,
    nmea_content::{
        Message,
        sentences::{decode_gga, decode_gll, decode_gsa, decode_rmc, decode_vtg, decode_zda},
    },
};

/// What a decoder made of one sentence.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Message(Message),
    /// The sentence was accepted but only contributes to a later result.
    Pending,
    /// A required field was missing or unreadable.
    Insufficient,
}

/// The result of processing one raw line.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    Decoded(Message),
    Pending,
    Insufficient,
    /// Framing or tokenizing failed.
    MalformedSentence(Error),
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },
    UnknownSentenceType,
}

impl DecodeOutcome {
    pub fn is_decoded(&self) -> bool {
        matches!(self, DecodeOutcome::Decoded(_))
    }

    pub fn message(&self) -> Option<&Message> {
        match self {
            DecodeOutcome::Decoded(message) => Some(message),
            _ => None,
        }
    }
}

impl From<Decoded> for DecodeOutcome {
    fn from(decoded: Decoded) -> Self {
        match decoded {
            Decoded::Message(message) => DecodeOutcome::Decoded(message),
            Decoded::Pending => DecodeOutcome::Pending,
            Decoded::Insufficient => DecodeOutcome::Insufficient,
        }
    }
}

impl From<Error> for DecodeOutcome {
    fn from(error: Error) -> Self {
        match error {
            Error::ChecksumMismatch { expected, found } => {
                DecodeOutcome::ChecksumMismatch { expected, found }
            }
            error => DecodeOutcome::MalformedSentence(error),
        }
    }
}

/// Turns a tokenized sentence into a [`Decoded`] result.
///
/// Any `FnMut(&Sentence) -> Option<Message>` is a decoder, with [`None`] meaning
/// [`Decoded::Insufficient`]:
///
/// ```rust
/// use nmea0183_engine::{Decoded, Decoder, Message, Sentence, sentences::decode_vtg};
///
/// let mut decoder = |sentence: &Sentence<'_>| decode_vtg(sentence).map(Message::CourseOverGround);
///
/// let sentence = Sentence::tokenize("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K").unwrap();
/// assert!(matches!(decoder.decode(&sentence), Decoded::Message(_)));
/// ```
pub trait Decoder: Send {
    fn decode(&mut self, sentence: &Sentence<'_>) -> Decoded;
}

impl<F> Decoder for F
where
    F: FnMut(&Sentence<'_>) -> Option<Message> + Send,
{
    fn decode(&mut self, sentence: &Sentence<'_>) -> Decoded {
        match self(sentence) {
            Some(message) => Decoded::Message(message),
            None => Decoded::Insufficient,
        }
    }
}

#[derive(Default)]
pub struct DecoderRegistry {
    decoders: HashMap<String, Box<dyn Decoder>>,
}

impl DecoderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the decoders for GGA, GLL, GSA, GSV, RMC, VTG and ZDA.
    pub fn builtin() -> Self {
        let mut decoders: HashMap<String, Box<dyn Decoder>> = HashMap::new();

        decoders.insert(
            "GGA".into(),
            Box::new(|s: &Sentence<'_>| decode_gga(s).map(Message::PositionFix)),
        );
        decoders.insert(
            "GLL".into(),
            Box::new(|s: &Sentence<'_>| decode_gll(s).map(Message::PositionFix)),
        );
        decoders.insert(
            "GSA".into(),
            Box::new(|s: &Sentence<'_>| decode_gsa(s).map(Message::ActiveSatellites)),
        );
        decoders.insert("GSV".into(), Box::new(SatelliteViewAssembler::new()));
        decoders.insert(
            "RMC".into(),
            Box::new(|s: &Sentence<'_>| decode_rmc(s).map(Message::PositionFix)),
        );
        decoders.insert(
            "VTG".into(),
            Box::new(|s: &Sentence<'_>| decode_vtg(s).map(Message::CourseOverGround)),
        );
        decoders.insert(
            "ZDA".into(),
            Box::new(|s: &Sentence<'_>| decode_zda(s).map(Message::TimeAndDate)),
        );

        Self { decoders }
    }

    /// Registers `decoder` for sentences of type `prefix`.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicatePrefix`] if `prefix` already has a decoder; the existing one is kept.
    pub fn register(
        &mut self,
        prefix: impl Into<String>,
        decoder: impl Decoder + 'static,
    ) -> Result<(), Error> {
        match self.decoders.entry(prefix.into()) {
            Entry::Occupied(entry) => Err(Error::DuplicatePrefix(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(Box::new(decoder));
                Ok(())
            }
        }
    }

    /// Runs the decoder registered for `sentence.prefix`.
    ///
    /// [`DecodeOutcome::UnknownSentenceType`] when there is none; no decoder is touched.
    pub fn dispatch(&mut self, sentence: &Sentence<'_>) -> DecodeOutcome {
        match self.decoders.get_mut(sentence.prefix) {
            Some(decoder) => decoder.decode(sentence).into(),
            None => DecodeOutcome::UnknownSentenceType,
        }
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.decoders.contains_key(prefix)
    }

    /// The registered prefixes, sorted.
    pub fn prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = self.decoders.keys().map(String::as_str).collect();
        prefixes.sort_unstable();
        prefixes
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl std::fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("prefixes", &self.prefixes())
            .finish()
    }
}
