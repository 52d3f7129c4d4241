//! # Satellites-in-View Reassembly
//!
//! A receiver splits its satellite list over a group of GSV sentences carrying at
//! most four satellites each. [`AssemblerState`] is the explicit state machine that
//! turns a run of [`SatelliteViewFragment`]s back into one [`SatellitesInView`]:
//!
//! - `Idle` + fragment 1 starts a batch and consumes its satellites.
//! - `Idle` + any other fragment is a leftover of a group we missed and is dropped.
//! - `Collecting` + the expected next fragment appends; the batch is emitted once the
//!   last sentence arrives or the declared satellite count is reached.
//! - `Collecting` + anything else discards the batch and returns to `Idle`. The
//!   offending fragment is not reused, even when it is a fragment 1.
//!
//! A batch is never emitted partially.

use std::mem;

use log::debug;

use crate::{
    Decoded, Decoder, Sentence,
    nmea_content::{
        Message, SatelliteRecord, SatellitesInView,
        sentences::{SatelliteViewFragment, decode_gsv},
    },
};

/// The satellites collected so far for one GSV group.
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteViewBatch {
    pub talker_id: String,
    pub expected_sentence_count: u8,
    /// Index of the next sentence this batch accepts
    pub current_sentence_index: u8,
    pub total_satellites: u16,
    pub satellites: Vec<SatelliteRecord>,
}

impl SatelliteViewBatch {
    fn start(fragment: SatelliteViewFragment) -> Self {
        let mut batch = Self {
            talker_id: fragment.talker_id,
            expected_sentence_count: fragment.total_sentences,
            current_sentence_index: 1,
            total_satellites: fragment.total_satellites,
            satellites: Vec::with_capacity(usize::from(fragment.total_satellites)),
        };
        batch.append(&fragment.satellites);
        batch
    }

    fn accepts(&self, fragment: &SatelliteViewFragment) -> bool {
        fragment.sentence_index == self.current_sentence_index
            && fragment.total_sentences == self.expected_sentence_count
            && fragment.talker_id == self.talker_id
    }

    fn append(&mut self, satellites: &[SatelliteRecord]) {
        self.satellites.extend_from_slice(satellites);
        self.current_sentence_index = self.current_sentence_index.saturating_add(1);
    }

    fn is_complete(&self) -> bool {
        self.current_sentence_index > self.expected_sentence_count
            || (self.total_satellites > 0
                && self.satellites.len() >= usize::from(self.total_satellites))
    }

    fn finish(self) -> SatellitesInView {
        SatellitesInView {
            talker_id: self.talker_id,
            total_satellites: self.total_satellites,
            satellites: self.satellites,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub enum AssemblerState {
    #[default]
    Idle,
    Collecting(SatelliteViewBatch),
}

/// What a single fragment did to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// A batch was started or extended and is still waiting for sentences.
    Accepted,
    /// The group is complete.
    Completed(SatellitesInView),
    /// A fragment arrived while idle without being the first of its group.
    Ignored,
    /// The fragment broke the sequence; the batch in progress was thrown away.
    Aborted,
}

impl AssemblerState {
    /// Feeds one fragment and returns the next state with what happened.
    ///
    /// ```rust
    /// use nmea0183_engine::{AssemblerState, Sentence, Transition, sentences::decode_gsv};
    ///
    /// let fragment = |body: &str| decode_gsv(&Sentence::tokenize(body).unwrap()).unwrap();
    ///
    /// let first = fragment("GPGSV,2,1,05,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45");
    /// let (state, transition) = AssemblerState::Idle.advance(first);
    /// assert_eq!(transition, Transition::Accepted);
    ///
    /// let (state, transition) = state.advance(fragment("GPGSV,2,2,05,15,41,100,44"));
    /// assert!(matches!(transition, Transition::Completed(view) if view.satellites.len() == 5));
    /// assert_eq!(state, AssemblerState::Idle);
    /// ```
    pub fn advance(self, fragment: SatelliteViewFragment) -> (AssemblerState, Transition) {
        let batch = match self {
            AssemblerState::Idle if fragment.sentence_index == 1 => {
                SatelliteViewBatch::start(fragment)
            }
            AssemblerState::Idle => {
                debug!(
                    "gsv: dropping fragment {}/{} without a group start",
                    fragment.sentence_index, fragment.total_sentences
                );
                return (AssemblerState::Idle, Transition::Ignored);
            }
            AssemblerState::Collecting(mut batch) if batch.accepts(&fragment) => {
                batch.append(&fragment.satellites);
                batch
            }
            AssemblerState::Collecting(batch) => {
                debug!(
                    "gsv: expected {}{}/{}, got {}{}/{}; discarding {} satellites",
                    batch.talker_id,
                    batch.current_sentence_index,
                    batch.expected_sentence_count,
                    fragment.talker_id,
                    fragment.sentence_index,
                    fragment.total_sentences,
                    batch.satellites.len()
                );
                return (AssemblerState::Idle, Transition::Aborted);
            }
        };

        if batch.is_complete() {
            (AssemblerState::Idle, Transition::Completed(batch.finish()))
        } else {
            (AssemblerState::Collecting(batch), Transition::Accepted)
        }
    }
}

/// The stateful GSV decoder registered by the engine.
#[derive(Debug, Default)]
pub struct SatelliteViewAssembler {
    state: AssemblerState,
}

impl SatelliteViewAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AssemblerState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == AssemblerState::Idle
    }

    /// Drops any batch in progress.
    pub fn reset(&mut self) {
        self.state = AssemblerState::Idle;
    }

    pub fn push(&mut self, fragment: SatelliteViewFragment) -> Transition {
        let (state, transition) = mem::take(&mut self.state).advance(fragment);
        self.state = state;
        transition
    }
}

impl Decoder for SatelliteViewAssembler {
    fn decode(&mut self, sentence: &Sentence<'_>) -> Decoded {
        let Some(fragment) = decode_gsv(sentence) else {
            return Decoded::Insufficient;
        };

        match self.push(fragment) {
            Transition::Accepted => Decoded::Pending,
            Transition::Completed(view) => Decoded::Message(Message::SatellitesInView(view)),
            Transition::Ignored | Transition::Aborted => Decoded::Insufficient,
        }
    }
}
