//! # NMEA 0183 Engine
//!
//! This library decodes the NMEA 0183 sentences emitted by GNSS receivers, one line
//! at a time, into typed results: `$HHHHH,D1,D2,...,Dn*CC\r\n`
//!
//! Each line goes through the same pipeline:
//! - Framing: start delimiter, checksum and line ending, see [`validate`] and [`Config`]
//! - Tokenizing: address and positional fields, see [`Sentence`]
//! - Dispatch: the [`DecoderRegistry`] picks the decoder for the sentence type
//! - Decoding: one pure decoder per sentence type, see [`sentences`], and a
//!   [`SatelliteViewAssembler`] for multi-sentence GSV groups
//!
//! [`NmeaEngine`] ties them together and notifies subscribers of every decoded result.
//! Bad input never fails: it is reported as a [`DecodeOutcome`].
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_engine::{DecodeOutcome, Message, NmeaEngine};
//!
//! let mut engine = NmeaEngine::new();
//! engine.on_satellites_in_view(|view| println!("{} satellites in view", view.satellites.len()));
//!
//! let outcome =
//!     engine.process_line("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47");
//!
//! let Some(Message::PositionFix(fix)) = outcome.message() else {
//!     panic!("Unexpected outcome {outcome:?}");
//! };
//! assert_eq!(fix.satellite_count, Some(8));
//!
//! assert_eq!(engine.process_line("$GPXYZ,1,2,3*50"), DecodeOutcome::UnknownSentenceType);
//! ```

pub mod assembler;
pub mod config;
pub mod engine;
pub mod error;
mod nmea0183;
pub mod nmea_content;
pub mod parsing;
pub mod registry;
pub mod sentence;

pub use assembler::{AssemblerState, SatelliteViewAssembler, SatelliteViewBatch, Transition};
pub use config::{ChecksumMode, Config, LineEndingMode};
pub use engine::NmeaEngine;
pub use error::{Error, IResult};
pub use nmea0183::{checksum, format_checksum, line_ending, validate};
pub use nmea_content::{
    ActiveSatellites, CourseOverGround, FaaMode, FixDimension, FixQuality, FixSource,
    MagneticVariation, Message, PositionFix, SatelliteRecord, SatellitesInView, SelectionMode,
    SystemId, TimeAndDate, sentences,
};
pub use parsing::{
    Direction, Position, Timestamp, decode_date, decode_degrees_minutes, decode_time_of_day,
};
pub use registry::{DecodeOutcome, Decoded, Decoder, DecoderRegistry};
pub use sentence::{Sentence, Talker};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
