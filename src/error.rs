//! # Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! Framing and tokenizing failures never escape [`NmeaEngine::process_line`](crate::NmeaEngine::process_line)
//! as errors: they are folded into a [`DecodeOutcome`](crate::DecodeOutcome). Only decoder
//! registration reports an [`Error`] through a `Result`.

use thiserror::Error;

/// Holds the result of the internal nom parsers.
///
/// The error side is nom's default error type; it is always mapped to an [`Error`]
/// or to "field absent" before it reaches a caller.
pub type IResult<I, O> = nom::IResult<I, O, nom::error::Error<I>>;

/// Represents everything that can go wrong while framing, tokenizing or registering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The provided line contains non-ASCII characters.
    ///
    /// NMEA sentences must be ASCII-only for the checksum to be meaningful.
    #[error("sentence contains non-ASCII characters")]
    NonAscii,

    /// The line does not begin with `$` (or `!` for encapsulated sentences).
    #[error("sentence does not start with '$' or '!'")]
    MissingStartDelimiter,

    /// No `*` checksum delimiter was found while a checksum is required.
    #[error("sentence has no '*' checksum delimiter")]
    MissingChecksum,

    /// The characters after `*` are not exactly two hexadecimal digits.
    #[error("checksum field is not two hexadecimal digits")]
    InvalidChecksum,

    /// The trailing `\r\n` does not match the configured [`LineEndingMode`](crate::LineEndingMode).
    #[error("line ending does not match the configured mode")]
    LineEnding,

    /// The address token is too short or contains characters other than letters and digits.
    #[error("address field {0:?} is not a valid talker and sentence type")]
    InvalidAddress(String),

    /// The checksum of the sentence was corrupt or incorrect.
    #[error("checksum mismatch: calculated {expected:02X}, found {found:02X}")]
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },

    /// A decoder is already registered under this prefix.
    #[error("a decoder is already registered for prefix {0:?}")]
    DuplicatePrefix(String),
}
