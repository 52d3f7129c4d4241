//! # Framing Configuration
//!
//! The engine decodes one line at a time; these settings decide how strictly the
//! outer frame of each line (`$`, `*CC`, `\r\n`) is checked before its content is
//! looked at.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines how the engine should handle NMEA sentence checksums.
///
/// NMEA 0183 sentences carry a checksum in the format `*CC` where CC is a two-digit
/// hexadecimal value representing the XOR of all bytes in the sentence body
/// (excluding the `$` prefix and `*` delimiter).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    /// Checksum is required and must be present.
    ///
    /// A line without `*CC` is rejected as malformed. A present checksum is validated.
    #[default]
    Required,

    /// Checksum is optional but will be validated if present.
    ///
    /// Use this mode with legacy equipment that does not always append a checksum.
    Optional,
}

/// Defines how the engine should handle a trailing CRLF.
///
/// NMEA 0183 sentences end with `\r\n` on the wire, but most line readers strip it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineEndingMode {
    /// The line must end with `\r\n`.
    Required,

    /// The line must not end with `\r\n`.
    Forbidden,

    /// A trailing `\r\n` is stripped when present.
    #[default]
    Optional,
}

/// Engine configuration.
///
/// # Examples
///
/// ```rust
/// use nmea0183_engine::{ChecksumMode, Config, LineEndingMode};
///
/// let config = Config::default();
/// assert_eq!(config.checksum, ChecksumMode::Required);
/// assert_eq!(config.line_ending, LineEndingMode::Optional);
///
/// let lenient = Config::default().with_checksum(ChecksumMode::Optional);
/// assert_eq!(lenient.checksum, ChecksumMode::Optional);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Checksum requirement
    pub checksum: ChecksumMode,
    /// Line ending requirement
    pub line_ending: LineEndingMode,
}

impl Config {
    pub fn with_checksum(mut self, checksum: ChecksumMode) -> Self {
        self.checksum = checksum;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEndingMode) -> Self {
        self.line_ending = line_ending;
        self
    }
}
