//! # NMEA 0183 Framing
//!
//! This module checks the outer frame of a sentence: `$HHH,D1,D2,...,Dn*CC\r\n`.
//!
//! It handles:
//! - ASCII-only validation
//! - The `$` (or `!`) start delimiter
//! - Line ending policy, see [`LineEndingMode`]
//! - Locating the last `*`, reading the two hex digits after it and comparing
//!   them with the XOR of the sentence body, see [`ChecksumMode`]

use nom::{
    Parser, bytes::complete::take, character::complete::one_of, error::ErrorKind,
    number::complete::hex_u32,
};

use crate::{ChecksumMode, Config, Error, IResult, LineEndingMode, parsing::consumed};

/// Calculates the NMEA 0183 checksum for the given sentence body.
///
/// The checksum is the XOR of every byte between the `$` prefix and the `*`
/// delimiter, excluding both.
///
/// # Examples
///
/// ```rust
/// use nmea0183_engine::checksum;
///
/// assert_eq!(checksum("GPGGA,123456,data"), 0x41);
/// ```
pub fn checksum(body: &str) -> u8 {
    body.as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_engine::format_checksum;
///
/// assert_eq!(format_checksum(0x41), "41");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}

/// Validates the frame of one line and returns the sentence body.
///
/// The body is everything between the start delimiter and the last `*` (or the end of
/// the line when the checksum is optional and absent). The checksum comparison is
/// case-insensitive.
///
/// # Examples
///
/// ```rust
/// use nmea0183_engine::{Config, Error, validate};
///
/// let config = Config::default();
///
/// let body = validate("$GPGGA,123456,data*41", &config);
/// assert_eq!(body, Ok("GPGGA,123456,data"));
///
/// let body = validate("$GPGGA,123456,data*42\r\n", &config);
/// assert_eq!(body, Err(Error::ChecksumMismatch { expected: 0x41, found: 0x42 }));
///
/// let body = validate("$GPGGA,123456,data", &config);
/// assert_eq!(body, Err(Error::MissingChecksum));
/// ```
pub fn validate<'a>(line: &'a str, config: &Config) -> Result<&'a str, Error> {
    if !line.is_ascii() {
        return Err(Error::NonAscii);
    }

    let line = line_ending(line, config.line_ending)?;

    let (line, _) = start_delimiter(line).map_err(|_| Error::MissingStartDelimiter)?;

    let (body, found) = match line.rsplit_once('*') {
        Some((body, cc)) => {
            let (_, cc) = checksum_field(cc).map_err(|_| Error::InvalidChecksum)?;
            (body, Some(cc))
        }
        None if config.checksum == ChecksumMode::Optional => (line, None),
        None => return Err(Error::MissingChecksum),
    };

    let expected = checksum(body);
    if let Some(found) = found
        && found != expected
    {
        return Err(Error::ChecksumMismatch { expected, found });
    }

    Ok(body)
}

/// Applies the configured line ending policy and returns the line without it.
///
/// ```rust
/// use nmea0183_engine::{Error, LineEndingMode, line_ending};
///
/// assert_eq!(line_ending("12345\r\n", LineEndingMode::Required), Ok("12345"));
/// assert_eq!(line_ending("12345", LineEndingMode::Required), Err(Error::LineEnding));
/// assert_eq!(line_ending("12345", LineEndingMode::Forbidden), Ok("12345"));
/// assert_eq!(line_ending("12345\n", LineEndingMode::Optional), Ok("12345"));
/// ```
pub fn line_ending(line: &str, mode: LineEndingMode) -> Result<&str, Error> {
    match mode {
        LineEndingMode::Required => line.strip_suffix("\r\n").ok_or(Error::LineEnding),
        LineEndingMode::Forbidden if line.ends_with(['\r', '\n']) => Err(Error::LineEnding),
        LineEndingMode::Forbidden => Ok(line),
        LineEndingMode::Optional => Ok(line.trim_end_matches(['\r', '\n'])),
    }
}

fn start_delimiter(i: &str) -> IResult<&str, char> {
    one_of("$!").parse(i)
}

fn checksum_field(i: &str) -> IResult<&str, u8> {
    let (i, cc) = consumed(take(2u8), ErrorKind::Count).parse(i)?;
    let (_, cc) = consumed(hex_u32, ErrorKind::IsA).parse(cc)?;

    Ok((i, cc as u8))
}
