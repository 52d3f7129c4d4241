//! # Field Codecs
//!
//! Stateless decoders shared by every sentence decoder: tolerant numeric parsing,
//! degrees/minutes positions and `hhmmss.sss` times.
//!
//! Nothing in here fails loudly. Empty or garbled input yields [`None`], which the
//! sentence decoders read as "field not reported".

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser,
    combinator::all_consuming,
    error::{ErrorKind, ParseError},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::IResult;

/// Ensures that the parser consumes all input.
///
/// Runs `f` and fails with `e` if anything is left over.
///
/// # Examples
///
/// ```rust
/// use nmea0183_engine::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// let result: IResult<_, _> = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    Consumed { f, e }
}

struct Consumed<F> {
    f: F,
    e: ErrorKind,
}

impl<I, F> Parser<I> for Consumed<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != 0 {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}

/// A value that can be read from a single comma-delimited field.
///
/// Implementations are tolerant: an empty field, trailing garbage or an out-of-range
/// number all produce [`None`].
///
/// ```rust
/// use nmea0183_engine::parsing::FieldValue;
///
/// assert_eq!(u8::parse_field("08"), Some(8));
/// assert_eq!(u8::parse_field(""), None);
/// assert_eq!(f32::parse_field("0.9"), Some(0.9));
/// assert_eq!(f32::parse_field("0.9x"), None);
/// ```
pub trait FieldValue: Sized {
    fn parse_field(field: &str) -> Option<Self>;
}

macro_rules! impl_uints_field {
    ($($t:tt),*) => ($(
        impl FieldValue for $t {
            fn parse_field(field: &str) -> Option<Self> {
                let result: IResult<&str, $t> =
                    all_consuming(nom::character::complete::$t).parse(field);
                result.ok().map(|(_, value)| value)
            }
        }
    )*)
}

macro_rules! impl_ints_field {
    ($($t:tt),*) => ($(
        impl FieldValue for $t {
            fn parse_field(field: &str) -> Option<Self> {
                let result: IResult<&str, $t> =
                    all_consuming(nom::character::complete::$t).parse(field);
                result.ok().map(|(_, value)| value)
            }
        }
    )*)
}

impl_uints_field!(u8, u16, u32);
impl_ints_field!(i8, i16);

macro_rules! impl_float_field {
    ($($t:ty, $p:ident),*) => ($(
        impl FieldValue for $t {
            fn parse_field(field: &str) -> Option<Self> {
                let result: IResult<&str, $t> =
                    all_consuming(nom::number::complete::$p).parse(field);
                // nom accepts "nan" and "inf", which no NMEA field ever carries
                result.ok().map(|(_, value)| value).filter(|value| value.is_finite())
            }
        }
    )*)
}

impl_float_field!(f32, float, f64, double);

/// Cardinal direction attached to a latitude, longitude or magnetic variation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Unknown,
}

impl Direction {
    /// Maps `N`, `S`, `E` and `W`; anything else is [`Direction::Unknown`].
    pub fn from_field(field: &str) -> Self {
        match field {
            "N" => Direction::North,
            "S" => Direction::South,
            "E" => Direction::East,
            "W" => Direction::West,
            _ => Direction::Unknown,
        }
    }

    fn sign(self) -> f64 {
        match self {
            Direction::South | Direction::West => -1.0,
            _ => 1.0,
        }
    }
}

/// An angular position as transmitted: whole degrees, decimal minutes and a direction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub degrees: u16,
    pub minutes: f64,
    pub direction: Direction,
}

impl Position {
    /// Signed decimal degrees, negative towards South and West.
    ///
    /// ```rust
    /// use nmea0183_engine::parsing::decode_degrees_minutes;
    ///
    /// let lon = decode_degrees_minutes("12311.12", "W").unwrap();
    /// assert!((lon.to_degrees() + 123.185_333).abs() < 1e-6);
    /// ```
    pub fn to_degrees(&self) -> f64 {
        self.direction.sign() * (f64::from(self.degrees) + self.minutes / 60.0)
    }
}

/// Decodes a `DDMM.MMMM` or `DDDMM.MMMM` value with its direction field.
///
/// Returns [`None`] when `value` is not a number; the direction is never a reason
/// to fail and maps to [`Direction::Unknown`] when unrecognized.
///
/// ```rust
/// use nmea0183_engine::parsing::{Direction, decode_degrees_minutes};
///
/// let lat = decode_degrees_minutes("4807.038", "N").unwrap();
/// assert_eq!(lat.degrees, 48);
/// assert!((lat.minutes - 7.038).abs() < 1e-9);
/// assert_eq!(lat.direction, Direction::North);
///
/// assert!(decode_degrees_minutes("", "N").is_none());
/// ```
pub fn decode_degrees_minutes(value: &str, direction: &str) -> Option<Position> {
    let value = f64::parse_field(value)?;
    if value.is_sign_negative() || value >= 100_000.0 {
        return None;
    }

    let degrees = (value / 100.0).floor();
    let minutes = value - degrees * 100.0;

    Some(Position {
        degrees: degrees as u16,
        minutes,
        direction: Direction::from_field(direction),
    })
}

/// UTC time of day, optionally anchored to a calendar date.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub date: Option<time::Date>,
    pub time: time::Time,
}

impl Timestamp {
    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    pub fn second(&self) -> u8 {
        self.time.second()
    }

    pub fn millisecond(&self) -> u16 {
        self.time.millisecond()
    }

    /// The full date and time, when a date was transmitted.
    pub fn date_time(&self) -> Option<time::PrimitiveDateTime> {
        self.date
            .map(|date| time::PrimitiveDateTime::new(date, self.time))
    }
}

/// Decodes an `hhmmss.sss` time and an optional `ddmmyy` date.
///
/// The century of a two-digit year is always 2000. A date that is present but
/// unreadable is dropped while the time is kept.
///
/// ```rust
/// use nmea0183_engine::parsing::decode_time_of_day;
///
/// let ts = decode_time_of_day(None, "123519").unwrap();
/// assert_eq!((ts.hour(), ts.minute(), ts.second()), (12, 35, 19));
/// assert!(ts.date.is_none());
///
/// let ts = decode_time_of_day(Some("230394"), "123519.25").unwrap();
/// assert_eq!(ts.millisecond(), 250);
/// assert_eq!(ts.date.unwrap().year(), 2094);
/// ```
pub fn decode_time_of_day(date: Option<&str>, time: &str) -> Option<Timestamp> {
    let t = f64::parse_field(time)?;
    if t.is_sign_negative() {
        return None;
    }

    let hour = (t / 10_000.0).floor();
    let minute = ((t - hour * 10_000.0) / 100.0).floor();
    let second = (t - hour * 10_000.0 - minute * 100.0).floor();
    let millisecond = ((t.fract() * 1000.0).round() as u16).min(999);

    let time =
        time::Time::from_hms_milli(hour as u8, minute as u8, second as u8, millisecond).ok()?;

    Some(Timestamp {
        date: date.and_then(decode_date),
        time,
    })
}

/// Decodes a `ddmmyy` date with the century fixed at 2000.
pub fn decode_date(date: &str) -> Option<time::Date> {
    if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let day = u8::parse_field(&date[0..2])?;
    let month = u8::parse_field(&date[2..4])?;
    let year = u16::parse_field(&date[4..6])?;

    calendar_date(i32::from(year) + 2000, month, day)
}

pub(crate) fn calendar_date(year: i32, month: u8, day: u8) -> Option<time::Date> {
    let month = time::Month::try_from(month).ok()?;
    time::Date::from_calendar_date(year, month, day).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_tolerance() {
        assert_eq!(u8::parse_field("12"), Some(12));
        assert_eq!(u8::parse_field("256"), None);
        assert_eq!(u8::parse_field("-1"), None);
        assert_eq!(u8::parse_field("A8"), None);
        assert_eq!(u16::parse_field(""), None);
        assert_eq!(i8::parse_field("-08"), Some(-8));
        assert_eq!(f32::parse_field("545.4"), Some(545.4));
        assert_eq!(f64::parse_field("nan"), None);
        assert_eq!(f64::parse_field("inf"), None);
        assert_eq!(f64::parse_field("1.5 "), None);
    }

    #[test]
    fn test_degrees_minutes() {
        let lat = decode_degrees_minutes("4807.038", "N").unwrap();
        assert_eq!(lat.degrees, 48);
        assert!((lat.minutes - 7.038).abs() < 1e-9);
        assert_eq!(lat.direction, Direction::North);

        let lon = decode_degrees_minutes("01131.000", "E").unwrap();
        assert_eq!(lon.degrees, 11);
        assert!((lon.minutes - 31.0).abs() < 1e-9);
        assert!((lon.to_degrees() - 11.516_666_666).abs() < 1e-6);

        let south = decode_degrees_minutes("3345.50", "S").unwrap();
        assert!((south.to_degrees() + 33.758_333_333).abs() < 1e-6);

        let odd = decode_degrees_minutes("1234.5", "X").unwrap();
        assert_eq!(odd.direction, Direction::Unknown);

        assert!(decode_degrees_minutes("abc", "N").is_none());
        assert!(decode_degrees_minutes("-4807.038", "N").is_none());
    }

    #[test]
    fn test_time_of_day() {
        let ts = decode_time_of_day(None, "123519").unwrap();
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (12, 35, 19));
        assert_eq!(ts.millisecond(), 0);

        let ts = decode_time_of_day(None, "001043.00").unwrap();
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (0, 10, 43));

        let ts = decode_time_of_day(None, "235959.999").unwrap();
        assert_eq!(ts.millisecond(), 999);

        assert!(decode_time_of_day(None, "").is_none());
        assert!(decode_time_of_day(None, "abc").is_none());
        assert!(decode_time_of_day(None, "256000").is_none());
        assert!(decode_time_of_day(None, "126100").is_none());
    }

    #[test]
    fn test_time_with_date() {
        let ts = decode_time_of_day(Some("010190"), "092725.00").unwrap();
        let date = ts.date.unwrap();
        assert_eq!(date.year(), 2090);
        assert_eq!(date.month(), time::Month::January);
        assert_eq!(date.day(), 1);
        assert!(ts.date_time().is_some());

        let ts = decode_time_of_day(Some("321399"), "092725").unwrap();
        assert!(ts.date.is_none());

        let ts = decode_time_of_day(Some(""), "092725").unwrap();
        assert!(ts.date.is_none());
    }
}
