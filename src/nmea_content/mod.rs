//! # Typed Results
//!
//! The records produced by the sentence decoders, and the small enums decoded from
//! single-letter or single-digit fields.

pub mod sentences;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Sentence,
    parsing::{Direction, FieldValue, Position, Timestamp, decode_degrees_minutes},
};

macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $code:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl FieldValue for $name {
            fn parse_field(field: &str) -> Option<Self> {
                match field {
                    $($code => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

field_enum! {
    /// Quality of the GPS fix
    pub enum FixQuality {
        /// 0 - Fix not available
        "0" => Invalid,
        /// 1 - GPS fix (Standard Positioning Service)
        "1" => Sps,
        /// 2 - Differential GPS fix
        "2" => Dgps,
        /// 3 - PPS fix
        "3" => Pps,
        /// 4 - Real Time Kinematic
        "4" => Rtk,
        /// 5 - Float RTK
        "5" => FloatRtk,
        /// 6 - estimated (dead reckoning)
        "6" => DeadReckoning,
        /// 7 - Manual input mode
        "7" => ManualInput,
        /// 8 - Simulation mode
        "8" => Simulation,
    }
}

field_enum! {
    /// Fix dimensionality reported by GSA
    pub enum FixDimension {
        /// 1 - No fix
        "1" => NoFix,
        /// 2 - 2D Fix
        "2" => Fix2D,
        /// 3 - 3D Fix
        "3" => Fix3D,
    }
}

field_enum! {
    /// FAA Mode Indicator
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_sentence_mixes_and_nmea_variations>
    pub enum FaaMode {
        /// A - Autonomous mode
        "A" => Autonomous,
        /// C - Quectel Querk, "Caution"
        "C" => Caution,
        /// D - Differential Mode
        "D" => Differential,
        /// E - Estimated (dead-reckoning) mode
        "E" => Estimated,
        /// F - RTK Float mode
        "F" => FloatRtk,
        /// M - Manual Input Mode
        "M" => Manual,
        /// N - Data Not Valid
        "N" => DataNotValid,
        /// P - Precise
        "P" => Precise,
        /// R - RTK Integer mode
        "R" => FixedRtk,
        /// S - Simulated Mode
        "S" => Simulator,
        /// U - Quectel Querk, "Unsafe"
        "U" => Unsafe,
    }
}

field_enum! {
    /// NMEA 4.11 System ID
    ///
    /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_nmea_4_11_system_id_and_signal_id>
    pub enum SystemId {
        /// 1 - GPS (GP)
        "1" => Gps,
        /// 2 - GLONASS (GL)
        "2" => Glonass,
        /// 3 - Galileo (GA)
        "3" => Galileo,
        /// 4 - BeiDou (GB/BD)
        "4" => Beidou,
        /// 5 - QZSS (GQ)
        "5" => Qzss,
        /// 6 - NavIC (GI)
        "6" => Navic,
    }
}

/// Satellite selection mode reported by GSA
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Unknown,
    /// A - Automatic, 2D/3D
    Automatic,
    /// M - Manual, forced to operate in 2D or 3D
    Manual,
}

impl SelectionMode {
    pub fn from_field(field: &str) -> Self {
        match field {
            "A" => SelectionMode::Automatic,
            "M" => SelectionMode::Manual,
            _ => SelectionMode::Unknown,
        }
    }
}

/// Which sentence a [`PositionFix`] was decoded from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixSource {
    Gga,
    Gll,
    Rmc,
}

/// Magnetic variation as reported by RMC.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticVariation {
    pub degrees: f32,
    /// East, West or Unknown
    pub direction: Direction,
}

/// A position solution decoded from GGA, GLL or RMC.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct PositionFix {
    pub source: FixSource,
    pub talker_id: String,
    /// Fix time in UTC, with the date when RMC carried one
    pub time: Option<Timestamp>,
    pub latitude: Position,
    pub longitude: Position,
    /// Altitude above/below mean sea level (geoid) in meters
    pub altitude: Option<f32>,
    /// GPS Quality Indicator, GGA only
    pub fix_quality: Option<FixQuality>,
    /// Number of satellites in use
    pub satellite_count: Option<u8>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    pub valid: bool,
    /// Speed over ground in knots, RMC only
    pub speed_knots: Option<f32>,
    /// Course over ground in degrees true, RMC only
    pub course: Option<f32>,
    pub magnetic_variation: Option<MagneticVariation>,
    pub faa_mode: Option<FaaMode>,
}

impl PositionFix {
    fn new(
        source: FixSource,
        sentence: &Sentence<'_>,
        (latitude, longitude): (Position, Position),
    ) -> Self {
        Self {
            source,
            talker_id: sentence.talker_id.to_owned(),
            time: None,
            latitude,
            longitude,
            altitude: None,
            fix_quality: None,
            satellite_count: None,
            hdop: None,
            valid: false,
            speed_knots: None,
            course: None,
            magnetic_variation: None,
            faa_mode: None,
        }
    }
}

/// DOP and the satellites used in the fix, decoded from GSA.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSatellites {
    pub talker_id: String,
    pub selection_mode: SelectionMode,
    pub fix_dimension: FixDimension,
    /// PRN numbers of the satellites used in the fix, up to 12
    pub prns: heapless::Vec<u16, 12>,
    /// Position Dilution of Precision
    pub pdop: Option<f32>,
    /// Horizontal Dilution of Precision
    pub hdop: Option<f32>,
    /// Vertical Dilution of Precision
    pub vdop: Option<f32>,
    /// NMEA 4.11 only
    pub system_id: Option<SystemId>,
}

/// One visible satellite.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatelliteRecord {
    pub id: u16,
    /// Elevation in degrees, 90 maximum
    pub elevation: Option<u8>,
    /// Azimuth in degrees true, 000 to 359
    pub azimuth: Option<u16>,
    /// SNR in dB-Hz, empty when not tracking
    pub signal_to_noise_ratio: Option<u8>,
}

/// A complete, reassembled GSV group.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct SatellitesInView {
    pub talker_id: String,
    /// Total satellites in view as declared by the receiver
    pub total_satellites: u16,
    /// Satellite records in arrival order
    pub satellites: Vec<SatelliteRecord>,
}

/// Course and speed over ground, decoded from VTG.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct CourseOverGround {
    pub talker_id: String,
    /// Course over ground in degrees true
    pub true_heading: Option<f32>,
    /// Course over ground in degrees magnetic
    pub magnetic_heading: Option<f32>,
    pub speed_knots: Option<f32>,
    pub speed_kph: Option<f32>,
    pub faa_mode: Option<FaaMode>,
}

/// UTC date and time with the local zone, decoded from ZDA.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAndDate {
    pub talker_id: String,
    pub timestamp: Timestamp,
    pub utc_offset: Option<time::UtcOffset>,
}

/// Every typed result a decoder can produce.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PositionFix(PositionFix),
    ActiveSatellites(ActiveSatellites),
    SatellitesInView(SatellitesInView),
    CourseOverGround(CourseOverGround),
    TimeAndDate(TimeAndDate),
}

/// Reads a `lat,N,lon,E` run of four fields starting at `index`.
///
/// Both values must parse and both directions must be of the right axis.
pub(crate) fn location(sentence: &Sentence<'_>, index: usize) -> Option<(Position, Position)> {
    let latitude = decode_degrees_minutes(sentence.required(index)?, sentence.required(index + 1)?)
        .filter(|lat| matches!(lat.direction, Direction::North | Direction::South))?;
    let longitude =
        decode_degrees_minutes(sentence.required(index + 2)?, sentence.required(index + 3)?)
            .filter(|lon| matches!(lon.direction, Direction::East | Direction::West))?;

    Some((latitude, longitude))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fix_quality() {
        let expected = [
            ("0", FixQuality::Invalid),
            ("1", FixQuality::Sps),
            ("2", FixQuality::Dgps),
            ("3", FixQuality::Pps),
            ("4", FixQuality::Rtk),
            ("5", FixQuality::FloatRtk),
            ("6", FixQuality::DeadReckoning),
            ("7", FixQuality::ManualInput),
            ("8", FixQuality::Simulation),
        ];

        for (field, quality) in expected {
            assert_eq!(FixQuality::parse_field(field), Some(quality));
        }
        assert_eq!(FixQuality::parse_field("9"), None);
        assert_eq!(FixQuality::parse_field(""), None);
    }

    #[test]
    fn test_selection_mode() {
        assert_eq!(SelectionMode::from_field("A"), SelectionMode::Automatic);
        assert_eq!(SelectionMode::from_field("M"), SelectionMode::Manual);
        assert_eq!(SelectionMode::from_field("X"), SelectionMode::Unknown);
        assert_eq!(SelectionMode::from_field(""), SelectionMode::Unknown);
    }

    #[test]
    fn test_fix_dimension() {
        assert_eq!(FixDimension::parse_field("1"), Some(FixDimension::NoFix));
        assert_eq!(FixDimension::parse_field("2"), Some(FixDimension::Fix2D));
        assert_eq!(FixDimension::parse_field("3"), Some(FixDimension::Fix3D));
        assert_eq!(FixDimension::parse_field("4"), None);
    }

    #[test]
    fn test_faa_mode() {
        assert_eq!(FaaMode::parse_field("A"), Some(FaaMode::Autonomous));
        assert_eq!(FaaMode::parse_field("R"), Some(FaaMode::FixedRtk));
        assert_eq!(FaaMode::parse_field("X"), None);
    }

    #[test]
    fn test_location() {
        let sentence = Sentence::tokenize("GPGLL,4916.45,N,12311.12,W,225444,A").unwrap();
        let (lat, lon) = location(&sentence, 0).unwrap();
        assert_eq!(lat.degrees, 49);
        assert_eq!(lon.direction, Direction::West);

        let swapped = Sentence::tokenize("GPGLL,4916.45,E,12311.12,N,225444,A").unwrap();
        assert!(location(&swapped, 0).is_none());

        let short = Sentence::tokenize("GPGLL,4916.45,N").unwrap();
        assert!(location(&short, 0).is_none());
    }
}
