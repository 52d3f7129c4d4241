//! # Sentence Decoders
//!
//! One pure decoder per sentence type. Each takes a tokenized [`Sentence`](crate::Sentence)
//! and returns its typed result, or [`None`] when a required field is missing or
//! unreadable. Optional fields that fail to parse are left as [`None`] in the result
//! instead of discarding the sentence.
//!
//! | Decoder          | Sentence Type                                           | Result                                          |
//! |------------------|---------------------------------------------------------|-------------------------------------------------|
//! | [`decode_gga`]   | Global Positioning System Fix Data                      | [`PositionFix`](super::PositionFix)             |
//! | [`decode_gll`]   | Geographic Position - Latitude/Longitude                | [`PositionFix`](super::PositionFix)             |
//! | [`decode_gsa`]   | GPS DOP and active satellites                           | [`ActiveSatellites`](super::ActiveSatellites)   |
//! | [`decode_gsv`]   | Satellites in View, one sentence of a group             | [`SatelliteViewFragment`]                       |
//! | [`decode_rmc`]   | Recommended Minimum Navigation Information              | [`PositionFix`](super::PositionFix)             |
//! | [`decode_vtg`]   | Track made good and Ground speed                        | [`CourseOverGround`](super::CourseOverGround)   |
//! | [`decode_zda`]   | Time & Date - UTC, day, month, year and local time zone | [`TimeAndDate`](super::TimeAndDate)             |
//!
//! GSV fragments only become a result once the
//! [`SatelliteViewAssembler`](crate::SatelliteViewAssembler) has seen the whole group.

mod gga;
mod gll;
mod gsa;
mod gsv;
mod rmc;
mod vtg;
mod zda;

pub use gga::decode_gga;
pub use gll::decode_gll;
pub use gsa::decode_gsa;
pub use gsv::{SatelliteViewFragment, decode_gsv};
pub use rmc::decode_rmc;
pub use vtg::decode_vtg;
pub use zda::decode_zda;
