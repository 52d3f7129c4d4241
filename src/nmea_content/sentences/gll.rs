use crate::{
    Sentence,
    nmea_content::{FixSource, PositionFix, location},
    parsing::decode_time_of_day,
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
///
/// Only a sentence with status `A` produces a fix.
pub fn decode_gll(sentence: &Sentence<'_>) -> Option<PositionFix> {
    let position = location(sentence, 0)?;
    if sentence.required(5)? != "A" {
        return None;
    }

    Some(PositionFix {
        time: sentence
            .required(4)
            .and_then(|time| decode_time_of_day(None, time)),
        valid: true,
        faa_mode: sentence.value(6),
        ..PositionFix::new(FixSource::Gll, sentence, position)
    })
}
