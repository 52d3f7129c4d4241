use crate::{
    Sentence,
    nmea_content::{ActiveSatellites, FixDimension, SelectionMode},
};

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                      15 16  17
///         | | |                       | |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,*hh<CR><LF>
/// ```
///
/// NMEA 4.11:
/// ```text
///         1 2 3                      15 16  17  18
///         | | |                       | |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// The fix dimension is required; empty PRN slots are skipped.
pub fn decode_gsa(sentence: &Sentence<'_>) -> Option<ActiveSatellites> {
    let selection_mode = SelectionMode::from_field(sentence.field(0)?);
    let fix_dimension = sentence.value::<FixDimension>(1)?;

    let prns = (2..14)
        .filter_map(|index| sentence.value::<u16>(index))
        .collect::<heapless::Vec<_, 12>>();

    Some(ActiveSatellites {
        talker_id: sentence.talker_id.to_owned(),
        selection_mode,
        fix_dimension,
        prns,
        pdop: sentence.value(14),
        hdop: sentence.value(15),
        vdop: sentence.value(16),
        system_id: sentence.value(17),
    })
}
