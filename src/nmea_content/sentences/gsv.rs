#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Sentence, nmea_content::SatelliteRecord};

/// One GSV sentence, before reassembly.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct SatelliteViewFragment {
    pub talker_id: String,
    /// Total number of GSV sentences to be transmitted in this group
    pub total_sentences: u8,
    /// Sentence number of this GSV message within current group, starting at 1
    pub sentence_index: u8,
    /// Total number of satellites in view
    pub total_satellites: u16,
    /// Satellite information
    pub satellites: heapless::Vec<SatelliteRecord, 4>,
}

/// GSV - Satellites in View
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...,x*hh<CR><LF>
/// ```
///
/// Satellites come in groups of four fields (id, elevation, azimuth, SNR). A group is
/// only read when all four of its fields exist, so the NMEA 4.11 signal id that may
/// trail the last group is never mistaken for a satellite. Groups with an empty id
/// are padding and are skipped.
pub fn decode_gsv(sentence: &Sentence<'_>) -> Option<SatelliteViewFragment> {
    let total_sentences = sentence.value::<u8>(0).filter(|&total| total > 0)?;
    let sentence_index = sentence
        .value::<u8>(1)
        .filter(|&index| index > 0 && index <= total_sentences)?;
    let total_satellites = sentence.value::<u16>(2)?;

    let satellites = (0..4)
        .map(|slot| 3 + slot * 4)
        .take_while(|&base| base + 3 < sentence.fields.len())
        .filter_map(|base| {
            Some(SatelliteRecord {
                id: sentence.value(base)?,
                elevation: sentence.value(base + 1),
                azimuth: sentence.value(base + 2),
                signal_to_noise_ratio: sentence.value(base + 3),
            })
        })
        .collect::<heapless::Vec<_, 4>>();

    Some(SatelliteViewFragment {
        talker_id: sentence.talker_id.to_owned(),
        total_sentences,
        sentence_index,
        total_satellites,
        satellites,
    })
}
