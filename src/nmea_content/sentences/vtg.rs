use crate::{Sentence, nmea_content::CourseOverGround};

const KPH_PER_KNOT: f32 = 1.852;

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8
///          |  |  |  |  |  |  |  |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// The unit letters are not checked. When only one of the two speeds is reported the
/// other one is derived from it. A sentence without any heading or speed is dropped.
pub fn decode_vtg(sentence: &Sentence<'_>) -> Option<CourseOverGround> {
    let true_heading = sentence.value(0);
    let magnetic_heading = sentence.value(2);
    let knots = sentence.value::<f32>(4);
    let kph = sentence.value::<f32>(6);

    if true_heading.is_none() && magnetic_heading.is_none() && knots.is_none() && kph.is_none() {
        return None;
    }

    Some(CourseOverGround {
        talker_id: sentence.talker_id.to_owned(),
        true_heading,
        magnetic_heading,
        speed_knots: knots.or(kph.map(|kph| kph / KPH_PER_KNOT)),
        speed_kph: kph.or(knots.map(|knots| knots * KPH_PER_KNOT)),
        faa_mode: sentence.value(8),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea_content::FaaMode;

    fn vtg(body: &str) -> Option<CourseOverGround> {
        decode_vtg(&Sentence::tokenize(body).unwrap())
    }

    #[test]
    fn test_vtg_parsing() {
        let course = vtg("GPVTG,054.7,T,034.4,M,005.5,N,010.2,K,A").unwrap();

        assert_eq!(course.true_heading, Some(54.7));
        assert_eq!(course.magnetic_heading, Some(34.4));
        assert_eq!(course.speed_knots, Some(5.5));
        assert_eq!(course.speed_kph, Some(10.2));
        assert_eq!(course.faa_mode, Some(FaaMode::Autonomous));
    }

    #[test]
    fn test_vtg_speed_fallback() {
        let course = vtg("GPVTG,360.0,T,348.7,M,100.0,N,,,N").unwrap();
        assert_eq!(course.speed_knots, Some(100.0));
        assert!((course.speed_kph.unwrap() - 185.2).abs() < 1e-3);

        let course = vtg("GPVTG,360.0,T,348.7,M,,,185.2,K,N").unwrap();
        assert!((course.speed_knots.unwrap() - 100.0).abs() < 1e-3);
        assert_eq!(course.faa_mode, Some(FaaMode::DataNotValid));

        let course = vtg("GPVTG,360.0,T,348.7,M,,,,,N").unwrap();
        assert_eq!(course.speed_knots, None);
        assert_eq!(course.speed_kph, None);
    }

    #[test]
    fn test_vtg_nothing_reported() {
        assert!(vtg("GPVTG,,T,,M,,N,,K,N").is_none());
        assert!(vtg("GPVTG").is_none());
    }

    #[test]
    fn test_vtg_is_pure() {
        let sentence = Sentence::tokenize("GPVTG,360.0,T,348.7,M,100.0,N,,,N").unwrap();
        assert_eq!(decode_vtg(&sentence), decode_vtg(&sentence));
    }
}
