use crate::{
    Sentence,
    nmea_content::{FixSource, MagneticVariation, PositionFix, location},
    parsing::{Direction, decode_time_of_day},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3:
/// ```text
///         1         2 3       4 5        6  7   8   9    10 1112
///         |         | |       | |        |  |   |   |    |  | |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a,m*hh<CR><LF>
/// ```
///
/// The status and the position are required; a `V` status still yields a fix with
/// [`PositionFix::valid`] unset.
pub fn decode_rmc(sentence: &Sentence<'_>) -> Option<PositionFix> {
    let status = sentence.required(1)?;
    let position = location(sentence, 2)?;

    let magnetic_variation = sentence.value::<f32>(9).map(|degrees| MagneticVariation {
        degrees,
        direction: match sentence.field(10) {
            Some("E") => Direction::East,
            Some("W") => Direction::West,
            _ => Direction::Unknown,
        },
    });

    Some(PositionFix {
        time: sentence
            .required(0)
            .and_then(|time| decode_time_of_day(sentence.required(8), time)),
        valid: status == "A",
        speed_knots: sentence.value(6),
        course: sentence.value(7),
        magnetic_variation,
        faa_mode: sentence.value(11),
        ..PositionFix::new(FixSource::Rmc, sentence, position)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea_content::FaaMode;

    fn rmc(body: &str) -> Option<PositionFix> {
        decode_rmc(&Sentence::tokenize(body).unwrap())
    }

    #[test]
    fn test_rmc_parsing() {
        let fix =
            rmc("GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A").unwrap();

        assert_eq!(fix.source, FixSource::Rmc);
        assert!(fix.valid);
        let time = fix.time.unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (12, 35, 19));
        let date = time.date.unwrap();
        assert_eq!((date.year(), date.month() as u8, date.day()), (2094, 3, 23));
        assert_eq!(fix.latitude.degrees, 48);
        assert_eq!(fix.longitude.degrees, 11);
        assert_eq!(fix.speed_knots, Some(22.4));
        assert_eq!(fix.course, Some(84.4));
        assert_eq!(
            fix.magnetic_variation,
            Some(MagneticVariation {
                degrees: 3.1,
                direction: Direction::West
            })
        );
        assert_eq!(fix.faa_mode, Some(FaaMode::Autonomous));
    }

    #[test]
    fn test_rmc_optional_fields() {
        let fix = rmc("GPRMC,092725.00,V,4717.113,N,00833.915,E,,,,,").unwrap();
        assert!(!fix.valid);
        assert!(fix.time.unwrap().date.is_none());
        assert_eq!(fix.speed_knots, None);
        assert_eq!(fix.course, None);
        assert_eq!(fix.magnetic_variation, None);
        assert_eq!(fix.faa_mode, None);

        let fix = rmc("GPRMC,,A,4717.113,N,00833.915,E,abc,0.0,010190,1.0,X").unwrap();
        assert!(fix.time.is_none());
        assert_eq!(fix.speed_knots, None);
        assert_eq!(
            fix.magnetic_variation.map(|variation| variation.direction),
            Some(Direction::Unknown)
        );
    }

    #[test]
    fn test_rmc_required_fields() {
        let cases = [
            "GPRMC,123519,,4807.038,N,01131.000,E,0.20,0.83,230394,004.2,W,A",
            "GPRMC,123519,A,,N,01131.000,E,0.20,0.83,230394,004.2,W,A",
            "GPRMC,123519,A,4807.038,N,,E,0.20,0.83,230394,004.2,W,A",
            "GPRMC,123519,A",
            "GPRMC",
        ];

        for &input in &cases {
            let result = rmc(input);
            assert!(result.is_none(), "Failed: {input:?}\n\t{result:?}");
        }
    }

    #[test]
    fn test_rmc_is_pure() {
        let sentence = Sentence::tokenize(
            "GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W,A",
        )
        .unwrap();
        assert_eq!(decode_rmc(&sentence), decode_rmc(&sentence));
    }
}
