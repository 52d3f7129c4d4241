use crate::{
    Sentence,
    nmea_content::{FixQuality, FixSource, PositionFix, location},
    parsing::decode_time_of_day,
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
///
/// Fields 1 to 6 are required. The time must be present but an unreadable time only
/// leaves [`PositionFix::time`] empty. Satellite count, HDOP and altitude are optional.
///
/// # Examples
///
/// ```rust
/// use nmea0183_engine::{FixQuality, Sentence, sentences::decode_gga};
///
/// let sentence =
///     Sentence::tokenize("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,").unwrap();
/// let fix = decode_gga(&sentence).unwrap();
/// assert_eq!(fix.fix_quality, Some(FixQuality::Sps));
/// assert_eq!(fix.satellite_count, Some(8));
/// assert_eq!(fix.altitude, Some(545.4));
/// ```
pub fn decode_gga(sentence: &Sentence<'_>) -> Option<PositionFix> {
    let time = sentence.required(0)?;
    let position = location(sentence, 1)?;
    let fix_quality = sentence.value::<FixQuality>(5)?;

    Some(PositionFix {
        time: decode_time_of_day(None, time),
        fix_quality: Some(fix_quality),
        satellite_count: sentence.value(6),
        hdop: sentence.value(7),
        altitude: sentence.value(8),
        valid: fix_quality != FixQuality::Invalid,
        ..PositionFix::new(FixSource::Gga, sentence, position)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::Direction;

    fn gga(body: &str) -> Option<PositionFix> {
        decode_gga(&Sentence::tokenize(body).unwrap())
    }

    #[test]
    fn test_gga_reference_sentence() {
        let fix = gga("GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,").unwrap();

        assert_eq!(fix.source, FixSource::Gga);
        assert_eq!(fix.talker_id, "GP");
        let time = fix.time.unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (12, 35, 19));
        assert_eq!(fix.latitude.degrees, 48);
        assert!((fix.latitude.minutes - 7.038).abs() < 1e-9);
        assert_eq!(fix.latitude.direction, Direction::North);
        assert_eq!(fix.longitude.degrees, 11);
        assert!((fix.longitude.minutes - 31.0).abs() < 1e-9);
        assert_eq!(fix.longitude.direction, Direction::East);
        assert_eq!(fix.fix_quality, Some(FixQuality::Sps));
        assert_eq!(fix.satellite_count, Some(8));
        assert_eq!(fix.hdop, Some(0.9));
        assert_eq!(fix.altitude, Some(545.4));
        assert!(fix.valid);
    }

    #[test]
    fn test_gga_optional_tail() {
        let cases = [
            "GPGGA,001043.00,4404.14036,N,12118.85961,W,1,,0.98,1113.0,M,-21.3,M,,",
            "GPGGA,001043.00,4404.14036,N,12118.85961,W,1,12,,1113.0,M,-21.3,M,,",
            "GPGGA,001043.00,4404.14036,N,12118.85961,W,1,12,0.98,,M,-21.3,M,,",
            "GPGGA,001043.00,4404.14036,N,12118.85961,W,1,A8,0.98,1113.0",
            "GPGGA,001043.00,4404.14036,N,12118.85961,W,2",
        ];

        for &input in &cases {
            let result = gga(input);
            assert!(result.is_some(), "Failed: {input:?}");
        }

        let fix = gga("GPGGA,001043.00,4404.14036,N,12118.85961,W,2").unwrap();
        assert_eq!(fix.satellite_count, None);
        assert_eq!(fix.hdop, None);
        assert_eq!(fix.altitude, None);
        assert_eq!(fix.fix_quality, Some(FixQuality::Dgps));
    }

    #[test]
    fn test_gga_required_fields() {
        let cases = [
            "GPGGA,,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,",
            "GPGGA,123519,,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,",
            "GPGGA,123519,4807.038,,01131.000,E,1,08,0.9,545.4,M,46.9,M,,",
            "GPGGA,123519,4807.038,N,01131.000,X,1,08,0.9,545.4,M,46.9,M,,",
            "GPGGA,123519,4807.038,N,01131.000,E,9,08,0.9,545.4,M,46.9,M,,",
            "GPGGA,123519,4807.038,N,01131.000,E,,08,0.9,545.4,M,46.9,M,,",
            "GPGGA,123519,4807.038,N,01131.000,E",
            "GPGGA,,,,,,0,00,99.99,,,,,,",
        ];

        for &input in &cases {
            let result = gga(input);
            assert!(result.is_none(), "Failed: {input:?}\n\t{result:?}");
        }
    }

    #[test]
    fn test_gga_unreadable_time() {
        let fix = gga("GPGGA,12x519,4807.038,N,01131.000,E,0,08,0.9,545.4,M,46.9,M,,").unwrap();
        assert!(fix.time.is_none());
        assert_eq!(fix.fix_quality, Some(FixQuality::Invalid));
        assert!(!fix.valid);
    }

    #[test]
    fn test_gga_is_pure() {
        let sentence =
            Sentence::tokenize("GNGGA,092725.00,4717.113,N,00833.915,E,1,08,1.0,499.7,M,48.0,M,,")
                .unwrap();
        assert_eq!(decode_gga(&sentence), decode_gga(&sentence));
    }
}
