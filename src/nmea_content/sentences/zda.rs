use crate::{
    Sentence,
    nmea_content::TimeAndDate,
    parsing::{FieldValue, Timestamp, calendar_date, decode_time_of_day},
};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///         1         2  3  4    5  6
///         |         |  |  |    |  |
///  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
///
/// Time and date are required. The local zone is optional; its minutes are unsigned
/// (`00` to `59`) and take the sign of the hours, `-00` included.
pub fn decode_zda(sentence: &Sentence<'_>) -> Option<TimeAndDate> {
    let time = decode_time_of_day(None, sentence.required(0)?)?;
    let day = sentence.value::<u8>(1)?;
    let month = sentence.value::<u8>(2)?;
    let year = sentence.value::<u16>(3)?;
    let date = calendar_date(i32::from(year), month, day)?;

    let utc_offset = sentence.value::<i8>(4).and_then(|hours| {
        let minutes = match sentence.required(5) {
            Some(field) => i8::try_from(u8::parse_field(field)?)
                .ok()
                .filter(|&minutes| minutes < 60)?,
            None => 0,
        };
        let west = sentence.field(4).is_some_and(|field| field.starts_with('-'));
        let minutes = if west { -minutes } else { minutes };
        time::UtcOffset::from_hms(hours, minutes, 0).ok()
    });

    Some(TimeAndDate {
        talker_id: sentence.talker_id.to_owned(),
        timestamp: Timestamp {
            date: Some(date),
            ..time
        },
        utc_offset,
    })
}
