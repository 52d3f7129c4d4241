use crate::{ChecksumMode, Config, Error, LineEndingMode, checksum, format_checksum, validate};

const GGA: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
const GGA_BODY: &str = "GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,";

fn strict() -> Config {
    Config::default().with_line_ending(LineEndingMode::Forbidden)
}

#[test]
fn test_checksum_ok() {
    assert_eq!(checksum(GGA_BODY), 0x47);
    assert_eq!(format_checksum(checksum(GGA_BODY)), "47");
    assert_eq!(validate(GGA, &strict()), Ok(GGA_BODY));
}

#[test]
fn test_checksum_lowercase_hex() {
    let line = "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39";
    assert!(validate(line, &strict()).is_ok());

    let line = "$GPGLL,4916.45,N,12311.12,W,225444,A,A*5c";
    assert_eq!(
        validate(line, &strict()),
        Ok("GPGLL,4916.45,N,12311.12,W,225444,A,A")
    );
}

#[test]
fn test_checksum_mismatch() {
    let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*48";
    assert_eq!(
        validate(line, &strict()),
        Err(Error::ChecksumMismatch {
            expected: 0x47,
            found: 0x48
        })
    );

    // one character of the body changed, checksum kept
    let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,09,0.9,545.4,M,46.9,M,,*47";
    assert!(matches!(
        validate(line, &strict()),
        Err(Error::ChecksumMismatch { found: 0x47, .. })
    ));
}

#[test]
fn test_checksum_large_hex() {
    let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*4743";
    assert_eq!(validate(line, &strict()), Err(Error::InvalidChecksum));
}

#[test]
fn test_checksum_small() {
    let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*4";
    assert_eq!(validate(line, &strict()), Err(Error::InvalidChecksum));
}

#[test]
fn test_checksum_non_hex() {
    let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*4z";
    assert_eq!(validate(line, &strict()), Err(Error::InvalidChecksum));
}

#[test]
fn test_checksum_missing() {
    assert_eq!(validate(&GGA[..GGA.len() - 3], &strict()), Err(Error::MissingChecksum));

    let lenient = strict().with_checksum(ChecksumMode::Optional);
    assert_eq!(validate(&GGA[..GGA.len() - 3], &lenient), Ok(GGA_BODY));

    // a present checksum is still verified
    let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*48";
    assert!(matches!(
        validate(line, &lenient),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_last_star_is_the_delimiter() {
    let body = "PABC,x*y";
    let line = format!("${body}*{}", format_checksum(checksum(body)));
    assert_eq!(validate(&line, &strict()), Ok(body));
}

#[test]
fn test_start_delimiter() {
    let line = "GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
    assert_eq!(validate(line, &strict()), Err(Error::MissingStartDelimiter));

    let line = "!AIVDM,1,1,,A,13aEOK?P00PD2wVMdLDRhgvL289?,0*26";
    assert!(validate(line, &strict()).is_ok());

    assert_eq!(validate("", &strict()), Err(Error::MissingStartDelimiter));
}

#[test]
fn test_non_ascii() {
    let line = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,°*47";
    assert_eq!(validate(line, &strict()), Err(Error::NonAscii));
}

#[test]
fn test_line_ending_modes() {
    let with_crlf = format!("{GGA}\r\n");

    let config = Config::default().with_line_ending(LineEndingMode::Required);
    assert_eq!(validate(&with_crlf, &config), Ok(GGA_BODY));
    assert_eq!(validate(GGA, &config), Err(Error::LineEnding));

    let config = Config::default().with_line_ending(LineEndingMode::Forbidden);
    assert_eq!(validate(&with_crlf, &config), Err(Error::LineEnding));

    let config = Config::default();
    assert_eq!(validate(&with_crlf, &config), Ok(GGA_BODY));
    assert_eq!(validate(&format!("{GGA}\n"), &config), Ok(GGA_BODY));
    assert_eq!(validate(GGA, &config), Ok(GGA_BODY));
}
