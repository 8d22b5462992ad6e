//! Tests for coordinate parsing
//!
//! Covers the decimal pass-through, the three sexagesimal grammars, and the
//! failure modes callers match on.

use tomctl::coords::{
    AngleFormatError, CoordinateRangeError, is_sexagesimal, parse_coordinate_pair,
    parse_declination, parse_right_ascension, validate_declination, validate_right_ascension,
};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-4, "expected {expected}, got {actual}");
}

// =============================================================================
// RIGHT ASCENSION
// =============================================================================

#[test]
fn test_ra_decimal_passthrough() {
    assert_eq!(parse_right_ascension("165.3224").unwrap(), 165.3224);
    assert_eq!(parse_right_ascension("  0  ").unwrap(), 0.0);
}

#[test]
fn test_ra_one_hour_is_fifteen_degrees() {
    assert_eq!(parse_right_ascension("1:00:00").unwrap(), 15.0);
}

#[test]
fn test_ra_colon_form() {
    assert_close(parse_right_ascension("12:30:49.42").unwrap(), 187.705_916);
}

#[test]
fn test_ra_token_form_matches_colon_form() {
    let colon = parse_right_ascension("12:34:56.78").unwrap();
    assert_eq!(parse_right_ascension("12h34m56.78s").unwrap(), colon);
    assert_eq!(parse_right_ascension("12h 34m 56.78s").unwrap(), colon);
    assert_eq!(parse_right_ascension("12H34M56.78").unwrap(), colon);
}

#[test]
fn test_ra_whitespace_form() {
    assert_close(parse_right_ascension("12 30 49.42").unwrap(), 187.705_916);
}

#[test]
fn test_ra_rejects_sign_on_sexagesimal() {
    assert!(matches!(
        parse_right_ascension("-01:00:00"),
        Err(AngleFormatError::UnexpectedSign(_))
    ));
}

#[test]
fn test_ra_is_not_range_checked() {
    assert_eq!(parse_right_ascension("25:00:00").unwrap(), 375.0);
    assert_eq!(parse_right_ascension("-5").unwrap(), -5.0);
}

// =============================================================================
// DECLINATION
// =============================================================================

#[test]
fn test_dec_signed_colon_form() {
    assert_eq!(parse_declination("-12:30:00").unwrap(), -12.5);
    assert_eq!(parse_declination("+12:30:00").unwrap(), 12.5);
    assert_eq!(parse_declination("12:30:00").unwrap(), 12.5);
}

#[test]
fn test_dec_sign_applies_to_whole_magnitude() {
    assert_eq!(parse_declination("-00:30:00").unwrap(), -0.5);
    assert_close(parse_declination("-00:00:36").unwrap(), -0.01);
}

#[test]
fn test_dec_token_forms() {
    assert_eq!(parse_declination("-12d30m00s").unwrap(), -12.5);
    assert_eq!(parse_declination("+12°30'00\"").unwrap(), 12.5);
    assert_eq!(parse_declination("12D30M00").unwrap(), 12.5);
}

#[test]
fn test_dec_decimal_passthrough() {
    assert_eq!(parse_declination("-12.5").unwrap(), -12.5);
    assert_eq!(parse_declination("41.269").unwrap(), 41.269);
}

#[test]
fn test_dec_whitespace_form() {
    assert_eq!(parse_declination("-12 30 00").unwrap(), -12.5);
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(parse_right_ascension(""), Err(AngleFormatError::Empty));
    assert_eq!(parse_declination("   "), Err(AngleFormatError::Empty));
}

#[test]
fn test_wrong_component_count() {
    assert_eq!(
        parse_right_ascension("12:30"),
        Err(AngleFormatError::ComponentCount { found: 2 })
    );
    assert_eq!(
        parse_declination("12:30:00:00"),
        Err(AngleFormatError::ComponentCount { found: 4 })
    );
    assert_eq!(
        parse_right_ascension("12h30m"),
        Err(AngleFormatError::ComponentCount { found: 2 })
    );
}

#[test]
fn test_non_numeric_component() {
    assert!(matches!(
        parse_right_ascension("12:xx:00"),
        Err(AngleFormatError::InvalidComponent(part)) if part == "xx"
    ));
}

#[test]
fn test_unrecognized_text() {
    assert!(matches!(
        parse_declination("north"),
        Err(AngleFormatError::UnrecognizedFormat(_))
    ));
}

#[test]
fn test_units_of_the_other_axis_are_unrecognized() {
    assert!(matches!(
        parse_declination("12h30m15s"),
        Err(AngleFormatError::UnrecognizedFormat(_))
    ));
    assert!(matches!(
        parse_right_ascension("12d30m15s"),
        Err(AngleFormatError::UnrecognizedFormat(_))
    ));
}

#[test]
fn test_overflowing_decimal_is_rejected() {
    assert!(matches!(parse_right_ascension("1e999"), Err(AngleFormatError::NotFinite(_))));
}

// =============================================================================
// HELPERS
// =============================================================================

#[test]
fn test_is_sexagesimal() {
    assert!(is_sexagesimal("12:30:49.42"));
    assert!(is_sexagesimal("-12d30m00s"));
    assert!(!is_sexagesimal("187.7"));
    assert!(!is_sexagesimal("12:30"));
}

#[test]
fn test_coordinate_pair_two_fields() {
    let (ra, dec) = parse_coordinate_pair("12:30:49.42 -12:30:00").unwrap();
    assert_close(ra, 187.705_916);
    assert_eq!(dec, -12.5);

    assert_eq!(parse_coordinate_pair("10.684 41.269").unwrap(), (10.684, 41.269));
}

#[test]
fn test_coordinate_pair_six_fields() {
    let (ra, dec) = parse_coordinate_pair("1 00 00 -12 30 00").unwrap();
    assert_eq!(ra, 15.0);
    assert_eq!(dec, -12.5);
}

#[test]
fn test_coordinate_pair_wrong_field_count() {
    assert_eq!(parse_coordinate_pair("  "), Err(AngleFormatError::Empty));
    assert_eq!(
        parse_coordinate_pair("12:30:49.42"),
        Err(AngleFormatError::PairFields { found: 1 })
    );
    assert_eq!(
        parse_coordinate_pair("1 2 3 4"),
        Err(AngleFormatError::PairFields { found: 4 })
    );
}

#[test]
fn test_range_validation() {
    assert_eq!(validate_right_ascension(0.0), Ok(0.0));
    assert_eq!(validate_right_ascension(359.9), Ok(359.9));
    assert_eq!(validate_right_ascension(360.0), Err(CoordinateRangeError::RightAscension(360.0)));
    assert_eq!(validate_declination(-90.0), Ok(-90.0));
    assert_eq!(validate_declination(90.5), Err(CoordinateRangeError::Declination(90.5)));
}
