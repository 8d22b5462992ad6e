//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use tomctl::client::{Method, RetryPolicy};
use tomctl::coords::{parse_declination, parse_right_ascension};
use tomctl::core::models::ObservationStatus;
use test_case::test_case;

// =============================================================================
// Angle Parsing Tests
// =============================================================================

#[test_case("0:00:00", 0.0 ; "zero hours")]
#[test_case("6:00:00", 90.0 ; "six hours")]
#[test_case("23:59:60", 360.0 ; "sixty seconds is not range checked")]
#[test_case("6h0m0s", 90.0 ; "token form")]
#[test_case("6 00 00", 90.0 ; "whitespace form")]
#[test_case("90", 90.0 ; "decimal integer")]
fn test_right_ascension(input: &str, expected: f64) {
    assert!((parse_right_ascension(input).unwrap() - expected).abs() < 1e-9);
}

#[test_case("-90:00:00", -90.0 ; "south pole")]
#[test_case("+45:30:00", 45.5 ; "explicit plus")]
#[test_case("-0:45:00", -0.75 ; "negative below one degree")]
#[test_case("-45d30m00s", -45.5 ; "degree tokens")]
#[test_case("-45.5", -45.5 ; "negative decimal")]
fn test_declination(input: &str, expected: f64) {
    assert!((parse_declination(input).unwrap() - expected).abs() < 1e-9);
}

#[test_case("12:30" ; "two colon components")]
#[test_case("1:2:3:4" ; "four colon components")]
#[test_case("12h" ; "single token")]
#[test_case("12:30:" ; "trailing colon")]
#[test_case("::" ; "bare separators")]
fn test_malformed_right_ascension(input: &str) {
    assert!(parse_right_ascension(input).is_err());
}

// =============================================================================
// Retry Classification Tests
// =============================================================================

#[test_case(408, true ; "request timeout")]
#[test_case(429, true ; "too many requests")]
#[test_case(500, true ; "internal server error")]
#[test_case(502, true ; "bad gateway")]
#[test_case(503, true ; "service unavailable")]
#[test_case(504, true ; "gateway timeout")]
#[test_case(400, false ; "bad request")]
#[test_case(401, false ; "unauthorized")]
#[test_case(404, false ; "not found")]
#[test_case(501, false ; "not implemented")]
fn test_retryable_status(status: u16, expected: bool) {
    assert_eq!(RetryPolicy::default().is_retryable_status(status), expected);
}

// =============================================================================
// Parsing CLI Values
// =============================================================================

#[test_case("get", Method::Get ; "lowercase get")]
#[test_case("POST", Method::Post ; "uppercase post")]
#[test_case("Put", Method::Put ; "mixed case put")]
#[test_case("patch", Method::Patch ; "patch")]
#[test_case("DELETE", Method::Delete ; "delete")]
fn test_method_from_str(input: &str, expected: Method) {
    assert_eq!(input.parse::<Method>().unwrap(), expected);
}

#[test_case("pending", ObservationStatus::Pending ; "pending")]
#[test_case("in_progress", ObservationStatus::InProgress ; "underscore")]
#[test_case("in-progress", ObservationStatus::InProgress ; "hyphen")]
#[test_case("running", ObservationStatus::InProgress ; "alias")]
#[test_case("EXPIRED", ObservationStatus::Expired ; "uppercase")]
fn test_status_from_str(input: &str, expected: ObservationStatus) {
    assert_eq!(input.parse::<ObservationStatus>().unwrap(), expected);
}
