//! Property-based tests for the coordinate parsers
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use tomctl::coords::{
    MAX_DECIMAL_PLACES, format_sexagesimal, parse_declination, parse_right_ascension,
    validate_declination,
};

proptest! {
    /// Any finite decimal comes back unchanged, on either axis
    #[test]
    fn decimal_passthrough(value in -1.0e6f64..1.0e6) {
        let text = value.to_string();
        prop_assert_eq!(parse_right_ascension(&text).unwrap(), value);
        prop_assert_eq!(parse_declination(&text).unwrap(), value);
    }

    /// Colon, token and whitespace forms agree
    #[test]
    fn grammars_agree(h in 0u32..24, m in 0u32..60, s in 0.0f64..60.0) {
        let colon = parse_right_ascension(&format!("{h}:{m}:{s}")).unwrap();
        let token = parse_right_ascension(&format!("{h}h{m}m{s}s")).unwrap();
        let spaced = parse_right_ascension(&format!("{h} {m} {s}")).unwrap();
        prop_assert_eq!(colon, token);
        prop_assert_eq!(colon, spaced);
    }

    /// Sexagesimal right ascension stays in [0, 360) for in-range fields
    #[test]
    fn ra_in_range(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
        let degrees = parse_right_ascension(&format!("{h:02}:{m:02}:{s:02}")).unwrap();
        prop_assert!((0.0..360.0).contains(&degrees));
    }

    /// Negating a declination negates its value
    #[test]
    fn dec_sign_symmetry(d in 0u32..90, m in 0u32..60, s in 0u32..60) {
        let positive = parse_declination(&format!("+{d}:{m}:{s}")).unwrap();
        let negative = parse_declination(&format!("-{d}:{m}:{s}")).unwrap();
        prop_assert_eq!(positive, -negative);
        prop_assert!(validate_declination(negative).is_ok());
    }

    /// Formatting never panics and the seconds field has the requested width
    #[test]
    fn format_seconds_width(value in -400.0f64..400.0, places in 0usize..6) {
        let text = format_sexagesimal(value, places);
        let seconds = text.rsplit(':').next().unwrap();
        prop_assert_eq!(seconds.len(), places + 3);
    }

    /// The rendered fields read back as the whole/minutes/seconds triplet
    #[test]
    fn format_fields_reconstruct(
        h in 0u32..24,
        m in 0u32..60,
        s in 0u32..60,
        places in 0usize..6,
    ) {
        let value = f64::from(h) + f64::from(m) / 60.0 + f64::from(s) / 3600.0;
        let text = format_sexagesimal(value, places);
        let fields: Vec<&str> = text.split(':').collect();
        prop_assert_eq!(fields.len(), 3);
        prop_assert_eq!(fields[0].parse::<u32>().unwrap(), h);
        prop_assert_eq!(fields[1].parse::<u32>().unwrap(), m);
        let seconds: f64 = fields[2].parse().unwrap();
        prop_assert_eq!(fields[2].len(), places + 3);
        prop_assert!((seconds - f64::from(s)).abs() < 1e-9);
    }

    /// Oversized precision is clamped instead of overflowing
    #[test]
    fn format_clamps_places(value in -400.0f64..400.0, places in 16usize..=usize::MAX) {
        let text = format_sexagesimal(value, places);
        let seconds = text.rsplit(':').next().unwrap();
        prop_assert_eq!(seconds.len(), MAX_DECIMAL_PLACES + 3);
    }

    /// Parsers never panic on arbitrary text
    #[test]
    fn parsers_total(input in "\\PC{0,24}") {
        let _ = parse_right_ascension(&input);
        let _ = parse_declination(&input);
    }
}
