//! Coordinate normalization
//!
//! Converts user-entered right ascension and declination strings into
//! decimal degrees, and renders degrees back to sexagesimal for display.
//!
//! - [`parse`] - structural format detection and conversion
//! - [`format`] - display-only sexagesimal rendering
//! - [`range`] - interval checks applied by callers
//!
//! Right ascension and declination are separate entry points because they
//! differ in scale (15°/hour) and sign handling.

mod format;
mod parse;
mod range;

pub use format::{
    MAX_DECIMAL_PLACES, SexagesimalParts, format_declination, format_right_ascension,
    format_sexagesimal, reformat_sexagesimal,
};
pub use parse::{
    AngleFormatError, is_sexagesimal, parse_coordinate_pair, parse_declination,
    parse_right_ascension,
};
pub use range::{CoordinateRangeError, validate_declination, validate_right_ascension};
