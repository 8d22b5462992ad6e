//! Angle parsing for right ascension and declination
//!
//! Both axes share one textual grammar and differ only in scale and sign:
//!
//! ```text
//! decimal:      165.3224        -12.5        1e2
//! colon:        12:30:49.42     -12:30:00
//! token (RA):   12h30m49.42s    12h 30m 49s
//! token (Dec):  -12d30m00s      +12°30'00"
//! whitespace:   12 30 49.42     -12 30 00
//! ```
//!
//! Format detection is structural. Any string that parses as a finite decimal
//! is passed through unchanged; everything else must be a sexagesimal triplet.
//!
//! # Examples
//!
//! ```
//! use tomctl::coords::{parse_declination, parse_right_ascension};
//!
//! assert_eq!(parse_right_ascension("1:00:00").unwrap(), 15.0);
//! assert_eq!(parse_declination("-12:30:00").unwrap(), -12.5);
//! assert_eq!(parse_right_ascension("165.3224").unwrap(), 165.3224);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Unsigned numeric component: `12`, `12.`, `12.5`, `.5`
const NUMBER: &str = r"(\d+(?:\.\d*)?|\.\d+)";

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid decimal regex")
});

static COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{NUMBER}$")).expect("valid component regex"));

static RA_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{NUMBER}\s*[hH]\s*{NUMBER}\s*[mM]\s*{NUMBER}\s*[sS]?$"))
        .expect("valid hour-angle regex")
});

static DEC_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"^{NUMBER}\s*[dD°]\s*{NUMBER}\s*[mM'′]\s*{NUMBER}\s*[sS"″]?$"#))
        .expect("valid degree-token regex")
});

static NUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d.]+").expect("valid numeric run regex"));

/// Errors produced when an angle string cannot be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AngleFormatError {
    /// Input was empty or whitespace only
    #[error("empty angle")]
    Empty,

    /// Input matches none of the accepted grammars
    #[error("unrecognized angle format: {0}")]
    UnrecognizedFormat(String),

    /// Separators were present but the component count was not three
    #[error("expected 3 sexagesimal components, found {found}")]
    ComponentCount {
        /// Number of components found
        found: usize,
    },

    /// A component inside a recognized grammar is not a number
    #[error("invalid numeric component: {0:?}")]
    InvalidComponent(String),

    /// A sign was given where the axis does not allow one
    #[error("sign not allowed in sexagesimal right ascension: {0}")]
    UnexpectedSign(String),

    /// The decimal value overflowed to infinity
    #[error("angle is not a finite number: {0}")]
    NotFinite(String),

    /// A coordinate pair did not split into right ascension and declination
    #[error("expected right ascension and declination, found {found} field(s)")]
    PairFields {
        /// Number of whitespace-separated fields found
        found: usize,
    },
}

/// Which celestial axis an angle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    RightAscension,
    Declination,
}

impl Axis {
    fn tokens(self) -> &'static Regex {
        match self {
            Self::RightAscension => &RA_TOKENS,
            Self::Declination => &DEC_TOKENS,
        }
    }

    fn is_unit_marker(self, c: char) -> bool {
        match self {
            Self::RightAscension => matches!(c, 'h' | 'H' | 'm' | 'M' | 's' | 'S'),
            Self::Declination => {
                matches!(c, 'd' | 'D' | '°' | 'm' | 'M' | '\'' | '′' | 's' | 'S' | '"' | '″')
            },
        }
    }
}

/// Parse a right ascension string into decimal degrees.
///
/// Sexagesimal input is read as hours and scaled by 15°/hour. The result is
/// not range checked.
pub fn parse_right_ascension(input: &str) -> Result<f64, AngleFormatError> {
    parse_angle(input, Axis::RightAscension)
}

/// Parse a declination string into decimal degrees.
///
/// A leading `+` or `-` applies to the whole magnitude, so `-00:30:00`
/// is `-0.5`. The result is not range checked.
pub fn parse_declination(input: &str) -> Result<f64, AngleFormatError> {
    parse_angle(input, Axis::Declination)
}

/// Check whether a string is in one of the sexagesimal forms (not decimal)
#[must_use]
pub fn is_sexagesimal(input: &str) -> bool {
    let trimmed = input.trim();
    !DECIMAL.is_match(trimmed)
        && (parse_right_ascension(trimmed).is_ok() || parse_declination(trimmed).is_ok())
}

/// Parse a one-line `"RA DEC"` pair into `(ra, dec)` degrees.
///
/// Accepts two fields (`"12:30:49.42 -12:30:00"`, `"187.7 -12.5"`) or six
/// whitespace-separated sexagesimal components (`"12 30 49.42 -12 30 00"`).
pub fn parse_coordinate_pair(input: &str) -> Result<(f64, f64), AngleFormatError> {
    let fields: Vec<&str> = input.split_whitespace().collect();
    match fields.as_slice() {
        [] => Err(AngleFormatError::Empty),
        [ra, dec] => Ok((parse_right_ascension(ra)?, parse_declination(dec)?)),
        [h, m, s, d, dm, ds] => Ok((
            parse_right_ascension(&format!("{h} {m} {s}"))?,
            parse_declination(&format!("{d} {dm} {ds}"))?,
        )),
        other => Err(AngleFormatError::PairFields { found: other.len() }),
    }
}

fn parse_angle(input: &str, axis: Axis) -> Result<f64, AngleFormatError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AngleFormatError::Empty);
    }

    if let Some(value) = parse_decimal(trimmed)? {
        return Ok(value);
    }

    let (negative, body) = split_sign(trimmed);
    if axis == Axis::RightAscension && body.len() != trimmed.len() {
        return Err(AngleFormatError::UnexpectedSign(trimmed.to_string()));
    }

    let parts = split_components(body, axis)?;
    let [whole, minutes, seconds] = parts.as_slice() else {
        return Err(AngleFormatError::ComponentCount { found: parts.len() });
    };

    let magnitude = parse_component(whole)?
        + parse_component(minutes)? / 60.0
        + parse_component(seconds)? / 3600.0;

    Ok(match axis {
        Axis::RightAscension => magnitude * 15.0,
        Axis::Declination if negative => -magnitude,
        Axis::Declination => magnitude,
    })
}

/// Decimal pass-through. `Ok(None)` means "not a decimal, try sexagesimal".
fn parse_decimal(input: &str) -> Result<Option<f64>, AngleFormatError> {
    if !DECIMAL.is_match(input) {
        return Ok(None);
    }
    let value: f64 =
        input.parse().map_err(|_| AngleFormatError::UnrecognizedFormat(input.to_string()))?;
    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err(AngleFormatError::NotFinite(input.to_string()))
    }
}

fn split_sign(input: &str) -> (bool, &str) {
    if let Some(rest) = input.strip_prefix('-') {
        (true, rest.trim_start())
    } else if let Some(rest) = input.strip_prefix('+') {
        (false, rest.trim_start())
    } else {
        (false, input)
    }
}

fn split_components(body: &str, axis: Axis) -> Result<Vec<&str>, AngleFormatError> {
    if body.contains(':') {
        return Ok(body.split(':').map(str::trim).collect());
    }

    if let Some(caps) = axis.tokens().captures(body) {
        return Ok(caps.iter().skip(1).flatten().map(|m| m.as_str()).collect());
    }

    let fields: Vec<&str> = body.split_whitespace().collect();
    if fields.len() > 1 {
        return Ok(fields);
    }

    // Unit markers in the wrong count, e.g. `12h30m`. Three fields with
    // markers that still did not match are the wrong units or order.
    if body.chars().any(|c| axis.is_unit_marker(c)) {
        let found = NUMERIC_RUN.find_iter(body).count();
        if found != 3 {
            return Err(AngleFormatError::ComponentCount { found });
        }
    }

    Err(AngleFormatError::UnrecognizedFormat(body.to_string()))
}

fn parse_component(part: &str) -> Result<f64, AngleFormatError> {
    if !COMPONENT.is_match(part) {
        return Err(AngleFormatError::InvalidComponent(part.to_string()));
    }
    part.parse().map_err(|_| AngleFormatError::InvalidComponent(part.to_string()))
}
