//! Sexagesimal rendering for display
//!
//! These functions are one-directional. Their output is meant for people,
//! not as a canonical form for the parsers.

use super::parse::AngleFormatError;

/// Most decimals kept on the seconds field; larger requests are clamped
pub const MAX_DECIMAL_PLACES: usize = 15;

/// A value split into base-60 fields, already rounded for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SexagesimalParts {
    /// Whether the value is below zero
    pub negative: bool,
    /// Whole degrees (or hours)
    pub whole: u64,
    /// Minutes, `0..60`
    pub minutes: u64,
    /// Seconds, `0.0..60.0`, rounded to `decimal_places`
    pub seconds: f64,
    /// Number of decimals kept on the seconds field
    pub decimal_places: usize,
}

impl SexagesimalParts {
    /// Split a finite value into whole/minutes/seconds fields.
    ///
    /// Rounding happens once, on total seconds, so 59.9996 s at three places
    /// carries into the minutes field instead of rendering as `60.000`.
    /// `decimal_places` is clamped to [`MAX_DECIMAL_PLACES`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub fn from_value(value: f64, decimal_places: usize) -> Self {
        let decimal_places = decimal_places.min(MAX_DECIMAL_PLACES);
        let scale = 10f64.powi(decimal_places as i32);
        let total_seconds = (value.abs() * 3600.0 * scale).round() / scale;

        let whole = (total_seconds / 3600.0).floor();
        let remainder = total_seconds - whole * 3600.0;
        let minutes = (remainder / 60.0).floor().min(59.0);
        let seconds = (remainder - minutes * 60.0).max(0.0);

        Self {
            negative: value < 0.0 && total_seconds > 0.0,
            whole: whole as u64,
            minutes: minutes as u64,
            seconds,
            decimal_places,
        }
    }
}

impl std::fmt::Display for SexagesimalParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{:02}:{:02}:{}",
            self.whole,
            self.minutes,
            pad_seconds(self.seconds, self.decimal_places)
        )
    }
}

/// Render a value as `D:M:S.sss`.
///
/// Whole and minutes fields are two digits; the seconds field is zero-padded
/// to `decimal_places + 3` characters (`"06.123"` at three places), with
/// `decimal_places` capped at [`MAX_DECIMAL_PLACES`].
#[must_use]
pub fn format_sexagesimal(degrees: f64, decimal_places: usize) -> String {
    if !degrees.is_finite() {
        return degrees.to_string();
    }
    SexagesimalParts::from_value(degrees, decimal_places).to_string()
}

/// Render right ascension degrees as hours `HH:MM:SS.sss`
#[must_use]
pub fn format_right_ascension(degrees: f64, decimal_places: usize) -> String {
    format_sexagesimal(degrees / 15.0, decimal_places)
}

/// Render declination degrees as `+DD:MM:SS.sss` with an explicit sign
#[must_use]
pub fn format_declination(degrees: f64, decimal_places: usize) -> String {
    let body = format_sexagesimal(degrees, decimal_places);
    if body.starts_with('-') || !degrees.is_finite() {
        body
    } else {
        format!("+{body}")
    }
}

/// Re-pad the seconds field of an existing `D:M:S` string.
///
/// The first two fields are kept verbatim, matching how coordinate strings
/// returned by the backend are shown.
pub fn reformat_sexagesimal(text: &str, decimal_places: usize) -> Result<String, AngleFormatError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AngleFormatError::Empty);
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    let [whole, minutes, seconds] = parts.as_slice() else {
        return Err(AngleFormatError::ComponentCount { found: parts.len() });
    };

    let seconds: f64 = seconds
        .trim()
        .parse()
        .map_err(|_| AngleFormatError::InvalidComponent((*seconds).to_string()))?;

    Ok(format!("{whole}:{minutes}:{}", pad_seconds(seconds, decimal_places)))
}

fn pad_seconds(seconds: f64, decimal_places: usize) -> String {
    let decimal_places = decimal_places.min(MAX_DECIMAL_PLACES);
    let width = decimal_places + 3;
    format!("{seconds:0width$.decimal_places$}")
}
