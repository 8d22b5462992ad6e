//! Range validation for parsed coordinates
//!
//! The parsers never range check; callers that build targets do it here.

use thiserror::Error;

/// A coordinate outside its valid interval
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateRangeError {
    /// Right ascension outside `[0, 360)`
    #[error("right ascension {0} is outside [0, 360)")]
    RightAscension(f64),

    /// Declination outside `[-90, 90]`
    #[error("declination {0} is outside [-90, 90]")]
    Declination(f64),
}

/// Check that right ascension degrees fall in `[0, 360)`
pub fn validate_right_ascension(degrees: f64) -> Result<f64, CoordinateRangeError> {
    if (0.0..360.0).contains(&degrees) {
        Ok(degrees)
    } else {
        Err(CoordinateRangeError::RightAscension(degrees))
    }
}

/// Check that declination degrees fall in `[-90, 90]`
pub fn validate_declination(degrees: f64) -> Result<f64, CoordinateRangeError> {
    if (-90.0..=90.0).contains(&degrees) {
        Ok(degrees)
    } else {
        Err(CoordinateRangeError::Declination(degrees))
    }
}
