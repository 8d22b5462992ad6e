//! Celestial targets as exchanged with the backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered celestial object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Backend-assigned ID (absent before creation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Display name
    pub name: String,
    /// Right ascension in decimal degrees
    pub ra: f64,
    /// Declination in decimal degrees
    pub dec: f64,
    /// Sexagesimal coordinate string computed by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    /// Redshift, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redshift: Option<f64>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none", with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none", with = "super::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Target {
    /// Create a new, not yet registered target
    #[must_use]
    pub fn new(name: impl Into<String>, ra: f64, dec: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            ra,
            dec,
            coordinates: None,
            redshift: None,
            notes: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the redshift
    #[must_use]
    pub fn with_redshift(mut self, redshift: f64) -> Self {
        self.redshift = Some(redshift);
        self
    }

    /// Set the notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Body of a coordinate update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateUpdate {
    /// Right ascension in decimal degrees
    pub ra: f64,
    /// Declination in decimal degrees
    pub dec: f64,
}
