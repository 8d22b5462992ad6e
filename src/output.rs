//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::config::Config;
use crate::coords::{format_declination, format_right_ascension, reformat_sexagesimal};
use crate::core::models::{Observation, ObservationStatus, Session, Target};

/// Decimal places used for seconds when showing coordinates
pub const DISPLAY_PLACES: usize = 2;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A single parsed angle
#[derive(Debug, Serialize)]
pub struct AngleResult {
    /// What the user typed
    pub input: String,
    /// Decimal degrees
    pub degrees: f64,
    /// Canonical sexagesimal rendering
    pub sexagesimal: String,
}

/// A parsed RA/Dec pair
#[derive(Debug, Serialize)]
pub struct PairResult {
    /// What the user typed
    pub input: String,
    /// Right ascension in degrees
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
    /// Right ascension as `HH:MM:SS.ss`
    pub ra_hms: String,
    /// Declination as `±DD:MM:SS.ss`
    pub dec_dms: String,
}

/// Result of `target list`
#[derive(Debug, Serialize)]
pub struct TargetListResult {
    /// Targets, in backend order
    pub targets: Vec<TargetInfo>,
}

/// One target as shown to the user
#[derive(Debug, Serialize)]
pub struct TargetInfo {
    /// Backend ID
    pub id: Option<u64>,
    /// Name
    pub name: String,
    /// Right ascension in degrees
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
    /// Right ascension as `HH:MM:SS.ss`
    pub ra_hms: String,
    /// Declination as `±DD:MM:SS.ss`
    pub dec_dms: String,
    /// Backend's own `RA DEC` sexagesimal string, seconds re-padded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    /// Redshift
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redshift: Option<f64>,
    /// Notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&Target> for TargetInfo {
    fn from(target: &Target) -> Self {
        Self {
            id: target.id,
            name: target.name.clone(),
            ra: target.ra,
            dec: target.dec,
            ra_hms: format_right_ascension(target.ra, DISPLAY_PLACES),
            dec_dms: format_declination(target.dec, DISPLAY_PLACES),
            coordinates: target.coordinates.as_deref().map(display_coordinates),
            redshift: target.redshift,
            notes: target.notes.clone(),
        }
    }
}

/// Re-pad each field of a backend `RA DEC` string; text that does not split
/// into sexagesimal fields is shown as received
fn display_coordinates(text: &str) -> String {
    let padded: Result<Vec<String>, _> = text
        .split_whitespace()
        .map(|field| reformat_sexagesimal(field, DISPLAY_PLACES))
        .collect();
    match padded {
        Ok(fields) if !fields.is_empty() => fields.join(" "),
        _ => text.to_string(),
    }
}

/// Result of `observation list`
#[derive(Debug, Serialize)]
pub struct ObservationListResult {
    /// Observations, in backend order
    pub observations: Vec<ObservationInfo>,
}

/// One observation as shown to the user
#[derive(Debug, Serialize)]
pub struct ObservationInfo {
    /// Backend ID
    pub id: u64,
    /// Name
    pub name: String,
    /// Workflow status
    pub status: String,
    /// Whether the status admits no further transitions
    pub closed: bool,
    /// Priority label
    pub priority: String,
    /// Observatory ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observatory: Option<u64>,
    /// Target IDs
    pub targets: Vec<u64>,
    /// Start of the observing window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End of the observing window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip)]
    status_code: ObservationStatus,
}

fn display_time(time: Option<DateTime<Utc>>) -> Option<String> {
    time.map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
}

impl From<&Observation> for ObservationInfo {
    fn from(observation: &Observation) -> Self {
        Self {
            id: observation.id,
            name: observation.name.clone(),
            status: observation.status.to_string(),
            closed: observation.status.is_final(),
            priority: observation.priority.to_string(),
            observatory: observation.observatory,
            targets: observation.targets.clone(),
            start_date: display_time(observation.start_date),
            end_date: display_time(observation.end_date),
            status_code: observation.status,
        }
    }
}

/// Who is signed in
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    /// Whether a session is stored
    pub signed_in: bool,
    /// Username, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Access token expiry (RFC3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    /// Whether the access token has already expired
    pub expired: bool,
}

impl SessionInfo {
    /// Describe `session` as of now
    #[must_use]
    pub fn from_session(session: Option<&Session>) -> Self {
        session.map_or(
            Self {
                signed_in: false,
                username: None,
                expires_at: None,
                expired: false,
            },
            |s| Self {
                signed_in: true,
                username: s.username.clone(),
                expires_at: s.access_expires_at.map(|t| t.to_rfc3339()),
                expired: s.is_expired_at(chrono::Utc::now()),
            },
        )
    }
}

/// Raw response of `tomctl request`
#[derive(Debug, Serialize)]
pub struct ResponseResult {
    /// HTTP status
    pub status: u16,
    /// Body, as JSON when it parses, else as a string
    pub body: serde_json::Value,
}

/// Result of `config show`
#[derive(Debug, Serialize)]
pub struct ConfigInfo {
    /// Config file location
    pub path: String,
    /// Whether the file exists
    pub exists: bool,
    /// Effective settings, environment overrides included
    pub config: Config,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl AngleResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{} ({})", self.degrees, self.sexagesimal),
            OutputMode::Json => print_json(self),
        }
    }
}

impl PairResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("RA:  {} ({})", self.ra, self.ra_hms);
                println!("Dec: {} ({})", self.dec, self.dec_dms);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl TargetInfo {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", self.summary_line());
        if let Some(coordinates) = &self.coordinates {
            println!("  coordinates: {coordinates}");
        }
        if let Some(z) = self.redshift {
            println!("  redshift: {z}");
        }
        if let Some(notes) = &self.notes {
            println!("  notes: {notes}");
        }
    }

    /// One-line summary: id, name, and both coordinates
    #[must_use]
    pub fn summary_line(&self) -> String {
        let id = self.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        format!("[{id}] {}  {} {}", self.name.bold(), self.ra_hms, self.dec_dms)
    }
}

impl TargetListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.targets.is_empty() {
                    println!("No targets.");
                    return;
                }
                for target in &self.targets {
                    println!("  {}", target.summary_line());
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl ObservationInfo {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}", self.summary_line());
                if let Some(observatory) = self.observatory {
                    println!("  observatory: {observatory}");
                }
                if !self.targets.is_empty() {
                    let ids: Vec<String> = self.targets.iter().map(u64::to_string).collect();
                    println!("  targets: {}", ids.join(", "));
                }
                if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
                    println!("  window: {start} to {end}");
                }
            },
            OutputMode::Json => print_json(self),
        }
    }

    /// One-line summary: id, name, status and priority
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("[{}] {} ({}, {})", self.id, self.name, self.colored_status(), self.priority)
    }

    fn colored_status(&self) -> String {
        match self.status_code {
            ObservationStatus::Done => self.status.green().to_string(),
            ObservationStatus::Denied | ObservationStatus::Expired => self.status.red().to_string(),
            ObservationStatus::InProgress => self.status.cyan().to_string(),
            ObservationStatus::Pending | ObservationStatus::Prep => {
                self.status.yellow().to_string()
            },
            ObservationStatus::Postponed => self.status.dimmed().to_string(),
        }
    }
}

impl ObservationListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.observations.is_empty() {
                    println!("No observations.");
                    return;
                }
                for observation in &self.observations {
                    println!("  {}", observation.summary_line());
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl SessionInfo {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if !self.signed_in {
                    println!("Not signed in.");
                    return;
                }
                println!("Signed in as {}", self.username.as_deref().unwrap_or("(unknown user)"));
                if let Some(expiry) = &self.expires_at {
                    let state = if self.expired { " (expired)" } else { "" };
                    println!("Access token valid until {expiry}{state}");
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl ResponseResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("HTTP {}", self.status);
                match &self.body {
                    serde_json::Value::Null => {},
                    serde_json::Value::String(text) => println!("{text}"),
                    body => print_json(body),
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl ConfigInfo {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let state = if self.exists { "" } else { " (not created yet)" };
                println!("# {}{state}", self.path);
                match toml::to_string_pretty(&self.config) {
                    Ok(text) => print!("{text}"),
                    Err(err) => println!("# could not render settings: {err}"),
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
