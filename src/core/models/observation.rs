//! Observation requests and their workflow status
//!
//! The backend encodes status and priority as small integers; these types
//! keep the numeric wire form and give it names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where an observation is in its workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ObservationStatus {
    /// Being prepared by the requester
    Prep,
    /// Submitted, waiting for the observatory
    Pending,
    /// Scheduled and running
    InProgress,
    /// Completed
    Done,
    /// Window passed without completion
    Expired,
    /// Rejected by the observatory
    Denied,
    /// Deferred to a later window
    Postponed,
}

impl ObservationStatus {
    /// All statuses in workflow order
    pub const ALL: [Self; 7] = [
        Self::Prep,
        Self::Pending,
        Self::InProgress,
        Self::Done,
        Self::Expired,
        Self::Denied,
        Self::Postponed,
    ];

    /// Whether no further transitions are expected
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Done | Self::Expired | Self::Denied)
    }
}

impl TryFrom<u8> for ObservationStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Prep),
            2 => Ok(Self::Pending),
            3 => Ok(Self::InProgress),
            4 => Ok(Self::Done),
            5 => Ok(Self::Expired),
            6 => Ok(Self::Denied),
            7 => Ok(Self::Postponed),
            _ => Err(format!("unknown observation status code: {code}")),
        }
    }
}

impl From<ObservationStatus> for u8 {
    fn from(status: ObservationStatus) -> Self {
        match status {
            ObservationStatus::Prep => 1,
            ObservationStatus::Pending => 2,
            ObservationStatus::InProgress => 3,
            ObservationStatus::Done => 4,
            ObservationStatus::Expired => 5,
            ObservationStatus::Denied => 6,
            ObservationStatus::Postponed => 7,
        }
    }
}

impl std::fmt::Display for ObservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prep => write!(f, "prep"),
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Done => write!(f, "done"),
            Self::Expired => write!(f, "expired"),
            Self::Denied => write!(f, "denied"),
            Self::Postponed => write!(f, "postponed"),
        }
    }
}

impl std::str::FromStr for ObservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "prep" => Ok(Self::Prep),
            "pending" => Ok(Self::Pending),
            "in_progress" | "running" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            "expired" => Ok(Self::Expired),
            "denied" => Ok(Self::Denied),
            "postponed" => Ok(Self::Postponed),
            _ => Err(format!(
                "Invalid status: {s}. Use: prep, pending, in_progress, done, expired, denied, postponed"
            )),
        }
    }
}

/// Scheduling priority of an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    /// Scheduled first
    High,
    /// Default priority
    Medium,
    /// Fills gaps
    Low,
    /// Target of opportunity, interrupts the schedule
    TargetOfOpportunity,
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::High),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Low),
            4 => Ok(Self::TargetOfOpportunity),
            _ => Err(format!("unknown priority code: {code}")),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
            Priority::TargetOfOpportunity => 4,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "HIGH"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::Low => write!(f, "LOW"),
            Self::TargetOfOpportunity => write!(f, "TOO"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" | "1" => Ok(Self::High),
            "medium" | "2" => Ok(Self::Medium),
            "low" | "3" => Ok(Self::Low),
            "too" | "4" => Ok(Self::TargetOfOpportunity),
            _ => Err(format!("Invalid priority: {s}. Use: high, medium, low, too")),
        }
    }
}

/// An observation request bundling one or more targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Backend-assigned ID
    pub id: u64,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Observatory ID
    #[serde(default)]
    pub observatory: Option<u64>,
    /// Scheduling priority
    pub priority: Priority,
    /// Workflow status
    pub status: ObservationStatus,
    /// Target IDs included in the request
    #[serde(default)]
    pub targets: Vec<u64>,
    /// Start of the observing window
    #[serde(default, with = "super::timestamp")]
    pub start_date: Option<DateTime<Utc>>,
    /// End of the observing window
    #[serde(default, with = "super::timestamp")]
    pub end_date: Option<DateTime<Utc>>,
    /// Creation time
    #[serde(default, with = "super::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of a new observation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewObservation {
    /// Display name; the backend derives one when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Observatory ID
    pub observatory: u64,
    /// Scheduling priority
    pub priority: Priority,
    /// Initial status; the backend starts at `prep` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ObservationStatus>,
    /// Start of the observing window
    pub start_date: DateTime<Utc>,
    /// End of the observing window
    pub end_date: DateTime<Utc>,
    /// Target IDs to observe
    pub targets: Vec<u64>,
}

/// Why a [`NewObservation`] was refused before sending
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ObservationRequestError {
    /// The window closes before it opens
    #[error("start date {start} is after end date {end}")]
    InvertedWindow {
        /// Requested start
        start: DateTime<Utc>,
        /// Requested end
        end: DateTime<Utc>,
    },
    /// Nothing to observe
    #[error("an observation needs at least one target")]
    NoTargets,
}

impl NewObservation {
    /// Request `targets` at `observatory` over `[start_date, end_date]`
    #[must_use]
    pub const fn new(
        observatory: u64,
        priority: Priority,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        targets: Vec<u64>,
    ) -> Self {
        Self {
            name: None,
            observatory,
            priority,
            status: None,
            start_date,
            end_date,
            targets,
        }
    }

    /// Set the name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial status
    #[must_use]
    pub const fn with_status(mut self, status: ObservationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Check what the backend would reject anyway
    pub fn validate(&self) -> Result<(), ObservationRequestError> {
        if self.start_date > self.end_date {
            return Err(ObservationRequestError::InvertedWindow {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.targets.is_empty() {
            return Err(ObservationRequestError::NoTargets);
        }
        Ok(())
    }
}
