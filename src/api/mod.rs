//! Backend resources
//!
//! Typed wrappers over [`ApiClient`](crate::client::ApiClient) for the
//! endpoints the command line uses. They only shape paths and bodies; retry
//! and authentication are the client's job.

mod observations;
mod targets;

pub use observations::{OBSERVATIONS_PATH, ObservationsApi};
pub use targets::{TARGETS_PATH, TargetsApi};
