//! tomctl - client toolkit for a Target Observation Manager backend
//!
//! This library normalizes user-entered celestial coordinates and talks to
//! the observation manager's REST API through a client that retries
//! transient failures and renews expired sessions.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod client;
pub mod config;
pub mod coords;
pub mod core;
pub mod output;
pub mod paths;
