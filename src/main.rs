//! tomctl - command-line client for a Target Observation Manager
//!
//! Normalizes coordinates, signs in against the backend, and manages
//! targets and observations through the resilient API client.

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

mod cli;
mod commands;

/// Main entry point for the tomctl CLI
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}
