//! Core domain types and port traits
//!
//! This module has no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Session, Target, Observation)
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
