//! Session store port
//!
//! Defines where the current user's credentials are kept.

use crate::core::models::Session;

/// Holder of the current session
///
/// Read before every request and after every refresh; written when a refresh
/// succeeds; cleared when it fails.
pub trait SessionStore: Send + Sync {
    /// The current session, if signed in
    fn current(&self) -> Option<Session>;

    /// Replace the current session
    fn store(&self, session: Session) -> anyhow::Result<()>;

    /// Forget the current session
    fn sign_out(&self) -> anyhow::Result<()>;
}
