//! In-memory session store

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::core::models::Session;
use crate::core::ports::SessionStore;

/// Session held in process memory
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
    sign_outs: AtomicUsize,
}

impl MemorySessionStore {
    /// Empty store (signed out)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store already holding `session`
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
            sign_outs: AtomicUsize::new(0),
        }
    }

    /// How many times `sign_out` was called
    #[must_use]
    pub fn sign_out_count(&self) -> usize {
        self.sign_outs.load(Ordering::SeqCst)
    }
}

impl SessionStore for MemorySessionStore {
    fn current(&self) -> Option<Session> {
        self.session.lock().clone()
    }

    fn store(&self, session: Session) -> anyhow::Result<()> {
        *self.session.lock() = Some(session);
        Ok(())
    }

    fn sign_out(&self) -> anyhow::Result<()> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        *self.session.lock() = None;
        Ok(())
    }
}
