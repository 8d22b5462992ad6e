//! At-most-one-concurrent session refresh
//!
//! The first flow to see a 401 while no refresh is running becomes the
//! leader and performs the refresh. Every flow arriving while it runs
//! becomes a waiter and receives the leader's result. The check of the
//! in-flight flag and its setting happen under one lock with no `.await` in
//! between, so two flows can never both become leader.

use parking_lot::Mutex;
use tokio::sync::oneshot;

/// What a waiter receives: the renewed access token, or `None` on failure
pub type RefreshOutcome = Option<String>;

/// Single-slot mutex guarding a one-shot broadcast of a renewed credential
#[derive(Debug, Default)]
pub struct RefreshCoordinator {
    state: Mutex<RefreshState>,
}

#[derive(Debug, Default)]
struct RefreshState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<RefreshOutcome>>,
    started: u64,
}

/// Role handed out by [`RefreshCoordinator::join`]
#[derive(Debug)]
pub enum RefreshTicket<'a> {
    /// Caller must perform the refresh and resolve the lease
    Leader(RefreshLease<'a>),
    /// Caller must await the leader's outcome
    Waiter(oneshot::Receiver<RefreshOutcome>),
}

impl RefreshCoordinator {
    /// Create an idle coordinator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Become leader of a new refresh, or wait on the one in flight
    pub fn join(&self) -> RefreshTicket<'_> {
        let mut state = self.state.lock();
        if state.in_flight {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            RefreshTicket::Waiter(rx)
        } else {
            state.in_flight = true;
            state.started += 1;
            RefreshTicket::Leader(RefreshLease {
                coordinator: self,
                resolved: false,
            })
        }
    }

    /// Whether a refresh is currently running
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.state.lock().in_flight
    }

    /// Number of refreshes started over the coordinator's lifetime
    #[must_use]
    pub fn refreshes_started(&self) -> u64 {
        self.state.lock().started
    }

    fn resolve(&self, token: Option<&str>) -> usize {
        let waiters = {
            let mut state = self.state.lock();
            state.in_flight = false;
            std::mem::take(&mut state.waiters)
        };
        let count = waiters.len();
        for waiter in waiters {
            // A waiter that went away no longer needs the token
            let _ = waiter.send(token.map(String::from));
        }
        count
    }
}

/// Leadership of one refresh.
///
/// Dropping an unresolved lease fails all waiters and frees the slot, so a
/// cancelled leader cannot leave the coordinator stuck in flight.
#[derive(Debug)]
pub struct RefreshLease<'a> {
    coordinator: &'a RefreshCoordinator,
    resolved: bool,
}

impl RefreshLease<'_> {
    /// Publish the renewed token to all waiters; returns how many were woken
    pub fn succeed(mut self, access_token: &str) -> usize {
        self.resolved = true;
        self.coordinator.resolve(Some(access_token))
    }

    /// Fail all waiters; returns how many were woken
    pub fn fail(mut self) -> usize {
        self.resolved = true;
        self.coordinator.resolve(None)
    }
}

impl Drop for RefreshLease<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            self.coordinator.resolve(None);
        }
    }
}
