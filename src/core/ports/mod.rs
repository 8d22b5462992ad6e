//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the client logic and the
//! outside world (network, credential storage, the token endpoint).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The client depends only on these traits, never on concrete
//! implementations. Tests drive it with scripted transports and in-memory
//! session stores.

mod authenticator;
mod session_store;
mod transport;

pub use authenticator::Authenticator;
pub use session_store::SessionStore;
pub use transport::Transport;
