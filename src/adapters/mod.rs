//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - reqwest transport and the token endpoints
//! - `session/` - Session persistence (TOML file, memory)

mod http;
mod session;

pub use http::{LOGIN_PATH, REFRESH_PATH, ReqwestTransport, TokenEndpoint};
pub use session::{FileSessionStore, MemorySessionStore};
