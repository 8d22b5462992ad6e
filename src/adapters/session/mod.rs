//! Session storage
//!
//! Implements `SessionStore` on disk (for the CLI) and in memory (for
//! embedding and tests).

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
