//! Command implementations

mod auth;
mod config;
mod coords;
mod observation;
mod request;
mod target;

use std::sync::Arc;

use tomctl::adapters::FileSessionStore;
use tomctl::client::ApiClient;
use tomctl::config::Config;

pub use auth::{login, logout, whoami};
pub use config::config_cmd;
pub use coords::coords_cmd;
pub use observation::observation_cmd;
pub use request::request;
pub use target::target_cmd;

/// Client for the configured backend using the on-disk session
fn connect() -> anyhow::Result<ApiClient> {
    let config = Config::load();
    log::debug!("using backend {}", config.api.base_url);
    let sessions = Arc::new(FileSessionStore::default_location());
    Ok(ApiClient::from_config(&config, sessions)?)
}
