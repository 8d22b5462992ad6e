//! Session commands - login, logout, whoami

use std::sync::Arc;

use tomctl::adapters::{FileSessionStore, ReqwestTransport, TokenEndpoint};
use tomctl::config::Config;
use tomctl::core::ports::SessionStore;
use tomctl::output::{OperationResult, OutputMode, SessionInfo};

/// Sign in and persist the session
pub async fn login(username: &str, password: &str, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let transport = ReqwestTransport::new(&config.api.base_url, config.api.timeout())?;
    let endpoint = TokenEndpoint::new(Arc::new(transport));

    let session = endpoint.login(username, password).await?;
    let store = FileSessionStore::default_location();
    store.store(session)?;
    log::debug!("session saved to {}", store.path().display());

    OperationResult {
        success: true,
        message: format!("Signed in as {username}"),
    }
    .render(mode);
    Ok(())
}

/// Forget the stored session
pub fn logout(mode: OutputMode) -> anyhow::Result<()> {
    let store = FileSessionStore::default_location();
    let was_signed_in = store.current().is_some();
    store.sign_out()?;

    OperationResult {
        success: true,
        message: if was_signed_in {
            "Signed out".to_string()
        } else {
            "Not signed in".to_string()
        },
    }
    .render(mode);
    Ok(())
}

/// Describe the stored session
#[allow(clippy::unnecessary_wraps)]
pub fn whoami(mode: OutputMode) -> anyhow::Result<()> {
    let session = FileSessionStore::default_location().current();
    SessionInfo::from_session(session.as_ref()).render(mode);
    Ok(())
}
