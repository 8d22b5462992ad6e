//! TOML session file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};

use crate::core::models::Session;
use crate::core::ports::SessionStore;
use crate::paths;

/// Session persisted as a TOML file, readable only by the owner
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location (`~/.tomctl/session.toml`)
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(paths::session_file())
    }

    /// Path of the session file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> anyhow::Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let session = toml::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(session))
    }
}

impl SessionStore for FileSessionStore {
    fn current(&self) -> Option<Session> {
        match self.load() {
            Ok(session) => session,
            Err(err) => {
                warn!("ignoring unreadable session file: {err:#}");
                None
            },
        }
    }

    fn store(&self, session: Session) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(&session)?;
        fs::write(&self.path, content)?;
        restrict_permissions(&self.path)?;
        debug!("session written to {}", self.path.display());
        Ok(())
    }

    fn sign_out(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            debug!("session removed from {}", self.path.display());
        }
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> anyhow::Result<()> {
    Ok(())
}
