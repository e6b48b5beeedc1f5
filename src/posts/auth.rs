use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{DashError, Result};

/// Answers whether the current user may mutate posts.
pub trait Authenticator {
    fn is_authenticated(&self) -> bool;
}

/// Fixed answer, for composition and tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticAuth(pub bool);

impl Authenticator for StaticAuth {
    fn is_authenticated(&self) -> bool {
        self.0
    }
}

/// Session stored as a token in a file.
///
/// Authenticated while the file exists and holds a non-blank token.
#[derive(Debug, Clone)]
pub struct SessionAuth {
    path: PathBuf,
}

impl SessionAuth {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn login(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DashError::InvalidInput("token must not be empty".to_string()));
        }
        fs::write(&self.path, token)?;
        info!(path = %self.path.display(), "session started");
        Ok(())
    }

    /// Remove the session file. Logging out twice is not an error.
    pub fn logout(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!(path = %self.path.display(), "session ended");
        }
        Ok(())
    }
}

impl Authenticator for SessionAuth {
    fn is_authenticated(&self) -> bool {
        fs::read_to_string(&self.path)
            .map(|token| !token.trim().is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_login_logout_cycle() {
        let dir = TempDir::new().unwrap();
        let auth = SessionAuth::new(dir.path().join("session"));
        assert!(!auth.is_authenticated());

        auth.login("abc123").unwrap();
        assert!(auth.is_authenticated());

        auth.logout().unwrap();
        assert!(!auth.is_authenticated());
        auth.logout().unwrap();
    }

    #[test]
    fn test_blank_token_rejected() {
        let dir = TempDir::new().unwrap();
        let auth = SessionAuth::new(dir.path().join("session"));
        assert!(auth.login("   ").is_err());
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_blank_session_file_is_unauthenticated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session");
        fs::write(&path, "\n").unwrap();
        assert!(!SessionAuth::new(path).is_authenticated());
    }
}
