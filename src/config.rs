use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::posts::{DialogConfig, ADD_POST_TITLE, ADD_POST_WIDTH};

pub const DEFAULT_CONFIG_FILE: &str = "macro_dash.toml";

/// File-level settings; every field is optional in the TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// JSON file holding the posts.
    pub posts_file: PathBuf,

    /// File holding the session token.
    pub session_file: PathBuf,

    pub dialog_width: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            posts_file: PathBuf::from("posts.json"),
            session_file: PathBuf::from(".macro_dash_session"),
            dialog_width: ADD_POST_WIDTH,
        }
    }
}

impl Settings {
    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        debug!(path = %path.display(), ?settings, "loaded config");
        Ok(settings)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, posts: Option<PathBuf>, session: Option<PathBuf>) -> Self {
        if let Some(posts) = posts {
            self.posts_file = posts;
        }
        if let Some(session) = session {
            self.session_file = session;
        }
        self
    }

    pub fn dialog_config(&self) -> DialogConfig {
        DialogConfig {
            title: ADD_POST_TITLE.to_string(),
            width: self.dialog_width,
        }
    }
}
