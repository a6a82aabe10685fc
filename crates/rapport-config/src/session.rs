//! Session file location.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Explicit path of the session file. Empty means `~/.rapport/session.json`.
    #[serde(default)]
    pub path: String,
}

impl SessionConfig {
    #[must_use]
    pub fn path_override(&self) -> Option<&str> {
        let path = self.path.trim();
        if path.is_empty() { None } else { Some(path) }
    }
}
