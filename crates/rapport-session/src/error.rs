use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The identifiers kept in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    Doctor,
    Couple,
    Assessment,
}

impl SessionKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Doctor => "doctor id",
            Self::Couple => "couple id",
            Self::Assessment => "assessment id",
        }
    }

    /// Command that sets this key.
    #[must_use]
    pub const fn entry_command(self) -> &'static str {
        match self {
            Self::Doctor => "rapport doctor login --email <email>",
            Self::Couple => "rapport couple select <couple-id>",
            Self::Assessment => "rapport assessment create --title <title>",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    /// A workflow needs an identifier the session does not hold.
    #[error("no {key} in session. Run `{}` first.", .key.entry_command())]
    Missing { key: SessionKey },

    #[error("session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("home directory not found; set RAPPORT_SESSION__PATH")]
    NoHomeDir,
}

impl SessionError {
    #[must_use]
    pub const fn missing(key: SessionKey) -> Self {
        Self::Missing { key }
    }

    /// The missing key, if this is a precondition failure.
    #[must_use]
    pub const fn missing_key(&self) -> Option<SessionKey> {
        match self {
            Self::Missing { key } => Some(*key),
            _ => None,
        }
    }
}
