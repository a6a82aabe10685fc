use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::context::SessionState;
use crate::error::SessionError;

const SESSION_DIR_NAME: &str = ".rapport";
const SESSION_FILE_NAME: &str = "session.json";

/// JSON file holding the [`SessionState`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at an explicit path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `override_path`, or `~/.rapport/session.json`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoHomeDir`] if no override is given and the
    /// home directory cannot be determined.
    pub fn resolve(override_path: Option<&str>) -> Result<Self, SessionError> {
        if let Some(path) = override_path {
            return Ok(Self::at(path));
        }
        dirs::home_dir()
            .map(|home| Self::at(home.join(SESSION_DIR_NAME).join(SESSION_FILE_NAME)))
            .ok_or(SessionError::NoHomeDir)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the session. A missing or blank file is an empty session.
    ///
    /// # Errors
    ///
    /// [`SessionError::Io`] on read failure, [`SessionError::Corrupt`] on
    /// invalid JSON.
    pub fn load(&self) -> Result<SessionState, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SessionState::default());
            }
            Err(source) => {
                return Err(SessionError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if raw.trim().is_empty() {
            return Ok(SessionState::default());
        }

        serde_json::from_str(&raw).map_err(|source| SessionError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the session, creating the parent directory if needed.
    ///
    /// Only a directory created here is restricted to `0700`; an existing
    /// parent keeps its mode. The file itself is created `0600`.
    ///
    /// # Errors
    ///
    /// [`SessionError::Io`] if the directory or file cannot be written.
    pub fn save(&self, state: &SessionState) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|source| SessionError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(error) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700))
                {
                    tracing::warn!(%error, "failed to chmod 0700 {}", parent.display());
                }
            }
        }

        let body = serde_json::to_string_pretty(state).map_err(|source| SessionError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;
        file.write_all(body.as_bytes())
            .map_err(|source| self.io_error(source))?;

        // `mode` only applies on creation; tighten a file left by an older run.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|source| self.io_error(source))?;
        }

        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Delete the session file. Deleting a missing file is not an error.
    ///
    /// # Errors
    ///
    /// [`SessionError::Io`] if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
