//! Durable storage for the application state
//!
//! One JSON document holds the whole [`AppState`]. It is read once at
//! startup and rewritten after every state change, so the last value always
//! survives into the next session.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::action::TodoAction;
use crate::state::AppState;
use crate::store::{Middleware, StoreWithMiddleware};

/// Failures talking to the state file.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("reading state file: {0}")]
    Read(#[source] io::Error),
    #[error("writing state file: {0}")]
    Write(#[source] io::Error),
    #[error("state file is not a valid saved state: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("serializing state: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Handle to the persisted state file.
#[derive(Clone, Debug)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Storage backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The application data directory.
    pub fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tudu")
    }

    /// Default state file location under the platform data directory.
    pub fn default_path() -> PathBuf {
        Self::default_dir().join("state.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved state. `Ok(None)` when no file exists yet.
    pub fn load(&self) -> Result<Option<AppState>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Read(e)),
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(StorageError::Parse)
    }

    /// Write the full state, replacing any previous value.
    pub fn save(&self, state: &AppState) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(StorageError::Write)?;
        }
        let json = serde_json::to_string(state).map_err(StorageError::Serialize)?;
        fs::write(&self.path, json).map_err(StorageError::Write)
    }

    /// Wire this storage to a store: load any saved state now, then keep the
    /// file in sync after every state-changing dispatch.
    ///
    /// A missing file leaves the store's initial state untouched. An
    /// unreadable or unparseable file is logged and ignored, so a corrupted
    /// entry never prevents startup; callers wanting the strict behavior can
    /// use [`load`](Self::load) directly and propagate the error.
    pub fn attach<M>(self, store: &mut StoreWithMiddleware<AppState, TodoAction, M>)
    where
        M: Middleware<TodoAction>,
    {
        match self.load() {
            Ok(Some(saved)) => {
                store.dispatch(TodoAction::StateReplace(saved));
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "ignoring saved state, starting from an empty list"
                );
            }
        }

        store.subscribe(move |state: &AppState| {
            if let Err(e) = self.save(state) {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to persist state"
                );
            }
        });
    }
}
