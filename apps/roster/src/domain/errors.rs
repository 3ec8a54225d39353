use std::path::PathBuf;
use thiserror::Error;

/// Message shown for any failure that is not a known application error
pub const GENERIC_FAILURE_MESSAGE: &str = "Could not complete the operation.";

/// Errors raised by a key-value store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt data under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store file {path:?} is not a valid JSON object: {source}")]
    CorruptFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Creates a decode failure for the value stored under `key`
    pub fn corrupt(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            key: key.into(),
            source,
        }
    }

    /// Creates a decode failure for the whole backing file at `path`
    pub fn corrupt_file(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::CorruptFile {
            path: path.into(),
            source,
        }
    }
}

/// Errors returned by the group and player repositories
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("A group with this name already exists")]
    DuplicateGroup,

    #[error("This person is already on this team")]
    DuplicatePlayer,

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Unknown team: {0}")]
    InvalidTeam(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl RosterError {
    /// True for errors whose message is meant for the person using the app.
    ///
    /// Storage failures are not: callers should show
    /// [`GENERIC_FAILURE_MESSAGE`] and let the user retry.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, RosterError::Storage(_))
    }

    /// Returns the message a caller should display for this error
    ///
    /// # Example
    /// ```
    /// use teams_roster::domain::errors::{RosterError, StoreError, GENERIC_FAILURE_MESSAGE};
    ///
    /// assert_eq!(
    ///     RosterError::DuplicateGroup.user_message(),
    ///     "A group with this name already exists"
    /// );
    /// let storage = RosterError::from(StoreError::Unavailable("locked".to_string()));
    /// assert_eq!(storage.user_message(), GENERIC_FAILURE_MESSAGE);
    /// ```
    pub fn user_message(&self) -> String {
        if self.is_user_facing() {
            self.to_string()
        } else {
            GENERIC_FAILURE_MESSAGE.to_string()
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
