//! Error types for the Mindlog core library.

use thiserror::Error;

/// All errors that can occur within the Mindlog core library.
#[derive(Debug, Error)]
pub enum MindlogError {
    /// A SQLite operation on the backing store failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The persistence backend is unreachable or is not a valid journal store.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A draft was rejected before any state change (e.g. missing mood).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// A mutation was attempted before the journal finished its initial load.
    #[error("Journal is not ready: call initialize() first")]
    NotReady,

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored entry list could not be deserialized from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`MindlogError`].
pub type Result<T> = std::result::Result<T, MindlogError>;

impl MindlogError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(e) => format!("Failed to save: {e}"),
            Self::StorageUnavailable(_) => "Could not open the journal storage".to_string(),
            Self::ValidationFailed(msg) => msg.clone(),
            Self::NotReady => "The journal is still loading, please try again".to_string(),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_ready_variant_exists() {
        let e = MindlogError::NotReady;
        assert!(e.to_string().contains("initialize"));
    }

    #[test]
    fn test_validation_user_message_passes_through() {
        let e = MindlogError::ValidationFailed("an entry needs a mood".to_string());
        assert_eq!(e.user_message(), "an entry needs a mood");
    }
}
