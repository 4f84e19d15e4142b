//! Storage trait abstraction.

use async_trait::async_trait;
use booklet_core::ProfileState;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
///
/// Malformed persisted data is not an error: backends fall back to an
/// empty profile instead.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence for the single local profile.
///
/// The whole profile is one blob, read once per session and written back
/// after every mutation.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load the persisted profile, or an empty one if nothing usable is stored.
    async fn load(&self) -> Result<ProfileState>;

    /// Replace the persisted profile.
    async fn save(&mut self, state: &ProfileState) -> Result<()>;
}
