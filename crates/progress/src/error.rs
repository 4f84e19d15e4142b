//! Tracker errors.

use booklet_storage::StorageError;

/// Result alias for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors surfaced by [`ProgressTracker`](crate::ProgressTracker).
///
/// Completing a category that is not ready is not an error; see
/// [`CompletionOutcome`](booklet_core::CompletionOutcome).
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Category id is not in the catalog
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Category exists but is beyond the unlocked prefix
    #[error("Category is locked: {0}")]
    Locked(String),

    /// Question index outside the fixed question range
    #[error("Question {index} is out of range (expected 0..{max})")]
    QuestionOutOfRange {
        /// Requested zero-based index
        index: usize,
        /// Number of questions
        max: usize,
    },

    /// Persisting the profile failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
