//! Progress Tracking
//!
//! Session service over the profile store: answer edits, weekly
//! completions, the unlock guard, and the home/category read models.

#![warn(missing_docs)]

pub mod error;
pub mod tracker;
pub mod screens;

pub use error::{TrackerError, Result};
pub use tracker::{ProgressTracker, CompletionReport};
pub use screens::{HomeScreen, HomeRow, CategoryScreen};
