//! Booklet core data models.
//!
//! This crate defines the training catalog, the per-category progress
//! records, and the pure rules that decide which categories are unlocked
//! and when a week of practice may be recorded.

#![warn(missing_docs)]

// Static content
mod catalog;

// Mutable progress state
mod progress;

// Rules over catalog + progress
mod week;
mod unlock;
mod completion;

// Time source
mod clock;

// Re-exports
pub use catalog::{Category, CATALOG, find_category, category_index};
pub use progress::{
    AnswerState, Answers, CategoryProgress, ProfileState, ParseAnswerError,
    QUESTIONS_PER_CATEGORY, heal_answers,
};
pub use week::{WeekKey, ParseWeekKeyError, week_key};
pub use unlock::{VisibleCategories, is_cleared, unlocked_prefix_length, visible_categories};
pub use completion::{
    CompletionState, CompletionOutcome, completion_state, set_answer, complete_week,
    complete_in_week,
};
pub use clock::Clock;

