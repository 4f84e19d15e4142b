//! Completion rule - per-category weekly completion state machine.

use chrono::NaiveDate;

use crate::progress::{AnswerState, CategoryProgress, ProfileState, QUESTIONS_PER_CATEGORY};
use crate::week::WeekKey;

/// Derived completion state of a category for the current week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionState {
    /// At least one question is not understood yet
    Answering,
    /// All questions understood and this week is not recorded yet
    Ready,
    /// All questions understood and this week is already recorded
    AlreadyCompletedThisWeek,
}

/// Result of a `complete_week` call. Only `Completed` mutates state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The week was recorded
    Completed {
        /// Completion count after the increment
        count: u32,
    },
    /// Some question is not understood
    NotReady,
    /// This week was already recorded
    AlreadyCompletedThisWeek,
}

/// Derive the completion state of `progress` in week `current`.
pub fn completion_state(progress: &CategoryProgress, current: &WeekKey) -> CompletionState {
    if !progress.all_understood() {
        CompletionState::Answering
    } else if progress.completed_in(current) {
        CompletionState::AlreadyCompletedThisWeek
    } else {
        CompletionState::Ready
    }
}

/// Overwrite one answer slot. Allowed in every state.
///
/// Returns `false`, leaving the profile untouched, when `index` is outside
/// the question range.
pub fn set_answer(state: &mut ProfileState, id: &str, index: usize, value: AnswerState) -> bool {
    if index >= QUESTIONS_PER_CATEGORY {
        return false;
    }
    state.progress_mut(id).answers[index] = value;
    true
}

/// Record a completion for the week containing `now`.
pub fn complete_week(state: &mut ProfileState, id: &str, now: NaiveDate) -> CompletionOutcome {
    complete_in_week(state, id, WeekKey::of(now))
}

/// Record a completion for `week`, if the category is ready.
///
/// Calls in any other state are no-ops, so repeated submissions within one
/// week increment the count at most once.
pub fn complete_in_week(state: &mut ProfileState, id: &str, week: WeekKey) -> CompletionOutcome {
    let Some(progress) = state.progress_by_id.get_mut(id) else {
        return CompletionOutcome::NotReady;
    };
    match completion_state(progress, &week) {
        CompletionState::Answering => CompletionOutcome::NotReady,
        CompletionState::AlreadyCompletedThisWeek => CompletionOutcome::AlreadyCompletedThisWeek,
        CompletionState::Ready => {
            progress.completion_count = progress.completion_count.saturating_add(1);
            progress.last_completed_week = Some(week);
            CompletionOutcome::Completed {
                count: progress.completion_count,
            }
        }
    }
}
