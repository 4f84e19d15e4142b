//! Read models for the two views: the home list and the category screen.

use booklet_core::{
    completion_state, AnswerState, Answers, Category, CompletionState, WeekKey,
};
use booklet_storage::ProfileStore;
use chrono::NaiveDate;

use crate::error::Result;
use crate::tracker::ProgressTracker;

/// One row of the home list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeRow {
    /// The category
    pub category: &'static Category,
    /// Completions so far
    pub count: u32,
    /// Whether the row is the locked teaser
    pub locked: bool,
}

/// Everything the home view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeScreen {
    /// Today's date
    pub today: NaiveDate,
    /// Store name
    pub store_name: String,
    /// User name
    pub user_name: String,
    /// Unlocked rows followed by at most one locked row
    pub rows: Vec<HomeRow>,
}

/// Everything the category view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScreen {
    /// The category
    pub category: &'static Category,
    /// Completions so far
    pub count: u32,
    /// Current week
    pub week: WeekKey,
    /// Answer slots
    pub answers: Answers,
    /// Derived completion state for the current week
    pub state: CompletionState,
}

impl CategoryScreen {
    /// Whether the complete action should be enabled.
    pub fn can_complete(&self) -> bool {
        self.state != CompletionState::Answering
    }

    /// Whether this week is already recorded.
    pub fn completed_this_week(&self) -> bool {
        self.state == CompletionState::AlreadyCompletedThisWeek
    }

    /// Guidance shown under the complete action.
    pub fn hint(&self) -> &'static str {
        match self.state {
            CompletionState::Answering => {
                "Complete is locked until every answer is \"Got it\"."
            }
            CompletionState::AlreadyCompletedThisWeek => {
                "You already completed this category this week. Completing again won't increase progress."
            }
            CompletionState::Ready => "Ready to complete for this week.",
        }
    }

    /// Number of slots marked understood.
    pub fn understood(&self) -> usize {
        self.answers
            .iter()
            .filter(|a| **a == AnswerState::Understood)
            .count()
    }
}

impl<S: ProfileStore> ProgressTracker<S> {
    /// Build the home view.
    pub fn home_screen(&self) -> HomeScreen {
        let visible = self.visible_categories();
        let row = |category: &'static Category, locked| HomeRow {
            category,
            count: self.state().completion_count(category.id),
            locked,
        };

        let mut rows: Vec<HomeRow> = visible.unlocked.iter().map(|c| row(c, false)).collect();
        if let Some(next) = visible.next {
            rows.push(row(next, true));
        }

        HomeScreen {
            today: self.today(),
            store_name: self.state().store_name.clone(),
            user_name: self.state().user_name.clone(),
            rows,
        }
    }

    /// Build the category view. Fails like [`ProgressTracker::open_category`].
    pub fn category_screen(&self, id: &str) -> Result<CategoryScreen> {
        let category = self.open_category(id)?;
        let progress = self.category_progress(category.id);
        let week = self.current_week();
        let state = completion_state(&progress, &week);

        Ok(CategoryScreen {
            category,
            count: progress.completion_count,
            week,
            answers: progress.answers,
            state,
        })
    }
}
