//! Progress tracking service.

use booklet_core::{
    category_index, complete_week, set_answer, unlocked_prefix_length, visible_categories,
    AnswerState, Category, CategoryProgress, Clock, CompletionOutcome, ProfileState,
    VisibleCategories, WeekKey, CATALOG, QUESTIONS_PER_CATEGORY,
};
use booklet_storage::ProfileStore;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{Result, TrackerError};

/// What a `complete_week` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionReport {
    /// Outcome of the completion rule
    pub outcome: CompletionOutcome,

    /// Category unlocked by this completion, if it cleared a target
    pub unlocked: Option<&'static Category>,
}

/// Owns the profile for one session.
///
/// The profile is loaded once in [`ProgressTracker::open`]. Every mutation
/// is applied to a staged copy, saved through the store, and only then
/// becomes the in-memory state, so a failed save leaves the session
/// matching what is on disk.
pub struct ProgressTracker<S: ProfileStore> {
    store: S,
    state: ProfileState,
    clock: Clock,
    catalog: &'static [Category],
}

impl<S: ProfileStore> ProgressTracker<S> {
    /// Load the profile from `store` and start a session.
    pub async fn open(store: S, clock: Clock) -> Result<Self> {
        let state = store.load().await?;
        debug!(
            "Opened profile with {} tracked categories",
            state.progress_by_id.len()
        );
        Ok(Self {
            store,
            state,
            clock,
            catalog: CATALOG,
        })
    }

    /// Use a different catalog.
    pub fn with_catalog(mut self, catalog: &'static [Category]) -> Self {
        self.catalog = catalog;
        self
    }

    /// Current in-memory profile.
    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// The catalog in use.
    pub fn catalog(&self) -> &'static [Category] {
        self.catalog
    }

    /// Today's date according to the session clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Week key for today.
    pub fn current_week(&self) -> WeekKey {
        WeekKey::of(self.today())
    }

    /// Unlocked categories plus the next locked one.
    pub fn visible_categories(&self) -> VisibleCategories<'static> {
        visible_categories(self.catalog, &self.state)
    }

    /// Progress for a category, defaults if never touched.
    pub fn category_progress(&self, id: &str) -> CategoryProgress {
        self.state.progress(id)
    }

    /// Resolve a category the user may enter.
    ///
    /// Fails for ids outside the catalog and for categories past the
    /// unlocked prefix.
    pub fn open_category(&self, id: &str) -> Result<&'static Category> {
        let catalog = self.catalog;
        let Some(index) = category_index(catalog, id) else {
            warn!("Rejected unknown category {}", id);
            return Err(TrackerError::UnknownCategory(id.to_string()));
        };
        if index >= unlocked_prefix_length(catalog, &self.state) {
            warn!("Rejected locked category {}", id);
            return Err(TrackerError::Locked(id.to_string()));
        }
        Ok(&catalog[index])
    }

    /// Overwrite one answer slot and persist.
    pub async fn set_answer(&mut self, id: &str, index: usize, value: AnswerState) -> Result<()> {
        let category = self.open_category(id)?;
        let mut staged = self.state.clone();
        if !set_answer(&mut staged, category.id, index, value) {
            return Err(TrackerError::QuestionOutOfRange {
                index,
                max: QUESTIONS_PER_CATEGORY,
            });
        }
        self.commit(staged).await?;
        debug!("Set {} Q{} to {}", category.id, index + 1, value);
        Ok(())
    }

    /// Record this week's completion for a category, using the session clock.
    pub async fn complete_week(&mut self, id: &str) -> Result<CompletionReport> {
        let today = self.today();
        self.complete_week_on(id, today).await
    }

    /// Record a completion for the week containing `now`.
    ///
    /// Not-ready and already-completed calls report their outcome without
    /// touching state or storage.
    pub async fn complete_week_on(&mut self, id: &str, now: NaiveDate) -> Result<CompletionReport> {
        let category = self.open_category(id)?;
        let before = unlocked_prefix_length(self.catalog, &self.state);

        let mut staged = self.state.clone();
        let outcome = complete_week(&mut staged, category.id, now);
        let CompletionOutcome::Completed { count } = outcome else {
            debug!("Completion of {} was a no-op: {:?}", category.id, outcome);
            return Ok(CompletionReport {
                outcome,
                unlocked: None,
            });
        };

        let after = unlocked_prefix_length(self.catalog, &staged);
        self.commit(staged).await?;

        info!(
            "Completed {} for {} ({}/{})",
            category.id,
            WeekKey::of(now),
            count,
            category.target
        );
        let unlocked = if after > before {
            let next = &self.catalog[after - 1];
            info!("Unlocked {}", next.id);
            Some(next)
        } else {
            None
        };
        Ok(CompletionReport { outcome, unlocked })
    }

    /// Change the store name and persist.
    pub async fn set_store_name(&mut self, name: impl Into<String>) -> Result<()> {
        let mut staged = self.state.clone();
        staged.store_name = name.into();
        self.commit(staged).await
    }

    /// Change the user name and persist.
    pub async fn set_user_name(&mut self, name: impl Into<String>) -> Result<()> {
        let mut staged = self.state.clone();
        staged.user_name = name.into();
        self.commit(staged).await
    }

    /// Save `staged`, then adopt it as the current state.
    async fn commit(&mut self, staged: ProfileState) -> Result<()> {
        self.store.save(&staged).await?;
        self.state = staged;
        Ok(())
    }
}
