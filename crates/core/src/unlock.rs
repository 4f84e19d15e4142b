//! Unlock engine - which categories are reachable right now.

use crate::catalog::Category;
use crate::progress::ProfileState;

/// A category is cleared once its completion count reaches its target.
pub fn is_cleared(state: &ProfileState, category: &Category) -> bool {
    state.completion_count(category.id) >= category.target
}

/// Number of categories, counted from the start of the catalog, that are
/// unlocked.
///
/// The first category is always unlocked; each cleared category unlocks
/// the one after it, and the walk stops at the first category that is not
/// cleared. The result lies in `1..=catalog.len()` for a non-empty catalog.
pub fn unlocked_prefix_length(catalog: &[Category], state: &ProfileState) -> usize {
    let mut unlocked = 1;
    for (i, category) in catalog.iter().enumerate().take(catalog.len().saturating_sub(1)) {
        if is_cleared(state, category) {
            unlocked = i + 2;
        } else {
            break;
        }
    }
    unlocked.min(catalog.len())
}

/// The categories a home screen may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleCategories<'a> {
    /// Unlocked prefix of the catalog
    pub unlocked: &'a [Category],

    /// The single next locked category, if any remain
    pub next: Option<&'a Category>,
}

/// Split the catalog into its unlocked prefix and at most one locked teaser.
pub fn visible_categories<'a>(catalog: &'a [Category], state: &ProfileState) -> VisibleCategories<'a> {
    let count = unlocked_prefix_length(catalog, state);
    VisibleCategories {
        unlocked: &catalog[..count],
        next: catalog.get(count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn with_counts(counts: &[(&str, u32)]) -> ProfileState {
        let mut state = ProfileState::new();
        for (id, count) in counts {
            state.progress_mut(id).completion_count = *count;
        }
        state
    }

    #[test]
    fn test_fresh_profile() {
        let state = ProfileState::new();
        let visible = visible_categories(CATALOG, &state);

        assert_eq!(visible.unlocked.len(), 1);
        assert_eq!(visible.unlocked[0].id, "culture");
        assert_eq!(visible.next.map(|c| c.id), Some("courtesy"));
    }

    #[test]
    fn test_cleared_chain() {
        let state = with_counts(&[("culture", 2), ("courtesy", 5), ("daily_ops", 1)]);
        assert_eq!(unlocked_prefix_length(CATALOG, &state), 3);

        let visible = visible_categories(CATALOG, &state);
        assert_eq!(visible.next.map(|c| c.id), Some("product_knowledge"));
    }

    #[test]
    fn test_gap_stops_walk() {
        // A later cleared category does not help if an earlier one is not.
        let state = with_counts(&[("culture", 1), ("courtesy", 2)]);
        assert_eq!(unlocked_prefix_length(CATALOG, &state), 1);
    }

    #[test]
    fn test_all_cleared() {
        let counts: Vec<(&str, u32)> = CATALOG.iter().map(|c| (c.id, c.target)).collect();
        let state = with_counts(&counts);
        let visible = visible_categories(CATALOG, &state);

        assert_eq!(visible.unlocked.len(), CATALOG.len());
        assert!(visible.next.is_none());
    }

    #[test]
    fn test_bounds_for_every_prefix() {
        let counts: Vec<(&str, u32)> = CATALOG.iter().map(|c| (c.id, c.target)).collect();
        let full = with_counts(&counts);
        let fresh = ProfileState::new();

        for len in 1..=CATALOG.len() {
            let catalog = &CATALOG[..len];
            for state in [&fresh, &full] {
                let n = unlocked_prefix_length(catalog, state);
                assert!(n >= 1 && n <= len, "prefix {} gave {}", len, n);
            }
            assert_eq!(unlocked_prefix_length(catalog, &full), len);
        }
    }

    #[test]
    fn test_cleared_implies_next_unlocked() {
        let state = with_counts(&[("culture", 2), ("courtesy", 2), ("daily_ops", 2), ("product_knowledge", 3)]);
        let n = unlocked_prefix_length(CATALOG, &state);
        for (i, category) in CATALOG.iter().enumerate().take(n) {
            if is_cleared(&state, category) && i + 1 < CATALOG.len() {
                assert!(i + 1 < n);
            }
        }
        assert_eq!(n, 4);
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(unlocked_prefix_length(&[], &ProfileState::new()), 0);
    }
}
