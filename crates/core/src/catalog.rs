//! Catalog - the fixed, ordered training curriculum.

/// One unit of content in the curriculum.
///
/// Categories are ordered; a category's position in [`CATALOG`] is its
/// place in the unlock chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier, used as the key in persisted progress
    pub id: &'static str,

    /// Display title
    pub title: &'static str,

    /// Weekly completions required to unlock the next category
    pub target: u32,
}

impl Category {
    /// Create a category entry.
    pub const fn new(id: &'static str, title: &'static str, target: u32) -> Self {
        Self { id, title, target }
    }
}

/// The built-in curriculum.
pub const CATALOG: &[Category] = &[
    Category::new("culture", "Culture", 2),
    Category::new("courtesy", "Courtesy", 2),
    Category::new("daily_ops", "Daily Ops", 2),
    Category::new("product_knowledge", "Product Knowledge", 4),
    Category::new("ha", "哈", 4),
    Category::new("haha", "哈哈", 6),
    Category::new("hahaha", "哈哈哈", 6),
    Category::new("hahahaha", "哈哈哈哈", 8),
    Category::new("hahahahaha", "哈哈哈哈哈", 10),
    Category::new("hahahahahaha", "哈哈哈哈哈哈", 12),
];

/// Position of a category in the catalog.
pub fn category_index(catalog: &[Category], id: &str) -> Option<usize> {
    catalog.iter().position(|c| c.id == id)
}

/// Look up a category by id.
pub fn find_category<'a>(catalog: &'a [Category], id: &str) -> Option<&'a Category> {
    catalog.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_targets() {
        let targets: Vec<u32> = CATALOG.iter().map(|c| c.target).collect();
        assert_eq!(targets, vec![2, 2, 2, 4, 4, 6, 6, 8, 10, 12]);
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<&str> = CATALOG.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(category_index(CATALOG, "daily_ops"), Some(2));
        assert_eq!(find_category(CATALOG, "courtesy").map(|c| c.title), Some("Courtesy"));
        assert!(find_category(CATALOG, "missing").is_none());
    }
}
