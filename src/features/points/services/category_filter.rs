use std::collections::BTreeSet;

use crate::features::categories::Category;
use crate::features::points::models::PointOfInterest;

/// Multi-select category filter. An empty set restricts nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilterSet {
    active: BTreeSet<Category>,
}

impl CategoryFilterSet {
    /// Flip membership of `category`. Returns whether it is now active.
    pub fn toggle(&mut self, category: Category) -> bool {
        if self.active.remove(&category) {
            false
        } else {
            self.active.insert(category);
            true
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active categories in catalogue order
    pub fn active(&self) -> impl Iterator<Item = Category> + '_ {
        self.active.iter().copied()
    }

    pub fn matches(&self, point: &PointOfInterest) -> bool {
        self.active.is_empty() || self.active.contains(&point.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_point;

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut filters = CategoryFilterSet::default();
        filters.toggle(Category::Food);
        let before = filters.clone();

        for category in Category::ALL {
            filters.toggle(category);
            filters.toggle(category);
            assert_eq!(filters, before);
        }
    }

    #[test]
    fn test_toggle_reports_new_state() {
        let mut filters = CategoryFilterSet::default();
        assert!(filters.toggle(Category::Bins));
        assert_eq!(filters.active().collect::<Vec<_>>(), vec![Category::Bins]);
        assert!(!filters.toggle(Category::Bins));
        assert!(filters.is_empty());
    }

    #[test]
    fn test_empty_set_matches_every_category() {
        let filters = CategoryFilterSet::default();
        for category in Category::ALL {
            assert!(filters.matches(&sample_point("Any", category)));
        }
    }

    #[test]
    fn test_non_empty_set_matches_members_only() {
        let mut filters = CategoryFilterSet::default();
        filters.toggle(Category::Toilets);

        assert!(filters.matches(&sample_point("Restroom", Category::Toilets)));
        assert!(!filters.matches(&sample_point("Bin", Category::Bins)));
    }

    #[test]
    fn test_active_is_reported_in_catalogue_order() {
        let mut filters = CategoryFilterSet::default();
        filters.toggle(Category::Streetlights);
        filters.toggle(Category::Bins);
        filters.toggle(Category::Food);

        let active: Vec<Category> = filters.active().collect();
        assert_eq!(active, vec![Category::Bins, Category::Food, Category::Streetlights]);

        filters.clear();
        assert!(filters.is_empty());
    }
}
