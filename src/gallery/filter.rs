//! Category filter
//!
//! Buttons are the catch-all followed by every distinct artwork category in
//! the order it first appears. Exactly one button is active at a time.

use std::collections::HashSet;

use crate::content::Artwork;

/// Label of the catch-all button
pub const ALL_CATEGORY: &str = "All";

/// Distinct categories, first-seen order, catch-all first
pub fn categories(artworks: &[Artwork]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = vec![ALL_CATEGORY.to_string()];

    for artwork in artworks {
        if seen.insert(artwork.category.as_str()) {
            result.push(artwork.category.clone());
        }
    }

    result
}

/// One rendered filter button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub label: String,
    pub active: bool,
}

/// Filter state for the gallery grid
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFilter {
    categories: Vec<String>,
    active: usize,
}

impl CategoryFilter {
    /// Build from the loaded artworks with the catch-all selected
    pub fn from_artworks(artworks: &[Artwork]) -> Self {
        Self {
            categories: categories(artworks),
            active: 0,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Label of the selected button
    pub fn active(&self) -> &str {
        &self.categories[self.active]
    }

    /// Buttons to render, in order, with the active flag set on one
    pub fn buttons(&self) -> Vec<FilterButton> {
        self.categories
            .iter()
            .enumerate()
            .map(|(i, label)| FilterButton {
                label: label.clone(),
                active: i == self.active,
            })
            .collect()
    }

    /// Mark a category exclusively active
    ///
    /// Unknown labels leave the selection unchanged and return `false`.
    pub fn select(&mut self, label: &str) -> bool {
        match self.categories.iter().position(|c| c == label) {
            Some(index) => {
                self.active = index;
                tracing::debug!(category = label, "Gallery filter selected");
                true
            }
            None => false,
        }
    }

    /// Whether an item with this category is shown
    pub fn is_visible(&self, category: &str) -> bool {
        self.active == 0 || self.categories[self.active] == category
    }

    /// Indices of the artworks that remain visible
    pub fn visible_indices(&self, artworks: &[Artwork]) -> Vec<usize> {
        artworks
            .iter()
            .enumerate()
            .filter(|(_, a)| self.is_visible(&a.category))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artworks(categories: &[&str]) -> Vec<Artwork> {
        categories
            .iter()
            .enumerate()
            .map(|(i, c)| Artwork::new(format!("Work {}", i), *c))
            .collect()
    }

    #[test]
    fn test_empty_gallery_has_only_catch_all() {
        let filter = CategoryFilter::from_artworks(&[]);
        assert_eq!(filter.categories(), &["All".to_string()]);
        assert_eq!(filter.buttons().len(), 1);
        assert!(filter.visible_indices(&[]).is_empty());
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let works = artworks(&["Painting", "Sculpture", "Painting", "Print", "Sculpture"]);
        assert_eq!(
            categories(&works),
            vec!["All", "Painting", "Sculpture", "Print"]
        );
    }

    #[test]
    fn test_select_is_exclusive_and_filters() {
        let works = artworks(&["Painting", "Sculpture", "Painting"]);
        let mut filter = CategoryFilter::from_artworks(&works);
        assert_eq!(filter.visible_indices(&works), vec![0, 1, 2]);

        assert!(filter.select("Painting"));
        let active: Vec<_> = filter.buttons().into_iter().filter(|b| b.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Painting");
        assert_eq!(filter.visible_indices(&works), vec![0, 2]);

        assert!(filter.select(ALL_CATEGORY));
        assert_eq!(filter.visible_indices(&works), vec![0, 1, 2]);
    }

    #[test]
    fn test_unknown_category_keeps_selection() {
        let works = artworks(&["Painting"]);
        let mut filter = CategoryFilter::from_artworks(&works);
        filter.select("Painting");
        assert!(!filter.select("Photography"));
        assert_eq!(filter.active(), "Painting");
    }
}
