//! Model selection list with cyclic, disabled-aware navigation

use crate::config::models::{self, SUPPORTED_MODELS};

pub const BADGE_RECOMMENDED: &str = "★ Recommended";
pub const BADGE_CURRENT: &str = "✓ Current";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub badge: Option<&'static str>,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelector {
    items: Vec<SelectorItem>,
    selected: usize,
}

impl ModelSelector {
    pub fn new(items: Vec<SelectorItem>) -> Self {
        Self { items, selected: 0 }
    }

    /// Build from the catalog. The default model is highlighted unless
    /// `current_model` names a catalog entry, which then gets the "current"
    /// badge and the highlight.
    pub fn from_catalog(current_model: Option<&str>) -> Self {
        let items = SUPPORTED_MODELS
            .iter()
            .map(|m| {
                let badge = if Some(m.id) == current_model {
                    Some(BADGE_CURRENT)
                } else if m.default {
                    Some(BADGE_RECOMMENDED)
                } else {
                    None
                };
                SelectorItem {
                    id: m.id.to_string(),
                    name: m.name.to_string(),
                    description: m.description.to_string(),
                    badge,
                    disabled: false,
                }
            })
            .collect();

        let mut selector = Self::new(items);
        let index = current_model
            .and_then(models::index_of)
            .unwrap_or_else(models::default_index);
        selector.set_selected(index);
        selector
    }

    pub fn items(&self) -> &[SelectorItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Out-of-range indices are ignored
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn selected_item(&self) -> Option<&SelectorItem> {
        self.items.get(self.selected)
    }

    /// Move forward to the next enabled item, wrapping around. Stays put if
    /// every other item is disabled.
    pub fn next(&mut self) {
        let len = self.items.len();
        for step in 1..=len {
            let candidate = (self.selected + step) % len;
            if !self.items[candidate].disabled {
                self.selected = candidate;
                return;
            }
        }
    }

    /// Move backward to the previous enabled item, wrapping around
    pub fn prev(&mut self) {
        let len = self.items.len();
        for step in 1..=len {
            let candidate = (self.selected + len - step) % len;
            if !self.items[candidate].disabled {
                self.selected = candidate;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, disabled: bool) -> SelectorItem {
        SelectorItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            badge: None,
            disabled,
        }
    }

    #[test]
    fn test_from_catalog_highlights_default() {
        let selector = ModelSelector::from_catalog(None);
        assert_eq!(selector.items().len(), SUPPORTED_MODELS.len());
        assert_eq!(selector.selected(), models::default_index());
        assert_eq!(selector.items()[0].badge, Some(BADGE_RECOMMENDED));
    }

    #[test]
    fn test_from_catalog_highlights_current() {
        let selector = ModelSelector::from_catalog(Some("claude-opus-4-1-20250805"));
        assert_eq!(selector.selected(), 3);
        assert_eq!(selector.items()[3].badge, Some(BADGE_CURRENT));
        assert_eq!(selector.items()[0].badge, Some(BADGE_RECOMMENDED));
    }

    #[test]
    fn test_from_catalog_unknown_current_falls_back_to_default() {
        let selector = ModelSelector::from_catalog(Some("claude-2.1"));
        assert_eq!(selector.selected(), models::default_index());
        assert!(selector
            .items()
            .iter()
            .all(|i| i.badge != Some(BADGE_CURRENT)));
    }

    #[test]
    fn test_next_cycles_through_catalog() {
        let mut selector = ModelSelector::from_catalog(None);
        let start = selector.selected();
        for _ in 0..SUPPORTED_MODELS.len() {
            selector.next();
        }
        assert_eq!(selector.selected(), start);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut selector = ModelSelector::from_catalog(None);
        selector.set_selected(0);
        selector.prev();
        assert_eq!(selector.selected(), SUPPORTED_MODELS.len() - 1);
        selector.next();
        assert_eq!(selector.selected(), 0);
    }

    #[test]
    fn test_navigation_skips_disabled() {
        let mut selector = ModelSelector::new(vec![
            item("a", false),
            item("b", true),
            item("c", false),
            item("d", true),
        ]);
        selector.next();
        assert_eq!(selector.selected_item().map(|i| i.id.as_str()), Some("c"));
        selector.next();
        assert_eq!(selector.selected_item().map(|i| i.id.as_str()), Some("a"));
        selector.prev();
        assert_eq!(selector.selected_item().map(|i| i.id.as_str()), Some("c"));
    }

    #[test]
    fn test_navigation_with_single_enabled_item_stays() {
        let mut selector = ModelSelector::new(vec![item("a", true), item("b", false)]);
        selector.set_selected(1);
        selector.next();
        assert_eq!(selector.selected(), 1);
        selector.prev();
        assert_eq!(selector.selected(), 1);
    }

    #[test]
    fn test_empty_selector() {
        let mut selector = ModelSelector::new(vec![]);
        selector.next();
        selector.prev();
        selector.set_selected(2);
        assert_eq!(selector.selected(), 0);
        assert!(selector.selected_item().is_none());
    }
}
