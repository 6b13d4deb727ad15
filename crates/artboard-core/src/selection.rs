//! Single-layer selection state.

use serde::{Deserialize, Serialize};

use crate::layer::LayerId;

/// Tracks the one layer currently targeted by editing actions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    selected: Option<LayerId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with `id`.
    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The selected layer id, if any.
    pub fn current(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.current() == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let selection = Selection::new();
        assert!(selection.is_empty());
        assert_eq!(selection.current(), None);
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut selection = Selection::new();
        selection.select("a");
        selection.select("b");

        assert_eq!(selection.current(), Some("b"));
        assert!(selection.is_selected("b"));
        assert!(!selection.is_selected("a"));
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.select("a");
        selection.clear();
        assert!(selection.is_empty());
    }
}
