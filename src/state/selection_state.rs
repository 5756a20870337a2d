//! SelectionState - Multi-Select Bookkeeping for the Library Table
//!
//! Selection is keyed by the library-relative TAF path so it survives
//! page changes and refreshes.

use crate::domain::library::TafFileWithTonie;
use std::collections::HashSet;

/// Selected TAF paths across pages
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: HashSet<String>,
}

impl SelectionState {
    /// Toggle selection of a single path
    pub fn toggle(&mut self, path: &str) {
        if !self.selected.remove(path) {
            self.selected.insert(path.to_string());
        }
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.selected.contains(path)
    }

    /// Add every orphaned file from the given rows
    pub fn select_all_orphaned<'a>(&mut self, files: impl IntoIterator<Item = &'a TafFileWithTonie>) {
        for file in files {
            if !file.is_linked {
                self.selected.insert(file.path.clone());
            }
        }
    }

    /// Drop selections that are no longer present in `valid_paths`
    pub fn retain_paths(&mut self, valid_paths: &HashSet<String>) {
        self.selected.retain(|p| valid_paths.contains(p));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected paths in a stable order
    pub fn sorted_paths(&self) -> Vec<String> {
        let mut paths: Vec<_> = self.selected.iter().cloned().collect();
        paths.sort();
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str, linked: bool) -> TafFileWithTonie {
        TafFileWithTonie {
            name: path.to_string(),
            path: path.to_string(),
            is_linked: linked,
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle() {
        let mut state = SelectionState::default();
        state.toggle("a.taf");
        assert!(state.is_selected("a.taf"));
        state.toggle("a.taf");
        assert!(!state.is_selected("a.taf"));
        assert!(state.is_empty());
    }

    #[test]
    fn test_select_all_orphaned_skips_linked() {
        let mut state = SelectionState::default();
        let files = [file("a.taf", false), file("b.taf", true), file("c.taf", false)];
        state.select_all_orphaned(files.iter());
        assert_eq!(state.len(), 2);
        assert!(!state.is_selected("b.taf"));
    }

    #[test]
    fn test_selection_survives_across_calls() {
        let mut state = SelectionState::default();
        state.toggle("page1.taf");
        let files = [file("page2.taf", false)];
        state.select_all_orphaned(files.iter());
        assert_eq!(state.sorted_paths(), vec!["page1.taf", "page2.taf"]);
    }

    #[test]
    fn test_retain_paths_drops_stale() {
        let mut state = SelectionState::default();
        state.toggle("gone.taf");
        state.toggle("kept.taf");
        let valid: HashSet<String> = ["kept.taf".to_string()].into_iter().collect();
        state.retain_paths(&valid);
        assert_eq!(state.sorted_paths(), vec!["kept.taf"]);
    }
}
