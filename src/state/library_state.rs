//! LibraryState - Paginated TAF Library Listing

use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::domain::library::{LinkFilter, TafFileWithTonie, TafLibraryResponse};
use crate::domain::metadata::TafHeader;
use crate::helpers::string::matches_search;

/// State for the paginated library view
///
/// The backend paginates and filters by link status; the search query is a
/// client-side filter over the rows of the loaded page.
#[derive(Debug, Clone)]
pub struct LibraryState {
    /// Requested 1-indexed page
    pub page: usize,
    pub page_size: usize,
    pub filter: LinkFilter,
    pub search_query: String,
    pub loading: bool,
    /// Last response from the backend, if any
    pub response: Option<TafLibraryResponse>,
    pub last_error: Option<String>,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filter: LinkFilter::All,
            search_query: String::new(),
            loading: false,
            response: None,
            last_error: None,
        }
    }
}

impl LibraryState {
    /// Change the link filter; resets to the first page
    pub fn set_filter(&mut self, filter: LinkFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.page = 1;
        }
    }

    /// Change the page size; resets to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return;
        }
        if self.page_size != page_size {
            self.page_size = page_size;
            self.page = 1;
        }
    }

    /// Update the search query; resets to the first page
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.search_query != query {
            self.search_query = query;
            self.page = 1;
        }
    }

    /// Move to the next page if the loaded response says one exists
    pub fn next_page(&mut self) -> bool {
        let has_next = self.response.as_ref().map(|r| r.has_next).unwrap_or(false);
        if has_next {
            self.page += 1;
        }
        has_next
    }

    /// Move to the previous page if not already on the first
    pub fn prev_page(&mut self) -> bool {
        let has_prev = self.response.as_ref().map(|r| r.has_prev).unwrap_or(false);
        if has_prev && self.page > 1 {
            self.page -= 1;
            return true;
        }
        false
    }

    /// Store a loaded page, syncing the cursor to what the backend returned
    pub fn apply_response(&mut self, response: TafLibraryResponse) {
        self.loading = false;
        if response.success {
            self.page = response.page;
            self.page_size = response.page_size;
            self.last_error = None;
        } else {
            self.last_error = response.error.clone();
        }
        self.response = Some(response);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.last_error = Some(message.into());
    }

    /// Fill header fields into the matching row of the loaded page
    pub fn apply_header(&mut self, taf_path: &str, header: &TafHeader) -> bool {
        let Some(response) = &mut self.response else {
            return false;
        };
        let Some(file) = response.taf_files.iter_mut().find(|f| f.path == taf_path) else {
            return false;
        };
        file.audio_id = Some(header.audio_id);
        file.hash = Some(header.hash.clone());
        file.track_count = Some(header.track_count);
        true
    }

    /// Rows of the loaded page that match the search query
    pub fn visible_files(&self) -> Vec<&TafFileWithTonie> {
        let Some(response) = &self.response else {
            return Vec::new();
        };
        response
            .taf_files
            .iter()
            .filter(|f| matches_search(&f.name, &self.search_query))
            .collect()
    }

    /// Orphaned rows of the loaded page that match the search query
    pub fn visible_orphaned(&self) -> Vec<&TafFileWithTonie> {
        self.visible_files()
            .into_iter()
            .filter(|f| !f.is_linked)
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.response.as_ref().map(|r| r.total_pages()).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_response(page: usize, has_next: bool, has_prev: bool) -> TafLibraryResponse {
        TafLibraryResponse {
            success: true,
            page,
            page_size: DEFAULT_PAGE_SIZE,
            has_next,
            has_prev,
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = LibraryState::default();
        state.page = 3;
        state.set_filter(LinkFilter::Orphaned);
        assert_eq!(state.page, 1);
        // Setting the same filter again keeps the cursor
        state.page = 2;
        state.set_filter(LinkFilter::Orphaned);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = LibraryState::default();
        state.page = 4;
        state.set_page_size(100);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 100);
    }

    #[test]
    fn test_invalid_page_size_rejected() {
        let mut state = LibraryState::default();
        state.set_page_size(7);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut state = LibraryState::default();
        state.page = 2;
        state.set_search_query("bibi");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_next_page_requires_has_next() {
        let mut state = LibraryState::default();
        assert!(!state.next_page());
        state.apply_response(page_response(1, true, false));
        assert!(state.next_page());
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_prev_page_stops_at_first() {
        let mut state = LibraryState::default();
        state.apply_response(page_response(1, true, false));
        assert!(!state.prev_page());
        assert_eq!(state.page, 1);
        state.apply_response(page_response(2, false, true));
        assert!(state.prev_page());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_failed_response_keeps_error() {
        let mut state = LibraryState::default();
        state.apply_response(TafLibraryResponse {
            success: false,
            error: Some("library root missing".into()),
            ..Default::default()
        });
        assert_eq!(state.last_error.as_deref(), Some("library root missing"));
    }

    #[test]
    fn test_apply_header_updates_row() {
        let mut state = LibraryState::default();
        let mut response = page_response(1, false, false);
        response.taf_files = vec![TafFileWithTonie {
            name: "a.taf".into(),
            path: "a.taf".into(),
            ..Default::default()
        }];
        state.apply_response(response);
        let header = TafHeader {
            audio_id: 1_712_000_000,
            hash: "abc".into(),
            track_count: 9,
            ..Default::default()
        };
        assert!(state.apply_header("a.taf", &header));
        assert!(!state.apply_header("missing.taf", &header));
        let row = &state.response.as_ref().map(|r| r.taf_files[0].clone());
        assert_eq!(row.as_ref().and_then(|f| f.audio_id), Some(1_712_000_000));
    }

    #[test]
    fn test_visible_files_applies_search() {
        let mut state = LibraryState::default();
        let mut response = page_response(1, false, false);
        response.taf_files = vec![
            TafFileWithTonie {
                name: "Bibi_und_Tina.taf".into(),
                path: "a.taf".into(),
                ..Default::default()
            },
            TafFileWithTonie {
                name: "Benjamin.taf".into(),
                path: "b.taf".into(),
                is_linked: true,
                ..Default::default()
            },
        ];
        state.apply_response(response);
        state.search_query = "bibi".into();
        assert_eq!(state.visible_files().len(), 1);
        state.search_query.clear();
        assert_eq!(state.visible_files().len(), 2);
        assert_eq!(state.visible_orphaned().len(), 1);
    }
}
