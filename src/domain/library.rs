//! Library browsing models
//!
//! DTOs for the paginated TAF file listing with link status.

use crate::domain::tonie::TonieModel;
use serde::{Deserialize, Serialize};

/// A TAF file combined with its link status against tonies.custom.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TafFileWithTonie {
    pub name: String,
    /// Path relative to the library root, used as the stable row key
    pub path: String,
    #[serde(default)]
    pub size: u64,
    /// Audio ID extracted from the TAF header, if parsed
    #[serde(default)]
    pub audio_id: Option<u64>,
    /// SHA1 hash extracted from the TAF header, if parsed
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub track_count: Option<u32>,
    /// The custom tonie this file is linked to, if any
    #[serde(default)]
    pub linked_tonie: Option<TonieModel>,
    #[serde(default)]
    pub is_linked: bool,
}

/// Paginated TAF library listing
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TafLibraryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub taf_files: Vec<TafFileWithTonie>,
    /// Total number of TAF files in the library (unfiltered)
    #[serde(default)]
    pub total_count: usize,
    #[serde(default)]
    pub linked_count: usize,
    #[serde(default)]
    pub orphaned_count: usize,
    /// Number of files matching the active filter, before pagination
    #[serde(default)]
    pub filtered_count: usize,
    /// 1-indexed page number
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_prev: bool,
    #[serde(default)]
    pub error: Option<String>,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    crate::constants::DEFAULT_PAGE_SIZE
}

impl TafLibraryResponse {
    /// Total number of pages for the active filter
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        self.filtered_count.div_ceil(self.page_size).max(1)
    }
}

/// Link status filter for the TAF listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkFilter {
    #[default]
    All,
    Linked,
    Orphaned,
}

impl LinkFilter {
    /// Query parameter value expected by the backend
    pub fn as_query_value(&self) -> &'static str {
        match self {
            LinkFilter::All => "all",
            LinkFilter::Linked => "linked",
            LinkFilter::Orphaned => "orphaned",
        }
    }

    /// Translation key for the filter label
    pub fn label_key(&self) -> &'static str {
        match self {
            LinkFilter::All => "library-filter-all",
            LinkFilter::Linked => "library-filter-linked",
            LinkFilter::Orphaned => "library-filter-orphaned",
        }
    }

    pub fn all() -> [LinkFilter; 3] {
        [LinkFilter::All, LinkFilter::Linked, LinkFilter::Orphaned]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taf_library_response_defaults() {
        let json = r#"{"success": true, "taf_files": []}"#;
        let resp: TafLibraryResponse = serde_json::from_str(json).expect("parse");
        assert!(resp.success);
        assert_eq!(resp.page, 1);
        assert_eq!(resp.page_size, crate::constants::DEFAULT_PAGE_SIZE);
        assert!(!resp.has_next);
    }

    #[test]
    fn test_total_pages() {
        let mut resp = TafLibraryResponse {
            filtered_count: 101,
            page_size: 50,
            ..Default::default()
        };
        assert_eq!(resp.total_pages(), 3);
        resp.filtered_count = 0;
        assert_eq!(resp.total_pages(), 1);
        resp.filtered_count = 100;
        assert_eq!(resp.total_pages(), 2);
    }

    #[test]
    fn test_link_filter_query_values() {
        assert_eq!(LinkFilter::All.as_query_value(), "all");
        assert_eq!(LinkFilter::Linked.as_query_value(), "linked");
        assert_eq!(LinkFilter::Orphaned.as_query_value(), "orphaned");
    }

    #[test]
    fn test_taf_file_parses_with_linked_tonie() {
        let json = r#"{
            "name": "Bibi.taf",
            "path": "Bibi.taf",
            "size": 1024,
            "audio_id": 1712000000,
            "hash": "abc123",
            "linked_tonie": {"model": "E0:04", "series": "Bibi Blocksberg"},
            "is_linked": true
        }"#;
        let file: TafFileWithTonie = serde_json::from_str(json).expect("parse");
        assert!(file.is_linked);
        assert_eq!(
            file.linked_tonie.as_ref().map(|t| t.display_label()),
            Some("Bibi Blocksberg")
        );
    }
}
