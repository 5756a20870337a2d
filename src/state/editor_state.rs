//! EditorState - Single-File Tag Editor
//!
//! Holds the file opened from the library, its parsed metadata, the
//! user-editable fields and the cover chosen for the new tag.

use crate::domain::metadata::{CoverImage, TafMetadataResponse};
use crate::domain::tonie::TonieCreateRequest;

/// State for the single-file editor flow
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Library-relative path of the opened file
    pub taf_path: Option<String>,
    pub taf_name: String,
    pub metadata: Option<TafMetadataResponse>,

    // Editable fields, prefilled from parsed metadata
    pub series: String,
    pub episode: String,
    pub language: String,

    pub covers: Vec<CoverImage>,
    pub selected_cover: Option<CoverImage>,
    /// Backend image path after a successful cover download
    pub downloaded_pic: Option<String>,

    pub parsing: bool,
    pub searching_covers: bool,
    pub downloading_cover: bool,
    pub creating: bool,
    /// Model identifier of the tag created in this session, if any
    pub created_model: Option<String>,
    pub last_error: Option<String>,
}

impl EditorState {
    /// Open a file, discarding any previous editing session
    pub fn open(&mut self, path: impl Into<String>, name: impl Into<String>) {
        *self = Self {
            taf_path: Some(path.into()),
            taf_name: name.into(),
            language: "de-de".to_string(),
            parsing: true,
            ..Default::default()
        };
    }

    /// Store parsed metadata and prefill empty editable fields from it
    pub fn apply_metadata(&mut self, metadata: TafMetadataResponse) {
        self.parsing = false;
        if self.series.is_empty() {
            if let Some(series) = &metadata.series {
                self.series = series.clone();
            }
        }
        if self.episode.is_empty() {
            if let Some(episode) = &metadata.episode {
                self.episode = episode.clone();
            }
        }
        self.covers = metadata.suggested_covers.clone();
        self.metadata = Some(metadata);
    }

    pub fn apply_covers(&mut self, covers: Vec<CoverImage>) {
        self.searching_covers = false;
        self.covers = covers;
    }

    pub fn select_cover(&mut self, cover: CoverImage) {
        self.selected_cover = Some(cover);
        // A new pick invalidates any previously downloaded image
        self.downloaded_pic = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.parsing = false;
        self.searching_covers = false;
        self.downloading_cover = false;
        self.creating = false;
        self.last_error = Some(message.into());
    }

    /// Search term for the cover search: user edits win over parsed metadata
    pub fn cover_search_term(&self) -> String {
        let mut term = self.series.trim().to_string();
        let episode = self.episode.trim();
        if !episode.is_empty() {
            if !term.is_empty() {
                term.push(' ');
            }
            term.push_str(episode);
        }
        if term.is_empty() {
            if let Some(parsed) = self.metadata.as_ref().and_then(|m| m.search_term.clone()) {
                term = parsed;
            }
        }
        term
    }

    /// Whether the header fields and required user fields allow creating a tag
    pub fn can_create(&self) -> bool {
        let header_ok = self
            .metadata
            .as_ref()
            .map(|m| m.audio_id.is_some() && m.hash.is_some())
            .unwrap_or(false);
        header_ok
            && !self.series.trim().is_empty()
            && !self.episode.trim().is_empty()
            && !self.creating
    }

    /// Build the create request; None while `can_create` is false
    pub fn build_create_request(&self) -> Option<TonieCreateRequest> {
        if !self.can_create() {
            return None;
        }
        let metadata = self.metadata.as_ref()?;
        Some(TonieCreateRequest {
            model: None,
            audio_id: metadata.audio_id?.to_string(),
            hash: metadata.hash.clone()?,
            series: self.series.trim().to_string(),
            episodes: self.episode.trim().to_string(),
            title: format!("{} - {}", self.series.trim(), self.episode.trim()),
            tracks: Vec::new(),
            language: if self.language.is_empty() {
                crate::constants::DEFAULT_LANGUAGE.to_string()
            } else {
                self.language.clone()
            },
            pic: self.downloaded_pic.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_metadata() -> TafMetadataResponse {
        TafMetadataResponse {
            audio_id: Some(1_712_000_000),
            hash: Some("abc123".into()),
            series: Some("Bibi Blocksberg".into()),
            episode: Some("Folge 12".into()),
            search_term: Some("Bibi Blocksberg Folge 12".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_resets_previous_session() {
        let mut state = EditorState::default();
        state.series = "Old".into();
        state.open("new.taf", "new.taf");
        assert!(state.series.is_empty());
        assert!(state.parsing);
        assert_eq!(state.taf_path.as_deref(), Some("new.taf"));
        assert_eq!(state.language, "de-de");
    }

    #[test]
    fn test_apply_metadata_prefills_empty_fields_only() {
        let mut state = EditorState::default();
        state.open("a.taf", "a.taf");
        state.series = "User Series".into();
        state.apply_metadata(parsed_metadata());
        assert_eq!(state.series, "User Series");
        assert_eq!(state.episode, "Folge 12");
    }

    #[test]
    fn test_can_create_requires_header_and_fields() {
        let mut state = EditorState::default();
        state.open("a.taf", "a.taf");
        assert!(!state.can_create());
        state.apply_metadata(parsed_metadata());
        assert!(state.can_create());
        state.episode.clear();
        assert!(!state.can_create());
    }

    #[test]
    fn test_build_create_request() {
        let mut state = EditorState::default();
        state.open("a.taf", "a.taf");
        state.apply_metadata(parsed_metadata());
        state.downloaded_pic = Some("/custom_img/cover.png".into());
        let req = state.build_create_request().expect("request");
        assert_eq!(req.audio_id, "1712000000");
        assert_eq!(req.hash, "abc123");
        assert_eq!(req.pic, "/custom_img/cover.png");
        assert_eq!(req.language, "de-de");
    }

    #[test]
    fn test_cover_search_term_prefers_user_edits() {
        let mut state = EditorState::default();
        state.open("a.taf", "a.taf");
        state.apply_metadata(parsed_metadata());
        state.series = "Benjamin".into();
        state.episode = "Folge 3".into();
        assert_eq!(state.cover_search_term(), "Benjamin Folge 3");
        state.series.clear();
        state.episode.clear();
        assert_eq!(state.cover_search_term(), "Bibi Blocksberg Folge 12");
    }

    #[test]
    fn test_select_cover_invalidates_download() {
        let mut state = EditorState::default();
        state.downloaded_pic = Some("/custom_img/old.png".into());
        state.select_cover(CoverImage {
            url: "https://example.org/new.jpg".into(),
            ..Default::default()
        });
        assert!(state.downloaded_pic.is_none());
    }
}
