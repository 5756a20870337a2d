//! Batch wizard models
//!
//! DTOs for the three batch endpoints (analyze, metadata search, process)
//! and the client-side selection the wizard builds between steps.

use crate::constants::{AUTO_MATCH_THRESHOLD, WEAK_MATCH_THRESHOLD};
use crate::domain::metadata::CoverImage;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a candidate was matched against the tonies catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    FuzzySeries,
    FuzzyEpisode,
    Partial,
}

impl MatchType {
    pub fn label_key(&self) -> &'static str {
        match self {
            MatchType::Exact => "batch-match-exact",
            MatchType::FuzzySeries => "batch-match-fuzzy-series",
            MatchType::FuzzyEpisode => "batch-match-fuzzy-episode",
            MatchType::Partial => "batch-match-partial",
        }
    }
}

/// A catalog entry proposed for a TAF file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Index into the server-side tonies catalog
    pub tonie_index: usize,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub episodes: Option<String>,
    #[serde(default)]
    pub pic: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    /// Similarity score in 0.0..=1.0
    pub confidence: f64,
    pub match_type: MatchType,
}

/// Review status of a single analyzed file, derived from its best match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// Best match at or above the auto-accept threshold
    AutoMatched,
    /// Candidates exist but none strong enough to auto-accept
    NeedsReview,
    /// No candidate at or above the weak threshold
    Unmatched,
}

impl MatchStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            MatchStatus::AutoMatched => "batch-status-auto",
            MatchStatus::NeedsReview => "batch-status-review",
            MatchStatus::Unmatched => "batch-status-unmatched",
        }
    }
}

/// Analysis result for one TAF file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TafMatchResult {
    pub taf_path: String,
    #[serde(default)]
    pub taf_name: String,
    #[serde(default)]
    pub audio_id: Option<u64>,
    #[serde(default)]
    pub hash: Option<String>,
    /// Series parsed from the filename
    #[serde(default)]
    pub parsed_series: Option<String>,
    /// Episode parsed from the filename
    #[serde(default)]
    pub parsed_episode: Option<String>,
    #[serde(default)]
    pub candidates: Vec<MatchCandidate>,
    #[serde(default)]
    pub best_match: Option<MatchCandidate>,
    /// Set by the server when the best match clears the auto threshold
    #[serde(default)]
    pub auto_selected: bool,
}

impl TafMatchResult {
    /// Classify against the auto and weak thresholds
    pub fn status(&self) -> MatchStatus {
        match &self.best_match {
            Some(best) if best.confidence >= AUTO_MATCH_THRESHOLD => MatchStatus::AutoMatched,
            Some(best) if best.confidence >= WEAK_MATCH_THRESHOLD => MatchStatus::NeedsReview,
            _ => MatchStatus::Unmatched,
        }
    }
}

/// Request body for the batch analyze endpoint
#[derive(Debug, Clone, Serialize)]
pub struct BatchAnalyzeRequest {
    pub taf_paths: Vec<String>,
}

/// Response of the batch analyze endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BatchAnalyzeResponse {
    #[serde(default)]
    pub results: Vec<TafMatchResult>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub auto_matched: usize,
    #[serde(default)]
    pub needs_review: usize,
    #[serde(default)]
    pub unmatched: usize,
}

/// One file to search external metadata for
#[derive(Debug, Clone, Serialize)]
pub struct MetadataSearchItem {
    pub taf_path: String,
    pub series: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<String>,
}

/// Request body for the batch metadata search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MetadataSearchRequest {
    pub items: Vec<MetadataSearchItem>,
}

/// Cover candidates found for one file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MetadataSearchResultItem {
    #[serde(default)]
    pub covers: Vec<CoverImage>,
    #[serde(default)]
    pub best_cover: Option<CoverImage>,
    #[serde(default)]
    pub confidence: f64,
}

/// Response of the batch metadata search endpoint, keyed by taf_path
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MetadataSearchResponse {
    #[serde(default)]
    pub results: HashMap<String, MetadataSearchResultItem>,
    #[serde(default)]
    pub searched: usize,
    #[serde(default)]
    pub found: usize,
}

/// Where the confirmed selection for a file came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    /// A catalog candidate from the analyze step
    ToniesJson,
    Musicbrainz,
    Itunes,
    /// User-entered series/episode
    Manual,
}

impl SelectionSource {
    /// Classify a cover by the provider marker in its source string.
    /// The server labels covers with strings like "MusicBrainz (Cover Art
    /// Archive)" or "iTunes Store", so this matches by substring.
    pub fn from_cover_source(source: &str) -> Self {
        let source = source.to_lowercase();
        if source.contains("musicbrainz") {
            SelectionSource::Musicbrainz
        } else if source.contains("itunes") {
            SelectionSource::Itunes
        } else {
            SelectionSource::Manual
        }
    }
}

/// Confirmed selection for one file, sent to the process endpoint.
/// `series`, `episodes` and `pic_url` are required strings server-side
/// and `language` rejects null, so absent values serialize as empty
/// strings and the language default rather than being skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSelection {
    pub taf_path: String,
    pub source: SelectionSource,
    /// Catalog index, required when source is tonies_json
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tonie_index: Option<usize>,
    #[serde(default)]
    pub series: String,
    /// Episode description; empty when nothing was parsed
    #[serde(default)]
    pub episodes: String,
    /// Cover URL to download; empty means no cover
    #[serde(default)]
    pub pic_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    crate::constants::DEFAULT_LANGUAGE.to_string()
}

impl BatchSelection {
    /// Selection for a catalog candidate from the analyze step
    pub fn from_catalog(result: &TafMatchResult, candidate: &MatchCandidate) -> Self {
        Self {
            taf_path: result.taf_path.clone(),
            source: SelectionSource::ToniesJson,
            tonie_index: Some(candidate.tonie_index),
            series: candidate.series.clone(),
            episodes: candidate.episodes.clone().unwrap_or_default(),
            pic_url: candidate.pic.clone().unwrap_or_default(),
            audio_id: result.audio_id.map(|id| id.to_string()),
            hash: result.hash.clone(),
            language: candidate.language.clone().unwrap_or_else(default_language),
        }
    }

    /// Selection for an external cover, using the parsed filename fields
    pub fn from_cover(result: &TafMatchResult, cover: &CoverImage) -> Self {
        Self {
            taf_path: result.taf_path.clone(),
            source: SelectionSource::from_cover_source(&cover.source),
            tonie_index: None,
            series: result.parsed_series.clone().unwrap_or_default(),
            episodes: result.parsed_episode.clone().unwrap_or_default(),
            pic_url: cover.url.clone(),
            audio_id: result.audio_id.map(|id| id.to_string()),
            hash: result.hash.clone(),
            language: default_language(),
        }
    }

    /// Selection from the parsed filename fields without any cover
    pub fn manual(result: &TafMatchResult) -> Self {
        Self {
            taf_path: result.taf_path.clone(),
            source: SelectionSource::Manual,
            tonie_index: None,
            series: result.parsed_series.clone().unwrap_or_default(),
            episodes: result.parsed_episode.clone().unwrap_or_default(),
            pic_url: String::new(),
            audio_id: result.audio_id.map(|id| id.to_string()),
            hash: result.hash.clone(),
            language: default_language(),
        }
    }
}

/// Request body for the batch process endpoint
#[derive(Debug, Clone, Serialize)]
pub struct BatchProcessRequest {
    pub selections: Vec<BatchSelection>,
}

/// Outcome of processing a single file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProcessedItemResult {
    pub taf_path: String,
    #[serde(default)]
    pub success: bool,
    /// Model number assigned to the created tonie entry
    #[serde(default)]
    pub model_number: Option<String>,
    #[serde(default)]
    pub cover_path: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of the batch process endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BatchProcessResponse {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub successful: usize,
    #[serde(default)]
    pub failed: usize,
    #[serde(default)]
    pub items: Vec<ProcessedItemResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_confidence(confidence: f64) -> TafMatchResult {
        TafMatchResult {
            taf_path: "a.taf".into(),
            best_match: Some(MatchCandidate {
                tonie_index: 0,
                series: "Series".into(),
                episodes: None,
                pic: None,
                model: None,
                language: None,
                confidence,
                match_type: MatchType::FuzzySeries,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(result_with_confidence(1.0).status(), MatchStatus::AutoMatched);
        assert_eq!(result_with_confidence(0.95).status(), MatchStatus::AutoMatched);
        assert_eq!(result_with_confidence(0.94).status(), MatchStatus::NeedsReview);
        assert_eq!(result_with_confidence(0.60).status(), MatchStatus::NeedsReview);
        assert_eq!(result_with_confidence(0.59).status(), MatchStatus::Unmatched);
    }

    #[test]
    fn test_status_without_best_match() {
        let result = TafMatchResult {
            taf_path: "a.taf".into(),
            ..Default::default()
        };
        assert_eq!(result.status(), MatchStatus::Unmatched);
    }

    #[test]
    fn test_match_type_snake_case() {
        let json = r#""fuzzy_series""#;
        let mt: MatchType = serde_json::from_str(json).expect("parse");
        assert_eq!(mt, MatchType::FuzzySeries);
    }

    #[test]
    fn test_selection_serializes_source() {
        let selection = BatchSelection {
            taf_path: "a.taf".into(),
            source: SelectionSource::ToniesJson,
            tonie_index: Some(3),
            series: "Series".into(),
            episodes: String::new(),
            pic_url: String::new(),
            audio_id: None,
            hash: None,
            language: "de-de".into(),
        };
        let json = serde_json::to_string(&selection).expect("serialize");
        assert!(json.contains(r#""source":"tonies_json""#));
        assert!(json.contains(r#""tonie_index":3"#));
    }

    // The process endpoint requires series/episodes/pic_url as plain
    // strings and rejects a null language, so absent values must come
    // out as "" / "de-de" rather than null or a missing key.
    #[test]
    fn test_selection_required_fields_never_null() {
        let selection = BatchSelection {
            taf_path: "a.taf".into(),
            source: SelectionSource::Manual,
            tonie_index: None,
            series: "Bibi Blocksberg".into(),
            episodes: String::new(),
            pic_url: String::new(),
            audio_id: Some("1712000000".into()),
            hash: Some("abc123".into()),
            language: default_language(),
        };
        let json: serde_json::Value =
            serde_json::to_value(&selection).expect("serialize");
        assert_eq!(json["episodes"], "");
        assert_eq!(json["pic_url"], "");
        assert_eq!(json["language"], "de-de");
        assert_eq!(json["audio_id"], "1712000000");
        assert!(json.get("tonie_index").is_none());
    }

    #[test]
    fn test_processed_item_uses_model_number() {
        let json = r#"{
            "taf_path": "a.taf",
            "success": true,
            "model_number": "900001",
            "cover_path": "/custom_img/cover_1712000000.png"
        }"#;
        let item: ProcessedItemResult = serde_json::from_str(json).expect("parse");
        assert_eq!(item.model_number.as_deref(), Some("900001"));
        assert!(item.error.is_none());
    }

    #[test]
    fn test_catalog_selection_fills_required_strings() {
        let mut result = result_with_confidence(0.97);
        result.audio_id = Some(1712000000);
        result.hash = Some("abc123".into());
        let candidate = result.best_match.clone().expect("candidate");
        let selection = BatchSelection::from_catalog(&result, &candidate);
        let json: serde_json::Value =
            serde_json::to_value(&selection).expect("serialize");
        assert_eq!(json["source"], "tonies_json");
        assert_eq!(json["episodes"], "");
        assert_eq!(json["pic_url"], "");
        assert_eq!(json["language"], "de-de");
        assert_eq!(json["audio_id"], "1712000000");
        assert_eq!(json["hash"], "abc123");
    }

    #[test]
    fn test_cover_selection_carries_url_and_source() {
        let mut result = result_with_confidence(0.7);
        result.parsed_series = Some("Bibi Blocksberg".into());
        let cover = CoverImage {
            url: "https://coverartarchive.org/release/x/front.jpg".into(),
            source: "MusicBrainz (Cover Art Archive)".into(),
            ..Default::default()
        };
        let selection = BatchSelection::from_cover(&result, &cover);
        assert_eq!(selection.source, SelectionSource::Musicbrainz);
        assert_eq!(selection.pic_url, cover.url);
        assert_eq!(selection.series, "Bibi Blocksberg");
        assert!(selection.tonie_index.is_none());
    }

    #[test]
    fn test_selection_source_from_cover_marker() {
        assert_eq!(
            SelectionSource::from_cover_source("MusicBrainz (Cover Art Archive)"),
            SelectionSource::Musicbrainz
        );
        assert_eq!(
            SelectionSource::from_cover_source("iTunes Store"),
            SelectionSource::Itunes
        );
        assert_eq!(
            SelectionSource::from_cover_source("https://example.com/album-page"),
            SelectionSource::Manual
        );
        assert_eq!(SelectionSource::from_cover_source(""), SelectionSource::Manual);
    }

    #[test]
    fn test_metadata_search_response_keyed_by_path() {
        let json = r#"{
            "results": {
                "a.taf": {"covers": [], "confidence": 0.0}
            },
            "searched": 1,
            "found": 0
        }"#;
        let resp: MetadataSearchResponse = serde_json::from_str(json).expect("parse");
        assert!(resp.results.contains_key("a.taf"));
        assert_eq!(resp.found, 0);
    }
}
