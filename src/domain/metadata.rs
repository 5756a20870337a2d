//! TAF metadata and cover search models
//!
//! DTOs for header parsing, filename-derived metadata, cover image search
//! and cover download, plus the backend status probe.

use serde::{Deserialize, Serialize};

/// A cover image candidate from MusicBrainz or iTunes
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CoverImage {
    pub url: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub title: String,
    /// Relevance score in 0..=100
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Full metadata for a single TAF file: header fields plus
/// filename-derived series/episode and suggested covers
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TafMetadataResponse {
    #[serde(default)]
    pub audio_id: Option<u64>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub track_count: Option<u32>,
    #[serde(default)]
    pub track_seconds: Vec<u32>,
    /// Series parsed from the filename
    #[serde(default)]
    pub series: Option<String>,
    /// Episode parsed from the filename
    #[serde(default)]
    pub episode: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub suggested_covers: Vec<CoverImage>,
    /// Confidence of the best suggested cover in 0..=100, 0.0 when none
    #[serde(default)]
    pub cover_confidence: f64,
}

/// Request body for the header parse endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ParseTafRequest {
    pub path: String,
}

/// TAF header fields as parsed server-side
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TafHeader {
    #[serde(default)]
    pub audio_id: u64,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub size: u64,
    /// Track count; the server sends this as `tracks`
    #[serde(default, rename = "tracks")]
    pub track_count: u32,
    #[serde(default)]
    pub filename: String,
}

/// Response of the header parse endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParseTafResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub metadata: Option<TafHeader>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body for the cover search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CoverSearchRequest {
    pub search_term: String,
    pub limit: usize,
}

/// Response of the cover search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoverSearchResponse {
    #[serde(default)]
    pub covers: Vec<CoverImage>,
}

/// Request body for downloading a cover into the backend image store
#[derive(Debug, Clone, Serialize)]
pub struct CoverDownloadRequest {
    pub image_url: String,
    /// Target filename without extension
    pub filename: String,
}

/// Response of the cover download endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoverDownloadResponse {
    #[serde(default)]
    pub success: bool,
    /// Stored filename (e.g. cover_1712000000.png)
    #[serde(default)]
    pub filename: Option<String>,
    /// Image path usable as a tonie pic value (e.g. /custom_img/...)
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Backend status probe response
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub teddycloud_connected: bool,
    #[serde(default)]
    pub library_accessible: bool,
    #[serde(default)]
    pub config_readable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_response_defaults() {
        let json = r#"{"series": "Die drei ???", "episode": "Folge 1"}"#;
        let resp: TafMetadataResponse = serde_json::from_str(json).expect("parse");
        assert_eq!(resp.series.as_deref(), Some("Die drei ???"));
        assert!(resp.suggested_covers.is_empty());
        assert_eq!(resp.cover_confidence, 0.0);
    }

    #[test]
    fn test_cover_image_parse() {
        let json = r#"{
            "url": "https://coverartarchive.org/release/x/front.jpg",
            "title": "Folge 1",
            "score": 85.0,
            "source": "MusicBrainz (Cover Art Archive)"
        }"#;
        let cover: CoverImage = serde_json::from_str(json).expect("parse");
        assert_eq!(cover.source, "MusicBrainz (Cover Art Archive)");
        assert_eq!(cover.score, 85.0);
        assert!(cover.thumbnail.is_none());
    }

    #[test]
    fn test_taf_header_reads_tracks_field() {
        let json = r#"{
            "audio_id": 1712000000,
            "hash": "abc123",
            "size": 40960000,
            "tracks": 7,
            "confidence": 100,
            "filename": "Bibi_Blocksberg.taf",
            "has_cover": false
        }"#;
        let header: TafHeader = serde_json::from_str(json).expect("parse");
        assert_eq!(header.track_count, 7);
        assert_eq!(header.audio_id, 1712000000);
    }

    #[test]
    fn test_parse_taf_response_failure_shape() {
        let json = r#"{"success": false, "error": "not a taf file"}"#;
        let resp: ParseTafResponse = serde_json::from_str(json).expect("parse");
        assert!(!resp.success);
        assert!(resp.metadata.is_none());
        assert_eq!(resp.error.as_deref(), Some("not a taf file"));
    }
}
