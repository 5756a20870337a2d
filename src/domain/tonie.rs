//! Custom tonie entry models
//!
//! Mirrors the `tonies.custom.json` entry format used by the backend.

use serde::{Deserialize, Serialize};

/// A custom tonie entry as stored in tonies.custom.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TonieModel {
    /// Sequential custom tag identifier (auto-generated if missing)
    #[serde(default)]
    pub no: String,
    /// RFID tag identifier (e.g. E0:04:03:50:0E:F4:D8:EA)
    #[serde(default)]
    pub model: String,
    /// Custom audio identifier array
    #[serde(default)]
    pub audio_id: Vec<String>,
    /// Content hash verification array
    #[serde(default)]
    pub hash: Vec<String>,
    /// Primary title (currently unused in display)
    #[serde(default)]
    pub title: String,
    /// Series name displayed in the GUI
    #[serde(default)]
    pub series: Option<String>,
    /// Episode/description shown in the GUI
    #[serde(default)]
    pub episodes: Option<String>,
    /// Individual track titles
    #[serde(default)]
    pub tracks: Vec<String>,
    /// Release identifier
    #[serde(default)]
    pub release: String,
    /// Language code (e.g. de-de)
    #[serde(default)]
    pub language: Option<String>,
    /// Tag categorization
    #[serde(default)]
    pub category: Option<String>,
    /// Image URL (e.g. /custom_img/cover.png)
    #[serde(default)]
    pub pic: Option<String>,
}

impl TonieModel {
    /// Display label: series, falling back to title, falling back to model
    pub fn display_label(&self) -> &str {
        match self.series.as_deref() {
            Some(series) if !series.is_empty() => series,
            _ if !self.title.is_empty() => &self.title,
            _ => &self.model,
        }
    }
}

/// Request body for creating a new custom tonie
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TonieCreateRequest {
    /// RFID tag identifier (auto-assigned by the backend if not provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Audio ID from the TAF header
    pub audio_id: String,
    /// Content hash from the TAF header
    pub hash: String,
    /// Series name
    pub series: String,
    /// Episode description
    pub episodes: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tracks: Vec<String>,
    #[serde(default = "default_language")]
    pub language: String,
    /// Cover image filename
    #[serde(default)]
    pub pic: String,
}

fn default_language() -> String {
    "de-de".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_prefers_series() {
        let tonie = TonieModel {
            model: "E0:04:03:50".into(),
            title: "Title".into(),
            series: Some("Die drei ???".into()),
            ..Default::default()
        };
        assert_eq!(tonie.display_label(), "Die drei ???");
    }

    #[test]
    fn test_display_label_falls_back() {
        let tonie = TonieModel {
            model: "E0:04:03:50".into(),
            series: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(tonie.display_label(), "E0:04:03:50");
    }

    #[test]
    fn test_tonie_model_deserializes_sparse_json() {
        let json = r#"{"model": "E0:04", "audio_id": ["123"], "hash": ["abc"]}"#;
        let tonie: TonieModel = serde_json::from_str(json).expect("parse");
        assert_eq!(tonie.model, "E0:04");
        assert_eq!(tonie.audio_id, vec!["123"]);
        assert!(tonie.series.is_none());
    }
}
