//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    EnUS,
    /// German
    #[default]
    DeDE,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::DeDE => "Deutsch",
        }
    }

    /// Locale code as persisted in the config file
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en-US",
            Locale::DeDE => "de-DE",
        }
    }

    /// Parse a locale code, falling back to the default
    pub fn from_code(code: &str) -> Self {
        if code.starts_with("en") {
            Locale::EnUS
        } else {
            Locale::DeDE
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, de))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("TeddyCloud Custom Tag Helper", "TeddyCloud Custom Tag Helper"));

    // Navigation
    map.insert("nav-library", ("Library", "Bibliothek"));
    map.insert("nav-editor", ("Tag Editor", "Tag-Editor"));
    map.insert("nav-settings", ("Settings", "Einstellungen"));

    // Actions
    map.insert("action-refresh", ("Refresh", "Aktualisieren"));
    map.insert("action-save", ("Save", "Speichern"));
    map.insert("action-back", ("Back", "Zurück"));
    map.insert("action-next", ("Next", "Weiter"));
    map.insert("action-create", ("Create Tag", "Tag anlegen"));

    // Connection status
    map.insert("status-connected", ("Connected", "Verbunden"));
    map.insert("status-disconnected", ("Disconnected", "Getrennt"));
    map.insert("status-checking", ("Checking...", "Prüfe..."));
    map.insert("status-backend", ("Backend", "Backend"));
    map.insert("status-teddycloud", ("TeddyCloud", "TeddyCloud"));

    // Library page
    map.insert("library-title", ("TAF Library", "TAF-Bibliothek"));
    map.insert("library-search-placeholder", ("Filter by filename...", "Nach Dateiname filtern..."));
    map.insert("library-filter-all", ("All", "Alle"));
    map.insert("library-filter-linked", ("Linked", "Verknüpft"));
    map.insert("library-filter-orphaned", ("Orphaned", "Ohne Tag"));
    map.insert("library-linked", ("linked", "verknüpft"));
    map.insert("library-orphaned", ("orphaned", "ohne Tag"));
    map.insert("library-selected", ("selected", "ausgewählt"));
    map.insert("library-select-all-orphaned", ("Select all orphaned", "Alle ohne Tag auswählen"));
    map.insert("library-clear-selection", ("Clear selection", "Auswahl aufheben"));
    map.insert("library-batch-start", ("Batch Link...", "Stapel verknüpfen..."));

    // Table columns
    map.insert("col-select", ("", ""));
    map.insert("col-filename", ("Filename", "Dateiname"));
    map.insert("col-size", ("Size", "Größe"));
    map.insert("col-audio-id", ("Audio ID", "Audio-ID"));
    map.insert("col-tracks", ("Tracks", "Titel"));
    map.insert("col-status", ("Status", "Status"));
    map.insert("col-tonie", ("Linked Tag", "Verknüpfter Tag"));

    // Editor page
    map.insert("editor-title", ("Tag Editor", "Tag-Editor"));
    map.insert("editor-no-file", ("Select a TAF file from the library", "TAF-Datei aus der Bibliothek auswählen"));
    map.insert("editor-file-info", ("File Information", "Dateiinformationen"));
    map.insert("editor-metadata", ("Metadata", "Metadaten"));
    map.insert("editor-series", ("Series", "Serie"));
    map.insert("editor-episode", ("Episode", "Episode"));
    map.insert("editor-language", ("Language", "Sprache"));
    map.insert("editor-covers", ("Cover Suggestions", "Cover-Vorschläge"));
    map.insert("editor-search-covers", ("Search Covers", "Cover suchen"));
    map.insert("editor-no-covers", ("No covers found", "Keine Cover gefunden"));
    map.insert("editor-hash", ("Hash", "Hash"));
    map.insert("editor-audio-id", ("Audio ID", "Audio-ID"));
    map.insert("editor-size", ("Size", "Größe"));
    map.insert("editor-track-count", ("Tracks", "Titel"));
    map.insert("editor-created", ("Custom tag created", "Custom Tag angelegt"));

    // Batch wizard
    map.insert("batch-title", ("Batch Link Wizard", "Stapel-Assistent"));
    map.insert("batch-step-analyze", ("Analyze", "Analysieren"));
    map.insert("batch-step-review", ("Review", "Prüfen"));
    map.insert("batch-step-confirm", ("Confirm", "Bestätigen"));
    map.insert("batch-step-process", ("Process", "Verarbeiten"));
    map.insert("batch-analyzing", ("Analyzing files...", "Dateien werden analysiert..."));
    map.insert("batch-searching", ("Searching metadata...", "Metadaten werden gesucht..."));
    map.insert("batch-processing", ("Creating tags...", "Tags werden angelegt..."));
    map.insert("batch-status-auto", ("Auto-matched", "Automatisch zugeordnet"));
    map.insert("batch-status-review", ("Needs review", "Prüfung nötig"));
    map.insert("batch-status-unmatched", ("No match", "Kein Treffer"));
    map.insert("batch-match-exact", ("Exact", "Exakt"));
    map.insert("batch-match-fuzzy-series", ("Series match", "Serien-Treffer"));
    map.insert("batch-match-fuzzy-episode", ("Episode match", "Episoden-Treffer"));
    map.insert("batch-match-partial", ("Partial", "Teilweise"));
    map.insert("batch-source-catalog", ("Catalog", "Katalog"));
    map.insert("batch-source-manual", ("Manual", "Manuell"));
    map.insert("batch-skip", ("Skip", "Überspringen"));
    map.insert("batch-summary", ("Summary", "Zusammenfassung"));
    map.insert("batch-succeeded", ("succeeded", "erfolgreich"));
    map.insert("batch-failed", ("failed", "fehlgeschlagen"));
    map.insert("batch-done", ("Done", "Fertig"));

    // Settings page
    map.insert("settings-title", ("Settings", "Einstellungen"));
    map.insert("settings-backend", ("Backend Connection", "Backend-Verbindung"));
    map.insert("settings-url", ("Backend URL", "Backend-URL"));
    map.insert("settings-token", ("API Token", "API-Token"));
    map.insert("settings-test", ("Test Connection", "Verbindung testen"));
    map.insert("settings-language", ("Language", "Sprache"));

    // Log panel
    map.insert("log-title", ("Logs", "Protokoll"));
    map.insert("log-clear", ("Clear", "Leeren"));

    // Table
    map.insert("table-no-data", ("No data", "Keine Daten"));
    map.insert("table-loading", ("Loading...", "Lade..."));
    map.insert("table-items", ("files", "Dateien"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, de)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::DeDE => SharedString::from(de),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_lookup() {
        assert_eq!(t(Locale::EnUS, "nav-library"), "Library");
        assert_eq!(t(Locale::DeDE, "nav-library"), "Bibliothek");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "does-not-exist"), "does-not-exist");
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("en-US"), Locale::EnUS);
        assert_eq!(Locale::from_code("en-GB"), Locale::EnUS);
        assert_eq!(Locale::from_code("de-DE"), Locale::DeDE);
        assert_eq!(Locale::from_code("fr-FR"), Locale::DeDE);
        assert_eq!(Locale::EnUS.code(), "en-US");
    }
}
