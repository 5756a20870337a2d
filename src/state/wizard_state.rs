//! WizardState - Four-Step Batch Link Wizard
//!
//! Analyze -> Review -> Confirm -> Process. The wizard owns the analysis
//! results, the per-file selections built during review, and the final
//! processing report.

use crate::constants::{MAX_BATCH_FILES, MAX_METADATA_SEARCH_ITEMS};
use crate::domain::batch::{
    BatchAnalyzeResponse, BatchProcessResponse, BatchSelection, MatchStatus, MetadataSearchItem,
    MetadataSearchResponse, TafMatchResult,
};
use std::collections::{HashMap, HashSet};

/// Wizard steps in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Analyze,
    Review,
    Confirm,
    Process,
}

impl WizardStep {
    pub fn label_key(&self) -> &'static str {
        match self {
            WizardStep::Analyze => "batch-step-analyze",
            WizardStep::Review => "batch-step-review",
            WizardStep::Confirm => "batch-step-confirm",
            WizardStep::Process => "batch-step-process",
        }
    }

    pub fn all() -> [WizardStep; 4] {
        [
            WizardStep::Analyze,
            WizardStep::Review,
            WizardStep::Confirm,
            WizardStep::Process,
        ]
    }

    /// 0-based position for the step indicator
    pub fn index(&self) -> usize {
        match self {
            WizardStep::Analyze => 0,
            WizardStep::Review => 1,
            WizardStep::Confirm => 2,
            WizardStep::Process => 3,
        }
    }
}

/// State of the batch wizard
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub open: bool,
    pub step: WizardStep,
    /// Paths accepted into this run, in submission order
    pub paths: Vec<String>,
    pub analyzing: bool,
    pub searching_metadata: bool,
    pub processing: bool,
    pub analysis: Option<BatchAnalyzeResponse>,
    pub metadata: Option<MetadataSearchResponse>,
    /// Per-file selections keyed by taf_path
    selections: HashMap<String, BatchSelection>,
    /// Files the user chose to leave out of processing
    skipped: HashSet<String>,
    pub report: Option<BatchProcessResponse>,
    pub last_error: Option<String>,
}

impl WizardState {
    /// Start a new run with the given paths, capped at the batch limit.
    /// Returns the number of paths dropped by the cap.
    pub fn start(&mut self, mut paths: Vec<String>) -> usize {
        let dropped = paths.len().saturating_sub(MAX_BATCH_FILES);
        paths.truncate(MAX_BATCH_FILES);
        *self = Self {
            open: true,
            step: WizardStep::Analyze,
            analyzing: true,
            paths,
            ..Default::default()
        };
        dropped
    }

    /// Store analysis results and move to review. Auto-matched files get a
    /// catalog selection prefilled from their best match.
    pub fn apply_analysis(&mut self, response: BatchAnalyzeResponse) {
        self.analyzing = false;
        for result in &response.results {
            if result.status() == MatchStatus::AutoMatched {
                if let Some(selection) = Self::selection_from_best_match(result) {
                    self.selections.insert(result.taf_path.clone(), selection);
                }
            }
        }
        self.analysis = Some(response);
        self.step = WizardStep::Review;
    }

    fn selection_from_best_match(result: &TafMatchResult) -> Option<BatchSelection> {
        let best = result.best_match.as_ref()?;
        Some(BatchSelection::from_catalog(result, best))
    }

    /// Accept a candidate for a file during review
    pub fn select(&mut self, selection: BatchSelection) {
        self.skipped.remove(&selection.taf_path);
        self.selections.insert(selection.taf_path.clone(), selection);
    }

    /// Leave a file out of processing
    pub fn skip(&mut self, taf_path: &str) {
        self.selections.remove(taf_path);
        self.skipped.insert(taf_path.to_string());
    }

    pub fn is_skipped(&self, taf_path: &str) -> bool {
        self.skipped.contains(taf_path)
    }

    pub fn selection_for(&self, taf_path: &str) -> Option<&BatchSelection> {
        self.selections.get(taf_path)
    }

    /// Store external metadata search results for review
    pub fn apply_metadata(&mut self, response: MetadataSearchResponse) {
        self.searching_metadata = false;
        self.metadata = Some(response);
    }

    /// Files without a strong catalog match that have a parsed series to
    /// search externally, capped at the search limit
    pub fn metadata_search_items(&self) -> Vec<MetadataSearchItem> {
        let Some(analysis) = &self.analysis else {
            return Vec::new();
        };
        analysis
            .results
            .iter()
            .filter(|r| r.status() != MatchStatus::AutoMatched)
            .filter_map(|r| {
                let series = r.parsed_series.clone()?;
                Some(MetadataSearchItem {
                    taf_path: r.taf_path.clone(),
                    series,
                    episode: r.parsed_episode.clone(),
                })
            })
            .take(MAX_METADATA_SEARCH_ITEMS)
            .collect()
    }

    /// Review is complete when every analyzed file is selected or skipped
    pub fn review_complete(&self) -> bool {
        let Some(analysis) = &self.analysis else {
            return false;
        };
        analysis
            .results
            .iter()
            .all(|r| self.selections.contains_key(&r.taf_path) || self.skipped.contains(&r.taf_path))
    }

    /// Move to the confirm step; rejected while review is incomplete
    pub fn advance_to_confirm(&mut self) -> bool {
        if self.step == WizardStep::Review && self.review_complete() && !self.selections.is_empty() {
            self.step = WizardStep::Confirm;
            return true;
        }
        false
    }

    /// Return to review from confirm
    pub fn back_to_review(&mut self) {
        if self.step == WizardStep::Confirm {
            self.step = WizardStep::Review;
        }
    }

    /// Selections that will be processed, in submission order
    pub fn confirmed_selections(&self) -> Vec<BatchSelection> {
        self.paths
            .iter()
            .filter_map(|p| self.selections.get(p).cloned())
            .collect()
    }

    /// Move to the process step
    pub fn begin_processing(&mut self) -> bool {
        if self.step == WizardStep::Confirm && !self.selections.is_empty() {
            self.step = WizardStep::Process;
            self.processing = true;
            return true;
        }
        false
    }

    pub fn apply_report(&mut self, report: BatchProcessResponse) {
        self.processing = false;
        self.report = Some(report);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.analyzing = false;
        self.searching_metadata = false;
        self.processing = false;
        self.last_error = Some(message.into());
    }

    /// Close the wizard and discard all run state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::batch::{MatchCandidate, MatchType};

    fn candidate(confidence: f64) -> MatchCandidate {
        MatchCandidate {
            tonie_index: 7,
            series: "Bibi Blocksberg".into(),
            episodes: Some("Folge 12".into()),
            pic: None,
            model: None,
            language: Some("de-de".into()),
            confidence,
            match_type: MatchType::Exact,
        }
    }

    fn result(path: &str, confidence: Option<f64>) -> TafMatchResult {
        TafMatchResult {
            taf_path: path.to_string(),
            taf_name: path.to_string(),
            parsed_series: Some("Bibi Blocksberg".into()),
            best_match: confidence.map(candidate),
            ..Default::default()
        }
    }

    fn analysis(results: Vec<TafMatchResult>) -> BatchAnalyzeResponse {
        BatchAnalyzeResponse {
            total: results.len(),
            results,
            ..Default::default()
        }
    }

    #[test]
    fn test_start_caps_paths() {
        let mut state = WizardState::default();
        let paths: Vec<String> = (0..150).map(|i| format!("{i}.taf")).collect();
        let dropped = state.start(paths);
        assert_eq!(dropped, 50);
        assert_eq!(state.paths.len(), MAX_BATCH_FILES);
        assert!(state.open);
        assert!(state.analyzing);
        assert_eq!(state.step, WizardStep::Analyze);
    }

    #[test]
    fn test_apply_analysis_prefills_auto_matches() {
        let mut state = WizardState::default();
        state.start(vec!["auto.taf".into(), "weak.taf".into(), "none.taf".into()]);
        state.apply_analysis(analysis(vec![
            result("auto.taf", Some(0.97)),
            result("weak.taf", Some(0.7)),
            result("none.taf", None),
        ]));
        assert_eq!(state.step, WizardStep::Review);
        assert!(state.selection_for("auto.taf").is_some());
        assert!(state.selection_for("weak.taf").is_none());
        assert!(state.selection_for("none.taf").is_none());
    }

    #[test]
    fn test_review_gating() {
        let mut state = WizardState::default();
        state.start(vec!["auto.taf".into(), "weak.taf".into()]);
        state.apply_analysis(analysis(vec![
            result("auto.taf", Some(0.97)),
            result("weak.taf", Some(0.7)),
        ]));
        assert!(!state.advance_to_confirm());
        state.skip("weak.taf");
        assert!(state.review_complete());
        assert!(state.advance_to_confirm());
        assert_eq!(state.step, WizardStep::Confirm);
    }

    #[test]
    fn test_select_unskips() {
        let mut state = WizardState::default();
        state.start(vec!["a.taf".into()]);
        state.apply_analysis(analysis(vec![result("a.taf", Some(0.7))]));
        state.skip("a.taf");
        state.select(BatchSelection::manual(&result("a.taf", None)));
        assert!(!state.is_skipped("a.taf"));
        assert!(state.selection_for("a.taf").is_some());
    }

    #[test]
    fn test_confirmed_selections_follow_submission_order() {
        let mut state = WizardState::default();
        state.start(vec!["b.taf".into(), "a.taf".into()]);
        state.apply_analysis(analysis(vec![
            result("a.taf", Some(0.97)),
            result("b.taf", Some(0.97)),
        ]));
        let order: Vec<_> = state
            .confirmed_selections()
            .into_iter()
            .map(|s| s.taf_path)
            .collect();
        assert_eq!(order, vec!["b.taf", "a.taf"]);
    }

    #[test]
    fn test_all_skipped_cannot_confirm() {
        let mut state = WizardState::default();
        state.start(vec!["a.taf".into()]);
        state.apply_analysis(analysis(vec![result("a.taf", Some(0.7))]));
        state.skip("a.taf");
        assert!(state.review_complete());
        assert!(!state.advance_to_confirm());
    }

    #[test]
    fn test_metadata_search_items_exclude_auto_matches() {
        let mut state = WizardState::default();
        state.start(vec!["auto.taf".into(), "weak.taf".into()]);
        state.apply_analysis(analysis(vec![
            result("auto.taf", Some(0.97)),
            result("weak.taf", Some(0.7)),
        ]));
        let items = state.metadata_search_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].taf_path, "weak.taf");
    }

    #[test]
    fn test_process_flow() {
        let mut state = WizardState::default();
        state.start(vec!["a.taf".into()]);
        state.apply_analysis(analysis(vec![result("a.taf", Some(0.97))]));
        assert!(state.advance_to_confirm());
        assert!(state.begin_processing());
        assert!(state.processing);
        state.apply_report(BatchProcessResponse {
            total: 1,
            successful: 1,
            ..Default::default()
        });
        assert!(!state.processing);
        assert_eq!(state.report.as_ref().map(|r| r.successful), Some(1));
    }
}
