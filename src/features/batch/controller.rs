//! Batch Controller
//!
//! Builds selections during review and drives the wizard through its
//! steps, including the final process request.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::batch::{BatchSelection, MatchCandidate, TafMatchResult};
use crate::domain::metadata::CoverImage;
use crate::services::{ServiceCommand, ServiceHub};

/// Batch wizard controller
pub struct BatchController {
    entities: AppEntities,
}

impl BatchController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Accept a catalog candidate for a file
    pub fn select_candidate(
        &self,
        result: &TafMatchResult,
        candidate: &MatchCandidate,
        cx: &mut App,
    ) {
        self.apply_selection(BatchSelection::from_catalog(result, candidate), cx);
    }

    /// Accept an external cover for a file, using the parsed filename
    /// fields for series and episode
    pub fn select_cover(&self, result: &TafMatchResult, cover: &CoverImage, cx: &mut App) {
        self.apply_selection(BatchSelection::from_cover(result, cover), cx);
    }

    /// Accept the parsed filename fields without any cover
    pub fn select_manual(&self, result: &TafMatchResult, cx: &mut App) {
        self.apply_selection(BatchSelection::manual(result), cx);
    }

    fn apply_selection(&self, selection: BatchSelection, cx: &mut App) {
        self.entities.wizard.update(cx, |wizard, cx| {
            wizard.select(selection);
            cx.notify();
        });
    }

    /// Leave a file out of the run
    pub fn skip(&self, taf_path: &str, cx: &mut App) {
        self.entities.wizard.update(cx, |wizard, cx| {
            wizard.skip(taf_path);
            cx.notify();
        });
    }

    /// Move from review to the confirm step
    pub fn advance_to_confirm(&self, cx: &mut App) {
        self.entities.wizard.update(cx, |wizard, cx| {
            if wizard.advance_to_confirm() {
                cx.notify();
            }
        });
    }

    /// Return from confirm to review
    pub fn back_to_review(&self, cx: &mut App) {
        self.entities.wizard.update(cx, |wizard, cx| {
            wizard.back_to_review();
            cx.notify();
        });
    }

    /// Submit the confirmed selections for processing
    pub fn process(&self, cx: &mut App) {
        let selections = self.entities.wizard.update(cx, |wizard, cx| {
            if wizard.begin_processing() {
                cx.notify();
                wizard.confirmed_selections()
            } else {
                Vec::new()
            }
        });
        if !selections.is_empty() {
            cx.global::<ServiceHub>()
                .send(ServiceCommand::BatchProcess { selections });
        }
    }

    /// Close the wizard and discard its state
    pub fn close(&self, cx: &mut App) {
        self.entities.wizard.update(cx, |wizard, cx| {
            wizard.reset();
            cx.notify();
        });
    }
}
