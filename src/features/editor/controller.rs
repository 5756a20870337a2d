//! Editor Controller
//!
//! Bridges the editor page to the editor state and the backend: cover
//! search and download, and creating the custom tag.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::metadata::CoverImage;
use crate::eventing::app_event::AppEvent;
use crate::services::{ServiceCommand, ServiceHub};

/// Editor page controller
pub struct EditorController {
    entities: AppEntities,
}

impl EditorController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    pub fn set_series(&self, value: String, cx: &mut App) {
        self.entities.editor.update(cx, |editor, cx| {
            editor.series = value;
            cx.notify();
        });
    }

    pub fn set_episode(&self, value: String, cx: &mut App) {
        self.entities.editor.update(cx, |editor, cx| {
            editor.episode = value;
            cx.notify();
        });
    }

    pub fn set_language(&self, value: String, cx: &mut App) {
        self.entities.editor.update(cx, |editor, cx| {
            editor.language = value;
            cx.notify();
        });
    }

    /// Search covers for the current series/episode
    pub fn search_covers(&self, cx: &mut App) {
        let (taf_path, term) = {
            let editor = self.entities.editor.read(cx);
            (editor.taf_path.clone(), editor.cover_search_term())
        };
        let Some(taf_path) = taf_path else {
            return;
        };
        if term.is_empty() {
            cx.global::<ServiceHub>()
                .log(AppEvent::warn("Nothing to search for, fill in a series first"));
            return;
        }
        self.entities.editor.update(cx, |editor, cx| {
            editor.searching_covers = true;
            editor.last_error = None;
            cx.notify();
        });
        cx.global::<ServiceHub>().send(ServiceCommand::SearchCovers {
            taf_path,
            search_term: term,
        });
    }

    /// Pick a cover from the suggestions
    pub fn select_cover(&self, cover: CoverImage, cx: &mut App) {
        self.entities.editor.update(cx, |editor, cx| {
            editor.select_cover(cover);
            cx.notify();
        });
    }

    /// Download the selected cover into the backend image store. The
    /// stored filename is derived from the audio ID so repeated downloads
    /// for the same file overwrite each other.
    pub fn download_cover(&self, cx: &mut App) {
        let (taf_path, cover, audio_id) = {
            let editor = self.entities.editor.read(cx);
            (
                editor.taf_path.clone(),
                editor.selected_cover.clone(),
                editor.metadata.as_ref().and_then(|m| m.audio_id),
            )
        };
        let (Some(taf_path), Some(cover), Some(audio_id)) = (taf_path, cover, audio_id) else {
            return;
        };
        self.entities.editor.update(cx, |editor, cx| {
            editor.downloading_cover = true;
            editor.last_error = None;
            cx.notify();
        });
        cx.global::<ServiceHub>().send(ServiceCommand::DownloadCover {
            taf_path,
            image_url: cover.url,
            filename: format!("cover_{audio_id}"),
        });
    }

    /// Create the custom tag from the current fields
    pub fn create_tag(&self, cx: &mut App) {
        let (taf_path, request) = {
            let editor = self.entities.editor.read(cx);
            (editor.taf_path.clone(), editor.build_create_request())
        };
        let (Some(taf_path), Some(request)) = (taf_path, request) else {
            return;
        };
        self.entities.editor.update(cx, |editor, cx| {
            editor.creating = true;
            editor.last_error = None;
            editor.created_model = None;
            cx.notify();
        });
        cx.global::<ServiceHub>()
            .send(ServiceCommand::CreateTonie { taf_path, request });
    }
}
