//! Library Controller
//!
//! Paging, filtering, selection and the handoff into the editor and the
//! batch wizard.

use std::collections::HashSet;

use gpui::App;

use crate::app::navigation::ActivePage;
use crate::app::entities::AppEntities;
use crate::domain::library::{LinkFilter, TafFileWithTonie};
use crate::eventing::app_event::AppEvent;
use crate::services::{ServiceCommand, ServiceHub};

/// Library page controller
pub struct LibraryController {
    entities: AppEntities,
}

impl LibraryController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Reload the current page from the backend
    pub fn refresh(&self, cx: &mut App) {
        let (page, page_size, filter) = self.entities.library.update(cx, |library, cx| {
            library.loading = true;
            cx.notify();
            (library.page, library.page_size, library.filter)
        });
        cx.global::<ServiceHub>().send(ServiceCommand::LoadLibrary { page, page_size, filter });
    }

    /// Switch the link filter and reload
    pub fn set_filter(&self, filter: LinkFilter, cx: &mut App) {
        self.entities.library.update(cx, |library, cx| {
            library.set_filter(filter);
            cx.notify();
        });
        self.refresh(cx);
    }

    /// Change the page size, persist it and reload
    pub fn set_page_size(&self, page_size: usize, cx: &mut App) {
        self.entities.library.update(cx, |library, cx| {
            library.set_page_size(page_size);
            cx.notify();
        });
        // Page size is a persisted UI preference
        let config = self.entities.config.update(cx, |state, _| {
            state.config.ui.page_size = page_size;
            state.config.clone()
        });
        if let Err(e) = config.save() {
            cx.global::<ServiceHub>()
                .log(AppEvent::warn(format!("Failed to save config: {e}")));
        }
        self.refresh(cx);
    }

    /// Update the client-side search filter
    pub fn set_search_query(&self, query: String, cx: &mut App) {
        self.entities.library.update(cx, |library, cx| {
            library.set_search_query(query);
            cx.notify();
        });
    }

    /// Load the next page if the backend reported one
    pub fn next_page(&self, cx: &mut App) {
        let moved = self.entities.library.update(cx, |library, cx| {
            let moved = library.next_page();
            cx.notify();
            moved
        });
        if moved {
            self.refresh(cx);
        }
    }

    /// Load the previous page if not on the first
    pub fn prev_page(&self, cx: &mut App) {
        let moved = self.entities.library.update(cx, |library, cx| {
            let moved = library.prev_page();
            cx.notify();
            moved
        });
        if moved {
            self.refresh(cx);
        }
    }

    /// Toggle selection of a single row
    pub fn toggle_selection(&self, path: &str, cx: &mut App) {
        self.entities.selection.update(cx, |selection, cx| {
            selection.toggle(path);
            cx.notify();
        });
    }

    /// Select every orphaned row currently visible
    pub fn select_all_orphaned(&self, cx: &mut App) {
        let orphaned: Vec<TafFileWithTonie> = self
            .entities
            .library
            .read(cx)
            .visible_orphaned()
            .into_iter()
            .cloned()
            .collect();
        self.entities.selection.update(cx, |selection, cx| {
            selection.select_all_orphaned(orphaned.iter());
            cx.notify();
        });
    }

    /// Clear the cross-page selection
    pub fn clear_selection(&self, cx: &mut App) {
        self.entities.selection.update(cx, |selection, cx| {
            selection.clear();
            cx.notify();
        });
    }

    /// Request a header parse for a row without parsed TAF fields
    pub fn parse_header(&self, path: &str, cx: &mut App) {
        cx.global::<ServiceHub>().send(ServiceCommand::ParseHeader {
            taf_path: path.to_string(),
        });
    }

    /// Open a file in the single-file editor
    pub fn open_editor(&self, file: &TafFileWithTonie, cx: &mut App) {
        self.entities.editor.update(cx, |editor, cx| {
            editor.open(file.path.clone(), file.name.clone());
            cx.notify();
        });
        self.entities.nav.update(cx, |nav, cx| {
            nav.set_active_page(ActivePage::Editor);
            cx.notify();
        });
        cx.global::<ServiceHub>().send(ServiceCommand::ParseMetadata {
            taf_path: file.path.clone(),
        });
    }

    /// Start the batch wizard from the current selection.
    ///
    /// Selected paths known to be linked are dropped first, so a stale
    /// selection cannot send already-linked files into analysis.
    pub fn start_wizard(&self, cx: &mut App) {
        let linked: HashSet<String> = self
            .entities
            .library
            .read(cx)
            .response
            .as_ref()
            .map(|r| {
                r.taf_files
                    .iter()
                    .filter(|f| f.is_linked)
                    .map(|f| f.path.clone())
                    .collect()
            })
            .unwrap_or_default();

        let paths: Vec<String> = self
            .entities
            .selection
            .read(cx)
            .sorted_paths()
            .into_iter()
            .filter(|p| !linked.contains(p))
            .collect();

        if paths.is_empty() {
            cx.global::<ServiceHub>()
                .log(AppEvent::warn("No orphaned files selected"));
            return;
        }

        let dropped = self.entities.wizard.update(cx, |wizard, cx| {
            let dropped = wizard.start(paths.clone());
            cx.notify();
            dropped
        });
        if dropped > 0 {
            cx.global::<ServiceHub>()
                .log(AppEvent::warn(format!("{dropped} files over the batch limit were left out")));
        }

        let taf_paths = self.entities.wizard.read(cx).paths.clone();
        cx.global::<ServiceHub>().send(ServiceCommand::BatchAnalyze { taf_paths });
    }
}
