//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header, sidebar, content area and log panel. It
//! also runs the event pump that bridges service events to UI updates.

use gpui::{
    div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::components::layout::sidebar::Sidebar;
use crate::eventing::app_event::AppEvent;
use crate::features::batch::wizard::BatchWizard;
use crate::features::editor::page::EditorPage;
use crate::features::library::page::LibraryPage;
use crate::features::settings::page::SettingsPage;
use crate::services::{ServiceCommand, ServiceHub};
use crate::theme::colors::TchColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    log_panel: Entity<LogPanel>,
    wizard: Entity<BatchWizard>,
    // Page views, created lazily and cached
    library_page: Option<Entity<LibraryPage>>,
    editor_page: Option<Entity<EditorPage>>,
    settings_page: Option<Entity<SettingsPage>>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));
        let wizard = cx.new(|cx| BatchWizard::new(entities.clone(), cx));

        // The library is the landing page
        let library_page = Some(cx.new(|cx| LibraryPage::new(entities.clone(), cx)));

        Self::start_event_pump(event_rx, entities.clone(), cx);

        // Re-render on navigation and wizard open/close
        cx.observe(&entities.nav, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.wizard, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            sidebar,
            log_panel,
            wizard,
            library_page,
            editor_page: None,
            settings_page: None,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }

    /// Get or create a page view for the given page
    fn get_or_create_page(&mut self, page: ActivePage, cx: &mut Context<Self>) -> gpui::AnyElement {
        match page {
            ActivePage::Library => {
                let page = self
                    .library_page
                    .get_or_insert_with(|| cx.new(|cx| LibraryPage::new(self.entities.clone(), cx)));
                page.clone().into_any_element()
            }
            ActivePage::Editor => {
                let page = self
                    .editor_page
                    .get_or_insert_with(|| cx.new(|cx| EditorPage::new(self.entities.clone(), cx)));
                page.clone().into_any_element()
            }
            ActivePage::Settings => {
                let page = self
                    .settings_page
                    .get_or_insert_with(|| cx.new(|cx| SettingsPage::new(self.entities.clone(), cx)));
                page.clone().into_any_element()
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active_page;
        let wizard_open = self.entities.wizard.read(cx).open;
        let content = self.get_or_create_page(active_page, cx);

        let mut root = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(TchColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(TchColors::content_bg())
                            .child(content),
                    ),
            )
            .child(self.log_panel.clone());

        if wizard_open {
            root = root.child(self.wizard.clone());
        }

        root
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log { level, message, timestamp } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::ConnectionChanged { target, connected, detail } => {
            entities.connection.update(cx, |conn, cx| {
                conn.checking = false;
                conn.set_status(target, connected, detail);
                cx.notify();
            });
        }
        AppEvent::StatusChecked { status } => {
            entities.connection.update(cx, |conn, cx| {
                conn.checking = false;
                cx.notify();
            });
            if !status.config_readable {
                entities.logs.update(cx, |logs, cx| {
                    logs.push_now(
                        crate::state::log_state::LogLevel::Warn,
                        "TeddyCloud config is not readable",
                    );
                    cx.notify();
                });
            }
        }
        AppEvent::LibraryLoaded { response } => {
            entities.library.update(cx, |library, cx| {
                library.apply_response(response);
                cx.notify();
            });
        }
        AppEvent::HeaderParsed { taf_path, response } => {
            if let Some(header) = response.metadata.filter(|_| response.success) {
                entities.library.update(cx, |library, cx| {
                    if library.apply_header(&taf_path, &header) {
                        cx.notify();
                    }
                });
            }
        }
        AppEvent::TafParsed { taf_path, metadata } => {
            entities.editor.update(cx, |editor, cx| {
                if editor.taf_path.as_deref() == Some(taf_path.as_str()) {
                    editor.apply_metadata(metadata);
                    cx.notify();
                }
            });
        }
        AppEvent::CoversFound { taf_path, covers } => {
            entities.editor.update(cx, |editor, cx| {
                if editor.taf_path.as_deref() == Some(taf_path.as_str()) {
                    editor.apply_covers(covers);
                    cx.notify();
                }
            });
        }
        AppEvent::CoverDownloaded { taf_path, response } => {
            entities.editor.update(cx, |editor, cx| {
                if editor.taf_path.as_deref() != Some(taf_path.as_str()) {
                    return;
                }
                editor.downloading_cover = false;
                match (response.success, response.path) {
                    (true, Some(path)) => editor.downloaded_pic = Some(path),
                    _ => {
                        editor.last_error =
                            Some(response.error.unwrap_or_else(|| "Cover download failed".into()));
                    }
                }
                cx.notify();
            });
        }
        AppEvent::TonieCreated { taf_path, tonie } => {
            entities.editor.update(cx, |editor, cx| {
                if editor.taf_path.as_deref() == Some(taf_path.as_str()) {
                    editor.creating = false;
                    editor.created_model = Some(tonie.model.clone());
                    cx.notify();
                }
            });
            reload_library(entities, cx);
        }
        AppEvent::BatchAnalyzed { response } => {
            let items = entities.wizard.update(cx, |wizard, cx| {
                wizard.apply_analysis(response);
                cx.notify();
                wizard.metadata_search_items()
            });
            // Kick off the external metadata search for files needing review
            if !items.is_empty() {
                entities.wizard.update(cx, |wizard, _| {
                    wizard.searching_metadata = true;
                });
                cx.global::<ServiceHub>().send(ServiceCommand::SearchMetadata { items });
            }
        }
        AppEvent::MetadataSearched { response } => {
            entities.wizard.update(cx, |wizard, cx| {
                wizard.apply_metadata(response);
                cx.notify();
            });
        }
        AppEvent::BatchProcessed { response } => {
            entities.wizard.update(cx, |wizard, cx| {
                wizard.apply_report(response);
                cx.notify();
            });
            entities.selection.update(cx, |selection, cx| {
                selection.clear();
                cx.notify();
            });
            reload_library(entities, cx);
        }
        AppEvent::RequestFailed { context, message } => match context.as_str() {
            "library" | "parse-header" => {
                entities.library.update(cx, |library, cx| {
                    library.set_error(message);
                    cx.notify();
                });
            }
            "parse-metadata" | "cover-search" | "cover-download" | "create-tonie" => {
                entities.editor.update(cx, |editor, cx| {
                    editor.set_error(message);
                    cx.notify();
                });
            }
            "batch-analyze" | "metadata-search" | "batch-process" => {
                entities.wizard.update(cx, |wizard, cx| {
                    wizard.set_error(message);
                    cx.notify();
                });
            }
            _ => {
                entities.connection.update(cx, |conn, cx| {
                    conn.checking = false;
                    cx.notify();
                });
            }
        },
    }
}

/// Request a reload of the current library page
fn reload_library(entities: &AppEntities, cx: &mut App) {
    let (page, page_size, filter) = entities.library.update(cx, |library, _| {
        library.loading = true;
        (library.page, library.page_size, library.filter)
    });
    cx.global::<ServiceHub>().send(ServiceCommand::LoadLibrary { page, page_size, filter });
}
