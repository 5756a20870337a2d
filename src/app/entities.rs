//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! This pattern avoids "monolith state" by splitting state by update frequency.

use gpui::{App, AppContext, Entity, Global};

use crate::app::navigation::NavState;
use crate::state::{
    config_state::ConfigState, connection_state::ConnectionState, editor_state::EditorState,
    i18n_state::I18nState, library_state::LibraryState, log_state::LogState,
    selection_state::SelectionState, wizard_state::WizardState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// Connection status for the backend and TeddyCloud
    pub connection: Entity<ConnectionState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Sidebar navigation state
    pub nav: Entity<NavState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Paginated library listing
    pub library: Entity<LibraryState>,
    /// Cross-page selection bookkeeping
    pub selection: Entity<SelectionState>,
    /// Single-file editor state
    pub editor: Entity<EditorState>,
    /// Batch wizard state
    pub wizard: Entity<WizardState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            config: cx.new(|_| ConfigState::default()),
            connection: cx.new(|_| ConnectionState::default()),
            logs: cx.new(|_| LogState::default()),
            nav: cx.new(|_| NavState::default()),
            i18n: cx.new(|_| I18nState::default()),
            library: cx.new(|_| LibraryState::default()),
            selection: cx.new(|_| SelectionState::default()),
            editor: cx.new(|_| EditorState::default()),
            wizard: cx.new(|_| WizardState::default()),
        }
    }
}
