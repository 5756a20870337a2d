//! Navigation - Active Page State
//!
//! Defines the pages available in the application and the sidebar state.

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivePage {
    /// TAF library listing with selection and batch entry point
    #[default]
    Library,
    /// Single-file tag editor
    Editor,
    /// Backend connection and UI settings
    Settings,
}

impl ActivePage {
    /// Icon glyph shown next to the sidebar label
    pub fn icon(&self) -> &'static str {
        match self {
            ActivePage::Library => "🗂",
            ActivePage::Editor => "🏷",
            ActivePage::Settings => "⚙",
        }
    }

    /// Translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivePage::Library => "nav-library",
            ActivePage::Editor => "nav-editor",
            ActivePage::Settings => "nav-settings",
        }
    }

    /// All pages in sidebar order
    pub fn all() -> &'static [ActivePage] {
        &[ActivePage::Library, ActivePage::Editor, ActivePage::Settings]
    }
}

/// Sidebar navigation state
#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub active_page: ActivePage,
}

impl NavState {
    /// Switch the active page
    pub fn set_active_page(&mut self, page: ActivePage) {
        self.active_page = page;
    }
}
