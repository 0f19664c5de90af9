//! Local UI chrome state (section navigation, sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`drafts`) so
//! navigation controls can evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level sections of the authenticated dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Dashboard,
    Upload,
    Comments,
    Settings,
}

impl Section {
    pub fn all() -> [Self; 4] {
        [Self::Dashboard, Self::Upload, Self::Comments, Self::Settings]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "DASHBOARD",
            Self::Upload => "UPLOAD DRAFT",
            Self::Comments => "COMMENTS",
            Self::Settings => "SETTINGS",
        }
    }
}

/// UI state for the section switcher and sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub section: Section,
    pub sidebar_collapsed: bool,
}
