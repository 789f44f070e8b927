//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Transient presentation state only. Nothing here is sent to the backend or
//! cleared on logout.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the workspace pane.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub workspace_tab: WorkspaceTab,
}

/// Tabs available in the workspace pane next to the file list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkspaceTab {
    #[default]
    Preview,
    Code,
}

impl WorkspaceTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Preview => "Preview",
            Self::Code => "Code",
        }
    }
}
