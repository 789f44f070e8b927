use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_tab_is_preview() {
    let state = UiState::default();
    assert_eq!(state.workspace_tab, WorkspaceTab::Preview);
}

// =============================================================
// WorkspaceTab
// =============================================================

#[test]
fn workspace_tab_variants_are_distinct() {
    assert_ne!(WorkspaceTab::Preview, WorkspaceTab::Code);
}

#[test]
fn workspace_tab_labels() {
    assert_eq!(WorkspaceTab::Preview.label(), "Preview");
    assert_eq!(WorkspaceTab::Code.label(), "Code");
}
