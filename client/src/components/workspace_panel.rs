//! Workspace pane with the live preview and the active file's source.
//!
//! DESIGN
//! ======
//! The preview renders `index.html` into a sandboxed `srcdoc` iframe and trusts
//! the generated markup; the sandbox is the only isolation. Without an
//! `index.html` the pane shows a placeholder rather than an empty frame.

use leptos::prelude::*;

use crate::state::files::{FilesState, PREVIEW_SANDBOX};
use crate::state::ui::{UiState, WorkspaceTab};

/// Tabbed pane switching between preview and code views.
#[component]
pub fn WorkspacePanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let active_tab = move || ui.get().workspace_tab;
    let tab_button = move |tab: WorkspaceTab| {
        view! {
            <button
                class="workspace-panel__tab"
                class:workspace-panel__tab--active=move || active_tab() == tab
                on:click=move |_| ui.update(|u| u.workspace_tab = tab)
            >
                {tab.label()}
            </button>
        }
    };

    view! {
        <div class="workspace-panel">
            <div class="workspace-panel__tabs">
                {tab_button(WorkspaceTab::Preview)}
                {tab_button(WorkspaceTab::Code)}
            </div>
            <div class="workspace-panel__body">
                {move || match active_tab() {
                    WorkspaceTab::Preview => view! { <PreviewPane/> }.into_any(),
                    WorkspaceTab::Code => view! { <CodeView/> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Live preview of the generated `index.html`.
#[component]
pub fn PreviewPane() -> impl IntoView {
    let files = expect_context::<RwSignal<FilesState>>();

    move || match files.with(|f| f.preview_html().map(str::to_owned)) {
        Some(html) => view! {
            <iframe class="preview__frame" title="Live Preview" sandbox=PREVIEW_SANDBOX srcdoc=html></iframe>
        }
            .into_any(),
        None => view! {
            <div class="preview__empty">
                <div class="preview__empty-icon">"👁"</div>
                <p>"No preview available"</p>
                <p class="preview__hint">"Chat with AI to create an app"</p>
            </div>
        }
            .into_any(),
    }
}

/// Source of the active file.
#[component]
fn CodeView() -> impl IntoView {
    let files = expect_context::<RwSignal<FilesState>>();

    move || match files.with(|f| f.active_file().cloned()) {
        Some(file) => view! {
            <div class="code-view">
                <div class="code-view__meta">
                    <span class="code-view__name">{file.name}</span>
                    <span class="code-view__language">{file.language}</span>
                </div>
                <pre class="code-view__source"><code>{file.content}</code></pre>
            </div>
        }
            .into_any(),
        None => view! { <div class="code-view__empty">"Select a file to view its source"</div> }.into_any(),
    }
}
