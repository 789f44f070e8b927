//! IDE page: chat on the left, generated files and preview on the right.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page asks the auth service who is signed in; a missing
//! session is a normal state, not an error. Until it answers, `AuthState` is
//! in the checking state and neither sign-in nor send is offered. The auth
//! modal is mounted only while `AuthState::show_modal` is set.

use leptos::prelude::*;

use crate::components::auth_modal::AuthModal;
use crate::components::chat_panel::ChatPanel;
use crate::components::file_list::FileList;
use crate::components::header::IdeHeader;
use crate::components::workspace_panel::WorkspacePanel;
use crate::net::types::User;
use crate::state::auth::AuthState;

/// Single-page IDE layout.
#[component]
pub fn IdePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| a.session_checked(user));
        });
    }

    let on_modal_close = Callback::new(move |()| auth.update(AuthState::close_modal));
    let on_modal_success = Callback::new(move |user: User| auth.update(move |a| a.sign_in(user)));

    view! {
        <div class="ide-page">
            <div class="ide-page__header">
                <IdeHeader/>
            </div>
            <div class="ide-page__chat">
                <ChatPanel/>
            </div>
            <div class="ide-page__files">
                <FileList/>
            </div>
            <div class="ide-page__workspace">
                <WorkspacePanel/>
            </div>
            <Show when=move || auth.get().show_modal>
                <AuthModal on_close=on_modal_close on_success=on_modal_success/>
            </Show>
        </div>
    }
}
