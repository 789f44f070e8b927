//! Top bar with the app title, session identity, and sign-in/logout controls.

use leptos::prelude::*;

use crate::state::auth::{AuthState, Session};
use crate::state::build;
use crate::state::chat::ChatState;
use crate::state::files::FilesState;
use crate::util::time::now_ms;

/// Header for the IDE page.
///
/// Logout always resets local state, even when the logout call fails.
#[component]
pub fn IdeHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let files = expect_context::<RwSignal<FilesState>>();

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::logout().await;
            auth.update(|a| chat.update(|c| files.update(|f| build::finish_logout(&result, a, c, f, now_ms()))));
        });
    };

    let on_sign_in = move |_| auth.update(AuthState::open_modal);

    let session = move || auth.with(|a| (a.session(), a.user.as_ref().map(|u| u.name.clone())));

    view! {
        <div class="ide-header">
            <div class="ide-header__brand">
                <span class="ide-header__logo">"✦"</span>
                <span class="ide-header__title">"AI App Builder"</span>
            </div>

            {move || match session() {
                (Session::Checking, _) => ().into_any(),
                (Session::SignedIn, name) => {
                    view! {
                        <div class="ide-header__session">
                            <span class="ide-header__user">{name}</span>
                            <button class="btn ide-header__logout" on:click=on_logout title="Logout">
                                "Logout"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                (Session::SignedOut, _) => {
                    view! {
                        <button class="btn btn--primary ide-header__sign-in" on:click=on_sign_in>
                            "Sign In"
                        </button>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
