//! Sign-in / create-account modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Credentials go straight to the auth service; on success the returned user
//! is handed to `on_success` and adopted as the session. Session cookies are
//! managed entirely by the backend.

#[cfg(test)]
#[path = "auth_modal_test.rs"]
mod auth_modal_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{LoginRequest, RegisterRequest, User};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuthMode {
    #[default]
    SignIn,
    Register,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum AuthForm {
    SignIn(LoginRequest),
    Register(RegisterRequest),
}

fn validate_auth_form(mode: AuthMode, name: &str, email: &str, password: &str) -> Result<AuthForm, &'static str> {
    let email = email.trim();
    match mode {
        AuthMode::SignIn => {
            if email.is_empty() || password.is_empty() {
                return Err("Enter your email and password.");
            }
            Ok(AuthForm::SignIn(LoginRequest { email: email.to_owned(), password: password.to_owned() }))
        }
        AuthMode::Register => {
            let name = name.trim();
            if name.is_empty() || email.is_empty() || password.is_empty() {
                return Err("Enter your name, email and password.");
            }
            Ok(AuthForm::Register(RegisterRequest {
                name: name.to_owned(),
                email: email.to_owned(),
                password: password.to_owned(),
            }))
        }
    }
}

fn auth_error_message(mode: AuthMode, err: &ApiError) -> &'static str {
    match (mode, err) {
        (AuthMode::SignIn, ApiError::Status(401 | 403)) => "Invalid email or password.",
        (AuthMode::Register, ApiError::Status(409)) => "An account with that email already exists.",
        (AuthMode::SignIn, _) => "Sign in failed. Please try again.",
        (AuthMode::Register, _) => "Could not create your account. Please try again.",
    }
}

/// Modal collecting credentials. `on_close` dismisses without signing in.
#[component]
pub fn AuthModal(on_close: Callback<()>, on_success: Callback<User>) -> impl IntoView {
    let mode = RwSignal::new(AuthMode::SignIn);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current_mode = mode.get_untracked();
        let form = match validate_auth_form(
            current_mode,
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(form) => form,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            let result = match &form {
                AuthForm::SignIn(req) => crate::net::api::login(req).await,
                AuthForm::Register(req) => crate::net::api::register(req).await,
            };
            busy.set(false);
            match result {
                Ok(user) => on_success.run(user),
                Err(e) => error.set(Some(auth_error_message(current_mode, &e))),
            }
        });
    };

    let toggle_mode = move |_| {
        mode.update(|m| {
            *m = match m {
                AuthMode::SignIn => AuthMode::Register,
                AuthMode::Register => AuthMode::SignIn,
            };
        });
        error.set(None);
    };

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let registering = move || mode.get() == AuthMode::Register;

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--auth"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>{move || if registering() { "Create account" } else { "Sign in" }}</h2>
                    <button class="dialog__close" on:click=on_close_click title="Close">
                        "✕"
                    </button>
                </div>

                <form class="dialog__form" on:submit=on_submit>
                    <Show when=registering>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="dialog__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="dialog__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary dialog__submit" type="submit" disabled=move || busy.get()>
                        {move || if registering() { "Create account" } else { "Sign in" }}
                    </button>
                </form>

                <button class="dialog__switch" on:click=toggle_mode>
                    {move || if registering() { "Already have an account? Sign in" } else { "New here? Create an account" }}
                </button>
            </div>
        </div>
    }
}
