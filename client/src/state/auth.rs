//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is owned by the backend cookie; this only mirrors what
//! `/api/auth/me` or the auth modal reported, plus whether the modal is open.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user, loading status, and
/// sign-in modal visibility.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub show_modal: bool,
}

/// Where the session stands, as far as the UI is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Session {
    /// `/api/auth/me` has not answered yet.
    Checking,
    SignedIn,
    SignedOut,
}

impl AuthState {
    /// Initial state while the session check is outstanding.
    pub fn checking() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn session(&self) -> Session {
        if self.user.is_some() {
            Session::SignedIn
        } else if self.loading {
            Session::Checking
        } else {
            Session::SignedOut
        }
    }

    /// Record the answer of the session check. `None` means signed out.
    pub fn session_checked(&mut self, user: Option<User>) {
        self.loading = false;
        if let Some(user) = user {
            self.sign_in(user);
        }
    }

    /// Adopt a user reported by the session endpoint or the auth modal.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
        self.show_modal = false;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }

    pub fn open_modal(&mut self) {
        self.show_modal = true;
    }

    pub fn close_modal(&mut self) {
        self.show_modal = false;
    }
}
