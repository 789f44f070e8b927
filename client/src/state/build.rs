//! Build-request transitions shared by the IDE page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A send runs in two halves around one `POST /api/ask`: `submit` decides
//! whether the request goes out at all and applies the optimistic update,
//! `apply_outcome` records the reply once the response (or failure) lands.
//! The page owns the network call; these functions own every state change.

#[cfg(test)]
#[path = "build_test.rs"]
mod build_test;

use crate::net::api::ApiError;
use crate::net::types::{AskRequest, AskResponse, FileSet};
use crate::state::auth::{AuthState, Session};
use crate::state::chat::{ChatState, Sender};
use crate::state::files::FilesState;

pub const BUILD_FALLBACK_REPLY: &str = "App created successfully!";
pub const BUILD_ERROR_REPLY: &str = "Sorry, there was an error creating your app. Please try again.";

/// What the caller should do after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submit {
    /// Empty input, a request already in flight, or the session check still
    /// pending. Nothing changed.
    Ignored,
    /// No session. Open the auth modal; input and conversation are untouched.
    NeedsAuth,
    /// Send this request. The user message is already appended, the input
    /// cleared, and the in-flight flag set.
    Dispatch(AskRequest),
}

impl Submit {
    /// Whether the conversation was modified.
    pub fn changes_state(&self) -> bool {
        matches!(self, Self::Dispatch(_))
    }
}

/// Gate and start a build request from the current input text.
pub fn submit(input: &mut String, session: Session, chat: &mut ChatState, now: f64) -> Submit {
    if input.trim().is_empty() || chat.generating {
        return Submit::Ignored;
    }
    match session {
        Session::Checking => return Submit::Ignored,
        Session::SignedOut => return Submit::NeedsAuth,
        Session::SignedIn => {}
    }
    let prompt = std::mem::take(input);
    chat.push(Sender::User, prompt.clone(), now);
    chat.generating = true;
    Submit::Dispatch(AskRequest::build(prompt))
}

/// Assistant text for a finished request.
pub fn reply_text(outcome: &Result<AskResponse, ApiError>) -> &str {
    match outcome {
        Ok(resp) => resp
            .response
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(BUILD_FALLBACK_REPLY),
        Err(_) => BUILD_ERROR_REPLY,
    }
}

/// Files to adopt from a finished request: only a successful response with a
/// non-empty file map replaces the collection.
pub fn adoptable_files(outcome: Result<AskResponse, ApiError>) -> Option<FileSet> {
    match outcome {
        Ok(AskResponse { success: true, files: Some(files), .. }) if !files.is_empty() => Some(files),
        _ => None,
    }
}

/// Record the reply, replace files when the response carries them, and
/// release the in-flight flag.
pub fn apply_outcome(
    chat: &mut ChatState,
    files: &mut FilesState,
    outcome: Result<AskResponse, ApiError>,
    now: f64,
) {
    chat.push(Sender::Ai, reply_text(&outcome), now);
    if let Some(set) = adoptable_files(outcome) {
        files.replace(set);
    }
    chat.generating = false;
}

/// Apply a finished logout call. Local state is reset on failure too; the
/// backend session may outlive it, but this browser no longer shows it.
pub fn finish_logout(
    result: &Result<(), ApiError>,
    auth: &mut AuthState,
    chat: &mut ChatState,
    files: &mut FilesState,
    now: f64,
) {
    match result {
        Ok(()) | Err(_) => reset_session(auth, chat, files, now),
    }
}

/// Local state after logout, applied whether or not the logout call worked.
pub fn reset_session(auth: &mut AuthState, chat: &mut ChatState, files: &mut FilesState, now: f64) {
    auth.sign_out();
    files.clear();
    chat.reset(now);
}
