//! REST API helpers for the auth and generation services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`ApiError::Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Session lookup returns `Option` because "no session" is a normal state.
//! Calls whose failure the UI reacts to return `Result<_, ApiError>`; a non-OK
//! status is always an error regardless of the body.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AskRequest, AskResponse, LoginRequest, RegisterRequest, User};

pub const ME_ENDPOINT: &str = "/api/auth/me";
pub const ASK_ENDPOINT: &str = "/api/ask";
pub const LOGOUT_ENDPOINT: &str = "/api/viraaj/logout";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-OK status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(ok: bool, status: u16) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(ApiError::Status(status)) }
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check_status(resp.ok(), resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(ME_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::debug!("session check failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Send a build request via `POST /api/ask` and await the single response.
///
/// # Errors
///
/// Returns an error on transport failure, non-OK status, or an undecodable body.
pub async fn ask(request: &AskRequest) -> Result<AskResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(ASK_ENDPOINT, request)
            .await
            .inspect_err(|e| log::error!("build request failed: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// End the backend session via `POST /api/viraaj/logout`. The body is ignored
/// and failures are logged here, so callers may discard the result.
///
/// # Errors
///
/// Returns an error only when the request could not be sent.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| ApiError::Transport(e.to_string()))
            .inspect_err(|e| log::warn!("logout request failed: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error if the credentials are rejected or the request fails.
pub async fn login(request: &LoginRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(LOGIN_ENDPOINT, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an error if registration is rejected or the request fails.
pub async fn register(request: &RegisterRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(REGISTER_ENDPOINT, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
