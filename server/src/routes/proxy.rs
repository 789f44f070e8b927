//! `/api/*` forwarding to the backend services.
//!
//! DESIGN
//! ======
//! The forwarder is transparent for the parts of HTTP the client relies on:
//! method, path, query, body, the session cookie, and the upstream status and
//! body. Only an allowlist of headers crosses in either direction so hop-by-hop
//! and host headers never leak. `Set-Cookie` is relayed so sign-in and logout
//! on the backend update the browser session on this origin.
//!
//! ERROR HANDLING
//! ==============
//! Upstream non-2xx statuses are passed through unchanged. Only a failure to
//! reach the backend at all becomes a local `502 Bad Gateway`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] = [CONTENT_TYPE, ACCEPT, COOKIE, AUTHORIZATION];
const RELAYED_RESPONSE_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, SET_COOKIE];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "api forward failed");
        (StatusCode::BAD_GATEWAY, "backend unavailable").into_response()
    }
}

/// Forward one `/api/*` request and relay the upstream answer.
///
/// # Errors
///
/// Returns [`ProxyError`] when the backend cannot be reached or the upstream
/// body cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.backend_url, &uri);
    tracing::debug!(%method, %url, "forwarding api request");

    let mut request = state
        .http
        .request(method, &url)
        .headers(forward_request_headers(&headers));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let relayed = relay_response_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    if status.is_server_error() {
        tracing::warn!(%status, %url, "backend returned server error");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = relayed;
    Ok(response)
}

/// Backend URL for an incoming request, keeping path and query verbatim.
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{base}{path_and_query}")
}

/// Allowlisted request headers, all values preserved.
pub fn forward_request_headers(incoming: &HeaderMap) -> HeaderMap {
    copy_headers(incoming, &FORWARDED_REQUEST_HEADERS)
}

/// Allowlisted response headers; every `Set-Cookie` value is kept.
pub fn relay_response_headers(upstream: &HeaderMap) -> HeaderMap {
    copy_headers(upstream, &RELAYED_RESPONSE_HEADERS)
}

fn copy_headers(from: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in from.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}
