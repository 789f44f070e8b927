use super::*;

#[test]
fn check_status_accepts_ok() {
    assert_eq!(check_status(true, 200), Ok(()));
}

#[test]
fn check_status_rejects_non_ok_with_status() {
    assert_eq!(check_status(false, 500), Err(ApiError::Status(500)));
}

#[test]
fn api_error_status_formats_code() {
    assert_eq!(ApiError::Status(401).to_string(), "HTTP 401");
}

#[test]
fn endpoints_match_backend_contract() {
    assert_eq!(ME_ENDPOINT, "/api/auth/me");
    assert_eq!(ASK_ENDPOINT, "/api/ask");
    assert_eq!(LOGOUT_ENDPOINT, "/api/viraaj/logout");
}
