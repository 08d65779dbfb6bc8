use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

use super::http::server::{api_entities::api_error::ErrorResponse, app_state::AppState};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "api-key";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing api-key header")]
    MissingApiKey,
    #[error("Invalid API key")]
    InvalidApiKey,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;

        ErrorResponse::new(status, "E_UNAUTHORIZED", self.to_string()).into_response()
    }
}

/// Rejects requests whose `api-key` header does not match the configured secret.
/// Runs before the body is read, so rejected requests never reach the completion service.
pub async fn auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    if let Err(e) = check_api_key(req.headers(), &state.args.auth.api_auth_key) {
        warn!(uri = %req.uri(), reason = %e, "Rejected unauthenticated request");
        return Err(e);
    }

    Ok(next.run(req).await)
}

fn check_api_key(headers: &HeaderMap, expected: &str) -> Result<(), AuthError> {
    let provided = headers
        .get(API_KEY_HEADER)
        .ok_or(AuthError::MissingApiKey)?;

    if provided.as_bytes() != expected.as_bytes() {
        return Err(AuthError::InvalidApiKey);
    }

    Ok(())
}
