use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Successful JSON response; the payload is serialized as the body as-is.
#[derive(Debug, PartialEq)]
pub enum Response<T: Serialize> {
    OK(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(data) => (StatusCode::OK, Json(data)).into_response(),
        }
    }
}
