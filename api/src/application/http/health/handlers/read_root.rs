use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = RootResponse)
    )
)]
pub async fn read_root() -> Response<RootResponse> {
    Response::OK(RootResponse {
        message: "API is working!".to_string(),
    })
}
