use axum::extract::State;
use smartchef_core::domain::recipe::{
    entities::RecipeRecord, ports::RecipeService, value_objects::GenerationOutcome,
};

use crate::application::http::{
    recipe::validators::GenerateRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Generate recipes",
    description = "Generates validated recipes matching the given preferences using a chat completion model. A refusal from the model yields an empty list.",
    responses(
        (status = 200, body = Vec<RecipeRecord>),
        (status = 401, body = ErrorResponse, description = "Missing or invalid api-key header"),
        (status = 502, body = ErrorResponse, description = "The completion could not be turned into valid recipes"),
        (status = 503, body = ErrorResponse, description = "The completion service failed"),
        (status = 504, body = ErrorResponse, description = "The completion service timed out")
    ),
    security(("api_key" = [])),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<Vec<RecipeRecord>>, ApiError> {
    let outcome = state
        .service
        .generate_recipes(payload.into())
        .await
        .map_err(ApiError::from)?;

    if let GenerationOutcome::Refused { reason } = &outcome {
        tracing::info!("Returning no recipes after refusal: {}", reason);
    }

    Ok(Response::OK(outcome.into_recipes()))
}
