use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

/// A recipe that passed schema validation.
///
/// Only the validator builds these; field names match the wire format the
/// completion is asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    #[serde(rename = "Id")]
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Roasted Carrot Soup")]
    pub title: String,
    pub description: String,
    #[schema(example = "30 minutes")]
    pub cook_time: String,
    /// Integer or real number, kept in the representation the model used.
    #[schema(value_type = f64, example = 4)]
    pub servings: Number,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}
