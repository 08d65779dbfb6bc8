use serde::{Deserialize, Serialize};
use smartchef_core::domain::recipe::value_objects::PreferenceRequest;
use utoipa::ToSchema;
use validator::Validate;

/// User preferences; every list is optional and defaults to empty.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeValidator {
    #[serde(default)]
    #[schema(example = json!(["carrot", "spinach"]))]
    #[validate(length(max = 100, message = "vegetables accepts at most 100 entries"))]
    pub vegetables: Option<Vec<String>>,

    #[serde(default)]
    #[schema(example = json!(["Italian"]))]
    #[validate(length(max = 100, message = "cuisines accepts at most 100 entries"))]
    pub cuisines: Option<Vec<String>>,

    #[serde(default)]
    #[schema(example = json!(["vegetarian"]))]
    #[validate(length(
        max = 100,
        message = "dietaryRestrictions accepts at most 100 entries"
    ))]
    pub dietary_restrictions: Option<Vec<String>>,

    #[serde(default)]
    #[schema(example = json!(["high protein"]))]
    #[validate(length(
        max = 100,
        message = "nutritionalPreferences accepts at most 100 entries"
    ))]
    pub nutritional_preferences: Option<Vec<String>>,
}

impl From<GenerateRecipeValidator> for PreferenceRequest {
    fn from(payload: GenerateRecipeValidator) -> Self {
        Self {
            vegetables: payload.vegetables.unwrap_or_default(),
            cuisines: payload.cuisines.unwrap_or_default(),
            dietary_restrictions: payload.dietary_restrictions.unwrap_or_default(),
            nutritional_preferences: payload.nutritional_preferences.unwrap_or_default(),
        }
    }
}
