use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("The response did not contain valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Unexpected completion shape: {0}")]
    UnexpectedShape(String),

    #[error("Recipe {index} is missing required keys: {}", fields.join(", "))]
    MissingFields {
        index: usize,
        fields: Vec<&'static str>,
    },

    #[error("Recipe {index}: '{field}' must be {expected}")]
    InvalidFieldType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}

impl RecipeError {
    /// True when the completion parsed but a record broke the recipe schema.
    pub fn is_schema_violation(&self) -> bool {
        matches!(
            self,
            RecipeError::MissingFields { .. } | RecipeError::InvalidFieldType { .. }
        )
    }
}
