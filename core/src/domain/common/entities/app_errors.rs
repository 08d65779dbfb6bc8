use thiserror::Error;

use crate::domain::recipe::entities::errors::RecipeError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("External service timed out")]
    Timeout,

    #[error(transparent)]
    Recipe(#[from] RecipeError),

    #[error("Internal server error")]
    InternalServerError,
}
