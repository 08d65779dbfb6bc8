use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Completion,
        value_objects::{CompletionRequest, GenerationOutcome, PreferenceRequest},
    },
};

/// Chat completion backend used to draft recipes
#[cfg_attr(test, mockall::automock)]
pub trait CompletionClient: Send + Sync {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<Completion, CoreError>> + Send;
}

/// Service trait for recipe generation
pub trait RecipeService: Send + Sync {
    fn generate_recipes(
        &self,
        preferences: PreferenceRequest,
    ) -> impl Future<Output = Result<GenerationOutcome, CoreError>> + Send;
}
