use std::collections::HashSet;

use tracing::{debug, error, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::{Completion, CompletionContent, RecipeRecord},
        normalizer::normalize_completion,
        ports::{CompletionClient, RecipeService},
        prompt::{SYSTEM_PROMPT, build_recipe_prompt},
        validator::validate_recipes,
        value_objects::{ChatMessage, CompletionRequest, GenerationOutcome, PreferenceRequest},
    },
};

impl<CC> RecipeService for Service<CC>
where
    CC: CompletionClient,
{
    #[instrument(skip(self, preferences), fields(model = %self.generation.model))]
    async fn generate_recipes(
        &self,
        preferences: PreferenceRequest,
    ) -> Result<GenerationOutcome, CoreError> {
        // 1. Build the request
        let request = CompletionRequest {
            model: self.generation.model.clone(),
            temperature: self.generation.temperature,
            frequency_penalty: self.generation.frequency_penalty,
            presence_penalty: self.generation.presence_penalty,
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(build_recipe_prompt(
                    &preferences,
                    self.generation.recipe_count,
                )),
            ],
        };

        // 2. Call the completion service
        let content = match self.completion_client.complete(request).await? {
            Completion::Refused(reason) => {
                warn!(%reason, "completion service refused to generate recipes");
                return Ok(GenerationOutcome::Refused { reason });
            }
            Completion::Content(content) => content,
        };

        if let CompletionContent::Text(text) = &content {
            debug!(length = text.len(), "received text completion");
        }

        // 3. Normalize and validate
        let records = normalize_completion(content).map_err(|e| {
            error!("Failed to normalize completion: {}", e);
            CoreError::from(e)
        })?;

        let recipes = validate_recipes(records).map_err(|e| {
            error!("Recipe validation failed: {}", e);
            CoreError::from(e)
        })?;

        check_batch(&recipes, self.generation.recipe_count);

        Ok(GenerationOutcome::Recipes(recipes))
    }
}

/// Logs batches that break the prompt's advisory contract without rejecting them.
fn check_batch(recipes: &[RecipeRecord], expected: usize) {
    if recipes.len() != expected {
        warn!(
            expected,
            received = recipes.len(),
            "completion returned an unexpected number of recipes"
        );
    }

    let mut seen = HashSet::new();
    for recipe in recipes {
        if !seen.insert(recipe.id) {
            warn!(id = recipe.id, "completion returned a duplicate recipe Id");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::GenerationConfig,
        recipe::{
            entities::errors::RecipeError, ports::MockCompletionClient, value_objects::ChatRole,
        },
    };
    use serde_json::{Value, json};

    fn recipe_json(id: i64) -> Value {
        json!({
            "Id": id,
            "title": format!("Recipe {id}"),
            "description": "Bright and fresh.",
            "cookTime": format!("{} minutes", 10 * id),
            "servings": 2,
            "ingredients": ["1 zucchini", "olive oil"],
            "instructions": ["Slice the zucchini.", "Grill for 6 minutes."]
        })
    }

    fn five_recipes() -> String {
        Value::Array((1..=5).map(recipe_json).collect()).to_string()
    }

    fn service_returning(completion: Completion) -> Service<MockCompletionClient> {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(move |_| {
                let completion = completion.clone();
                Box::pin(async move { Ok(completion) })
            });

        Service::new(client, GenerationConfig::default())
    }

    fn text(payload: String) -> Completion {
        Completion::Content(CompletionContent::Text(payload))
    }

    #[tokio::test]
    async fn test_five_valid_recipes_are_returned_in_order() {
        let service = service_returning(text(five_recipes()));

        let recipes = service
            .generate_recipes(PreferenceRequest::default())
            .await
            .unwrap()
            .into_recipes();

        assert_eq!(recipes.len(), 5);
        assert_eq!(
            recipes.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(recipes[2].cook_time, "30 minutes");
    }

    #[tokio::test]
    async fn test_fenced_completion_yields_same_recipes() {
        let plain = service_returning(text(five_recipes()))
            .generate_recipes(PreferenceRequest::default())
            .await
            .unwrap();
        let fenced = service_returning(text(format!("```json\n{}\n```", five_recipes())))
            .generate_recipes(PreferenceRequest::default())
            .await
            .unwrap();

        assert_eq!(plain, fenced);
    }

    #[tokio::test]
    async fn test_bare_object_yields_single_recipe() {
        let service = service_returning(text(recipe_json(1).to_string()));

        let recipes = service
            .generate_recipes(PreferenceRequest::default())
            .await
            .unwrap()
            .into_recipes();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Recipe 1");
    }

    #[tokio::test]
    async fn test_structured_completion_is_validated() {
        let service = service_returning(Completion::Content(CompletionContent::Structured(
            Value::Array((1..=5).map(recipe_json).collect()),
        )));

        let outcome = service
            .generate_recipes(PreferenceRequest::default())
            .await
            .unwrap();

        assert_eq!(outcome.into_recipes().len(), 5);
    }

    #[tokio::test]
    async fn test_refusal_short_circuits() {
        let service = service_returning(Completion::Refused("I can't help with that.".into()));

        let outcome = service
            .generate_recipes(PreferenceRequest::default())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            GenerationOutcome::Refused {
                reason: "I can't help with that.".to_string()
            }
        );
        assert!(outcome.into_recipes().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_completion_is_an_error() {
        let service = service_returning(text("Sure! Here are five recipes.".to_string()));

        let err = service
            .generate_recipes(PreferenceRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Recipe(RecipeError::MalformedJson(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_record_rejects_the_batch() {
        let mut records: Vec<Value> = (1..=5).map(recipe_json).collect();
        records[4]["servings"] = json!("2");
        let service = service_returning(text(Value::Array(records).to_string()));

        let err = service
            .generate_recipes(PreferenceRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Recipe(RecipeError::InvalidFieldType {
                index: 4,
                field: "servings",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_client_errors_propagate() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .returning(|_| Box::pin(async { Err(CoreError::Timeout) }));
        let service = Service::new(client, GenerationConfig::default());

        let err = service
            .generate_recipes(PreferenceRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Timeout));
    }

    #[tokio::test]
    async fn test_request_carries_settings_and_messages() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .withf(|request: &CompletionRequest| {
                request.model == "gpt-4o-mini-2024-07-18"
                    && request.temperature == 0.6
                    && request.messages.len() == 2
                    && request.messages[0].role == ChatRole::System
                    && request.messages[1].role == ChatRole::User
                    && request.messages[1].content.contains("Available vegetables: okra")
            })
            .times(1)
            .returning(|_| {
                Box::pin(async { Ok(Completion::Content(CompletionContent::Text("[]".into()))) })
            });
        let service = Service::new(client, GenerationConfig::default());

        let preferences = PreferenceRequest {
            vegetables: vec!["okra".to_string()],
            ..Default::default()
        };
        let outcome = service.generate_recipes(preferences).await.unwrap();

        assert_eq!(outcome, GenerationOutcome::Recipes(Vec::new()));
    }
}
