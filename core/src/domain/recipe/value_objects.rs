use serde::{Deserialize, Serialize};

use crate::domain::recipe::entities::RecipeRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceRequest {
    pub vegetables: Vec<String>,
    pub cuisines: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub nutritional_preferences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Recipes(Vec<RecipeRecord>),
    Refused { reason: String },
}

impl GenerationOutcome {
    pub fn into_recipes(self) -> Vec<RecipeRecord> {
        match self {
            GenerationOutcome::Recipes(recipes) => recipes,
            GenerationOutcome::Refused { .. } => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub messages: Vec<ChatMessage>,
}
