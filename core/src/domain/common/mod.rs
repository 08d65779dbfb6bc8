pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct SmartChefConfig {
    pub llm: LLMConfig,
    pub generation: GenerationConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub openai_api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

/// Sampling settings sent with every completion request.
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub recipe_count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini-2024-07-18".to_string(),
            temperature: 0.6,
            frequency_penalty: 0.1,
            presence_penalty: 0.1,
            recipe_count: 5,
        }
    }
}
