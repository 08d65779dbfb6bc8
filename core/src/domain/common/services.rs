use crate::domain::{common::GenerationConfig, recipe::ports::CompletionClient};

/// Application service wiring the domain logic to its outbound ports.
#[derive(Clone)]
pub struct Service<CC>
where
    CC: CompletionClient,
{
    pub(crate) completion_client: CC,
    pub(crate) generation: GenerationConfig,
}

impl<CC> Service<CC>
where
    CC: CompletionClient,
{
    pub fn new(completion_client: CC, generation: GenerationConfig) -> Self {
        Self {
            completion_client,
            generation,
        }
    }
}
