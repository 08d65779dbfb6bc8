use crate::{
    domain::common::{SmartChefConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::openai_client::OpenAICompletionClient,
};

pub type SmartChefService = Service<OpenAICompletionClient>;

pub fn create_service(config: SmartChefConfig) -> Result<SmartChefService, CoreError> {
    let completion_client = OpenAICompletionClient::new(&config.llm)?;

    Ok(Service::new(completion_client, config.generation))
}
