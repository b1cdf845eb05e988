use crate::{
    domain::common::{SymptomaticConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        diagnosis::repositories::{FileDiagnosisRepository, InMemorySubmissionRepository},
        llm::ChatCompletionClient,
    },
};

pub type SymptomaticService =
    Service<ChatCompletionClient, FileDiagnosisRepository, InMemorySubmissionRepository>;

/// Builds the production service from configuration.
///
/// Fails when the model API key is empty or the storage file cannot be
/// prepared; both are fatal at startup.
pub async fn create_service(config: SymptomaticConfig) -> Result<SymptomaticService, CoreError> {
    if config.llm.api_key.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            "LLM API key is not set in the environment variables".to_string(),
        ));
    }

    let llm_client =
        ChatCompletionClient::new(config.llm.api_key, config.llm.api_url, config.llm.model);
    tracing::info!(model = llm_client.model_name(), "Loaded LLM API key successfully");

    let diagnosis_repository = FileDiagnosisRepository::open(config.storage.path).await?;

    Ok(Service::new(
        llm_client,
        diagnosis_repository,
        InMemorySubmissionRepository::default(),
    ))
}
