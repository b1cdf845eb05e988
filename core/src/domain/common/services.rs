use std::sync::Arc;

use crate::domain::diagnosis::ports::{DiagnosisRepository, LLMClient, SubmissionRepository};

/// Application service wiring the model client to both stores.
///
/// Every collaborator is shared behind an `Arc`, so cloning a `Service` is
/// cheap and all clones see the same stores.
pub struct Service<LLM, DR, SR>
where
    LLM: LLMClient,
    DR: DiagnosisRepository,
    SR: SubmissionRepository,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) diagnosis_repository: Arc<DR>,
    pub(crate) submission_repository: Arc<SR>,
}

impl<LLM, DR, SR> Service<LLM, DR, SR>
where
    LLM: LLMClient,
    DR: DiagnosisRepository,
    SR: SubmissionRepository,
{
    pub fn new(llm_client: LLM, diagnosis_repository: DR, submission_repository: SR) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            diagnosis_repository: Arc::new(diagnosis_repository),
            submission_repository: Arc::new(submission_repository),
        }
    }
}

impl<LLM, DR, SR> Clone for Service<LLM, DR, SR>
where
    LLM: LLMClient,
    DR: DiagnosisRepository,
    SR: SubmissionRepository,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            diagnosis_repository: Arc::clone(&self.diagnosis_repository),
            submission_repository: Arc::clone(&self.submission_repository),
        }
    }
}
