use std::future::Future;

use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnosis::{
        entities::{DiagnosisRecord, QueryAnswer, RelatedSymptoms, SubmissionRecord},
        value_objects::{DiagnoseInput, ListRelatedSymptomsInput},
    },
};

/// LLM Client trait for calling a chat-completion model
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends a single prompt and returns the raw text of the first completion.
    fn complete(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Repository trait for the persisted diagnosis collection
///
/// Implementations rewrite the whole collection on every mutation; there is
/// no locking between concurrent writers. Stored entries are read back as
/// plain JSON so that records of any earlier shape stay readable.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosisRepository: Send + Sync {
    fn read_all(&self) -> impl Future<Output = Result<Vec<Value>, CoreError>> + Send;

    fn append_and_save(
        &self,
        record: DiagnosisRecord,
    ) -> impl Future<Output = Result<DiagnosisRecord, CoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository trait for the process-lifetime submission log
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionRepository: Send + Sync {
    fn append(
        &self,
        submission: SubmissionRecord,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn list_submissions(
        &self,
    ) -> impl Future<Output = Result<Vec<SubmissionRecord>, CoreError>> + Send;

    fn list_query_answers(
        &self,
    ) -> impl Future<Output = Result<Vec<QueryAnswer>, CoreError>> + Send;
}

/// Service trait for symptom and diagnosis business logic
pub trait DiagnosisService: Send + Sync {
    fn list_related_symptoms(
        &self,
        input: ListRelatedSymptomsInput,
    ) -> impl Future<Output = Result<RelatedSymptoms, CoreError>> + Send;

    fn diagnose(
        &self,
        input: DiagnoseInput,
    ) -> impl Future<Output = Result<DiagnosisRecord, CoreError>> + Send;

    fn get_history(&self) -> impl Future<Output = Result<Vec<Value>, CoreError>> + Send;

    fn clear_history(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_submissions(
        &self,
    ) -> impl Future<Output = Result<Vec<SubmissionRecord>, CoreError>> + Send;

    fn get_query_answers(
        &self,
    ) -> impl Future<Output = Result<Vec<QueryAnswer>, CoreError>> + Send;
}
