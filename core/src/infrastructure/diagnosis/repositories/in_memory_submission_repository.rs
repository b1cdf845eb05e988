use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diagnosis::{
        entities::{QueryAnswer, SubmissionRecord},
        ports::SubmissionRepository,
    },
};

/// Process-lifetime submission log. Lost on restart.
///
/// `query_answers` is exposed read-only and nothing ever writes to it.
#[derive(Debug, Default)]
pub struct InMemorySubmissionRepository {
    submissions: RwLock<Vec<SubmissionRecord>>,
    query_answers: RwLock<Vec<QueryAnswer>>,
}

impl SubmissionRepository for InMemorySubmissionRepository {
    async fn append(&self, submission: SubmissionRecord) -> Result<(), CoreError> {
        self.submissions.write().await.push(submission);
        Ok(())
    }

    async fn list_submissions(&self) -> Result<Vec<SubmissionRecord>, CoreError> {
        Ok(self.submissions.read().await.clone())
    }

    async fn list_query_answers(&self) -> Result<Vec<QueryAnswer>, CoreError> {
        Ok(self.query_answers.read().await.clone())
    }
}
