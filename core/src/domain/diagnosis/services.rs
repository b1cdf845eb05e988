use serde_json::Value;
use tracing::{error, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    diagnosis::{
        coercion::{CoercedOutput, ResponseShape, coerce},
        entities::{DiagnosisRecord, QueryAnswer, RelatedSymptoms, SubmissionRecord},
        ports::{DiagnosisRepository, DiagnosisService, LLMClient, SubmissionRepository},
        prompts::{diagnosis_prompt, related_symptoms_prompt},
        value_objects::{DiagnoseInput, ListRelatedSymptomsInput},
    },
};

/// Rejects absent or empty text. Whitespace-only text is accepted.
fn require_text(value: Option<String>, message: &str) -> Result<String, CoreError> {
    value
        .filter(|text| !text.is_empty())
        .ok_or_else(|| CoreError::InvalidInput(message.to_string()))
}

fn malformed_output(raw: String, reason: String) -> CoreError {
    error!(raw = %raw, "Failed to parse LLM response: {}", reason);
    CoreError::MalformedModelOutput { raw }
}

impl<LLM, DR, SR> DiagnosisService for Service<LLM, DR, SR>
where
    LLM: LLMClient,
    DR: DiagnosisRepository,
    SR: SubmissionRepository,
{
    async fn list_related_symptoms(
        &self,
        input: ListRelatedSymptomsInput,
    ) -> Result<RelatedSymptoms, CoreError> {
        let query = require_text(input.query, "Symptom description is required.")?;

        let raw_response = self
            .llm_client
            .complete(related_symptoms_prompt(&query))
            .await?;

        match coerce(&raw_response, ResponseShape::SymptomList) {
            CoercedOutput::SymptomList(items) => Ok(RelatedSymptoms::Listed(items)),
            CoercedOutput::ParseFailure { raw, reason } => Err(malformed_output(raw, reason)),
            other => {
                warn!("LLM returned related symptoms that are not a JSON array");
                Ok(RelatedSymptoms::Unshaped(
                    other.into_document().unwrap_or_default(),
                ))
            }
        }
    }

    async fn diagnose(&self, input: DiagnoseInput) -> Result<DiagnosisRecord, CoreError> {
        let symptom = require_text(input.symptom, "Symptom is required")?;

        let raw_response = self
            .llm_client
            .complete(diagnosis_prompt(&symptom, &input.patient))
            .await?;

        let (diagnoses, answer) = match coerce(&raw_response, ResponseShape::DiagnosisObject) {
            CoercedOutput::DiagnosisObject {
                diagnoses,
                document,
            } => (Some(diagnoses), document),
            CoercedOutput::ParseFailure { raw, reason } => {
                return Err(malformed_output(raw, reason));
            }
            other => {
                warn!("LLM diagnosis reply has no diagnoses array, storing it without one");
                (None, other.into_document().unwrap_or_default())
            }
        };

        // Persist first so that a storage failure leaves the submission log untouched.
        let record = self
            .diagnosis_repository
            .append_and_save(DiagnosisRecord::new(
                symptom.clone(),
                diagnoses,
                input.patient,
            ))
            .await?;

        self.submission_repository
            .append(SubmissionRecord {
                query: symptom,
                answer,
            })
            .await?;

        info!(
            symptom = %record.symptom,
            diagnoses = record.diagnoses.as_ref().map_or(0, Vec::len),
            "Diagnosis stored"
        );

        Ok(record)
    }

    async fn get_history(&self) -> Result<Vec<Value>, CoreError> {
        self.diagnosis_repository.read_all().await
    }

    async fn clear_history(&self) -> Result<(), CoreError> {
        self.diagnosis_repository.clear().await?;
        info!("Diagnosis history cleared");
        Ok(())
    }

    async fn get_submissions(&self) -> Result<Vec<SubmissionRecord>, CoreError> {
        self.submission_repository.list_submissions().await
    }

    async fn get_query_answers(&self) -> Result<Vec<QueryAnswer>, CoreError> {
        self.submission_repository.list_query_answers().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use serde_json::{Number, json};
    use tempfile::TempDir;

    use super::*;
    use crate::domain::diagnosis::{
        entities::{DiagnosisCandidate, DiagnosisEntry, PatientContext},
        ports::{MockDiagnosisRepository, MockLLMClient, MockSubmissionRepository},
    };
    use crate::infrastructure::diagnosis::repositories::{
        FileDiagnosisRepository, InMemorySubmissionRepository,
    };

    /// Replies with a fixed completion and records every prompt it receives.
    struct StubLLMClient {
        reply: Result<String, CoreError>,
        prompts: Arc<Mutex<Vec<String>>>,
        calls: AtomicUsize,
    }

    impl StubLLMClient {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Arc::new(Mutex::new(Vec::new())),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(error: CoreError) -> Self {
            Self {
                reply: Err(error),
                prompts: Arc::new(Mutex::new(Vec::new())),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl LLMClient for StubLLMClient {
        async fn complete(&self, prompt: String) -> Result<String, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt);
            self.reply.clone()
        }
    }

    type TestService = Service<StubLLMClient, FileDiagnosisRepository, InMemorySubmissionRepository>;

    async fn service_with(llm: StubLLMClient) -> (TestService, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileDiagnosisRepository::open(dir.path().join("storage.json"))
            .await
            .unwrap();
        let service = Service::new(llm, repository, InMemorySubmissionRepository::default());
        (service, dir)
    }

    const FLU_AND_COLD: &str =
        r#"{"diagnoses":[{"name":"Flu","probability":70},{"name":"Cold","probability":30}]}"#;

    #[tokio::test]
    async fn test_list_related_symptoms_returns_parsed_array() {
        let (service, _dir) =
            service_with(StubLLMClient::replying(r#"["Fever", "Chills", "Fatigue"]"#)).await;

        let symptoms = service
            .list_related_symptoms(ListRelatedSymptomsInput {
                query: Some("flu-like".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(
            symptoms,
            RelatedSymptoms::Listed(vec![json!("Fever"), json!("Chills"), json!("Fatigue")])
        );
        let prompts = service.llm_client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("flu-like"));
    }

    #[tokio::test]
    async fn test_list_related_symptoms_has_no_persistence_side_effect() {
        let (service, _dir) = service_with(StubLLMClient::replying(r#"["Cough"]"#)).await;

        service
            .list_related_symptoms(ListRelatedSymptomsInput {
                query: Some("cold".to_string()),
            })
            .await
            .unwrap();

        assert!(service.get_history().await.unwrap().is_empty());
        assert!(service.get_submissions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_related_symptoms_passes_unshaped_reply_through() {
        let (service, _dir) =
            service_with(StubLLMClient::replying(r#"{"related": ["Cough"]}"#)).await;

        let symptoms = service
            .list_related_symptoms(ListRelatedSymptomsInput {
                query: Some("cold".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(
            symptoms,
            RelatedSymptoms::Unshaped(json!({"related": ["Cough"]}))
        );
    }

    #[tokio::test]
    async fn test_list_related_symptoms_rejects_malformed_output() {
        let (service, _dir) =
            service_with(StubLLMClient::replying("I cannot answer that.")).await;

        let result = service
            .list_related_symptoms(ListRelatedSymptomsInput {
                query: Some("headache".to_string()),
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::MalformedModelOutput {
                raw: "I cannot answer that.".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_empty_input_fails_before_any_model_call() {
        let mut llm = MockLLMClient::new();
        llm.expect_complete().never();
        let mut diagnosis_repository = MockDiagnosisRepository::new();
        diagnosis_repository.expect_append_and_save().never();
        let mut submission_repository = MockSubmissionRepository::new();
        submission_repository.expect_append().never();

        let service = Service::new(llm, diagnosis_repository, submission_repository);

        for query in [None, Some(String::new())] {
            let result = service
                .list_related_symptoms(ListRelatedSymptomsInput { query })
                .await;
            assert!(matches!(result, Err(CoreError::InvalidInput(_))));
        }

        for symptom in [None, Some(String::new())] {
            let result = service
                .diagnose(DiagnoseInput {
                    symptom,
                    patient: PatientContext::default(),
                })
                .await;
            assert!(matches!(result, Err(CoreError::InvalidInput(_))));
        }
    }

    #[tokio::test]
    async fn test_diagnose_persists_record_and_submission() {
        let (service, _dir) = service_with(StubLLMClient::replying(FLU_AND_COLD)).await;

        let patient = PatientContext {
            age: Some(json!(34)),
            gender: Some(json!("female")),
            race: None,
        };
        let record = service
            .diagnose(DiagnoseInput {
                symptom: Some("fever and cough".to_string()),
                patient: patient.clone(),
            })
            .await
            .unwrap();

        assert_eq!(record.symptom, "fever and cough");
        assert_eq!(record.patient, patient);
        assert_eq!(
            record.diagnoses,
            Some(vec![
                DiagnosisEntry::Candidate(DiagnosisCandidate {
                    name: "Flu".to_string(),
                    probability: Number::from(70),
                }),
                DiagnosisEntry::Candidate(DiagnosisCandidate {
                    name: "Cold".to_string(),
                    probability: Number::from(30),
                }),
            ])
        );

        assert_eq!(
            service.get_history().await.unwrap(),
            vec![serde_json::to_value(&record).unwrap()]
        );

        let submissions = service.get_submissions().await.unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].query, "fever and cough");
        assert_eq!(
            submissions[0].answer,
            serde_json::from_str::<Value>(FLU_AND_COLD).unwrap()
        );
    }

    #[tokio::test]
    async fn test_diagnose_keeps_loosely_typed_patient_context() {
        let (service, _dir) = service_with(StubLLMClient::replying(FLU_AND_COLD)).await;

        let record = service
            .diagnose(DiagnoseInput {
                symptom: Some("fever".to_string()),
                patient: PatientContext {
                    age: Some(json!("42")),
                    gender: Some(json!(7)),
                    race: None,
                },
            })
            .await
            .unwrap();

        let prompts = service.llm_client.prompts.lock().unwrap().clone();
        assert!(prompts[0].contains("age 42, gender 7, race unspecified"));

        let history = service.get_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["age"], json!("42"));
        assert_eq!(history[0]["gender"], json!(7));
        assert_eq!(record.patient.age, Some(json!("42")));
    }

    #[tokio::test]
    async fn test_diagnose_strips_code_fences() {
        let reply = format!("```json\n{}\n```", FLU_AND_COLD);
        let (service, _dir) = service_with(StubLLMClient::replying(&reply)).await;

        let record = service
            .diagnose(DiagnoseInput {
                symptom: Some("fever".to_string()),
                patient: PatientContext::default(),
            })
            .await
            .unwrap();

        assert_eq!(record.diagnoses.map(|d| d.len()), Some(2));
    }

    #[tokio::test]
    async fn test_diagnose_without_diagnoses_array_stores_record_without_it() {
        let (service, _dir) = service_with(StubLLMClient::replying(r#"["Flu"]"#)).await;

        let record = service
            .diagnose(DiagnoseInput {
                symptom: Some("fever".to_string()),
                patient: PatientContext::default(),
            })
            .await
            .unwrap();

        assert_eq!(record.diagnoses, None);
        assert_eq!(service.get_history().await.unwrap().len(), 1);
        assert_eq!(
            service.get_submissions().await.unwrap()[0].answer,
            json!(["Flu"])
        );
    }

    #[tokio::test]
    async fn test_diagnose_failures_leave_both_stores_untouched() {
        let (service, _dir) =
            service_with(StubLLMClient::replying("Sorry, I am not a doctor.")).await;
        let result = service
            .diagnose(DiagnoseInput {
                symptom: Some("fever".to_string()),
                patient: PatientContext::default(),
            })
            .await;
        assert!(matches!(result, Err(CoreError::MalformedModelOutput { .. })));
        assert!(service.get_history().await.unwrap().is_empty());
        assert!(service.get_submissions().await.unwrap().is_empty());

        let (service, _dir) = service_with(StubLLMClient::failing(
            CoreError::ExternalServiceError("connection refused".to_string()),
        ))
        .await;
        let result = service
            .diagnose(DiagnoseInput {
                symptom: Some("fever".to_string()),
                patient: PatientContext::default(),
            })
            .await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
        assert_eq!(service.llm_client.calls.load(Ordering::SeqCst), 1);
        assert!(service.get_history().await.unwrap().is_empty());
        assert!(service.get_submissions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_skips_submission() {
        let mut diagnosis_repository = MockDiagnosisRepository::new();
        diagnosis_repository
            .expect_append_and_save()
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Err::<DiagnosisRecord, _>(CoreError::StorageError("disk full".to_string()))
                })
            });
        let mut submission_repository = MockSubmissionRepository::new();
        submission_repository.expect_append().never();

        let service = Service::new(
            StubLLMClient::replying(FLU_AND_COLD),
            diagnosis_repository,
            submission_repository,
        );

        let result = service
            .diagnose(DiagnoseInput {
                symptom: Some("fever".to_string()),
                patient: PatientContext::default(),
            })
            .await;
        assert!(matches!(result, Err(CoreError::StorageError(_))));
    }

    #[tokio::test]
    async fn test_clear_history_keeps_submissions() {
        let (service, _dir) = service_with(StubLLMClient::replying(FLU_AND_COLD)).await;

        for symptom in ["fever", "cough"] {
            service
                .diagnose(DiagnoseInput {
                    symptom: Some(symptom.to_string()),
                    patient: PatientContext::default(),
                })
                .await
                .unwrap();
        }

        service.clear_history().await.unwrap();

        assert!(service.get_history().await.unwrap().is_empty());
        assert_eq!(service.get_submissions().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_query_answers_stay_empty() {
        let (service, _dir) = service_with(StubLLMClient::replying(FLU_AND_COLD)).await;

        service
            .diagnose(DiagnoseInput {
                symptom: Some("fever".to_string()),
                patient: PatientContext::default(),
            })
            .await
            .unwrap();

        assert!(service.get_query_answers().await.unwrap().is_empty());
    }
}
