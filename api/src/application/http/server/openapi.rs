use utoipa::OpenApi;

use crate::application::http::{diagnosis::router::DiagnosisApiDoc, health::HealthApiDoc};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Symptomatic API",
        description = "Related-symptom lookup and ranked diagnoses backed by a language model"
    ),
    tags(
        (name = "diagnosis", description = "Symptom lookup, diagnoses and history"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// The full document, merging every feature's paths.
    pub fn document() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(DiagnosisApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
