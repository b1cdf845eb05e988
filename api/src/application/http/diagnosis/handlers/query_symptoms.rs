use axum::extract::State;
use serde::{Deserialize, Serialize};
use symptomatic_core::domain::diagnosis::{entities::RelatedSymptoms, ports::DiagnosisService};
use utoipa::ToSchema;

use crate::application::http::{
    diagnosis::validators::QuerySymptomsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct QuerySymptomsResponse {
    pub symptoms: RelatedSymptoms,
}

#[utoipa::path(
    post,
    path = "/query",
    tag = "diagnosis",
    summary = "List related symptoms",
    description = "Asks the language model for symptoms related to the free-text query.",
    responses(
        (status = 200, body = QuerySymptomsResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = QuerySymptomsValidator
)]
pub async fn query_symptoms(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<QuerySymptomsValidator>,
) -> Result<Response<QuerySymptomsResponse>, ApiError> {
    let symptoms = state
        .service
        .list_related_symptoms(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(QuerySymptomsResponse { symptoms }))
}
