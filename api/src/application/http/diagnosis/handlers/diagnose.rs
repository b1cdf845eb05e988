use axum::extract::State;
use symptomatic_core::domain::diagnosis::{entities::DiagnosisRecord, ports::DiagnosisService};

use crate::application::http::{
    diagnosis::validators::DiagnoseValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/diagnose",
    tag = "diagnosis",
    summary = "Diagnose a symptom",
    description = "Asks the language model for ranked diagnoses, stores the result in the history and returns the stored record.",
    responses(
        (status = 200, body = DiagnosisRecord),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = DiagnoseValidator
)]
pub async fn diagnose(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DiagnoseValidator>,
) -> Result<Response<DiagnosisRecord>, ApiError> {
    let record = state
        .service
        .diagnose(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(record))
}
