use axum::extract::State;
use symptomatic_core::domain::diagnosis::{entities::SubmissionRecord, ports::DiagnosisService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/submit",
    tag = "diagnosis",
    summary = "Get submissions",
    description = "Returns the diagnose calls made since the process started, with the full model reply.",
    responses(
        (status = 200, body = Vec<SubmissionRecord>)
    )
)]
pub async fn get_submissions(
    State(state): State<AppState>,
) -> Result<Response<Vec<SubmissionRecord>>, ApiError> {
    let submissions = state
        .service
        .get_submissions()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(submissions))
}
