use axum::extract::State;
use serde_json::Value;
use symptomatic_core::domain::diagnosis::{entities::DiagnosisRecord, ports::DiagnosisService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/storage",
    tag = "diagnosis",
    summary = "Get diagnosis history",
    description = "Returns every persisted diagnosis record in insertion order, exactly as stored.",
    responses(
        (status = 200, body = Vec<DiagnosisRecord>),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn get_storage(
    State(state): State<AppState>,
) -> Result<Response<Vec<Value>>, ApiError> {
    let records = state.service.get_history().await.map_err(ApiError::from)?;

    Ok(Response::OK(records))
}
