use axum::extract::State;
use serde::{Deserialize, Serialize};
use symptomatic_core::domain::diagnosis::ports::DiagnosisService;
use tracing::error;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClearHistoryResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/clear-history",
    tag = "diagnosis",
    summary = "Clear diagnosis history",
    description = "Replaces the persisted diagnosis history with an empty collection. The in-memory submission log is kept.",
    responses(
        (status = 200, body = ClearHistoryResponse),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn clear_history(
    State(state): State<AppState>,
) -> Result<Response<ClearHistoryResponse>, ApiError> {
    state.service.clear_history().await.map_err(|e| {
        error!("Failed to clear history: {}", e);
        ApiError::InternalServerError("Failed to clear history.".to_string())
    })?;

    Ok(Response::OK(ClearHistoryResponse {
        message: "History cleared successfully.".to_string(),
    }))
}
