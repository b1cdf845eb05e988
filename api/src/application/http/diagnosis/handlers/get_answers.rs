use axum::extract::State;
use symptomatic_core::domain::diagnosis::{entities::QueryAnswer, ports::DiagnosisService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/answer",
    tag = "diagnosis",
    summary = "Get query answers",
    description = "Returns the query/answer log. Nothing writes to it, so it is always empty.",
    responses(
        (status = 200, body = Vec<QueryAnswer>)
    )
)]
pub async fn get_answers(
    State(state): State<AppState>,
) -> Result<Response<Vec<QueryAnswer>>, ApiError> {
    let answers = state
        .service
        .get_query_answers()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(answers))
}
