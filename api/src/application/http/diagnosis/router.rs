use super::handlers::{
    clear_history::{__path_clear_history, clear_history},
    diagnose::{__path_diagnose, diagnose},
    get_answers::{__path_get_answers, get_answers},
    get_storage::{__path_get_storage, get_storage},
    get_submissions::{__path_get_submissions, get_submissions},
    query_symptoms::{__path_query_symptoms, query_symptoms},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    query_symptoms,
    diagnose,
    clear_history,
    get_storage,
    get_submissions,
    get_answers
))]
pub struct DiagnosisApiDoc;

pub fn diagnosis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/query", state.args.server.root_path),
            post(query_symptoms),
        )
        .route(
            &format!("{}/diagnose", state.args.server.root_path),
            post(diagnose),
        )
        .route(
            &format!("{}/clear-history", state.args.server.root_path),
            delete(clear_history),
        )
        .route(
            &format!("{}/storage", state.args.server.root_path),
            get(get_storage),
        )
        .route(
            &format!("{}/submit", state.args.server.root_path),
            get(get_submissions),
        )
        .route(
            &format!("{}/answer", state.args.server.root_path),
            get(get_answers),
        )
}
