use super::handlers::{
    hello::{__path_hello, hello},
    liveness::{__path_liveness, liveness},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(liveness, hello))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    let liveness_path = if root_path.is_empty() { "/" } else { root_path };

    Router::new()
        .route(liveness_path, get(liveness))
        .route(&format!("{}/hello", root_path), get(hello))
}
