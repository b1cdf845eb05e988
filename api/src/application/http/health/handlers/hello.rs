use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HelloResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/hello",
    tag = "health",
    summary = "Hello",
    responses(
        (status = 200, body = HelloResponse)
    )
)]
pub async fn hello() -> Response<HelloResponse> {
    Response::OK(HelloResponse {
        message: "Hello World!".to_string(),
    })
}
