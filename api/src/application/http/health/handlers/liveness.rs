pub const LIVENESS_MESSAGE: &str = "Diagnosis API is alive.";

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Liveness",
    description = "Returns a plain text message while the service is running.",
    responses(
        (status = 200, body = String, content_type = "text/plain")
    )
)]
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}
