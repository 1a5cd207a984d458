use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::{MessageDto, StatusDto};

pub static HEALTH_TAG: &str = "health";

/// GET /health - Liveness check
///
/// Always succeeds without touching Discord, so it reports the API as healthy even
/// while the bot is disconnected.
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API is up", body = StatusDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatusDto {
            status: "ok".to_string(),
        }),
    )
}

/// GET /ping - Fixed pong reply
#[utoipa::path(
    get,
    path = "/ping",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Pong", body = MessageDto)
    ),
)]
pub async fn ping() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "pong".to_string(),
        }),
    )
}
