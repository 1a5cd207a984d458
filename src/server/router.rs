use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{
    model::api::{BanUserDto, ErrorDto, MessageDto, SendMessageDto, StatusDto},
    server::{
        controller::{
            action::{self, ban_user, send_message},
            health::{self, health, ping},
        },
        state::AppState,
    },
};

/// OpenAPI document of the HTTP API.
#[derive(OpenApi)]
#[openapi(
    paths(health::health, health::ping, action::ban_user, action::send_message),
    components(schemas(StatusDto, MessageDto, ErrorDto, BanUserDto, SendMessageDto)),
    tags(
        (name = "health", description = "Liveness checks"),
        (name = "action", description = "Moderation and messaging actions shared with the bot")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/ping", get(ping))
        .route("/ban_user", post(ban_user))
        .route("/send_message", post(send_message))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(TraceLayer::new_for_http())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
