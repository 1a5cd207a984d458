use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{BanUserDto, ErrorDto, SendMessageDto, StatusDto},
    server::{
        error::AppError, model::action::ActionRequest, service::action::ActionService,
        state::AppState, util::json::ApiJson,
    },
};

pub static ACTION_TAG: &str = "action";

/// POST /ban_user - Ban a guild member on behalf of a moderator
///
/// The moderator must be a member of the guild holding both the ban members and
/// administrator permissions. Callers are not authenticated; anyone able to reach the
/// API can submit a ban naming any moderator.
///
/// # Returns
/// - `200 OK`: Ban issued
/// - `403 Forbidden`: Moderator not in the guild or missing a permission
/// - `404 Not Found`: Guild or target user not found
/// - `422 Unprocessable Entity`: Malformed body
/// - `500 Internal Server Error`: Discord rejected the ban
#[utoipa::path(
    post,
    path = "/ban_user",
    tag = ACTION_TAG,
    request_body = BanUserDto,
    responses(
        (status = 200, description = "User banned", body = StatusDto),
        (status = 403, description = "Moderator lacks required permissions", body = ErrorDto),
        (status = 404, description = "Guild or user not found", body = ErrorDto),
        (status = 422, description = "Malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ban_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BanUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = ActionService::new(state.platform.as_ref())
        .execute(ActionRequest::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(StatusDto { status })))
}

/// POST /send_message - Send a message to a channel
///
/// # Returns
/// - `200 OK`: Message sent
/// - `404 Not Found`: Channel not found
/// - `422 Unprocessable Entity`: Malformed body
/// - `500 Internal Server Error`: Discord rejected the message
#[utoipa::path(
    post,
    path = "/send_message",
    tag = ACTION_TAG,
    request_body = SendMessageDto,
    responses(
        (status = 200, description = "Message sent", body = StatusDto),
        (status = 404, description = "Channel not found", body = ErrorDto),
        (status = 422, description = "Malformed request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = ActionService::new(state.platform.as_ref())
        .execute(ActionRequest::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(StatusDto { status })))
}
