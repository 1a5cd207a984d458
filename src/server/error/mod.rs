//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. The same type is
//! the error type of every chat command.

pub mod action;
pub mod config;
pub mod internal;
pub mod platform;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        action::ActionError, config::ConfigError, internal::InternalError,
        platform::PlatformError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `ActionError` handles its own response mapping, while generic
/// variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal at startup; never produced while serving requests.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure of a moderation or utility action.
    ///
    /// Delegates to `ActionError::into_response()` for status code mapping
    /// (403 Forbidden, 404 Not Found, 500 Internal Server Error).
    #[error(transparent)]
    ActionErr(#[from] ActionError),

    /// Malformed input that should have been handled before reaching an action.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Results in 500 Internal Server Error, or in a
    /// fatal startup error when the gateway connection cannot be established.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// The bot's framework setup failed and the Discord client was stopped.
    ///
    /// Fatal; no command can run without a completed setup.
    #[error("Discord bot setup failed: {0}")]
    BotSetup(String),

    /// I/O error, typically from binding the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// One of the supervised tasks panicked or was aborted.
    #[error(transparent)]
    JoinErr(#[from] tokio::task::JoinError),

    /// Request body could not be deserialized into the expected type.
    ///
    /// Results in 422 Unprocessable Entity with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was wrong with the body
    #[error("{0}")]
    UnprocessableEntity(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl From<PlatformError> for AppError {
    fn from(err: PlatformError) -> Self {
        AppError::ActionErr(ActionError::External(err))
    }
}

/// Rejected JSON bodies fail closed with 422, whatever the underlying reason
/// (syntax, schema mismatch, missing content type).
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::UnprocessableEntity(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Action errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 422 Unprocessable Entity - For `UnprocessableEntity` variant
/// - Variable - For `ActionErr`, delegated to `ActionError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ActionErr(err) => err.into_response(),
            Self::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto { error: msg }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
