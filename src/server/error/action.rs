use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::platform::PlatformError};

/// Discord entity an action failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Guild,
    User,
    Member,
    Channel,
    Owner,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Guild => "Guild",
            Self::User => "User",
            Self::Member => "Member",
            Self::Channel => "Channel",
            Self::Owner => "Owner",
        };
        f.write_str(name)
    }
}

/// Coarse classification of an [`ActionError`], used by both surfaces to pick
/// their presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionErrorKind {
    NotFound,
    Forbidden,
    InvalidArgument,
    ExternalFailure,
}

/// Failure of a moderation or utility action.
///
/// Returned by every operation of the action service. The `Display` output is the
/// human-readable reason shown in chat and in the `error` field of API responses.
#[derive(Error, Debug)]
pub enum ActionError {
    /// A guild, user, member, channel or guild owner could not be resolved.
    ///
    /// Results in 404 Not Found.
    #[error("{0} not found")]
    NotFound(Resource),

    /// The acting moderator lacks a capability required by the action.
    ///
    /// Results in 403 Forbidden.
    #[error("{0}")]
    Forbidden(String),

    /// An enumerated argument (such as a channel type filter) was not recognized.
    ///
    /// Results in 500 Internal Server Error carrying the reason.
    #[error("{0}")]
    InvalidArgument(String),

    /// Discord rejected or failed the underlying call.
    ///
    /// Results in 500 Internal Server Error with a generic message; the details
    /// are logged server-side.
    #[error(transparent)]
    External(#[from] PlatformError),
}

impl ActionError {
    pub fn kind(&self) -> ActionErrorKind {
        match self {
            Self::NotFound(_) => ActionErrorKind::NotFound,
            Self::Forbidden(_) => ActionErrorKind::Forbidden,
            Self::InvalidArgument(_) => ActionErrorKind::InvalidArgument,
            Self::External(_) => ActionErrorKind::ExternalFailure,
        }
    }
}

/// Converts action failures into HTTP responses.
///
/// - `NotFound` → 404 Not Found with the reason
/// - `Forbidden` → 403 Forbidden with the reason
/// - `InvalidArgument` → 500 Internal Server Error with the reason
/// - `External` → 500 Internal Server Error with a generic message
impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ActionErrorKind::NotFound => StatusCode::NOT_FOUND,
            ActionErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ActionErrorKind::InvalidArgument | ActionErrorKind::ExternalFailure => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let error = match self {
            Self::External(err) => {
                tracing::error!("{}", err);
                "Internal server error".to_string()
            }
            err => err.to_string(),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
