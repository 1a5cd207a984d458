use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// JSON request body extractor that rejects bad bodies with 422.
///
/// Wraps `axum::Json` so that every rejection (invalid syntax, wrong field types,
/// missing fields, missing `Content-Type`) becomes `AppError::UnprocessableEntity`
/// with a JSON error body, before the handler runs.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        Ok(Self(value))
    }
}
