//! HTTP request handlers.
//!
//! Controllers deserialize request bodies into DTOs, convert them into action
//! requests, run them through the action service and map the outcome to a JSON
//! response. Error status codes come from `AppError`'s `IntoResponse`.

pub mod action;
pub mod health;
