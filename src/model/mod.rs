//! Wire-level DTOs shared by the HTTP API and its OpenAPI document.

pub mod api;
