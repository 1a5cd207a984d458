//! Server-side domain models and request types.
//!
//! This module contains domain models used throughout the service layer. Discord
//! structs are converted into these models at the platform boundary, and HTTP DTOs
//! are converted into action requests at the controller boundary, so the action
//! service never sees either.

pub mod action;
pub mod channel;
pub mod guild;
