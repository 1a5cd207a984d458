//! Service layer for business logic.
//!
//! This module contains the service layer of the application, which sits between the
//! surfaces (chat commands and HTTP controllers) and the Discord platform. Services
//! are responsible for:
//!
//! - **Business Logic**: Validating input and checking moderator permissions
//! - **Orchestration**: Resolving guilds, members and channels before acting on them
//! - **Domain Models**: Working with domain models rather than DTOs or Serenity structs

pub mod action;

#[cfg(test)]
mod test;
