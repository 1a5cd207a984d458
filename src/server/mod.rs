//! Discord bot and companion HTTP API.
//!
//! Both surfaces translate their input into calls to the action service, which is
//! the only place that talks to Discord (through the `DiscordPlatform` port). A
//! moderation action therefore behaves the same whether it was triggered by a chat
//! command or by an HTTP request.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Gateway client, event handler and poise chat commands
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Surface-independent actions and permission checks
//! - **Platform** (`platform/`) - Port to Discord and its Serenity-backed implementation
//! - **Model Layer** (`model/`) - Domain models and action requests
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state for the HTTP handlers
//! - **Startup** (`startup`) - Tracing, listener and task supervision
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** or **poise** receives the request and routes it to a handler
//! 2. **Controller** or **command** converts its input into an action call
//! 3. **Service** resolves entities, checks permissions and performs the action
//! 4. **Platform** performs the Discord REST calls
//! 5. The handler renders the outcome as JSON or as a chat reply

pub mod bot;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod platform;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
