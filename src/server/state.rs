//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the HTTP API. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use std::sync::Arc;

use crate::server::platform::DiscordPlatform;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: the only field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Discord platform used by the action service.
    ///
    /// The same instance backs the chat commands, so both surfaces share one
    /// Discord HTTP client and its rate limits.
    pub platform: Arc<dyn DiscordPlatform>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `platform` - Discord platform shared with the bot
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(platform: Arc<dyn DiscordPlatform>) -> Self {
        Self { platform }
    }
}
