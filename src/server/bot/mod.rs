//! Discord bot integration: the gateway client, its event handler and the chat commands.
//!
//! Commands are built with poise and registered both as prefix commands (the
//! configured prefix, `?` by default) and as slash commands. Every command that
//! touches guild state goes through the action service, so chat and HTTP share the
//! same permission checks and failure reasons.
//!
//! The bot is initialized during startup and runs in its own task next to the HTTP
//! listener. Its HTTP client is shared with the HTTP API through the Discord
//! platform, so both surfaces use a single connection pool and rate limiter.
//!
//! # Gateway Intents
//!
//! The bot requests the non-privileged intents plus:
//! - `MESSAGE_CONTENT` - Read the content of prefix commands (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` must be enabled in the Discord Developer Portal for
//! prefix commands to work. Slash commands work without it.

pub mod command;
pub mod handler;
pub mod start;
