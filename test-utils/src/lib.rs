//! Guildbot Test Utils
//!
//! Shared factories for unit tests of the guildbot crate. Tests of the action
//! service and HTTP API run against an in-memory Discord platform that lives in the
//! main crate; this crate covers the other side of the port, providing the Serenity
//! model objects needed to test the conversions from Discord's REST payloads into
//! domain models.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serenity::all::{ChannelType, Permissions};
//! use test_utils::serenity::{create_test_channel, create_test_role};
//!
//! #[test]
//! fn converts_channel() {
//!     let channel = create_test_channel(42, 10, "general", ChannelType::Text, 0);
//!     let role = create_test_role(11, "Mods", 0, 2, Permissions::KICK_MEMBERS.bits());
//!
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
