//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON shaped like
//! Discord's REST responses, so the objects go through the same deserialization as
//! real payloads.
//!
//! # Available Factories
//!
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `role::create_test_role` - Create Serenity Role objects

pub mod channel;
pub mod role;

pub use channel::create_test_channel;
pub use role::create_test_role;
