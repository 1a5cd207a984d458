//! Port between the action service and Discord.
//!
//! The action service never talks to Serenity directly. Every lookup and every
//! mutating call goes through [`DiscordPlatform`], which resolves entities by ID
//! and returns `None` when Discord does not know them. Production uses
//! [`discord::SerenityPlatform`], backed by the bot's shared HTTP client; tests use
//! an in-memory fake that records the mutating calls it receives.
//!
//! Implementations must be safe to share between the gateway task and concurrent
//! HTTP requests.

pub mod discord;

#[cfg(test)]
pub mod fake;

use serenity::async_trait;

use crate::server::{
    error::platform::PlatformError,
    model::{
        channel::ChannelSummary,
        guild::{DiscordUser, GuildMember, GuildSummary},
    },
};

#[async_trait]
pub trait DiscordPlatform: Send + Sync {
    /// Resolves a guild the bot can see.
    async fn guild(&self, guild_id: u64) -> Result<Option<GuildSummary>, PlatformError>;

    /// Resolves a current member of a guild along with their guild permissions.
    async fn member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<GuildMember>, PlatformError>;

    /// Resolves any Discord user, member of a shared guild or not.
    async fn user(&self, user_id: u64) -> Result<Option<DiscordUser>, PlatformError>;

    /// Resolves a guild channel. Direct message channels resolve to `None`.
    async fn channel(&self, channel_id: u64) -> Result<Option<ChannelSummary>, PlatformError>;

    /// Lists every channel of a guild in the order Discord returns them.
    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, PlatformError>;

    async fn ban(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), PlatformError>;

    async fn kick(&self, guild_id: u64, user_id: u64) -> Result<(), PlatformError>;

    async fn unban(&self, guild_id: u64, user_id: u64) -> Result<(), PlatformError>;

    async fn send_message(&self, channel_id: u64, text: &str) -> Result<(), PlatformError>;
}
