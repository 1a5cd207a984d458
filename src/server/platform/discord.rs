//! Discord platform backed by Serenity's REST client.
//!
//! Every call goes straight to Discord's HTTP API through the same `Http` instance the
//! gateway client uses, so rate limits are shared between the chat and HTTP surfaces.
//! Nothing is cached: each lookup reflects Discord's state at the time of the call.

use std::sync::Arc;

use serenity::all::{ChannelId, CreateMessage, GuildId, UserId};
use serenity::async_trait;
use serenity::http::Http;

use crate::server::{
    error::platform::PlatformError,
    model::{
        channel::ChannelSummary,
        guild::{DiscordUser, GuildMember, GuildSummary},
    },
    platform::DiscordPlatform,
};

/// Kicks and unbans carry no audit log reason.
const NO_REASON: Option<&str> = None;

pub struct SerenityPlatform {
    http: Arc<Http>,
}

impl SerenityPlatform {
    /// Creates a platform using the bot's HTTP client.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client shared with the gateway client
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

/// Converts a raw ID into a Serenity ID type.
///
/// Discord never issues the ID 0 and Serenity panics on it, so 0 is treated as an
/// ID that resolves to nothing.
fn snowflake<T: From<u64>>(id: u64) -> Option<T> {
    (id != 0).then(|| T::from(id))
}

/// Like [`snowflake`], for IDs that must be valid because the entity was resolved
/// beforehand.
fn resolved_id<T: From<u64>>(id: u64) -> Result<T, PlatformError> {
    snowflake(id).ok_or_else(|| serenity::Error::Other("ID 0 is not a valid snowflake").into())
}

/// Turns the result of a lookup into an optional value.
///
/// Discord answers 404 for unknown entities and 403 for guilds and channels the bot
/// cannot access; both mean the entity cannot be resolved. Any other failure is
/// returned as an error.
fn found<T>(result: serenity::Result<T>) -> Result<Option<T>, PlatformError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(serenity::Error::Http(err))
            if matches!(err.status_code().map(|status| status.as_u16()), Some(403 | 404)) =>
        {
            tracing::debug!("Discord lookup unresolved: {}", err);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

#[async_trait]
impl DiscordPlatform for SerenityPlatform {
    async fn guild(&self, guild_id: u64) -> Result<Option<GuildSummary>, PlatformError> {
        let Some(guild_id) = snowflake::<GuildId>(guild_id) else {
            return Ok(None);
        };

        let guild = found(self.http.get_guild_with_counts(guild_id).await)?;

        Ok(guild.map(|guild| GuildSummary::from_partial_guild(&guild)))
    }

    async fn member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<GuildMember>, PlatformError> {
        let (Some(guild_id), Some(user_id)) =
            (snowflake::<GuildId>(guild_id), snowflake::<UserId>(user_id))
        else {
            return Ok(None);
        };

        // The guild provides the owner and roles needed to resolve permissions
        let Some(guild) = found(self.http.get_guild(guild_id).await)? else {
            return Ok(None);
        };

        let member = found(self.http.get_member(guild_id, user_id).await)?;

        Ok(member.map(|member| GuildMember::from_member(&guild, &member)))
    }

    async fn user(&self, user_id: u64) -> Result<Option<DiscordUser>, PlatformError> {
        let Some(user_id) = snowflake::<UserId>(user_id) else {
            return Ok(None);
        };

        let user = found(self.http.get_user(user_id).await)?;

        Ok(user.as_ref().map(DiscordUser::from))
    }

    async fn channel(&self, channel_id: u64) -> Result<Option<ChannelSummary>, PlatformError> {
        let Some(channel_id) = snowflake::<ChannelId>(channel_id) else {
            return Ok(None);
        };

        let channel = found(self.http.get_channel(channel_id).await)?;

        Ok(channel
            .and_then(|channel| channel.guild())
            .map(|channel| ChannelSummary::from_guild_channel(&channel)))
    }

    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, PlatformError> {
        let Some(guild_id) = snowflake::<GuildId>(guild_id) else {
            return Ok(Vec::new());
        };

        let channels = self.http.get_channels(guild_id).await?;

        Ok(channels
            .iter()
            .map(ChannelSummary::from_guild_channel)
            .collect())
    }

    async fn ban(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), PlatformError> {
        let (guild_id, user_id) = (resolved_id::<GuildId>(guild_id)?, resolved_id(user_id)?);

        self.http.ban_user(guild_id, user_id, 0, Some(reason)).await?;

        Ok(())
    }

    async fn kick(&self, guild_id: u64, user_id: u64) -> Result<(), PlatformError> {
        let (guild_id, user_id) = (resolved_id::<GuildId>(guild_id)?, resolved_id(user_id)?);

        self.http.kick_member(guild_id, user_id, NO_REASON).await?;

        Ok(())
    }

    async fn unban(&self, guild_id: u64, user_id: u64) -> Result<(), PlatformError> {
        let (guild_id, user_id) = (resolved_id::<GuildId>(guild_id)?, resolved_id(user_id)?);

        self.http.remove_ban(guild_id, user_id, NO_REASON).await?;

        Ok(())
    }

    async fn send_message(&self, channel_id: u64, text: &str) -> Result<(), PlatformError> {
        let message = CreateMessage::new().content(text);

        resolved_id::<ChannelId>(channel_id)?
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }
}
