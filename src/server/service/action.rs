//! Moderation and utility actions shared by the chat commands and the HTTP API.
//!
//! Each operation resolves the entities it needs through the Discord platform,
//! checks the acting moderator's permissions where the action mutates guild
//! membership, then performs a single Discord call. Nothing is cached between calls
//! and nothing is retried: a failed Discord call is returned as
//! `ActionError::External` right away.

use serenity::all::Permissions;

use crate::server::{
    error::action::{ActionError, Resource},
    model::{
        action::ActionRequest,
        channel::{ChannelListing, ChannelTypeFilter},
        guild::{GuildInfo, GuildMember},
    },
    platform::DiscordPlatform,
};

/// Audit log reason attached to every ban.
pub const BAN_REASON: &str = "Banned via API";

pub struct ActionService<'a> {
    platform: &'a dyn DiscordPlatform,
}

impl<'a> ActionService<'a> {
    /// Creates a new ActionService instance.
    ///
    /// # Arguments
    /// - `platform` - Discord platform used for every lookup and call
    pub fn new(platform: &'a dyn DiscordPlatform) -> Self {
        Self { platform }
    }

    /// Executes an action request, rendering its outcome as a message.
    ///
    /// Guild info is rendered as its multi-line block and channel listings as one
    /// `- name (ID: id)` line per channel.
    ///
    /// # Arguments
    /// - `request` - The action to perform
    ///
    /// # Returns
    /// - `Ok(String)` - Human-readable success message
    /// - `Err(ActionError)` - The action could not be performed
    pub async fn execute(&self, request: ActionRequest) -> Result<String, ActionError> {
        match request {
            ActionRequest::BanUser {
                moderator_id,
                user_id,
                guild_id,
            } => self.ban_user(moderator_id, user_id, guild_id).await,
            ActionRequest::SendMessage { channel_id, text } => {
                self.send_message(channel_id, &text).await
            }
            ActionRequest::KickUser {
                moderator_id,
                user_id,
                guild_id,
            } => self.kick_user(moderator_id, user_id, guild_id).await,
            ActionRequest::UnbanUser {
                moderator_id,
                user_id,
                guild_id,
            } => self.unban_user(moderator_id, user_id, guild_id).await,
            ActionRequest::QueryGuildInfo { guild_id } => {
                Ok(self.guild_info(guild_id).await?.to_string())
            }
            ActionRequest::QueryChannelInfo { guild_id, filter } => {
                let listing = self.channels_by_type(guild_id, &filter).await?;
                let lines: Vec<String> = listing.iter().map(ToString::to_string).collect();
                Ok(lines.join("\n"))
            }
        }
    }

    /// Bans a member of a guild on behalf of a moderator.
    ///
    /// The moderator must be a member of the guild holding both `BAN_MEMBERS` and
    /// `ADMINISTRATOR`. The ban is issued with the fixed audit reason [`BAN_REASON`].
    ///
    /// # Arguments
    /// - `moderator_id` - Discord ID of the moderator performing the ban
    /// - `user_id` - Discord ID of the member to ban
    /// - `guild_id` - Discord ID of the guild
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation referencing both users
    /// - `Err(ActionError::NotFound(Guild))` - Guild cannot be resolved
    /// - `Err(ActionError::Forbidden)` - Moderator is not a member or lacks a permission
    /// - `Err(ActionError::NotFound(User))` - Target is not a member of the guild
    /// - `Err(ActionError::External)` - Discord rejected the ban
    pub async fn ban_user(
        &self,
        moderator_id: u64,
        user_id: u64,
        guild_id: u64,
    ) -> Result<String, ActionError> {
        self.require_guild(guild_id).await?;
        self.require_moderator(
            guild_id,
            moderator_id,
            Permissions::BAN_MEMBERS | Permissions::ADMINISTRATOR,
            "ban members and administrator",
        )
        .await?;

        if self.platform.member(guild_id, user_id).await?.is_none() {
            return Err(ActionError::NotFound(Resource::User));
        }

        self.platform.ban(guild_id, user_id, BAN_REASON).await?;

        tracing::info!(
            "User {} banned from guild {} by moderator {}",
            user_id,
            guild_id,
            moderator_id
        );

        Ok(format!(
            "User {} has been banned by moderator {}",
            user_id, moderator_id
        ))
    }

    /// Kicks a member from a guild on behalf of a moderator.
    ///
    /// The moderator must be a member of the guild holding `KICK_MEMBERS`.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation referencing both users
    /// - `Err(ActionError::NotFound(Guild))` - Guild cannot be resolved
    /// - `Err(ActionError::Forbidden)` - Moderator is not a member or lacks the permission
    /// - `Err(ActionError::NotFound(Member))` - Target is not a member of the guild
    /// - `Err(ActionError::External)` - Discord rejected the kick
    pub async fn kick_user(
        &self,
        moderator_id: u64,
        user_id: u64,
        guild_id: u64,
    ) -> Result<String, ActionError> {
        self.require_guild(guild_id).await?;
        self.require_moderator(
            guild_id,
            moderator_id,
            Permissions::KICK_MEMBERS,
            "kick members",
        )
        .await?;

        if self.platform.member(guild_id, user_id).await?.is_none() {
            return Err(ActionError::NotFound(Resource::Member));
        }

        self.platform.kick(guild_id, user_id).await?;

        tracing::info!(
            "User {} kicked from guild {} by moderator {}",
            user_id,
            guild_id,
            moderator_id
        );

        Ok(format!(
            "User {} has been kicked by moderator {}",
            user_id, moderator_id
        ))
    }

    /// Lifts a ban on behalf of a moderator.
    ///
    /// The moderator must be a member of the guild holding `BAN_MEMBERS`. The target
    /// only needs to be a known Discord user since banned users are not members.
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation referencing both users
    /// - `Err(ActionError::NotFound(Guild))` - Guild cannot be resolved
    /// - `Err(ActionError::Forbidden)` - Moderator is not a member or lacks the permission
    /// - `Err(ActionError::NotFound(User))` - Target user cannot be resolved
    /// - `Err(ActionError::External)` - Discord rejected the unban (e.g. user not banned)
    pub async fn unban_user(
        &self,
        moderator_id: u64,
        user_id: u64,
        guild_id: u64,
    ) -> Result<String, ActionError> {
        self.require_guild(guild_id).await?;
        self.require_moderator(
            guild_id,
            moderator_id,
            Permissions::BAN_MEMBERS,
            "ban members",
        )
        .await?;

        if self.platform.user(user_id).await?.is_none() {
            return Err(ActionError::NotFound(Resource::User));
        }

        self.platform.unban(guild_id, user_id).await?;

        tracing::info!(
            "User {} unbanned from guild {} by moderator {}",
            user_id,
            guild_id,
            moderator_id
        );

        Ok(format!(
            "User {} has been unbanned by moderator {}",
            user_id, moderator_id
        ))
    }

    /// Sends a message to a guild channel.
    ///
    /// No permission check is performed: whoever can reach a surface can post to any
    /// channel the bot can write to.
    ///
    /// # Arguments
    /// - `channel_id` - Discord ID of the destination channel
    /// - `text` - Message content, sent verbatim
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation referencing the channel
    /// - `Err(ActionError::NotFound(Channel))` - Channel cannot be resolved
    /// - `Err(ActionError::External)` - Discord rejected the message
    pub async fn send_message(&self, channel_id: u64, text: &str) -> Result<String, ActionError> {
        if self.platform.channel(channel_id).await?.is_none() {
            return Err(ActionError::NotFound(Resource::Channel));
        }

        self.platform.send_message(channel_id, text).await?;

        tracing::debug!("Message sent to channel {}", channel_id);

        Ok(format!("Message sent to channel {}", channel_id))
    }

    /// Gathers the name, ID, member count and owner of a guild.
    ///
    /// # Returns
    /// - `Ok(GuildInfo)` - Guild details including the owner's name
    /// - `Err(ActionError::NotFound(Guild))` - Guild cannot be resolved
    /// - `Err(ActionError::NotFound(Owner))` - Guild owner cannot be resolved
    pub async fn guild_info(&self, guild_id: u64) -> Result<GuildInfo, ActionError> {
        let Some(guild) = self.platform.guild(guild_id).await? else {
            return Err(ActionError::NotFound(Resource::Guild));
        };

        let Some(owner) = self.platform.user(guild.owner_id).await? else {
            return Err(ActionError::NotFound(Resource::Owner));
        };

        Ok(GuildInfo {
            id: guild.id,
            name: guild.name,
            member_count: guild.member_count,
            owner_id: owner.id,
            owner_name: owner.name,
        })
    }

    /// Lists the channels of a guild matching a channel type filter.
    ///
    /// The filter is validated before Discord is contacted, so an unknown filter fails
    /// the same way for every guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    /// - `filter` - One of `all`, `text`, `voice`, `category`, `stage` (any case)
    ///
    /// # Returns
    /// - `Ok(ChannelListing)` - Lazily filtered channels, ordered by position
    /// - `Err(ActionError::InvalidArgument)` - Unknown filter
    /// - `Err(ActionError::NotFound(Guild))` - Guild cannot be resolved
    pub async fn channels_by_type(
        &self,
        guild_id: u64,
        filter: &str,
    ) -> Result<ChannelListing, ActionError> {
        let filter = filter.parse::<ChannelTypeFilter>()?;

        self.require_guild(guild_id).await?;

        let channels = self.platform.guild_channels(guild_id).await?;

        Ok(ChannelListing::new(channels, filter))
    }

    async fn require_guild(&self, guild_id: u64) -> Result<(), ActionError> {
        match self.platform.guild(guild_id).await? {
            Some(_) => Ok(()),
            None => Err(ActionError::NotFound(Resource::Guild)),
        }
    }

    /// Resolves the acting moderator and checks they hold every `required` permission.
    ///
    /// Re-resolved on every call; permissions may change between actions.
    async fn require_moderator(
        &self,
        guild_id: u64,
        moderator_id: u64,
        required: Permissions,
        description: &str,
    ) -> Result<GuildMember, ActionError> {
        let Some(moderator) = self.platform.member(guild_id, moderator_id).await? else {
            tracing::warn!(
                "User {} attempted a moderation action in guild {} but is not a member",
                moderator_id,
                guild_id
            );
            return Err(ActionError::Forbidden(
                "Moderator is not a member of this guild".to_string(),
            ));
        };

        if !moderator.has(required) {
            tracing::warn!(
                "User {} attempted a moderation action in guild {} without {} permissions",
                moderator_id,
                guild_id,
                description
            );
            return Err(ActionError::Forbidden(format!(
                "Moderator lacks the {} permissions",
                description
            )));
        }

        Ok(moderator)
    }
}
