//! In-memory Discord platform for tests.
//!
//! Holds guilds, members, users and channels in plain maps and records every
//! mutating call, so tests can assert both on the outcome of an action and on
//! exactly which Discord calls it made.

use std::collections::HashMap;

use serenity::all::Permissions;
use serenity::async_trait;
use tokio::sync::Mutex;

use crate::server::{
    error::platform::PlatformError,
    model::{
        channel::{ChannelKind, ChannelSummary},
        guild::{expand_administrator, DiscordUser, GuildMember, GuildSummary},
    },
    platform::DiscordPlatform,
};

/// A mutating call received by the fake.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    Ban {
        guild_id: u64,
        user_id: u64,
        reason: String,
    },
    Kick {
        guild_id: u64,
        user_id: u64,
    },
    Unban {
        guild_id: u64,
        user_id: u64,
    },
    SendMessage {
        channel_id: u64,
        text: String,
    },
}

#[derive(Default)]
pub struct FakePlatform {
    guilds: HashMap<u64, GuildSummary>,
    members: HashMap<(u64, u64), GuildMember>,
    users: HashMap<u64, DiscordUser>,
    channels: HashMap<u64, ChannelSummary>,
    /// When set, every mutating call fails with this message.
    failure: Option<&'static str>,
    calls: Mutex<Vec<PlatformCall>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_guild(mut self, guild_id: u64, name: &str, owner_id: u64) -> Self {
        self.guilds.insert(
            guild_id,
            GuildSummary {
                id: guild_id,
                name: name.to_string(),
                owner_id,
                member_count: Some(self.member_count(guild_id)),
            },
        );
        self
    }

    pub fn with_user(mut self, user_id: u64, name: &str) -> Self {
        self.users.insert(
            user_id,
            DiscordUser {
                id: user_id,
                name: name.to_string(),
            },
        );
        self
    }

    /// Adds a member to a guild. The user is registered as well.
    ///
    /// `ADMINISTRATOR` is expanded to every permission, as the Discord platform does.
    pub fn with_member(
        mut self,
        guild_id: u64,
        user_id: u64,
        name: &str,
        permissions: Permissions,
    ) -> Self {
        self.members.insert(
            (guild_id, user_id),
            GuildMember {
                user_id,
                name: name.to_string(),
                permissions: expand_administrator(permissions),
            },
        );
        let count = self.member_count(guild_id);
        if let Some(guild) = self.guilds.get_mut(&guild_id) {
            guild.member_count = Some(count);
        }
        self.with_user(user_id, name)
    }

    pub fn with_channel(
        mut self,
        guild_id: u64,
        channel_id: u64,
        name: &str,
        kind: ChannelKind,
        position: u16,
    ) -> Self {
        self.channels.insert(
            channel_id,
            ChannelSummary {
                id: channel_id,
                guild_id,
                name: name.to_string(),
                kind,
                position,
            },
        );
        self
    }

    /// Makes every mutating call fail as if Discord rejected it.
    pub fn failing(mut self, message: &'static str) -> Self {
        self.failure = Some(message);
        self
    }

    /// Mutating calls received so far, in order.
    pub async fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().await.clone()
    }

    fn member_count(&self, guild_id: u64) -> u64 {
        self.members
            .keys()
            .filter(|(guild, _)| *guild == guild_id)
            .count() as u64
    }

    async fn record(&self, call: PlatformCall) -> Result<(), PlatformError> {
        self.calls.lock().await.push(call);

        match self.failure {
            Some(message) => Err(serenity::Error::Other(message).into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DiscordPlatform for FakePlatform {
    async fn guild(&self, guild_id: u64) -> Result<Option<GuildSummary>, PlatformError> {
        Ok(self.guilds.get(&guild_id).cloned())
    }

    async fn member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<GuildMember>, PlatformError> {
        Ok(self.members.get(&(guild_id, user_id)).cloned())
    }

    async fn user(&self, user_id: u64) -> Result<Option<DiscordUser>, PlatformError> {
        Ok(self.users.get(&user_id).cloned())
    }

    async fn channel(&self, channel_id: u64) -> Result<Option<ChannelSummary>, PlatformError> {
        Ok(self.channels.get(&channel_id).cloned())
    }

    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, PlatformError> {
        Ok(self
            .channels
            .values()
            .filter(|channel| channel.guild_id == guild_id)
            .cloned()
            .collect())
    }

    async fn ban(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), PlatformError> {
        self.record(PlatformCall::Ban {
            guild_id,
            user_id,
            reason: reason.to_string(),
        })
        .await
    }

    async fn kick(&self, guild_id: u64, user_id: u64) -> Result<(), PlatformError> {
        self.record(PlatformCall::Kick { guild_id, user_id }).await
    }

    async fn unban(&self, guild_id: u64, user_id: u64) -> Result<(), PlatformError> {
        self.record(PlatformCall::Unban { guild_id, user_id }).await
    }

    async fn send_message(&self, channel_id: u64, text: &str) -> Result<(), PlatformError> {
        self.record(PlatformCall::SendMessage {
            channel_id,
            text: text.to_string(),
        })
        .await
    }
}
