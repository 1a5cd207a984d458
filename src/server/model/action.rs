//! Action request model
//!
//! Defines the surface-independent description of every action the bot can
//! perform, and the conversions from the HTTP request DTOs.

use crate::model::api::{BanUserDto, SendMessageDto};

/// A single moderation or utility action, independent of the surface it came from.
///
/// All identifiers are Discord snowflakes.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRequest {
    BanUser {
        moderator_id: u64,
        user_id: u64,
        guild_id: u64,
    },
    SendMessage {
        channel_id: u64,
        text: String,
    },
    KickUser {
        moderator_id: u64,
        user_id: u64,
        guild_id: u64,
    },
    UnbanUser {
        moderator_id: u64,
        user_id: u64,
        guild_id: u64,
    },
    QueryGuildInfo {
        guild_id: u64,
    },
    QueryChannelInfo {
        guild_id: u64,
        /// Raw channel type filter, validated by the action service.
        filter: String,
    },
}

impl From<BanUserDto> for ActionRequest {
    fn from(dto: BanUserDto) -> Self {
        Self::BanUser {
            moderator_id: dto.mod_id,
            user_id: dto.user_id,
            guild_id: dto.guild_id,
        }
    }
}

impl From<SendMessageDto> for ActionRequest {
    fn from(dto: SendMessageDto) -> Self {
        Self::SendMessage {
            channel_id: dto.channel_id,
            text: dto.message,
        }
    }
}
