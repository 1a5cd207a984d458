use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned by successful actions and by the health check.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct StatusDto {
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Request body of `POST /ban_user`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BanUserDto {
    /// Discord ID of the moderator performing the ban.
    pub mod_id: u64,
    /// Discord ID of the user to ban.
    pub user_id: u64,
    /// Discord ID of the guild the ban applies to.
    pub guild_id: u64,
}

/// Request body of `POST /send_message`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SendMessageDto {
    pub channel_id: u64,
    pub message: String,
}
