//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::{ChannelType, GuildChannel};

/// Creates a test Serenity GuildChannel of any type.
///
/// The channel has no topic, no parent category and no permission overwrites.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Discord ID of the guild owning the channel
/// - `name` - Channel name
/// - `kind` - Channel type (text, voice, category, ...)
/// - `position` - Sorting position in the guild's channel list
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: ChannelType,
    position: u16,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": u8::from(kind),
        "guild_id": guild_id.to_string(),
        "name": name,
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "topic": null,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
