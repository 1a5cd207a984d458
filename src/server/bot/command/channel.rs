//! Channel listing and channel messaging commands.

use serenity::all::GuildChannel;

use crate::server::{
    bot::command::{guild_id, Context},
    error::{action::ActionError, AppError},
    model::channel::{ChannelListing, ChannelSummary},
    service::action::ActionService,
    util::parse::parse_u64_from_string,
};

const NO_CHANNELS: &str = "No channels found.";
const SENT_TO_CHANNEL: &str = "This is a message sent to the specified channel!";
const NOT_ALLOWED: &str = "NOT ALLOWED";

/// Lists every channel of this server
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn allchannels(ctx: Context<'_>) -> Result<(), AppError> {
    list_channels(ctx, "all").await
}

/// Lists the text channels of this server
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn textchannels(ctx: Context<'_>) -> Result<(), AppError> {
    list_channels(ctx, "text").await
}

/// Lists the channels of this server of one type
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn channelsbytype(
    ctx: Context<'_>,
    #[description = "all, text, voice, category or stage"] channel_type: String,
) -> Result<(), AppError> {
    list_channels(ctx, &channel_type).await
}

/// Sends a fixed test message to a channel given by ID
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn sendtochannel(
    ctx: Context<'_>,
    #[description = "ID of the destination channel"] channel_id: String,
) -> Result<(), AppError> {
    let channel_id = parse_u64_from_string(channel_id)?;

    ctx.data()
        .actions()
        .send_message(channel_id, SENT_TO_CHANNEL)
        .await?;

    ctx.say("Message sent to the specified channel!").await?;

    Ok(())
}

/// Shows the name, ID and position of a channel
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn channeloptions(
    ctx: Context<'_>,
    #[description = "Channel to describe"] channel: GuildChannel,
) -> Result<(), AppError> {
    let channel = ChannelSummary::from_guild_channel(&channel);

    ctx.say(channel_options(&channel)).await?;

    Ok(())
}

/// Sends a message to another channel
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn safesend(
    ctx: Context<'_>,
    #[description = "Destination channel"] channel: GuildChannel,
    #[description = "Message to send"]
    #[rest]
    message: String,
) -> Result<(), AppError> {
    let destination = ChannelSummary::from_guild_channel(&channel);

    let reply = safe_send(
        &ctx.data().actions(),
        &destination,
        ctx.channel_id().get(),
        &message,
    )
    .await?;

    ctx.say(reply).await?;

    Ok(())
}

/// Replies with one message per listed channel.
async fn list_channels(ctx: Context<'_>, filter: &str) -> Result<(), AppError> {
    let listing = ctx
        .data()
        .actions()
        .channels_by_type(guild_id(ctx)?, filter)
        .await?;

    for line in listing_messages(&listing) {
        ctx.say(line).await?;
    }

    Ok(())
}

/// Renders a listing as chat messages.
///
/// An empty listing still produces a reply so slash invocations are acknowledged.
fn listing_messages(listing: &ChannelListing) -> Vec<String> {
    if listing.is_empty() {
        return vec![NO_CHANNELS.to_string()];
    }

    listing.iter().map(ToString::to_string).collect()
}

fn channel_options(channel: &ChannelSummary) -> String {
    format!(
        "{} (ID: {})(Position: {})",
        channel.name, channel.id, channel.position
    )
}

/// Sends `message` to `destination` unless it is the channel the command came from.
///
/// # Returns
/// - `Ok(String)` - The reply: `NOT ALLOWED` without sending, or a confirmation
/// - `Err(ActionError)` - The destination could not be resolved or Discord refused
async fn safe_send(
    actions: &ActionService<'_>,
    destination: &ChannelSummary,
    invoking_channel_id: u64,
    message: &str,
) -> Result<String, ActionError> {
    if destination.id == invoking_channel_id {
        return Ok(NOT_ALLOWED.to_string());
    }

    actions.send_message(destination.id, message).await?;

    Ok(format!("Message sent to {}!", destination.name))
}
