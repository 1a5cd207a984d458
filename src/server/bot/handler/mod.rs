use serenity::all::{Context, EventHandler, Guild, Ready};
use serenity::async_trait;

pub mod ready;

/// Discord bot event handler
///
/// Commands are dispatched by the poise framework; this handler only observes
/// connection events.
pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, _ctx: Context, guild: Guild, is_new: Option<bool>) {
        if is_new == Some(true) {
            tracing::info!("Joined guild {} ({})", guild.name, guild.id);
        } else {
            tracing::debug!("Guild available: {} ({})", guild.name, guild.id);
        }
    }
}
