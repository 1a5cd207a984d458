//! Ready event handler.
//!
//! Fired each time a shard completes the gateway handshake, including after a
//! reconnect. Slash command registration is not done here; it happens once per
//! process in the framework setup hook.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::listening("/greet")));
}
