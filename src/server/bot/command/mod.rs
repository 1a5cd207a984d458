//! Chat commands.
//!
//! Each command parses its arguments through poise, delegates to the action service
//! and replies in the invoking channel. Failures propagate as [`AppError`] and are
//! rendered by [`on_error`] as their plain-text reason.

use std::sync::Arc;

use crate::server::{
    error::{
        action::{ActionError, Resource},
        AppError,
    },
    platform::DiscordPlatform,
    service::action::ActionService,
};

pub mod channel;
pub mod greeting;
pub mod guild;
pub mod moderation;

pub type Context<'a> = poise::Context<'a, Data, AppError>;

/// User data shared by every command invocation.
pub struct Data {
    platform: Arc<dyn DiscordPlatform>,
}

impl Data {
    pub fn new(platform: Arc<dyn DiscordPlatform>) -> Self {
        Self { platform }
    }

    pub fn actions(&self) -> ActionService<'_> {
        ActionService::new(self.platform.as_ref())
    }
}

/// Every command registered with the framework, prefix and slash alike.
pub fn commands() -> Vec<poise::Command<Data, AppError>> {
    vec![
        greeting::helloworld(),
        greeting::byeworld(),
        greeting::greet(),
        channel::allchannels(),
        channel::textchannels(),
        channel::channelsbytype(),
        channel::sendtochannel(),
        channel::channeloptions(),
        channel::safesend(),
        guild::guildinfo(),
        moderation::moderate(),
    ]
}

/// Guild the command was invoked in.
///
/// Guild-only commands are rejected by poise outside a guild, so `None` only
/// happens if that check is removed.
fn guild_id(ctx: Context<'_>) -> Result<u64, AppError> {
    ctx.guild_id()
        .map(|id| id.get())
        .ok_or(AppError::ActionErr(ActionError::NotFound(Resource::Guild)))
}

/// Reports command failures back to the invoking channel.
///
/// Errors returned by a command are replied as their reason. A setup failure is only
/// logged here; the setup hook already stopped the client. Everything else
/// (argument parse failures, missing permissions, guild-only violations) is handled
/// by poise's built-in handler, which also replies in chat.
pub async fn on_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            match &error {
                AppError::ActionErr(ActionError::External(err)) => {
                    tracing::error!("Command {} failed: {}", ctx.command().qualified_name, err)
                }
                err => tracing::warn!("Command {} failed: {}", ctx.command().qualified_name, err),
            }

            if let Err(e) = ctx.say(error.to_string()).await {
                tracing::error!("Failed to report command error: {}", e);
            }
        }
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("Bot setup failed: {}", error);
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling command error: {}", e);
            }
        }
    }
}
