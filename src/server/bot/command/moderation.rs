//! The `moderate` command group.
//!
//! The invoking user is the moderator: the action service checks their permissions
//! in the current guild before Discord is asked to kick, ban or unban anyone.

use serenity::all::{Member, User};

use crate::server::{
    bot::command::{guild_id, Context},
    error::AppError,
};

/// Moderation commands
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    subcommands("kick", "ban", "unban"),
    subcommand_required
)]
pub async fn moderate(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Kick a member from the server
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "Member to kick"] member: Member,
) -> Result<(), AppError> {
    ctx.data()
        .actions()
        .kick_user(ctx.author().id.get(), member.user.id.get(), guild_id(ctx)?)
        .await?;

    ctx.say(outcome(&member.user.name, "kicked")).await?;

    Ok(())
}

/// Ban a member from the server
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "Member to ban"] member: Member,
) -> Result<(), AppError> {
    ctx.data()
        .actions()
        .ban_user(ctx.author().id.get(), member.user.id.get(), guild_id(ctx)?)
        .await?;

    ctx.say(outcome(&member.user.name, "banned")).await?;

    Ok(())
}

/// Unban a user from the server
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn unban(
    ctx: Context<'_>,
    #[description = "User to unban"] user: User,
) -> Result<(), AppError> {
    ctx.data()
        .actions()
        .unban_user(ctx.author().id.get(), user.id.get(), guild_id(ctx)?)
        .await?;

    ctx.say(outcome(&user.name, "unbanned")).await?;

    Ok(())
}

fn outcome(name: &str, action: &str) -> String {
    format!("{} has been {} from the server.", name, action)
}
