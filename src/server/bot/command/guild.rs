use crate::server::{
    bot::command::{guild_id, Context},
    error::AppError,
};

/// Shows the name, ID, member count and owner of this server
#[poise::command(prefix_command, slash_command, guild_only)]
pub async fn guildinfo(ctx: Context<'_>) -> Result<(), AppError> {
    let info = ctx.data().actions().guild_info(guild_id(ctx)?).await?;

    ctx.say(info.to_string()).await?;

    Ok(())
}
