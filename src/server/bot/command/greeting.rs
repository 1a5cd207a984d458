use crate::server::{bot::command::Context, error::AppError};

/// Replies with a fixed greeting
#[poise::command(prefix_command, slash_command)]
pub async fn helloworld(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.say("Hello, World!").await?;

    Ok(())
}

/// Replies with a fixed farewell
#[poise::command(prefix_command, slash_command)]
pub async fn byeworld(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.say("Bye World!").await?;

    Ok(())
}

/// Greets the invoking user by mention
// Only reachable as a prefix command: Discord does not invoke slash command groups
#[poise::command(prefix_command, slash_command, subcommands("hello"))]
pub async fn greet(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.say(mention_greeting(ctx.author().id.get())).await?;

    Ok(())
}

/// Echoes a message back
#[poise::command(prefix_command, slash_command)]
pub async fn hello(
    ctx: Context<'_>,
    #[description = "Message to echo"] message: String,
) -> Result<(), AppError> {
    ctx.say(echo(&message)).await?;

    Ok(())
}

fn mention_greeting(user_id: u64) -> String {
    format!("<@{}> Greetings!", user_id)
}

fn echo(message: &str) -> String {
    format!("Hello! You said: {}", message)
}
