use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use tokio::sync::OnceCell;

use crate::server::{
    bot::{
        command::{self, Data},
        handler::Handler,
    },
    config::Config,
    error::AppError,
    platform::discord::SerenityPlatform,
};

/// Discord client that has not connected yet.
pub struct Bot {
    pub client: Client,
    setup_failure: SetupFailure,
}

/// Reason the framework setup hook failed, shared between the hook and [`start_bot`].
///
/// Poise runs the hook once and never retries it; without user data no command can
/// run, so a failed setup stops the client and is reported as an error once it
/// has stopped.
#[derive(Clone, Default)]
pub struct SetupFailure(Arc<OnceCell<String>>);

impl SetupFailure {
    /// Records a failure. Only the first one is kept.
    pub fn record(&self, reason: String) {
        let _ = self.0.set(reason);
    }

    /// # Returns
    /// - `Ok(())` - Setup did not fail
    /// - `Err(AppError::BotSetup)` - Setup failed with the recorded reason
    pub fn check(&self) -> Result<(), AppError> {
        match self.0.get() {
            Some(reason) => Err(AppError::BotSetup(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Builds the Discord client with its command framework.
///
/// Slash commands are registered globally from the framework's setup hook, which
/// poise runs only on the first ready event, so reconnects never register again.
/// If registration fails the shards are shut down and [`start_bot`] returns the
/// failure.
///
/// # Arguments
/// - `config` - Application configuration providing the token and command prefix
///
/// # Returns
/// - `Ok(Bot)` - The unstarted client
/// - `Err(AppError)` - The client could not be built
pub async fn init_bot(config: &Config) -> Result<Bot, AppError> {
    // MESSAGE_CONTENT is privileged; without it prefix commands see empty messages
    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    let setup_failure = SetupFailure::default();
    let hook_failure = setup_failure.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: command::commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.command_prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(command::on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                let commands = &framework.options().commands;

                if let Err(err) = poise::builtins::register_globally(ctx, commands).await {
                    hook_failure.record(format!("failed to register slash commands: {}", err));
                    framework.shard_manager().shutdown_all().await;
                    return Err(err.into());
                }

                tracing::info!("Registered {} slash commands globally", commands.len());

                Ok(Data::new(Arc::new(SerenityPlatform::new(ctx.http.clone()))))
            })
        })
        .build();

    let client = Client::builder(&config.discord_token, intents)
        .framework(framework)
        .event_handler(Handler)
        .await?;

    Ok(Bot {
        client,
        setup_failure,
    })
}

/// Connects the client to the gateway and runs it until its shards shut down.
///
/// # Returns
/// - `Ok(())` - The shard manager was shut down
/// - `Err(AppError::BotSetup)` - The setup hook failed and stopped the client
/// - `Err(AppError)` - Login or the gateway connection failed
pub async fn start_bot(bot: Bot) -> Result<(), AppError> {
    let Bot {
        mut client,
        setup_failure,
    } = bot;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    setup_failure.check()
}
