mod model;
mod server;

use crate::server::{config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    tracing::info!("Starting guildbot");

    startup::run(config).await
}
