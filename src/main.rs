#![allow(clippy::result_large_err)]

use community_portal::{
    bot::{self, BotData},
    config::{self, AdminCredentials, database},
    core::finance,
    errors::{Error, Result},
    storage,
};
use dotenvy::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Portal configuration (fund seeds, storage bucket)
    let portal_config = config::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Connect to the remote store and make sure the tables exist
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed the two fund rows on first start
    finance::seed_funds(&db, &portal_config.funds)
        .await
        .inspect(|_| info!("Fund rows checked."))
        .inspect_err(|e| error!("Failed to seed funds: {}", e))?;

    // 6. Media bucket and admin login
    let store = storage::from_env(&portal_config.storage);
    let admin = AdminCredentials::from_env();

    // 7. Run the bot
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, BotData::new(db, store, admin)).await
}
