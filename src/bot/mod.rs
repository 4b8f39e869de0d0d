//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the community portal,
//! including all slash commands, autocomplete handlers, sessions, and the
//! bot context shared by every command.

/// Discord command implementations (account, funds, members, gallery, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;
/// Which portal user each Discord account is signed in as
pub mod session;

use crate::{
    config::AdminCredentials,
    errors::{Error, Result},
    storage::ObjectStore,
};
use poise::serenity_prelude as serenity;
use sea_orm::DatabaseConnection;
use session::SessionStore;
use std::sync::Arc;
use tracing::{error, info};

/// Shared data available to all bot commands.
pub struct BotData {
    /// Connection to the remote store
    pub database: DatabaseConnection,
    /// Bucket for gallery uploads
    pub storage: Arc<dyn ObjectStore>,
    /// Configured admin login pair
    pub admin: AdminCredentials,
    /// Signed-in users
    pub sessions: SessionStore,
}

impl BotData {
    /// Creates a new `BotData` with no active sessions.
    #[must_use]
    pub fn new(
        database: DatabaseConnection,
        storage: Arc<dyn ObjectStore>,
        admin: AdminCredentials,
    ) -> Self {
        Self {
            database,
            storage,
            admin,
            sessions: SessionStore::new(),
        }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            let reply = poise::CreateReply::default()
                .content(error.to_string())
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Connects to Discord, registers the slash commands and runs until shutdown.
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                info!("Registering commands globally...");
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Starting bot client...");
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;
    client.start().await?;

    Ok(())
}
