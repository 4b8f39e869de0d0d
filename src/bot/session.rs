//! Bot sessions - which portal user each Discord account is signed in as.
//!
//! A session only remembers who signed in. Commands still re-query the store
//! for anything they display.

use crate::{
    entities::{Role, user},
    errors::{Error, Result},
};
use sea_orm::prelude::Uuid;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Signed-in users keyed by Discord user id.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<u64, user::Model>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or replaces) the session for `discord_id`.
    pub async fn sign_in(&self, discord_id: u64, user: user::Model) {
        debug!("Discord user {} signed in as {}", discord_id, user.id);
        self.sessions.write().await.insert(discord_id, user);
    }

    /// Ends the session, returning who was signed in.
    pub async fn sign_out(&self, discord_id: u64) -> Option<user::Model> {
        self.sessions.write().await.remove(&discord_id)
    }

    /// Ends every session belonging to portal user `user_id`.
    pub async fn sign_out_user(&self, user_id: Uuid) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, user| user.id != user_id);
        before - sessions.len()
    }

    pub async fn current(&self, discord_id: u64) -> Option<user::Model> {
        self.sessions.read().await.get(&discord_id).cloned()
    }

    /// The signed-in user, or [`Error::NotSignedIn`].
    pub async fn require_user(&self, discord_id: u64) -> Result<user::Model> {
        self.current(discord_id).await.ok_or(Error::NotSignedIn)
    }

    /// The signed-in admin, or [`Error::NotSignedIn`] / [`Error::AdminOnly`].
    pub async fn require_admin(&self, discord_id: u64) -> Result<user::Model> {
        let user = self.require_user(discord_id).await?;
        if user.role == Role::Admin {
            Ok(user)
        } else {
            Err(Error::AdminOnly)
        }
    }
}
