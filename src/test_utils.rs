//! Shared test utilities for the community portal.
//!
//! This module provides helpers for setting up in-memory databases, creating
//! users with sensible defaults, and an in-memory object store.

use crate::{
    config::portal::{FundSeeds, GaneshChandaSeed, MarriageGoldSeed},
    core::{finance, users},
    entities::{Interests, Role, user},
    errors::{Error, Result},
    storage::ObjectStore,
};
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, prelude::Uuid};
use std::{collections::HashMap, sync::Mutex};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Seeds matching the community's starting balances.
#[must_use]
pub fn sample_fund_seeds() -> FundSeeds {
    FundSeeds {
        ganesh_chanda: GaneshChandaSeed {
            current_amount: 25500.0,
            target_amount: 50000.0,
            contributors: 18,
            total_members: 25,
        },
        marriage_gold: MarriageGoldSeed {
            total_fund: 125_000.0,
            recent_support: 15000.0,
            last_recipient: Some("Rahul Patel".to_string()),
        },
    }
}

/// In-memory database with both fund rows seeded from [`sample_fund_seeds`].
pub async fn setup_seeded_db() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    finance::seed_funds(&db, &sample_fund_seeds()).await?;
    Ok(db)
}

/// A member registration with sensible defaults.
///
/// # Defaults
/// * `age`: 25
/// * `occupation`: "Student"
/// * `interests`: `["Sports"]`
/// * `role`: member
#[must_use]
pub fn sample_new_user(name: &str, email: &str) -> users::NewUser {
    users::NewUser {
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        age: Some(25),
        occupation: Some("Student".to_string()),
        interests: vec!["Sports".to_string()],
        role: Role::Member,
        join_date: None,
    }
}

/// Inserts a member with [`sample_new_user`] defaults.
pub async fn create_test_user(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
) -> Result<user::Model> {
    users::create_user(db, sample_new_user(name, email)).await
}

/// Inserts the admin account `admin@gmail.com`.
pub async fn create_test_admin(db: &DatabaseConnection) -> Result<user::Model> {
    let mut admin = sample_new_user("Admin User", "admin@gmail.com");
    admin.role = Role::Admin;
    admin.occupation = Some("Community Administrator".to_string());
    users::create_user(db, admin).await
}

/// A user row that never touched a database, for pure-function tests.
#[must_use]
pub fn sample_user_model(name: &str, email: &str, role: Role) -> user::Model {
    let now = chrono::Utc::now();
    user::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        age: None,
        occupation: None,
        interests: Interests::default(),
        role,
        join_date: now.date_naive(),
        created_at: now,
    }
}

/// Object store that keeps blobs in a map. `failing()` rejects every write.
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    fail_writes: bool,
}

impl MemoryObjectStore {
    /// A store whose writes always fail with a remote error.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    /// Bytes stored under `key`, if any.
    #[allow(clippy::unwrap_used)]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    /// Number of stored objects.
    #[allow(clippy::unwrap_used)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    #[allow(clippy::unwrap_used)]
    async fn put(&self, key: &str, bytes: Vec<u8>, _content_type: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Remote {
                message: "storage unavailable".to_string(),
            });
        }
        let mut objects = self.objects.lock().unwrap();
        if objects.contains_key(key) {
            return Err(Error::Remote {
                message: format!("object {key} already exists"),
            });
        }
        objects.insert(key.to_string(), bytes);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://storage.test/media/{key}")
    }
}
