//! Login and registration rules.
//!
//! Members sign in with their email alone; whatever password they type is
//! accepted. The admin account additionally needs the configured email and
//! password pair. Any other outcome is the same "invalid credentials" error so
//! a caller cannot tell a missing account from a wrong admin password.

use crate::{
    config::AdminCredentials,
    core::users::{self, NewUser},
    entities::{Role, user},
    errors::{Error, Result},
};
use sea_orm::ConnectionTrait;
use tracing::{info, instrument};

/// What the registration form collects.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    /// Accepted for form parity; never stored
    pub password: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub occupation: Option<String>,
    /// Comma-separated interest tags as typed
    pub interests: String,
}

/// Decides a login attempt against an already looked-up user record.
pub fn authenticate(
    user: Option<user::Model>,
    admin: &AdminCredentials,
    email: &str,
    password: &str,
) -> Result<user::Model> {
    let Some(user) = user else {
        return Err(Error::InvalidCredentials);
    };

    match user.role {
        Role::Member => Ok(user),
        Role::Admin if admin.matches(email, password) => Ok(user),
        Role::Admin => Err(Error::InvalidCredentials),
    }
}

/// Looks the email up and applies [`authenticate`].
///
/// A store failure during the lookup stays a remote error; it is not turned
/// into "invalid credentials".
#[instrument(skip(db, admin, password))]
pub async fn login<C>(
    db: &C,
    admin: &AdminCredentials,
    email: &str,
    password: &str,
) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    let found = users::find_user_by_email(db, email).await?;
    let user = authenticate(found, admin, email, password)?;
    info!("User {} signed in as {:?}", user.id, user.role);
    Ok(user)
}

/// Creates a member account from the registration form.
#[instrument(skip(db, form), fields(email = %form.email))]
pub async fn register<C>(db: &C, form: RegistrationForm) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    let new_user = NewUser {
        name: form.name,
        email: form.email,
        phone: form.phone,
        age: form.age,
        occupation: form.occupation,
        interests: parse_interests(&form.interests),
        role: Role::Member,
        join_date: None,
    };
    users::create_user(db, new_user).await
}

/// Splits on commas, trims each tag and drops empty ones. Order is kept.
#[must_use]
pub fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}
