//! User data access - Registration, lookup, listing and removal.
//!
//! These are thin calls against the `users` table. The store assigns the id,
//! join date and creation time; nothing here validates input.

use crate::{
    entities::{Interests, Role, User, user},
    errors::Result,
};
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set, prelude::*};
use tracing::{debug, info, instrument};

/// Fields for a new user. Everything except the store-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub interests: Vec<String>,
    pub role: Role,
    /// Left `None`, the store uses the insert date
    pub join_date: Option<Date>,
}

/// Retrieves every user, oldest first.
///
/// No pagination: the whole table is returned.
#[instrument(skip(db))]
pub async fn list_users<C>(db: &C) -> Result<Vec<user::Model>>
where
    C: ConnectionTrait,
{
    let users = User::find()
        .order_by_asc(user::Column::CreatedAt)
        .all(db)
        .await?;
    debug!("Loaded {} users", users.len());
    Ok(users)
}

/// Finds the user registered under `email`.
///
/// A missing row is `Ok(None)`; only store faults are errors.
#[instrument(skip(db))]
pub async fn find_user_by_email<C>(db: &C, email: &str) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    User::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts a user and returns the persisted row.
///
/// A duplicate email violates the unique index and comes back as the generic
/// remote error like any other store failure.
#[instrument(skip(db, new_user), fields(email = %new_user.email))]
pub async fn create_user<C>(db: &C, new_user: NewUser) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    let model = user::ActiveModel {
        name: Set(new_user.name),
        email: Set(new_user.email),
        phone: Set(new_user.phone),
        age: Set(new_user.age),
        occupation: Set(new_user.occupation),
        interests: Set(Interests(new_user.interests)),
        role: Set(new_user.role),
        join_date: new_user.join_date.map_or(NotSet, Set),
        ..Default::default()
    };

    let created = model.insert(db).await?;
    info!("Created user {} ({:?})", created.id, created.role);
    Ok(created)
}

/// Deletes a user by id.
///
/// Unconditional: an id that does not exist is not an error.
#[instrument(skip(db))]
pub async fn delete_user<C>(db: &C, user_id: Uuid) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = User::delete_by_id(user_id).exec(db).await?;
    info!("Deleted user {} ({} row(s))", user_id, result.rows_affected);
    Ok(())
}
