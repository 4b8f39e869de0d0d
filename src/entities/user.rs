//! User entity - A registered member (or the admin) of the community.
//!
//! Users are created at registration and hard-deleted by the admin. There is
//! no update path. The store assigns `id`, `join_date` and `created_at` when
//! the caller leaves them unset.

use sea_orm::{FromJsonQueryResult, Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Role of a portal user, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Community administrator
    #[sea_orm(string_value = "admin")]
    Admin,
    /// Regular member
    #[sea_orm(string_value = "member")]
    Member,
}

/// Ordered list of interest tags, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Interests(pub Vec<String>);

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Opaque identifier assigned by the store
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Login key
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    /// Interest tags in the order the user typed them
    pub interests: Interests,
    pub role: Role,
    /// Day the user joined; defaults to the insert date
    pub join_date: Date,
    /// Insert time, used to list users oldest first
    pub created_at: DateTimeUtc,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user may have uploaded many media files
    #[sea_orm(has_many = "super::media_file::Entity")]
    MediaFiles,
}

impl Related<super::media_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaFiles.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            let now = chrono::Utc::now();
            if self.id.is_not_set() {
                self.id = Set(Uuid::new_v4());
            }
            if self.join_date.is_not_set() {
                self.join_date = Set(now.date_naive());
            }
            if self.created_at.is_not_set() {
                self.created_at = Set(now);
            }
        }
        Ok(self)
    }
}
