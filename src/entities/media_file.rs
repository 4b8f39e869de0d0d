//! Media file entity - Metadata for a photo or video in the gallery.
//!
//! The bytes live in the object-storage bucket under `filename`; this row only
//! points at them. Rows are immutable once written.

use sea_orm::{Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Gallery item kind, derived from the MIME type at upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    #[sea_orm(string_value = "image")]
    Image,
    #[sea_orm(string_value = "video")]
    Video,
}

impl MediaKind {
    /// `image/*` is an image, everything else is treated as video.
    #[must_use]
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            Self::Image
        } else {
            Self::Video
        }
    }
}

/// Media file database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "media_files")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Storage key inside the media bucket (`<millis>.<ext>`)
    pub filename: String,
    pub file_type: MediaKind,
    /// Size in bytes
    pub file_size: Option<i64>,
    pub description: Option<String>,
    /// Uploader; NULL once that user is removed
    pub uploaded_by: Option<Uuid>,
    pub uploaded_at: DateTimeUtc,
}

/// Defines relationships between `MediaFile` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Weak link to the uploading user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UploadedBy",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Uploader,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Uploader.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            if self.id.is_not_set() {
                self.id = Set(Uuid::new_v4());
            }
            if self.uploaded_at.is_not_set() {
                self.uploaded_at = Set(chrono::Utc::now());
            }
        }
        Ok(self)
    }
}
