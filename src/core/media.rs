//! Media data access - Gallery listing and two-step uploads.
//!
//! An upload first writes the bytes to the object store and then records a
//! metadata row. The two steps are not transactional: if the insert fails the
//! blob stays behind in the bucket with nothing pointing at it.

use crate::{
    entities::{MediaFile, MediaKind, media_file},
    errors::Result,
    storage::ObjectStore,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, info, instrument, warn};

/// A file on its way into the gallery.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub bytes: Vec<u8>,
    /// Name the file had on the uploader's machine
    pub file_name: String,
    pub mime_type: String,
    pub description: Option<String>,
    pub uploaded_by: Option<Uuid>,
}

/// Retrieves every media row, newest upload first.
#[instrument(skip(db))]
pub async fn list_media_files<C>(db: &C) -> Result<Vec<media_file::Model>>
where
    C: ConnectionTrait,
{
    let files = MediaFile::find()
        .order_by_desc(media_file::Column::UploadedAt)
        .all(db)
        .await?;
    debug!("Loaded {} media files", files.len());
    Ok(files)
}

/// Stores the bytes and records the metadata row.
///
/// The storage key is `<unix millis>.<original extension>`. `file_type` is
/// `image` for `image/*` MIME types and `video` for everything else.
#[instrument(skip(db, store, upload), fields(file_name = %upload.file_name, mime = %upload.mime_type))]
pub async fn upload_media_file<C>(
    db: &C,
    store: &dyn ObjectStore,
    upload: MediaUpload,
) -> Result<media_file::Model>
where
    C: ConnectionTrait,
{
    let key = storage_key(chrono::Utc::now().timestamp_millis(), &upload.file_name);
    let file_type = MediaKind::from_mime(&upload.mime_type);
    let file_size = i64::try_from(upload.bytes.len()).ok();

    store.put(&key, upload.bytes, &upload.mime_type).await?;

    let row = media_file::ActiveModel {
        filename: Set(key.clone()),
        file_type: Set(file_type),
        file_size: Set(file_size),
        description: Set(upload.description),
        uploaded_by: Set(upload.uploaded_by),
        ..Default::default()
    };

    match row.insert(db).await {
        Ok(created) => {
            info!("Uploaded {:?} {} ({:?} bytes)", file_type, key, file_size);
            Ok(created)
        }
        Err(e) => {
            warn!("Metadata insert failed, object {} is orphaned in storage: {}", key, e);
            Err(e.into())
        }
    }
}

/// Gallery link for a media row.
#[must_use]
pub fn public_url(store: &dyn ObjectStore, media: &media_file::Model) -> String {
    store.public_url(&media.filename)
}

/// Builds `<millis>.<ext>` from the original name's last extension.
///
/// The suffix is whatever follows the last dot, so a name with no dot is used
/// whole (`README` → `<millis>.README`) and a trailing dot leaves it empty.
#[must_use]
pub fn storage_key(timestamp_millis: i64, file_name: &str) -> String {
    let ext = file_name.rsplit_once('.').map_or(file_name, |(_, ext)| ext);
    format!("{timestamp_millis}.{ext}")
}
