//! Gallery commands - browsing media and admin uploads.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, commands::failed},
        core::media::{self, MediaUpload},
        entities::{MediaKind, media_file},
        errors::{Error, Result},
        storage::ObjectStore,
    };
    use poise::serenity_prelude as serenity;
    use std::fmt::Write;

    const MAX_LISTING_CHARS: usize = 1900;

    /// Gallery filter shown in the slash-command picker.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum GalleryKind {
        #[name = "Photos"]
        Photos,
        #[name = "Videos"]
        Videos,
    }

    impl From<GalleryKind> for MediaKind {
        fn from(kind: GalleryKind) -> Self {
            match kind {
                GalleryKind::Photos => Self::Image,
                GalleryKind::Videos => Self::Video,
            }
        }
    }

    /// Whether the upload picker would have offered this file.
    pub(super) fn is_gallery_mime(mime_type: &str) -> bool {
        mime_type.starts_with("image/") || mime_type.starts_with("video/")
    }

    /// Shows photos and videos from community events, newest first.
    #[poise::command(slash_command, prefix_command)]
    pub async fn gallery(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Only show photos or only videos"] kind: Option<GalleryKind>,
    ) -> Result<()> {
        let data = ctx.data();
        data.sessions.require_user(ctx.author().id.get()).await?;

        let rows = media::list_media_files(&data.database)
            .await
            .map_err(failed("load the gallery"))?;

        let listing = gallery_listing(&rows, data.storage.as_ref(), kind.map(MediaKind::from))?;
        ctx.say(listing).await?;
        Ok(())
    }

    /// Markdown link when the store hands out a web URL. A local store's path
    /// is not openable from Discord, so only the key is shown.
    pub(super) fn media_link(store: &dyn ObjectStore, row: &media_file::Model) -> String {
        let url = media::public_url(store, row);
        if url.starts_with("https://") || url.starts_with("http://") {
            format!("[{}]({url})", row.filename)
        } else {
            format!("`{}`", row.filename)
        }
    }

    pub(super) fn gallery_listing(
        rows: &[media_file::Model],
        store: &dyn ObjectStore,
        kind: Option<MediaKind>,
    ) -> Result<String> {
        let shown: Vec<&media_file::Model> = rows
            .iter()
            .filter(|row| kind.is_none_or(|k| row.file_type == k))
            .collect();

        let mut out = String::from("**📸 Community Gallery**\n");
        if shown.is_empty() {
            out.push_str("No media files yet.");
            return Ok(out);
        }

        for (count, row) in shown.iter().enumerate() {
            let icon = match row.file_type {
                MediaKind::Image => "🖼️",
                MediaKind::Video => "🎬",
            };
            let mut line = format!("{icon} {}", media_link(store, row));
            if let Some(description) = &row.description {
                write!(line, " · {description}")?;
            }
            writeln!(line, " · {}", row.uploaded_at.format("%Y-%m-%d"))?;

            if out.len() + line.len() > MAX_LISTING_CHARS {
                write!(out, "…and {} more", shown.len() - count)?;
                break;
            }
            out.push_str(&line);
        }

        Ok(out)
    }

    /// Adds a photo or video to the gallery (admin only).
    #[poise::command(slash_command, prefix_command)]
    pub async fn upload(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Photo or video to upload"] file: serenity::Attachment,
        #[description = "Caption shown in the gallery"] description: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let admin = data.sessions.require_admin(ctx.author().id.get()).await?;

        let mime_type = file.content_type.clone().unwrap_or_default();
        if !is_gallery_mime(&mime_type) {
            ctx.send(
                poise::CreateReply::default()
                    .content("❌ Only images and videos can be uploaded.")
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        }

        // Downloads and uploads can outlast the three-second interaction window
        ctx.defer().await?;

        let bytes = file
            .download()
            .await
            .map_err(|e| failed("download the attachment")(e.into()))?;

        let upload = MediaUpload {
            bytes,
            file_name: file.filename.clone(),
            mime_type,
            description: description.filter(|d| !d.trim().is_empty()),
            uploaded_by: Some(admin.id),
        };
        let created = media::upload_media_file(&data.database, data.storage.as_ref(), upload)
            .await
            .map_err(failed("upload file"))?;

        ctx.say(format!(
            "✅ File uploaded successfully! {}",
            media_link(data.storage.as_ref(), &created)
        ))
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::inner::{gallery_listing, is_gallery_mime, media_link};
    use crate::{
        entities::{MediaKind, media_file},
        errors::Result,
        storage::local::LocalObjectStore,
        test_utils::MemoryObjectStore,
    };
    use sea_orm::prelude::Uuid;

    fn row(filename: &str, file_type: MediaKind, description: Option<&str>) -> media_file::Model {
        media_file::Model {
            id: Uuid::new_v4(),
            filename: filename.to_string(),
            file_type,
            file_size: Some(1024),
            description: description.map(str::to_string),
            uploaded_by: None,
            uploaded_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_gallery_mime_filter() {
        assert!(is_gallery_mime("image/png"));
        assert!(is_gallery_mime("video/mp4"));
        assert!(!is_gallery_mime("application/pdf"));
        assert!(!is_gallery_mime(""));
    }

    #[test]
    fn test_listing_links_and_filters() {
        let store = MemoryObjectStore::default();
        let rows = vec![
            row("1700000000001.mp4", MediaKind::Video, Some("Aarti")),
            row("1700000000000.jpg", MediaKind::Image, Some("Pandal decoration")),
        ];

        let all = gallery_listing(&rows, &store, None).unwrap();
        assert!(all.contains("[1700000000001.mp4](https://storage.test/media/1700000000001.mp4)"));
        assert!(all.contains("Pandal decoration"));
        // Keeps the newest-first order it was given
        assert!(all.find("1700000000001.mp4").unwrap() < all.find("1700000000000.jpg").unwrap());

        let photos = gallery_listing(&rows, &store, Some(MediaKind::Image)).unwrap();
        assert!(photos.contains("1700000000000.jpg"));
        assert!(!photos.contains("1700000000001.mp4"));
    }

    #[test]
    fn test_local_store_shows_key_without_link() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = LocalObjectStore::new(dir.path());
        let rows = vec![row("1700000000000.jpg", MediaKind::Image, None)];

        assert_eq!(media_link(&store, &rows[0]), "`1700000000000.jpg`");
        let listing = gallery_listing(&rows, &store, None)?;
        assert!(!listing.contains("]("));
        assert!(!listing.contains(&dir.path().display().to_string()));
        Ok(())
    }

    #[test]
    fn test_empty_gallery() {
        let store = MemoryObjectStore::default();
        let listing = gallery_listing(&[], &store, Some(MediaKind::Video)).unwrap();
        assert!(listing.contains("No media files yet."));
    }
}
