//! Admin member commands - the member directory and member removal.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, commands::failed, handlers::autocomplete::autocomplete_member},
        core::{members as roster, users},
        entities::user,
        errors::{Error, Result},
    };
    use sea_orm::prelude::Uuid;
    use std::fmt::Write;
    use tracing::info;

    /// Discord rejects message bodies over 2000 characters
    const MAX_LISTING_CHARS: usize = 1900;

    /// Lists community members with join dates and statistics (admin only).
    #[poise::command(slash_command, prefix_command)]
    pub async fn members(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        data.sessions.require_admin(ctx.author().id.get()).await?;

        let all_users = users::list_users(&data.database)
            .await
            .map_err(failed("load members"))?;

        let listing = member_listing(&all_users)?;
        ctx.send(poise::CreateReply::default().content(listing).ephemeral(true))
            .await?;
        Ok(())
    }

    /// Renders the directory, dropping rows that would overflow one message.
    pub(super) fn member_listing(all_users: &[user::Model]) -> Result<String> {
        let stats = roster::member_stats(all_users);
        let members = roster::members(all_users);

        let mut out = String::new();
        writeln!(out, "**👥 Community Members**")?;
        match stats.average_age {
            Some(age) => writeln!(
                out,
                "Total members: **{}** · Average age: **{age}**\n",
                stats.total_members
            )?,
            None => writeln!(out, "Total members: **{}**\n", stats.total_members)?,
        }

        if members.is_empty() {
            out.push_str("No members have joined yet.");
            return Ok(out);
        }

        for (shown, member) in members.iter().enumerate() {
            let mut line = format!("• **{}** ({})", member.name, member.email);
            if let Some(occupation) = &member.occupation {
                write!(line, " · {occupation}")?;
            }
            writeln!(line, " · joined {}", member.join_date)?;

            if out.len() + line.len() > MAX_LISTING_CHARS {
                write!(out, "…and {} more", members.len() - shown)?;
                break;
            }
            out.push_str(&line);
        }

        Ok(out)
    }

    /// Removes a member from the community (admin only).
    #[poise::command(slash_command, prefix_command)]
    pub async fn remove_member(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Member to remove"]
        #[autocomplete = "autocomplete_member"]
        member: String,
    ) -> Result<()> {
        let data = ctx.data();
        let admin = data.sessions.require_admin(ctx.author().id.get()).await?;

        let Ok(user_id) = Uuid::parse_str(member.trim()) else {
            ctx.send(
                poise::CreateReply::default()
                    .content("❌ Pick a member from the suggestions.")
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        };

        if user_id == admin.id {
            ctx.send(
                poise::CreateReply::default()
                    .content("❌ You cannot remove your own account.")
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        }

        users::delete_user(&data.database, user_id)
            .await
            .map_err(failed("delete member"))?;
        let ended = data.sessions.sign_out_user(user_id).await;
        info!("{} removed member {} ({} sessions ended)", admin.email, user_id, ended);

        ctx.send(
            poise::CreateReply::default()
                .content("✅ Member deleted successfully")
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
