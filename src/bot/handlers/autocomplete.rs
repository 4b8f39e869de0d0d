//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions are only produced for callers signed in as the admin, so the
//! member directory is never exposed to anyone else through the picker.

use crate::{
    bot::BotData,
    core::{members, users},
    entities::user,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tracing::error;

/// Discord shows at most this many suggestions
const MAX_CHOICES: usize = 25;

/// Suggests members by name; the submitted value is the member's id.
///
/// # Arguments
/// * `ctx` - The poise context containing the database connection and sessions
/// * `partial` - The partial string the user has typed so far
pub async fn autocomplete_member(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    let data = ctx.data();
    if data
        .sessions
        .require_admin(ctx.author().id.get())
        .await
        .is_err()
    {
        return Vec::new();
    }

    member_choices(users::list_users(&data.database).await, partial)
}

/// Turns the listed users into picker entries. A failed listing is logged and
/// offers nothing.
fn member_choices(
    listed: Result<Vec<user::Model>>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    let all_users = match listed {
        Ok(all_users) => all_users,
        Err(e) => {
            error!("Failed to load members for autocomplete: {e}");
            return Vec::new();
        }
    };

    matching_members(&all_users, partial)
        .into_iter()
        .map(|member| {
            serenity::AutocompleteChoice::new(
                format!("{} ({})", member.name, member.email),
                member.id.to_string(),
            )
        })
        .collect()
}

/// Members whose name or email contains `partial`, case-insensitively.
fn matching_members<'a>(all_users: &'a [user::Model], partial: &str) -> Vec<&'a user::Model> {
    let partial_lower = partial.to_lowercase();

    let mut matching: Vec<&user::Model> = members::members(all_users)
        .into_iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&partial_lower)
                || m.email.to_lowercase().contains(&partial_lower)
        })
        .take(MAX_CHOICES)
        .collect();

    // Sort alphabetically for consistent UX
    matching.sort_by_key(|m| m.name.to_lowercase());
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entities::Role, test_utils::sample_user_model};

    #[test]
    fn test_matches_name_or_email_and_skips_admin() {
        let users = vec![
            sample_user_model("Priya Sharma", "priya@example.com", Role::Member),
            sample_user_model("Amit Kumar", "amit@example.com", Role::Member),
            sample_user_model("Admin User", "admin@gmail.com", Role::Admin),
        ];

        let by_name: Vec<_> = matching_members(&users, "PRI").into_iter().map(|m| m.name.as_str()).collect();
        assert_eq!(by_name, vec!["Priya Sharma"]);

        let by_email: Vec<_> = matching_members(&users, "amit@").into_iter().map(|m| m.name.as_str()).collect();
        assert_eq!(by_email, vec!["Amit Kumar"]);

        let everyone: Vec<_> = matching_members(&users, "").into_iter().map(|m| m.name.as_str()).collect();
        assert_eq!(everyone, vec!["Amit Kumar", "Priya Sharma"]);
    }

    #[test]
    fn test_failed_listing_offers_no_choices() {
        let listed = Err(Error::Remote {
            message: "connection refused".to_string(),
        });
        assert!(member_choices(listed, "pri").is_empty());
    }

    #[test]
    fn test_choices_for_listed_members() {
        let users = vec![
            sample_user_model("Priya Sharma", "priya@example.com", Role::Member),
            sample_user_model("Admin User", "admin@gmail.com", Role::Admin),
        ];
        assert_eq!(member_choices(Ok(users), "").len(), 1);
    }

    #[test]
    fn test_caps_at_discord_limit() {
        let users: Vec<_> = (0..40)
            .map(|i| sample_user_model(&format!("Member {i}"), &format!("m{i}@example.com"), Role::Member))
            .collect();
        assert_eq!(matching_members(&users, "member").len(), MAX_CHOICES);
    }
}
