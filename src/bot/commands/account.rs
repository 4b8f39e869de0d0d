//! Account commands - register, login, logout and profile.
//!
//! Replies that involve credentials or personal details are ephemeral.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, commands::failed},
        core::{
            auth::{self, RegistrationForm},
            users,
        },
        entities::{Role, user},
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;

    async fn reply_private(ctx: poise::Context<'_, BotData, Error>, content: String) -> Result<()> {
        ctx.send(poise::CreateReply::default().content(content).ephemeral(true))
            .await?;
        Ok(())
    }

    /// Joins the community as a new member and signs you in.
    #[allow(clippy::too_many_arguments)]
    #[poise::command(slash_command, prefix_command)]
    pub async fn register(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Your name"] name: String,
        #[description = "Your email, used to sign in"] email: String,
        #[description = "Choose a password"] password: String,
        #[description = "Your age"] age: Option<i32>,
        #[description = "Phone number"] phone: Option<String>,
        #[description = "Student, Teacher, Farmer, etc."] occupation: Option<String>,
        #[description = "Comma-separated, e.g. Sports, Education, Technology"] interests: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let form = RegistrationForm {
            name,
            email,
            password,
            age,
            phone,
            occupation,
            interests: interests.unwrap_or_default(),
        };

        let user = auth::register(&data.database, form)
            .await
            .map_err(failed("register"))?;
        let welcome = format!(
            "🎉 Registration successful! Welcome to our community, {}!",
            user.name
        );
        data.sessions.sign_in(ctx.author().id.get(), user).await;

        reply_private(ctx, welcome).await
    }

    /// Signs in with your email and password.
    #[poise::command(slash_command, prefix_command)]
    pub async fn login(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Your email"] email: String,
        #[description = "Your password"] password: String,
    ) -> Result<()> {
        let data = ctx.data();

        match auth::login(&data.database, &data.admin, &email, &password).await {
            Ok(user) => {
                let greeting = if user.role == Role::Admin {
                    "Welcome back Admin!"
                } else {
                    "Welcome back!"
                };
                let message = format!("✅ {greeting} Successfully logged in as {}", user.name);
                data.sessions.sign_in(ctx.author().id.get(), user).await;
                reply_private(ctx, message).await
            }
            Err(Error::InvalidCredentials) => {
                reply_private(ctx, "❌ Login failed: Invalid email or password".to_string()).await
            }
            Err(e) => Err(failed("log in")(e)),
        }
    }

    /// Signs out of the portal.
    #[poise::command(slash_command, prefix_command)]
    pub async fn logout(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let message = match ctx.data().sessions.sign_out(ctx.author().id.get()).await {
            Some(_) => "👋 Logged out. See you soon!",
            None => "You were not signed in.",
        };
        reply_private(ctx, message.to_string()).await
    }

    /// Shows your profile.
    #[poise::command(slash_command, prefix_command)]
    pub async fn profile(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        let discord_id = ctx.author().id.get();
        let session = data.sessions.require_user(discord_id).await?;

        // Always show what the store holds now, not what was true at login
        let Some(user) = users::find_user_by_email(&data.database, &session.email)
            .await
            .map_err(failed("load your profile"))?
        else {
            data.sessions.sign_out(discord_id).await;
            return reply_private(
                ctx,
                "Your account no longer exists. You have been signed out.".to_string(),
            )
            .await;
        };

        ctx.send(
            poise::CreateReply::default()
                .embed(profile_embed(&user))
                .ephemeral(true),
        )
        .await?;
        Ok(())
    }

    fn profile_embed(user: &user::Model) -> serenity::CreateEmbed {
        let role = match user.role {
            Role::Admin => "🛡️ Admin",
            Role::Member => "👤 Member",
        };
        let interests = if user.interests.0.is_empty() {
            "—".to_string()
        } else {
            user.interests.0.join(", ")
        };

        serenity::CreateEmbed::default()
            .title(user.name.clone())
            .description(format!("Community member since {}", user.join_date))
            .color(0x00E6_7E22) // Saffron
            .field("Email", user.email.clone(), true)
            .field("Phone", user.phone.clone().unwrap_or_else(|| "—".to_string()), true)
            .field(
                "Age",
                user.age.map_or_else(|| "—".to_string(), |a| a.to_string()),
                true,
            )
            .field(
                "Occupation",
                user.occupation.clone().unwrap_or_else(|| "—".to_string()),
                true,
            )
            .field("Role", role, true)
            .field("Interests", interests, false)
    }
}

// Re-export all commands
pub use inner::*;
