//! General Discord commands - ping and help.
//! These commands don't require database operations or a session.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**Community Portal Help**\n\
        Here is a summary of all available commands.\n\n\
        **Account**\n\
        • `/register <name> <email> <password> [age] [phone] [occupation] [interests]` - Join the community.\n\
        • `/login <email> <password>` - Sign in.\n\
        • `/logout` - Sign out.\n\
        • `/profile` - Shows your profile.\n\n\
        **Community**\n\
        • `/funds` - Ganesh Chanda and Marriage Gold fund balances.\n\
        • `/gallery [kind]` - Photos and videos from community events.\n\n\
        **Admin**\n\
        • `/members` - Lists members with join dates and statistics.\n\
        • `/remove_member <member>` - Removes a member.\n\
        • `/set_fund <fund> [fields]` - Updates fund balances.\n\
        • `/upload <file> [description]` - Adds a photo or video to the gallery.\n\n\
        **Utility**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
