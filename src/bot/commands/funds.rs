//! Fund commands - the community fund overview and admin balance edits.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, commands::failed},
        core::{
            finance::{self, FundPatch},
            report::{self, FundOverview},
        },
        entities::FundType,
        errors::{Error, Result},
    };
    use poise::serenity_prelude as serenity;
    use tracing::info;

    /// Fund selector shown in the slash-command picker.
    #[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
    pub enum FundChoice {
        #[name = "Ganesh Chanda"]
        GaneshChanda,
        #[name = "Marriage Gold"]
        MarriageGold,
    }

    impl From<FundChoice> for FundType {
        fn from(choice: FundChoice) -> Self {
            match choice {
                FundChoice::GaneshChanda => Self::GaneshChanda,
                FundChoice::MarriageGold => Self::MarriageGold,
            }
        }
    }

    /// Shows the Ganesh Chanda and Marriage Gold fund balances.
    #[poise::command(slash_command, prefix_command)]
    pub async fn funds(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let data = ctx.data();
        data.sessions.require_user(ctx.author().id.get()).await?;

        let overview = report::generate_fund_overview(&data.database)
            .await
            .map_err(failed("load fund balances"))?;

        ctx.send(poise::CreateReply::default().embed(overview_embed(&overview)))
            .await?;
        Ok(())
    }

    fn overview_embed(overview: &FundOverview) -> serenity::CreateEmbed {
        let ganesh = &overview.ganesh_chanda;
        let gold = &overview.marriage_gold;

        let ganesh_text = format!(
            "**Collected:** {} of {}\n{}\n**Contributors:** {} of {} members",
            report::format_rupees(ganesh.current_amount),
            report::format_rupees(ganesh.target_amount),
            report::format_progress_bar(ganesh.progress_percent, None),
            ganesh.contributors,
            ganesh.total_members,
        );

        let recipient = if gold.last_recipient.is_empty() {
            "—"
        } else {
            gold.last_recipient.as_str()
        };
        let gold_text = format!(
            "**Total fund:** {}\n**Recent support:** {}\n**Last recipient:** {}",
            report::format_rupees(gold.total_fund),
            report::format_rupees(gold.recent_support),
            recipient,
        );

        serenity::CreateEmbed::default()
            .title("🪔 Community Funds")
            .color(0x00E6_7E22) // Saffron
            .field(FundType::GaneshChanda.label(), ganesh_text, false)
            .field(FundType::MarriageGold.label(), gold_text, false)
    }

    /// Updates a fund's balances (admin only). Omitted fields are left as they are.
    #[allow(clippy::too_many_arguments)]
    #[poise::command(slash_command, prefix_command)]
    pub async fn set_fund(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Which fund to update"] fund: FundChoice,
        #[description = "Ganesh Chanda: amount collected so far"] current_amount: Option<f64>,
        #[description = "Ganesh Chanda: collection target"] target_amount: Option<f64>,
        #[description = "Ganesh Chanda: number of contributors"] contributors: Option<i32>,
        #[description = "Ganesh Chanda: members expected to contribute"] total_members: Option<i32>,
        #[description = "Marriage Gold: total fund"] total_fund: Option<f64>,
        #[description = "Marriage Gold: most recent support amount"] recent_support: Option<f64>,
        #[description = "Marriage Gold: who received it"] last_recipient: Option<String>,
    ) -> Result<()> {
        let data = ctx.data();
        let admin = data.sessions.require_admin(ctx.author().id.get()).await?;

        let patch = FundPatch {
            current_amount,
            target_amount,
            total_fund,
            contributors,
            total_members,
            recent_support,
            last_recipient,
        };
        if patch.is_empty() {
            ctx.send(
                poise::CreateReply::default()
                    .content("Nothing to update. Provide at least one field.")
                    .ephemeral(true),
            )
            .await?;
            return Ok(());
        }

        let fund_type = FundType::from(fund);
        finance::update_financial_data(&data.database, fund_type, patch)
            .await
            .map_err(failed("update financial data"))?;
        info!("{} updated {}", admin.email, fund_type.label());

        let overview = report::generate_fund_overview(&data.database)
            .await
            .map_err(failed("load fund balances"))?;
        ctx.send(
            poise::CreateReply::default()
                .content(format!(
                    "✅ Financial data updated successfully! {} saved.",
                    fund_type.label()
                ))
                .embed(overview_embed(&overview)),
        )
        .await?;
        Ok(())
    }

}

// Re-export all commands
pub use inner::*;
