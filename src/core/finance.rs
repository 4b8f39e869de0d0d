//! Fund data access - Reading and patching the two community fund rows.
//!
//! The `financial_data` table holds one row per [`FundType`]. Rows are seeded
//! once at startup and afterwards only patched by the admin. Concurrent patches
//! are last-write-wins: nothing here reads before writing.

use crate::{
    config::portal::FundSeeds,
    entities::{FinancialData, FundType, financial_data},
    errors::Result,
};
use sea_orm::{ActiveValue, ActiveValue::NotSet, Set, prelude::*};
use tracing::{debug, info, instrument};

/// A partial update for a fund row. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundPatch {
    pub current_amount: Option<f64>,
    pub target_amount: Option<f64>,
    pub total_fund: Option<f64>,
    pub contributors: Option<i32>,
    pub total_members: Option<i32>,
    pub recent_support: Option<f64>,
    pub last_recipient: Option<String>,
}

impl FundPatch {
    /// True when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.current_amount.is_none()
            && self.target_amount.is_none()
            && self.total_fund.is_none()
            && self.contributors.is_none()
            && self.total_members.is_none()
            && self.recent_support.is_none()
            && self.last_recipient.is_none()
    }

    fn into_active_model(self) -> financial_data::ActiveModel {
        financial_data::ActiveModel {
            current_amount: present(self.current_amount),
            target_amount: present(self.target_amount),
            total_fund: present(self.total_fund),
            contributors: present(self.contributors),
            total_members: present(self.total_members),
            recent_support: present(self.recent_support),
            last_recipient: present(self.last_recipient),
            updated_at: Set(Some(chrono::Utc::now())),
            ..Default::default()
        }
    }
}

fn present<T>(value: Option<T>) -> ActiveValue<Option<T>>
where
    Option<T>: Into<sea_orm::Value>,
{
    value.map_or(NotSet, |v| Set(Some(v)))
}

/// Retrieves every fund row, in no particular order.
///
/// Two rows are expected but the count is not checked; use [`find_fund`] to pick
/// one out.
#[instrument(skip(db))]
pub async fn list_financial_data<C>(db: &C) -> Result<Vec<financial_data::Model>>
where
    C: ConnectionTrait,
{
    let rows = FinancialData::find().all(db).await?;
    debug!("Loaded {} fund rows", rows.len());
    Ok(rows)
}

/// Applies `patch` to the row tagged `fund_type`.
///
/// This is a single `UPDATE ... WHERE type = ?`. No matching row is not an
/// error; the statement just touches nothing.
#[instrument(skip(db))]
pub async fn update_financial_data<C>(db: &C, fund_type: FundType, patch: FundPatch) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = FinancialData::update_many()
        .set(patch.into_active_model())
        .filter(financial_data::Column::FundType.eq(fund_type))
        .exec(db)
        .await?;
    info!(
        "Updated {} fund ({} row(s))",
        fund_type.label(),
        result.rows_affected
    );
    Ok(())
}

/// Picks the row for `fund_type` out of a listed sequence.
#[must_use]
pub fn find_fund(
    rows: &[financial_data::Model],
    fund_type: FundType,
) -> Option<&financial_data::Model> {
    rows.iter().find(|row| row.fund_type == fund_type)
}

/// Inserts a row for each fund type that has none, using the configured seeds.
///
/// Existing rows are left alone, so this is safe on every start.
pub async fn seed_funds<C>(db: &C, seeds: &FundSeeds) -> Result<()>
where
    C: ConnectionTrait,
{
    let existing = list_financial_data(db).await?;

    if find_fund(&existing, FundType::GaneshChanda).is_none() {
        let seed = &seeds.ganesh_chanda;
        financial_data::ActiveModel {
            fund_type: Set(FundType::GaneshChanda),
            current_amount: Set(Some(seed.current_amount)),
            target_amount: Set(Some(seed.target_amount)),
            contributors: Set(Some(seed.contributors)),
            total_members: Set(Some(seed.total_members)),
            ..Default::default()
        }
        .insert(db)
        .await?;
        info!("Seeded Ganesh Chanda fund row.");
    }

    if find_fund(&existing, FundType::MarriageGold).is_none() {
        let seed = &seeds.marriage_gold;
        financial_data::ActiveModel {
            fund_type: Set(FundType::MarriageGold),
            total_fund: Set(Some(seed.total_fund)),
            recent_support: Set(Some(seed.recent_support)),
            last_recipient: Set(seed.last_recipient.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        info!("Seeded Marriage Gold fund row.");
    }

    Ok(())
}
