//! Financial data entity - One balance record per community fund.
//!
//! Exactly one row per [`FundType`] is expected. Columns that only make sense
//! for one fund stay NULL on the other.

use sea_orm::{Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Which community fund a row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "snake_case")]
pub enum FundType {
    /// Festival collection fund
    #[sea_orm(string_value = "ganesh_chanda")]
    GaneshChanda,
    /// Marriage support gold fund
    #[sea_orm(string_value = "marriage_gold")]
    MarriageGold,
}

impl FundType {
    /// Human-readable fund name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GaneshChanda => "Ganesh Chanda",
            Self::MarriageGold => "Marriage Gold Fund",
        }
    }
}

/// Financial data database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "financial_data")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Fund tag; unique across the table
    #[sea_orm(column_name = "type", unique)]
    pub fund_type: FundType,
    /// Ganesh Chanda: amount collected so far
    pub current_amount: Option<f64>,
    /// Ganesh Chanda: collection goal
    pub target_amount: Option<f64>,
    /// Marriage Gold: total fund value
    pub total_fund: Option<f64>,
    /// Ganesh Chanda: members who contributed
    pub contributors: Option<i32>,
    /// Ganesh Chanda: members expected to contribute
    pub total_members: Option<i32>,
    /// Marriage Gold: amount of the latest payout
    pub recent_support: Option<f64>,
    /// Marriage Gold: who received the latest payout
    pub last_recipient: Option<String>,
    pub updated_at: Option<DateTimeUtc>,
}

/// `FinancialData` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.id.is_not_set() {
            self.id = Set(Uuid::new_v4());
        }
        self.updated_at = Set(Some(chrono::Utc::now()));
        Ok(self)
    }
}
