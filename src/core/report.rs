//! Fund overview business logic.
//!
//! This module turns the raw fund rows into the two cards members see on the
//! home screen, substituting zero for missing rows or unset columns, and
//! provides the progress and currency formatting used by the bot layer. All
//! functions are framework-agnostic and return structured data.

use crate::{
    core::finance::{find_fund, list_financial_data},
    entities::{FundType, financial_data},
    errors::Result,
};
use sea_orm::ConnectionTrait;

/// Festival collection card.
#[derive(Debug, Clone, PartialEq)]
pub struct GaneshChandaCard {
    pub current_amount: f64,
    pub target_amount: f64,
    pub contributors: i32,
    pub total_members: i32,
    /// Collected share of the target as a percentage
    pub progress_percent: f64,
}

/// Marriage support fund card.
#[derive(Debug, Clone, PartialEq)]
pub struct MarriageGoldCard {
    pub total_fund: f64,
    pub recent_support: f64,
    /// Empty when nobody has received support yet
    pub last_recipient: String,
}

/// Both fund cards, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FundOverview {
    pub ganesh_chanda: GaneshChandaCard,
    pub marriage_gold: MarriageGoldCard,
}

impl FundOverview {
    /// Builds the cards from listed rows. Absent rows read as all zeros.
    #[must_use]
    pub fn from_rows(rows: &[financial_data::Model]) -> Self {
        let ganesh = find_fund(rows, FundType::GaneshChanda);
        let gold = find_fund(rows, FundType::MarriageGold);

        let current_amount = ganesh.and_then(|r| r.current_amount).unwrap_or(0.0);
        let target_amount = ganesh.and_then(|r| r.target_amount).unwrap_or(0.0);

        Self {
            ganesh_chanda: GaneshChandaCard {
                current_amount,
                target_amount,
                contributors: ganesh.and_then(|r| r.contributors).unwrap_or(0),
                total_members: ganesh.and_then(|r| r.total_members).unwrap_or(0),
                progress_percent: calculate_progress(current_amount, target_amount),
            },
            marriage_gold: MarriageGoldCard {
                total_fund: gold.and_then(|r| r.total_fund).unwrap_or(0.0),
                recent_support: gold.and_then(|r| r.recent_support).unwrap_or(0.0),
                last_recipient: gold
                    .and_then(|r| r.last_recipient.clone())
                    .unwrap_or_default(),
            },
        }
    }
}

/// Reads the fund rows and builds the overview.
pub async fn generate_fund_overview<C>(db: &C) -> Result<FundOverview>
where
    C: ConnectionTrait,
{
    let rows = list_financial_data(db).await?;
    Ok(FundOverview::from_rows(&rows))
}

/// Calculates how much of the target has been collected, as a percentage.
///
/// Returns 0 when the target is zero. Values above 100 mean the target was
/// exceeded.
#[must_use]
pub fn calculate_progress(current: f64, target: f64) -> f64 {
    if target == 0.0 {
        return 0.0;
    }

    (current / target) * 100.0
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80.0%`. The bar is
/// clamped to 0-100 but the printed number is not.
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = progress_percent.clamp(0.0, 100.0);

    // Cast safety: clamped_progress ∈ [0, 100], length is small (10-20).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {progress_percent:.1}%")
}

/// Formats an amount in rupees with Indian digit grouping.
///
/// Whole amounts print without decimals (`₹1,25,000`); anything else gets two
/// (`₹12,34,567.50`).
#[must_use]
pub fn format_rupees(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let rounded = (amount.abs() * 100.0).round() / 100.0;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = rounded.trunc() as u64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let paise = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let grouped = group_indian(whole);
    if paise == 0 {
        format!("{sign}₹{grouped}")
    } else {
        format!("{sign}₹{grouped}.{paise:02}")
    }
}

// Last three digits, then pairs: 12,34,567
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
