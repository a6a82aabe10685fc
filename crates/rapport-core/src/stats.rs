//! Dashboard aggregation and display formatting.

use serde::{Deserialize, Serialize};

use crate::entities::DashboardRow;
use crate::enums::PredictionClass;
use crate::ids::CoupleId;

/// Placeholder shown when a couple has no prediction yet.
pub const PLACEHOLDER: &str = "-";

/// Aggregate counts over a dashboard.
///
/// Invariant: `total == divorced + married + no_prediction`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub divorced: usize,
    pub married: usize,
    pub no_prediction: usize,
}

impl DashboardStats {
    /// Count couples by their latest class in a single pass.
    #[must_use]
    pub fn tally(rows: &[DashboardRow]) -> Self {
        rows.iter().fold(Self::default(), |mut stats, row| {
            stats.total += 1;
            match PredictionClass::from_raw(row.last_class) {
                Some(PredictionClass::Divorced) => stats.divorced += 1,
                Some(PredictionClass::Married) => stats.married += 1,
                None => stats.no_prediction += 1,
            }
            stats
        })
    }
}

/// Render a probability as a percentage with one decimal place.
///
/// Absent, zero, and NaN probabilities all render as the placeholder.
#[must_use]
pub fn format_probability(proba: Option<f64>) -> String {
    match proba {
        Some(p) if p != 0.0 && !p.is_nan() => format!("{:.1}%", p * 100.0),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Human label for a raw class value.
#[must_use]
pub fn class_label(raw: Option<i64>) -> &'static str {
    PredictionClass::from_raw(raw).map_or(PLACEHOLDER, PredictionClass::label)
}

/// `"Alice & Bob"`.
#[must_use]
pub fn couple_names(row: &DashboardRow) -> String {
    format!("{} & {}", row.partner_a_name, row.partner_b_name)
}

/// Link to a couple's history (timeline) page.
///
/// Relative when no frontend URL is configured.
#[must_use]
pub fn history_link(frontend_url: &str, couple_id: CoupleId) -> String {
    let page = format!("timeline.html?couple_id={couple_id}");
    let base = frontend_url.trim_end_matches('/');
    if base.is_empty() {
        page
    } else {
        format!("{base}/{page}")
    }
}
