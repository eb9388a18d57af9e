use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::cutoff::Cutoff;

/// Outcome of scoring one answer set against one instrument.
///
/// Field names follow the camelCase shape the web client already renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreResult {
    /// Mean of the subscale means, rounded to 2 decimals.
    pub total_score: f64,
    /// Subscale id to mean item score. A subscale with no answers scores 0.
    pub subscales: BTreeMap<String, f64>,
    pub interpretation: String,
    pub cutoff: Option<Cutoff>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub recommended_tests: Option<Vec<String>>,
    pub subscale_interpretations: BTreeMap<String, String>,
    /// `answered_items / expected_items`, unrounded.
    pub completeness: f64,
    /// Items that resolved to a usable answer.
    pub answered_items: u32,
    /// Items the instrument has.
    pub expected_items: u32,
}

impl ScoreResult {
    pub fn is_complete(&self) -> bool {
        self.answered_items >= self.expected_items
    }

    pub fn subscale(&self, id: &str) -> Option<f64> {
        self.subscales.get(id).copied()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
