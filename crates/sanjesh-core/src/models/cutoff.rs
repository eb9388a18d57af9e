use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How concerning a band is. Descriptive instruments leave this unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// The cutoff band a total score fell into, as reported to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cutoff {
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub severity: Option<Severity>,
}
