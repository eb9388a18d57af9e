use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Inclusive bounds of a Likert scale, e.g. 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleBounds {
    pub min: u8,
    pub max: u8,
}

impl ScaleBounds {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Number of response options on the scale.
    pub fn points(&self) -> u32 {
        u32::from(self.max.saturating_sub(self.min)) + 1
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= f64::from(self.min) && value <= f64::from(self.max)
    }

    /// Flip a reverse-keyed response. Applying it twice returns the input.
    pub fn reverse(&self, value: u8) -> u8 {
        let flipped = (u16::from(self.max) + u16::from(self.min)).saturating_sub(u16::from(value));
        u8::try_from(flipped).unwrap_or(u8::MAX)
    }
}

/// A scale plus the label → weight table shown to respondents.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResponseScale {
    pub bounds: ScaleBounds,
    pub labels: &'static [(&'static str, u8)],
}

/// The 5-point agreement scale every built-in instrument uses.
pub const LIKERT_5: ResponseScale = ResponseScale {
    bounds: ScaleBounds::new(1, 5),
    labels: &[
        ("strongly_disagree", 1),
        ("disagree", 2),
        ("neutral", 3),
        ("agree", 4),
        ("strongly_agree", 5),
    ],
};

impl ResponseScale {
    /// Convert a 0-based option index into its scale value.
    ///
    /// Returns `None` when the index points past the last option.
    pub fn option_value(&self, option_index: u32) -> Option<u8> {
        if option_index >= self.bounds.points() {
            return None;
        }
        u8::try_from(option_index)
            .ok()
            .map(|offset| self.bounds.min + offset)
    }

    /// Weight of a response label such as `"agree"`.
    pub fn label_value(&self, label: &str) -> Option<u8> {
        self.labels
            .iter()
            .find(|(name, _)| *name == label)
            .map(|&(_, value)| value)
    }

    /// 0-based option index of a response label.
    pub fn option_index(&self, label: &str) -> Option<u32> {
        self.label_value(label)
            .and_then(|value| value.checked_sub(self.bounds.min))
            .map(u32::from)
    }
}

/// Round to two decimal places, the precision every reported score uses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A computed score that fell outside the scale it was measured on.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ScoreRangeViolation {
    /// Subscale id, or `"total"` for the aggregate score.
    pub score_id: String,
    pub value: f64,
    pub expected_range: ScaleBounds,
    pub message: String,
}
