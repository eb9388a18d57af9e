use std::collections::HashMap;

use serde::Serialize;

/// Condition under which a rule fires. Thresholds compare against scores
/// already rounded to 2 decimals.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    TotalAtMost { threshold: f64 },
    TotalAbove { threshold: f64 },
    SubscaleAtMost { subscale: &'static str, threshold: f64 },
    SubscaleAbove { subscale: &'static str, threshold: f64 },
}

impl Trigger {
    /// Subscale the trigger reads, if it reads one.
    pub fn subscale(&self) -> Option<&'static str> {
        match *self {
            Trigger::SubscaleAtMost { subscale, .. } | Trigger::SubscaleAbove { subscale, .. } => {
                Some(subscale)
            }
            Trigger::TotalAtMost { .. } | Trigger::TotalAbove { .. } => None,
        }
    }
}

/// "When this holds, suggest these follow-up instruments."
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RecommendationRule {
    pub when: Trigger,
    pub tests: &'static [&'static str],
}

/// Scores a rule set is evaluated against.
///
/// Scores with no answers behind them are left out, so an unanswered
/// subscale never reads as a very low one.
#[derive(Debug, Default)]
pub struct ScoreView {
    pub total: Option<f64>,
    pub subscales: HashMap<&'static str, f64>,
}

impl ScoreView {
    fn fires(&self, trigger: &Trigger) -> bool {
        match *trigger {
            Trigger::TotalAtMost { threshold } => self.total.is_some_and(|t| t <= threshold),
            Trigger::TotalAbove { threshold } => self.total.is_some_and(|t| t > threshold),
            Trigger::SubscaleAtMost {
                subscale,
                threshold,
            } => self
                .subscales
                .get(subscale)
                .is_some_and(|&s| s <= threshold),
            Trigger::SubscaleAbove {
                subscale,
                threshold,
            } => self.subscales.get(subscale).is_some_and(|&s| s > threshold),
        }
    }
}

/// Walk `rules` in order and collect the tests of every rule that fires.
/// Each test id appears once, at the position of the first rule naming it.
pub fn recommend(rules: &[RecommendationRule], scores: &ScoreView) -> Vec<String> {
    let mut tests: Vec<String> = Vec::new();
    for rule in rules.iter().filter(|r| scores.fires(&r.when)) {
        for &test in rule.tests {
            if !tests.iter().any(|t| t == test) {
                tests.push(test.to_string());
            }
        }
    }
    tests
}
