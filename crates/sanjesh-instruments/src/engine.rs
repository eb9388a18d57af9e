use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use sanjesh_core::models::answer::AnswerSet;
use sanjesh_core::models::result::ScoreResult;

use crate::cutoff::lookup;
use crate::definition::Instrument;
use crate::error::InstrumentError;
use crate::recommend::{recommend, ScoreView};
use crate::scoring::round2;
use crate::validation::validate_scores;

/// Shown in place of band text when a score matches no band, which in
/// practice means nothing was answered.
pub const INSUFFICIENT_DATA_TEXT: &str =
    "پاسخ‌های کافی برای تفسیر این نمره ثبت نشده است. لطفاً همه پرسش‌ها را پاسخ دهید.";

pub const BREAKDOWN_HEADER: &str = "جزئیات زیرمقیاس‌ها:";

/// What to do with an answer set that does not cover every item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Score whatever resolved. Empty subscales score 0.
    #[default]
    Lenient,
    /// Refuse to score unless every item has a usable answer.
    RequireComplete,
}

/// Turns answer sets into [`ScoreResult`]s. Holds no per-call state, so one
/// engine can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    policy: ScoringPolicy,
}

/// Per-subscale running totals.
#[derive(Debug, Default, Clone, Copy)]
struct Bucket {
    sum: u32,
    count: u32,
}

impl Bucket {
    fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            round2(f64::from(self.sum) / f64::from(self.count))
        }
    }
}

impl ScoringEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    pub fn score(
        &self,
        instrument: &Instrument,
        answers: &AnswerSet,
    ) -> Result<ScoreResult, InstrumentError> {
        let def = instrument.definition();
        let scale = def.scale;
        let mut buckets = vec![Bucket::default(); def.subscales.len()];

        for (ordinal, option_index) in answers.iter() {
            let Some(key) = instrument.resolver().resolve(ordinal) else {
                debug!(instrument = def.id, ordinal, "ignoring answer outside item range");
                continue;
            };
            let Some(raw) = scale.option_value(option_index) else {
                warn!(
                    instrument = def.id,
                    ordinal, option_index, "ignoring answer with unknown option index"
                );
                continue;
            };
            let value = if key.reverse {
                scale.bounds.reverse(raw)
            } else {
                raw
            };
            let bucket = &mut buckets[key.subscale];
            bucket.sum += u32::from(value);
            bucket.count += 1;
        }

        let answered: u32 = buckets.iter().map(|b| b.count).sum();
        if self.policy == ScoringPolicy::RequireComplete && answered < def.item_count {
            return Err(InstrumentError::InsufficientData {
                instrument_id: def.id.to_string(),
                answered,
                expected: def.item_count,
            });
        }

        let means: Vec<f64> = buckets.iter().map(Bucket::mean).collect();
        let total_score = if means.is_empty() {
            0.0
        } else {
            round2(means.iter().sum::<f64>() / means.len() as f64)
        };

        let total_band = lookup(def.total_cutoffs, total_score);

        let mut subscales = BTreeMap::new();
        let mut subscale_interpretations = BTreeMap::new();
        let mut view = ScoreView {
            total: (answered > 0).then_some(total_score),
            ..ScoreView::default()
        };
        for ((subscale, bucket), &mean) in def.subscales.iter().zip(&buckets).zip(&means) {
            subscales.insert(subscale.id.to_string(), mean);
            let text = lookup(subscale.cutoffs, mean)
                .map_or(INSUFFICIENT_DATA_TEXT, |b| b.interpretation);
            subscale_interpretations.insert(subscale.id.to_string(), text.to_string());
            if bucket.count > 0 {
                view.subscales.insert(subscale.id, mean);
            }
        }

        let recommended = recommend(def.recommendations, &view);

        let mut interpretation = total_band
            .map_or(INSUFFICIENT_DATA_TEXT, |b| b.interpretation)
            .to_string();
        interpretation.push_str("\n\n");
        interpretation.push_str(BREAKDOWN_HEADER);
        for (subscale, mean) in def.subscales.iter().zip(&means) {
            interpretation.push_str(&format!("\n- {}: {:.2}", subscale.name, mean));
        }

        let result = ScoreResult {
            total_score,
            subscales,
            interpretation,
            cutoff: total_band.map(|b| b.to_cutoff()),
            recommended_tests: (!recommended.is_empty()).then_some(recommended),
            subscale_interpretations,
            completeness: completeness(answered, def.item_count),
            answered_items: answered,
            expected_items: def.item_count,
        };

        if self.policy == ScoringPolicy::RequireComplete
            && let Some(violation) = validate_scores(instrument, &result).into_iter().next()
        {
            return Err(violation.into());
        }

        debug!(
            instrument = def.id,
            total = result.total_score,
            answered,
            band = total_band.map(|b| b.label),
            "scored answer set"
        );
        Ok(result)
    }
}

fn completeness(answered: u32, expected: u32) -> f64 {
    if expected == 0 {
        return 0.0;
    }
    f64::from(answered.min(expected)) / f64::from(expected)
}
