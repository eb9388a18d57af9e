//! Load-time checks for instrument tables.
//!
//! A definition that fails here is a configuration bug. Problems are
//! collected rather than short-circuited so one run reports all of them.

use std::collections::HashSet;

use sanjesh_core::models::result::ScoreResult;

use crate::cutoff::coverage_problems;
use crate::definition::{Instrument, InstrumentDefinition};
use crate::scoring::ScoreRangeViolation;

pub fn definition_problems(def: &InstrumentDefinition) -> Vec<String> {
    let mut problems = Vec::new();
    let bounds = def.scale.bounds;

    if def.id.trim().is_empty() {
        problems.push("instrument id is empty".to_string());
    }
    if def.item_count == 0 {
        problems.push("item count is zero".to_string());
    }
    if bounds.min >= bounds.max {
        problems.push(format!(
            "scale min {} is not below max {}",
            bounds.min, bounds.max
        ));
    } else {
        for value in bounds.min..=bounds.max {
            let count = def.scale.labels.iter().filter(|(_, v)| *v == value).count();
            if count != 1 {
                problems.push(format!(
                    "scale value {value} has {count} response labels, expected 1"
                ));
            }
        }
    }
    for (label, value) in def.scale.labels {
        if !(bounds.min..=bounds.max).contains(value) {
            problems.push(format!("response label '{label}' weight {value} is off the scale"));
        }
    }

    let mut subscale_ids = HashSet::new();
    let mut seen_items: HashSet<u32> = HashSet::new();
    for subscale in def.subscales {
        if !subscale_ids.insert(subscale.id) {
            problems.push(format!("subscale '{}' is defined twice", subscale.id));
        }
        if subscale.items.is_empty() {
            problems.push(format!("subscale '{}' has no items", subscale.id));
        }
        for &ordinal in subscale.items {
            if ordinal < 1 || ordinal > def.item_count {
                problems.push(format!(
                    "subscale '{}' lists item {ordinal} outside 1..={}",
                    subscale.id, def.item_count
                ));
            } else if !seen_items.insert(ordinal) {
                problems.push(format!("item {ordinal} belongs to more than one subscale"));
            }
        }
        for problem in coverage_problems(subscale.cutoffs, bounds) {
            problems.push(format!("subscale '{}' cutoffs: {problem}", subscale.id));
        }
    }
    if def.subscales.is_empty() {
        problems.push("instrument has no subscales".to_string());
    }
    for ordinal in 1..=def.item_count {
        if !seen_items.contains(&ordinal) {
            problems.push(format!("item {ordinal} is not assigned to a subscale"));
        }
    }

    let mut reverse_seen = HashSet::new();
    for &ordinal in def.reverse_items {
        if ordinal < 1 || ordinal > def.item_count {
            problems.push(format!("reverse item {ordinal} is outside 1..={}", def.item_count));
        }
        if !reverse_seen.insert(ordinal) {
            problems.push(format!("reverse item {ordinal} is listed twice"));
        }
    }

    for problem in coverage_problems(def.total_cutoffs, bounds) {
        problems.push(format!("total cutoffs: {problem}"));
    }

    for rule in def.recommendations {
        if let Some(subscale) = rule.when.subscale()
            && !subscale_ids.contains(subscale)
        {
            problems.push(format!(
                "recommendation rule reads unknown subscale '{subscale}'"
            ));
        }
        if rule.tests.is_empty() {
            problems.push("recommendation rule names no tests".to_string());
        }
    }

    problems
}

/// Checks that need the whole instrument set: unique ids and recommendation
/// targets that actually exist.
pub fn registry_problems(defs: &[&InstrumentDefinition]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut ids = HashSet::new();
    for def in defs {
        if !ids.insert(def.id) {
            problems.push(format!("instrument '{}' is registered twice", def.id));
        }
    }
    for def in defs {
        for rule in def.recommendations {
            for test in rule.tests {
                if !ids.contains(test) {
                    problems.push(format!(
                        "instrument '{}' recommends unknown test '{test}'",
                        def.id
                    ));
                }
            }
        }
    }
    problems
}

/// Check a finished result against the instrument's scale.
///
/// Subscales with no answers legitimately score 0 and are reported too, so
/// callers can tell "insufficient data" apart from a real low score.
pub fn validate_scores(instrument: &Instrument, result: &ScoreResult) -> Vec<ScoreRangeViolation> {
    let bounds = instrument.definition().scale.bounds;
    let mut violations = Vec::new();

    let mut check = |score_id: &str, name: &str, value: f64| {
        if !bounds.contains(value) {
            violations.push(ScoreRangeViolation {
                score_id: score_id.to_string(),
                value,
                expected_range: bounds,
                message: format!(
                    "{}: {} score {} is outside range [{}, {}]",
                    instrument.name(),
                    name,
                    value,
                    bounds.min,
                    bounds.max,
                ),
            });
        }
    };

    for subscale in instrument.definition().subscales {
        if let Some(value) = result.subscale(subscale.id) {
            check(subscale.id, subscale.name, value);
        }
    }
    check("total", "total", result.total_score);

    violations
}
