use serde::Serialize;

use sanjesh_core::models::cutoff::{Cutoff, Severity};

use crate::scoring::{round2, ScaleBounds};

/// One qualitative band of a score table.
///
/// The interpretation text lives on the band so that the label a score gets
/// and the paragraph shown for it always come from the same lookup.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
    pub label: &'static str,
    pub severity: Option<Severity>,
    pub interpretation: &'static str,
}

/// Shorthand used by the instrument tables.
pub const fn band(
    min: f64,
    max: f64,
    label: &'static str,
    severity: Option<Severity>,
    interpretation: &'static str,
) -> Band {
    Band {
        min,
        max,
        label,
        severity,
        interpretation,
    }
}

impl Band {
    pub fn contains(&self, score: f64) -> bool {
        self.min <= score && score <= self.max
    }

    pub fn to_cutoff(&self) -> Cutoff {
        Cutoff {
            min: self.min,
            max: self.max,
            label: self.label.to_string(),
            severity: self.severity,
        }
    }
}

/// First band containing `score`, if any. Tables hold a handful of bands, so
/// a linear scan is all this needs.
pub fn lookup(bands: &[Band], score: f64) -> Option<&Band> {
    bands.iter().find(|b| b.contains(score))
}

/// Describe every way `bands` fails to partition `bounds` at 0.01 precision.
///
/// An empty result means each score in `bounds.min..=bounds.max` lands in
/// exactly one band.
pub fn coverage_problems(bands: &[Band], bounds: ScaleBounds) -> Vec<String> {
    let mut problems = Vec::new();
    let (Some(first), Some(last)) = (bands.first(), bands.last()) else {
        problems.push("band table is empty".to_string());
        return problems;
    };

    if round2(first.min) != f64::from(bounds.min) {
        problems.push(format!(
            "first band '{}' starts at {} instead of {}",
            first.label, first.min, bounds.min
        ));
    }
    if round2(last.max) != f64::from(bounds.max) {
        problems.push(format!(
            "last band '{}' ends at {} instead of {}",
            last.label, last.max, bounds.max
        ));
    }

    for b in bands {
        if b.min > b.max {
            problems.push(format!(
                "band '{}' has min {} above max {}",
                b.label, b.min, b.max
            ));
        }
    }

    for pair in bands.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let expected = round2(prev.max + 0.01);
        if round2(next.min) < expected {
            problems.push(format!(
                "bands '{}' and '{}' overlap at {}",
                prev.label, next.label, next.min
            ));
        } else if round2(next.min) > expected {
            problems.push(format!(
                "gap between '{}' (ends {}) and '{}' (starts {})",
                prev.label, prev.max, next.label, next.min
            ));
        }
    }

    problems
}
