use sanjesh_instruments::recommend::{recommend, RecommendationRule, ScoreView, Trigger};

const RULES: &[RecommendationRule] = &[
    RecommendationRule {
        when: Trigger::TotalAtMost { threshold: 2.4 },
        tests: &["growth-mindset", "curiosity"],
    },
    RecommendationRule {
        when: Trigger::SubscaleAtMost {
            subscale: "planning",
            threshold: 2.4,
        },
        tests: &["curiosity", "lifestyle-harmony"],
    },
    RecommendationRule {
        when: Trigger::SubscaleAbove {
            subscale: "planning",
            threshold: 4.2,
        },
        tests: &["innovation"],
    },
    RecommendationRule {
        when: Trigger::TotalAbove { threshold: 4.2 },
        tests: &["innovation"],
    },
];

fn view(total: Option<f64>, planning: Option<f64>) -> ScoreView {
    let mut view = ScoreView {
        total,
        ..ScoreView::default()
    };
    if let Some(score) = planning {
        view.subscales.insert("planning", score);
    }
    view
}

#[test]
fn rules_fire_in_order_without_duplicates() {
    let tests = recommend(RULES, &view(Some(2.0), Some(1.5)));
    assert_eq!(tests, vec!["growth-mindset", "curiosity", "lifestyle-harmony"]);
}

#[test]
fn thresholds_are_inclusive_below_and_strict_above() {
    assert_eq!(recommend(RULES, &view(Some(2.4), None)), vec!["growth-mindset", "curiosity"]);
    assert!(recommend(RULES, &view(Some(4.2), None)).is_empty());
    assert_eq!(recommend(RULES, &view(Some(4.21), Some(4.3))), vec!["innovation"]);
}

#[test]
fn missing_scores_never_fire() {
    assert!(recommend(RULES, &view(None, None)).is_empty());
}
