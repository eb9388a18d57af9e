use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use serde_json::json;

use sanjesh_core::error::CoreError;
use sanjesh_core::models::answer::AnswerSet;
use sanjesh_core::models::cutoff::{Cutoff, Severity};
use sanjesh_core::models::result::ScoreResult;

fn sample_result(recommended: Option<Vec<String>>) -> ScoreResult {
    ScoreResult {
        total_score: 2.25,
        subscales: BTreeMap::from([("planning".to_string(), 2.0), ("punctuality".to_string(), 2.5)]),
        interpretation: "text".to_string(),
        cutoff: Some(Cutoff {
            min: 1.0,
            max: 2.4,
            label: "پایین".to_string(),
            severity: Some(Severity::Moderate),
        }),
        recommended_tests: recommended,
        subscale_interpretations: BTreeMap::new(),
        completeness: 1.0,
        answered_items: 12,
        expected_items: 12,
    }
}

#[test]
fn result_serializes_in_camel_case() {
    let value = serde_json::to_value(sample_result(Some(vec!["curiosity".to_string()]))).unwrap();
    assert_eq!(
        value,
        json!({
            "totalScore": 2.25,
            "subscales": { "planning": 2.0, "punctuality": 2.5 },
            "interpretation": "text",
            "cutoff": { "min": 1.0, "max": 2.4, "label": "پایین", "severity": "moderate" },
            "recommendedTests": ["curiosity"],
            "subscaleInterpretations": {},
            "completeness": 1.0,
            "answeredItems": 12,
            "expectedItems": 12,
        })
    );
}

#[test]
fn empty_recommendations_are_omitted() {
    let value = serde_json::to_value(sample_result(None)).unwrap();
    assert!(value.get("recommendedTests").is_none());

    let back: ScoreResult = serde_json::from_value(value).unwrap();
    assert_eq!(back.recommended_tests, None);
}

#[test]
fn missing_cutoff_serializes_as_null() {
    let mut result = sample_result(None);
    result.cutoff = None;
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["cutoff"], serde_json::Value::Null);
}

#[test]
fn answer_set_parses_string_keys() {
    let answers = AnswerSet::from_json(r#"{"1": 3, "12": 0, "7": 4}"#).unwrap();
    assert_eq!(answers.len(), 3);
    assert_eq!(answers.get(7), Some(4));
    let ordinals: Vec<u32> = answers.iter().map(|(o, _)| o).collect();
    assert_eq!(ordinals, vec![1, 7, 12]);
}

#[test]
fn malformed_answers_are_rejected() {
    assert!(matches!(
        AnswerSet::from_json(r#"{"one": 3}"#),
        Err(CoreError::Serialization(_))
    ));
    assert!(matches!(
        AnswerSet::parse_ordinal("q7"),
        Err(CoreError::InvalidOrdinal(key)) if key == "q7"
    ));
    assert_eq!(AnswerSet::parse_ordinal(" 7 ").unwrap(), Some(7));
    assert_eq!(AnswerSet::parse_ordinal("-3").unwrap(), None);
}

#[test]
fn negative_ordinals_and_options_are_dropped_not_rejected() {
    let answers = AnswerSet::from_json(r#"{"-1": 2, "1": 3, "2": -4, "5000000000": 1}"#).unwrap();
    assert_eq!(answers, AnswerSet::from([(1, 3)]));
}

#[test]
fn completeness_follows_item_counts() {
    let mut result = sample_result(None);
    result.answered_items = 249;
    result.expected_items = 250;
    result.completeness = 249.0 / 250.0;
    assert!(!result.is_complete());
}
