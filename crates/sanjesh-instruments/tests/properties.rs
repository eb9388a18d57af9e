use proptest::prelude::*;

use sanjesh_core::models::answer::AnswerSet;
use sanjesh_instruments::all_instruments;
use sanjesh_instruments::definition::{Instrument, InstrumentDefinition};
use sanjesh_instruments::engine::ScoringEngine;
use sanjesh_instruments::scoring::{ScaleBounds, LIKERT_5};

fn full_answers() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..5, 12)
}

fn to_answers(options: &[u32]) -> AnswerSet {
    options
        .iter()
        .enumerate()
        .map(|(i, &option)| (i as u32 + 1, option))
        .collect()
}

/// Same tables with reverse keying switched off.
fn without_reverse_keying(instrument: &Instrument) -> Instrument {
    let plain: &'static InstrumentDefinition = Box::leak(Box::new(InstrumentDefinition {
        reverse_items: &[],
        ..*instrument.definition()
    }));
    Instrument::new(plain).unwrap()
}

#[test]
fn reverse_is_an_involution() {
    let bounds = LIKERT_5.bounds;
    for value in bounds.min..=bounds.max {
        assert_eq!(bounds.reverse(bounds.reverse(value)), value);
    }
    assert_eq!(bounds.reverse(2), 4);

    let wide = ScaleBounds::new(200, 250);
    assert_eq!(wide.reverse(200), 250);
    assert_eq!(wide.reverse(225), 225);
    assert_eq!(wide.reverse(wide.reverse(231)), 231);
}

proptest! {
    #[test]
    fn complete_answers_stay_on_the_scale(options in full_answers()) {
        let engine = ScoringEngine::default();
        let answers = to_answers(&options);
        for instrument in all_instruments().unwrap() {
            let result = engine.score(instrument, &answers).unwrap();
            prop_assert!((1.0..=5.0).contains(&result.total_score), "{}: total {}", instrument.id(), result.total_score);
            for (id, score) in &result.subscales {
                prop_assert!((1.0..=5.0).contains(score), "{}: {} = {}", instrument.id(), id, score);
            }
            prop_assert!(result.cutoff.is_some());
            prop_assert_eq!(result.completeness, 1.0);
        }
    }

    #[test]
    fn flipping_reverse_answers_matches_unkeyed_scoring(options in full_answers()) {
        let engine = ScoringEngine::default();
        for instrument in all_instruments().unwrap() {
            let reverse = instrument.definition().reverse_items;
            let flipped: Vec<u32> = options
                .iter()
                .enumerate()
                .map(|(i, &option)| if reverse.contains(&(i as u32 + 1)) { 4 - option } else { option })
                .collect();

            let keyed = engine.score(instrument, &to_answers(&options)).unwrap();
            let plain = engine
                .score(&without_reverse_keying(instrument), &to_answers(&flipped))
                .unwrap();

            prop_assert_eq!(keyed.subscales, plain.subscales);
            prop_assert_eq!(keyed.total_score, plain.total_score);
        }
    }

    #[test]
    fn scoring_twice_gives_identical_results(options in prop::collection::vec((0u32..20, 0u32..7), 0..16)) {
        let answers: AnswerSet = options.into_iter().collect();
        let engine = ScoringEngine::default();
        for instrument in all_instruments().unwrap() {
            let first = engine.score(instrument, &answers).unwrap();
            let second = engine.score(instrument, &answers).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
