use sanjesh_core::models::answer::AnswerSet;
use sanjesh_instruments::cutoff::{band, coverage_problems, Band};
use sanjesh_instruments::definition::{Instrument, InstrumentDefinition, SubscaleDefinition};
use sanjesh_instruments::engine::ScoringEngine;
use sanjesh_instruments::error::InstrumentError;
use sanjesh_instruments::get_instrument;
use sanjesh_instruments::recommend::{RecommendationRule, Trigger};
use sanjesh_instruments::registry::Registry;
use sanjesh_instruments::scoring::{ScaleBounds, LIKERT_5};
use sanjesh_instruments::validation::validate_scores;

const THREE_TIERS: &[Band] = &[
    band(1.0, 2.4, "low", None, "low"),
    band(2.41, 3.4, "mid", None, "mid"),
    band(3.41, 5.0, "high", None, "high"),
];

const SUBSCALES: &[SubscaleDefinition] = &[
    SubscaleDefinition {
        id: "a",
        name: "A",
        items: &[1, 2],
        cutoffs: THREE_TIERS,
    },
    SubscaleDefinition {
        id: "b",
        name: "B",
        items: &[3, 4],
        cutoffs: THREE_TIERS,
    },
];

const SOUND: InstrumentDefinition = InstrumentDefinition {
    id: "sound",
    name: "Sound",
    item_count: 4,
    scale: LIKERT_5,
    subscales: SUBSCALES,
    reverse_items: &[2],
    total_cutoffs: THREE_TIERS,
    recommendations: &[RecommendationRule {
        when: Trigger::SubscaleAtMost {
            subscale: "a",
            threshold: 2.4,
        },
        tests: &["sound"],
    }],
};

fn problems_of(definition: InstrumentDefinition) -> Vec<String> {
    let leaked: &'static InstrumentDefinition = Box::leak(Box::new(definition));
    match Instrument::new(leaked) {
        Ok(_) => Vec::new(),
        Err(InstrumentError::InvalidDefinition { problems, .. }) => problems,
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn sound_definition_passes() {
    assert!(problems_of(SOUND).is_empty());
    let registry = Registry::new(&[&SOUND]).unwrap();
    assert_eq!(registry.len(), 1);
}

#[test]
fn gap_between_bands_is_reported() {
    const GAPPED: &[Band] = &[
        band(1.0, 2.4, "low", None, "low"),
        band(2.5, 3.4, "mid", None, "mid"),
        band(3.5, 5.0, "high", None, "high"),
    ];
    let problems = coverage_problems(GAPPED, ScaleBounds::new(1, 5));
    assert_eq!(problems.len(), 2);
    assert!(problems[0].starts_with("gap between 'low'"));
}

#[test]
fn overlapping_and_short_tables_are_reported() {
    const BAD: &[Band] = &[
        band(1.0, 3.0, "low", None, "low"),
        band(2.5, 4.5, "high", None, "high"),
    ];
    let problems = coverage_problems(BAD, ScaleBounds::new(1, 5));
    assert!(problems.iter().any(|p| p.contains("ends at 4.5")));
    assert!(problems.iter().any(|p| p.contains("overlap")));

    assert_eq!(
        coverage_problems(&[], ScaleBounds::new(1, 5)),
        vec!["band table is empty".to_string()]
    );
}

#[test]
fn unassigned_and_duplicate_items_are_reported() {
    let problems = problems_of(InstrumentDefinition {
        item_count: 5,
        subscales: &[
            SubscaleDefinition {
                id: "a",
                name: "A",
                items: &[1, 2, 3],
                cutoffs: THREE_TIERS,
            },
            SubscaleDefinition {
                id: "b",
                name: "B",
                items: &[3, 4],
                cutoffs: THREE_TIERS,
            },
        ],
        ..SOUND
    });

    assert!(problems.contains(&"item 3 belongs to more than one subscale".to_string()));
    assert!(problems.contains(&"item 5 is not assigned to a subscale".to_string()));
}

#[test]
fn reverse_items_outside_the_instrument_are_reported() {
    let problems = problems_of(InstrumentDefinition {
        reverse_items: &[2, 9],
        ..SOUND
    });
    assert_eq!(problems, vec!["reverse item 9 is outside 1..=4".to_string()]);
}

#[test]
fn rules_must_name_real_subscales_and_instruments() {
    let problems = problems_of(InstrumentDefinition {
        recommendations: &[RecommendationRule {
            when: Trigger::SubscaleAbove {
                subscale: "missing",
                threshold: 4.0,
            },
            tests: &["sound"],
        }],
        ..SOUND
    });
    assert_eq!(
        problems,
        vec!["recommendation rule reads unknown subscale 'missing'".to_string()]
    );

    const DANGLING: InstrumentDefinition = InstrumentDefinition {
        id: "dangling",
        recommendations: &[RecommendationRule {
            when: Trigger::TotalAtMost { threshold: 2.0 },
            tests: &["nowhere"],
        }],
        ..SOUND
    };
    let err = Registry::new(&[&SOUND, &DANGLING]).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::InvalidRegistry(ref problems)
            if problems == &vec!["instrument 'dangling' recommends unknown test 'nowhere'".to_string()]
    ));

    let err = Registry::new(&[&SOUND, &SOUND]).unwrap_err();
    assert!(err.to_string().contains("registered twice"));
}

#[test]
fn validate_scores_flags_empty_subscales() {
    let instrument = get_instrument("innovation").unwrap();
    let engine = ScoringEngine::default();

    let partial = AnswerSet::from([(1, 3), (2, 3), (3, 3)]);
    let result = engine.score(instrument, &partial).unwrap();
    let violations = validate_scores(instrument, &result);

    let flagged: Vec<&str> = violations.iter().map(|v| v.score_id.as_str()).collect();
    assert_eq!(
        flagged,
        vec!["risk_taking", "idea_implementation", "challenging_status_quo"]
    );
    // creative_thinking alone averages 4.0, pulling the total to exactly 1.0.
    assert_eq!(result.total_score, 1.0);
    assert!(violations[0].message.contains("outside range [1, 5]"));
}
