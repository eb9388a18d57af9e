use std::io::Read;
use std::path::Path;

use serde::Serialize;

use sanjesh_core::error::CoreError;
use sanjesh_core::models::answer::AnswerSet;
use sanjesh_core::models::result::ScoreResult;
use sanjesh_instruments::definition::Instrument;
use sanjesh_instruments::engine::{ScoringEngine, ScoringPolicy};
use sanjesh_instruments::registry::Registry;
use sanjesh_instruments::{all_instruments, get_instrument};

#[derive(Debug, Serialize)]
pub struct InstrumentSummary {
    pub id: String,
    pub name: String,
    pub item_count: u32,
    pub subscales: Vec<String>,
}

pub fn list_instruments() -> eyre::Result<Vec<InstrumentSummary>> {
    Ok(all_instruments()?
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            item_count: i.definition().item_count,
            subscales: i
                .definition()
                .subscales
                .iter()
                .map(|s| s.id.to_string())
                .collect(),
        })
        .collect())
}

/// Full definition of one instrument as pretty JSON.
pub fn show_instrument(id: &str) -> eyre::Result<String> {
    let instrument = get_instrument(id)?;
    Ok(serde_json::to_string_pretty(instrument.definition())?)
}

/// Build and validate the built-in registry, returning the instrument count.
pub fn validate_registry() -> eyre::Result<usize> {
    let registry = Registry::builtin()?;
    Ok(registry.len())
}

/// Read answers from `path`, or stdin when `path` is `None`.
pub fn read_answers(instrument: &Instrument, path: Option<&Path>) -> eyre::Result<AnswerSet> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_answers(instrument, &raw)
}

/// Parse `{"<ordinal>": <optionIndex> | "<label>"}`. Numeric and label
/// answers may be mixed in one file.
pub fn parse_answers(instrument: &Instrument, raw: &str) -> eyre::Result<AnswerSet> {
    let json: serde_json::Value = serde_json::from_str(raw)?;
    let obj = json
        .as_object()
        .ok_or_else(|| eyre::eyre!("answers must be a JSON object of ordinal → answer"))?;

    let mut indexed = Vec::new();
    let mut labelled = Vec::new();
    for (key, value) in obj {
        let Some(ordinal) = AnswerSet::parse_ordinal(key)? else {
            continue;
        };
        match value {
            serde_json::Value::Number(n) => {
                let option = n.as_i64().ok_or_else(|| CoreError::InvalidAnswer {
                    ordinal,
                    reason: format!("option index {n} is not an integer"),
                })?;
                match u32::try_from(option) {
                    Ok(option) => indexed.push((ordinal, option)),
                    Err(_) => {
                        tracing::debug!(ordinal, option, "dropping answer with invalid option index");
                    }
                }
            }
            serde_json::Value::String(label) => labelled.push((ordinal, label.as_str())),
            other => {
                return Err(CoreError::InvalidAnswer {
                    ordinal,
                    reason: format!("expected an option index or label, got {other}"),
                }
                .into());
            }
        }
    }

    let mut answers = instrument.answers_from_labels(labelled)?;
    for (ordinal, option) in indexed {
        answers.insert(ordinal, option);
    }
    Ok(answers)
}

pub fn score(
    instrument_id: &str,
    answers_path: Option<&Path>,
    policy: ScoringPolicy,
) -> eyre::Result<ScoreResult> {
    let instrument = get_instrument(instrument_id)?;
    let answers = read_answers(instrument, answers_path)?;
    let engine = ScoringEngine::new(policy);
    tracing::debug!(
        instrument = instrument_id,
        answers = answers.len(),
        policy = ?engine.policy(),
        "scoring"
    );

    let result = engine.score(instrument, &answers)?;
    if !result.is_complete() {
        tracing::warn!(
            instrument = instrument_id,
            completeness = result.completeness,
            "answer set is incomplete; unanswered subscales score 0"
        );
    }
    Ok(result)
}
