//! sanjesh-instruments
//!
//! Questionnaire definitions and the engine that scores them. Pure
//! computation: answers in, subscale means, bands, interpretation text and
//! follow-up test suggestions out.
//!
//! Every instrument is a data table ([`definition::InstrumentDefinition`]);
//! [`engine::ScoringEngine`] is the only scoring algorithm.

pub mod cutoff;
pub mod definition;
pub mod engine;
pub mod error;
pub mod instruments;
pub mod recommend;
pub mod registry;
pub mod scoring;
pub mod validation;

use sanjesh_core::models::answer::AnswerSet;
use sanjesh_core::models::result::ScoreResult;

use definition::Instrument;
use engine::{ScoringEngine, ScoringPolicy};
use error::InstrumentError;
use registry::Registry;

/// Return all built-in instruments.
pub fn all_instruments() -> Result<&'static [Instrument], InstrumentError> {
    Ok(Registry::builtin()?.instruments())
}

/// Look up a built-in instrument by id.
pub fn get_instrument(id: &str) -> Result<&'static Instrument, InstrumentError> {
    Registry::builtin()?
        .get(id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}

/// Score `answers` against the built-in instrument `instrument_id`.
///
/// Lenient: incomplete answer sets are scored as far as they go. Use
/// [`ScoringEngine`] with [`ScoringPolicy::RequireComplete`] to refuse them.
pub fn calculate_score(
    instrument_id: &str,
    answers: &AnswerSet,
) -> Result<ScoreResult, InstrumentError> {
    let instrument = get_instrument(instrument_id)?;
    ScoringEngine::new(ScoringPolicy::Lenient).score(instrument, answers)
}
