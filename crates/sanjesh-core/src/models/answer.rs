use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::CoreError;

/// One respondent's raw answers: question ordinal (1-based) to the selected
/// option index (0-based).
///
/// Ordinals are not checked against any instrument here. The scoring engine
/// decides what to do with ordinals and option indexes it cannot place.
/// Entries whose ordinal or option index is negative are dropped while
/// parsing, so one bad key never rejects the rest of the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct AnswerSet(BTreeMap<u32, u32>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any earlier answer to the same question.
    pub fn insert(&mut self, ordinal: u32, option_index: u32) -> Option<u32> {
        self.0.insert(ordinal, option_index)
    }

    pub fn get(&self, ordinal: u32) -> Option<u32> {
        self.0.get(&ordinal).copied()
    }

    /// Answers in ascending ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().map(|(&ordinal, &option)| (ordinal, option))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse the `{"<ordinal>": <optionIndex>}` JSON form sent by the web client.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a question key such as `"7"` into an ordinal.
    ///
    /// A key that is not an integer at all is an error. An integer that can
    /// never be an ordinal (negative, or past `u32`) yields `Ok(None)`.
    pub fn parse_ordinal(key: &str) -> Result<Option<u32>, CoreError> {
        let ordinal = key
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::InvalidOrdinal(key.to_string()))?;
        Ok(usable_ordinal(ordinal))
    }
}

fn usable_ordinal(ordinal: i64) -> Option<u32> {
    let usable = u32::try_from(ordinal).ok();
    if usable.is_none() {
        debug!(ordinal, "dropping answer with invalid ordinal");
    }
    usable
}

impl<'de> Deserialize<'de> for AnswerSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<i64, i64>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(ordinal, option)| {
                let ordinal = usable_ordinal(ordinal)?;
                match u32::try_from(option) {
                    Ok(option) => Some((ordinal, option)),
                    Err(_) => {
                        debug!(ordinal, option, "dropping answer with invalid option index");
                        None
                    }
                }
            })
            .collect())
    }
}

impl FromIterator<(u32, u32)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(u32, u32); N]> for AnswerSet {
    fn from(pairs: [(u32, u32); N]) -> Self {
        pairs.into_iter().collect()
    }
}
