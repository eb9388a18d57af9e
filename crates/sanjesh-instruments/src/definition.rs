use serde::Serialize;

use sanjesh_core::models::answer::AnswerSet;

use crate::cutoff::Band;
use crate::error::InstrumentError;
use crate::recommend::RecommendationRule;
use crate::scoring::ResponseScale;
use crate::validation;

/// Static description of one questionnaire. Pure data; all behaviour lives in
/// the engine.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InstrumentDefinition {
    /// Slug used by callers, e.g. `"growth-mindset"`.
    pub id: &'static str,
    pub name: &'static str,
    pub item_count: u32,
    pub scale: ResponseScale,
    pub subscales: &'static [SubscaleDefinition],
    /// Ordinals whose response is flipped before aggregation.
    pub reverse_items: &'static [u32],
    pub total_cutoffs: &'static [Band],
    pub recommendations: &'static [RecommendationRule],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubscaleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub items: &'static [u32],
    pub cutoffs: &'static [Band],
}

/// Where an item's answer goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemKey {
    /// Index into [`InstrumentDefinition::subscales`].
    pub subscale: usize,
    pub reverse: bool,
}

/// Ordinal → [`ItemKey`] table, indexed directly by ordinal.
#[derive(Debug, Clone)]
pub struct ItemResolver {
    slots: Vec<Option<ItemKey>>,
}

impl ItemResolver {
    pub fn new(definition: &InstrumentDefinition) -> Self {
        let len = definition.item_count as usize + 1;
        let mut slots = vec![None; len];
        for (index, subscale) in definition.subscales.iter().enumerate() {
            for &ordinal in subscale.items {
                if ordinal >= 1
                    && let Some(slot) = slots.get_mut(ordinal as usize)
                {
                    *slot = Some(ItemKey {
                        subscale: index,
                        reverse: definition.reverse_items.contains(&ordinal),
                    });
                }
            }
        }
        Self { slots }
    }

    /// `None` for ordinal 0 and anything past the last item.
    pub fn resolve(&self, ordinal: u32) -> Option<ItemKey> {
        self.slots.get(ordinal as usize).copied().flatten()
    }
}

/// A definition that passed validation, with its resolver built.
#[derive(Debug, Clone)]
pub struct Instrument {
    definition: &'static InstrumentDefinition,
    resolver: ItemResolver,
}

impl Instrument {
    /// Validate `definition` on its own. Cross-instrument checks (such as
    /// recommended test ids) happen in the registry.
    pub fn new(definition: &'static InstrumentDefinition) -> Result<Self, InstrumentError> {
        let problems = validation::definition_problems(definition);
        if !problems.is_empty() {
            return Err(InstrumentError::InvalidDefinition {
                instrument_id: definition.id.to_string(),
                problems,
            });
        }
        Ok(Self {
            definition,
            resolver: ItemResolver::new(definition),
        })
    }

    pub fn id(&self) -> &'static str {
        self.definition.id
    }

    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    pub fn definition(&self) -> &'static InstrumentDefinition {
        self.definition
    }

    pub fn resolver(&self) -> &ItemResolver {
        &self.resolver
    }
}

impl Instrument {
    /// Build an answer set from response labels (`"agree"`, ...) instead of
    /// option indexes.
    pub fn answers_from_labels<'a, I>(&self, labelled: I) -> Result<AnswerSet, InstrumentError>
    where
        I: IntoIterator<Item = (u32, &'a str)>,
    {
        labelled
            .into_iter()
            .map(|(ordinal, label)| {
                self.definition
                    .scale
                    .option_index(label)
                    .map(|index| (ordinal, index))
                    .ok_or_else(|| InstrumentError::UnknownLabel {
                        ordinal,
                        label: label.to_string(),
                    })
            })
            .collect()
    }
}
