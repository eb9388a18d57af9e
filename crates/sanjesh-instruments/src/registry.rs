use std::sync::LazyLock;

use tracing::info;

use crate::definition::{Instrument, InstrumentDefinition};
use crate::error::InstrumentError;
use crate::instruments;
use crate::validation;

/// A validated, immutable set of instruments.
#[derive(Debug, Clone)]
pub struct Registry {
    instruments: Vec<Instrument>,
}

static BUILTIN: LazyLock<Result<Registry, InstrumentError>> = LazyLock::new(|| {
    let registry = Registry::new(instruments::BUILTIN)?;
    info!(count = registry.len(), "instrument registry ready");
    Ok(registry)
});

impl Registry {
    /// Validate every definition and the cross-references between them.
    pub fn new(
        definitions: &[&'static InstrumentDefinition],
    ) -> Result<Self, InstrumentError> {
        let instruments = definitions
            .iter()
            .map(|&def| Instrument::new(def))
            .collect::<Result<Vec<_>, _>>()?;

        let problems = validation::registry_problems(definitions);
        if !problems.is_empty() {
            return Err(InstrumentError::InvalidRegistry(problems));
        }
        Ok(Self { instruments })
    }

    /// The instruments compiled into this crate, validated once per process.
    pub fn builtin() -> Result<&'static Registry, InstrumentError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    pub fn get(&self, id: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.id() == id)
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
