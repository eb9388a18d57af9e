//! Built-in instrument tables. Each module exports one `static`
//! [`InstrumentDefinition`]; none of them contain logic.

pub mod adaptability;
pub mod curiosity;
pub mod growth_mindset;
pub mod ideal_environment;
pub mod innovation;
pub mod learning_style;
pub mod lifestyle_harmony;
pub mod personal_values;
pub mod time_preference;

use crate::definition::InstrumentDefinition;

pub static BUILTIN: &[&InstrumentDefinition] = &[
    &adaptability::ADAPTABILITY,
    &curiosity::CURIOSITY,
    &growth_mindset::GROWTH_MINDSET,
    &ideal_environment::IDEAL_ENVIRONMENT,
    &innovation::INNOVATION,
    &learning_style::LEARNING_STYLE,
    &lifestyle_harmony::LIFESTYLE_HARMONY,
    &personal_values::PERSONAL_VALUES,
    &time_preference::TIME_PREFERENCE,
];
