//! sanjesh-core
//!
//! Shared vocabulary of the questionnaire scoring system: answer sets coming
//! in, score results going out. No scoring logic lives here.

pub mod error;
pub mod models;
