pub mod answer;
pub mod cutoff;
pub mod result;
