//! Trait seams for the external repositories the engine reads from.

pub mod sources;

pub use sources::{EvidenceSource, OutcomeSource, ScoreMatrix, ScoreMatrixSource, TrendSource};
