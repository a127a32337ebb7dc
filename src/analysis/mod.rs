//! Skill comparison, scoring and report assembly

pub mod engine;
pub mod report;
pub mod scoring;

pub use engine::AnalysisEngine;
pub use report::{AnalysisResult, ReportBuilder};
pub use scoring::{MatchScore, ScoreLevel, ScoringEngine};
