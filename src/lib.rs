//! Resume analyzer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod skills;
pub mod extraction;
pub mod analysis;
pub mod output;

pub use analysis::{AnalysisEngine, AnalysisResult};
pub use config::Config;
pub use error::{Result, ResumeAnalyzerError};
