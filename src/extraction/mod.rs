//! Resilient text extraction for resume documents
//!
//! An ordered chain of strategies runs until one produces enough text. The
//! chain never fails: when no strategy succeeds, the payload is persisted
//! for manual recovery and fixed guidance text is returned instead.

pub mod strategies;

use crate::config::Config;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strategies::{
    EventStreamStrategy, ExtractionStrategy, PdfExtractStrategy, RawPatternStrategy,
    RecoveryFallback, EXTRACTION_GUIDANCE,
};

/// Method label for text supplied directly by the user.
pub const MANUAL_INPUT_METHOD: &str = "manual text input";

/// Method label reported when every text-bearing strategy failed.
pub const FAILED_METHOD: &str = "failed";

/// Outcome of one strategy invocation.
#[derive(Debug, Clone)]
pub struct ExtractionAttempt {
    pub text: Option<String>,
    pub method_name: &'static str,
    pub succeeded: bool,
}

/// What the pipeline hands back. `text` is never empty: on total failure it
/// carries the guidance placeholder and `recovered_file_path` points at the
/// persisted payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub text: String,
    pub method: String,
    pub recovered_file_path: Option<PathBuf>,
}

pub struct ExtractionPipeline {
    strategies: Vec<Box<dyn ExtractionStrategy + Send + Sync>>,
    fallback: RecoveryFallback,
    min_extracted_chars: usize,
    min_manual_chars: usize,
}

impl ExtractionPipeline {
    pub fn new(config: &Config) -> Self {
        let strategies: Vec<Box<dyn ExtractionStrategy + Send + Sync>> = vec![
            Box::new(PdfExtractStrategy),
            Box::new(EventStreamStrategy),
            Box::new(RawPatternStrategy::new(config.extraction.raw_scan_window)),
        ];

        Self {
            strategies,
            fallback: RecoveryFallback::new(config.extraction.recovery_dir.clone()),
            min_extracted_chars: config.extraction.min_extracted_chars,
            min_manual_chars: config.analysis.min_manual_chars,
        }
    }

    /// Resolves the resume text for one request. Manual text above the
    /// bypass threshold wins over any document payload.
    pub fn resolve(&self, payload: Option<&[u8]>, manual_text: Option<&str>) -> ExtractionResult {
        if let Some(text) = manual_text {
            if text.trim().chars().count() > self.min_manual_chars {
                info!("Using manually supplied resume text, skipping extraction");
                return ExtractionResult {
                    text: text.to_lowercase(),
                    method: MANUAL_INPUT_METHOD.to_string(),
                    recovered_file_path: None,
                };
            }
        }

        self.extract(payload.unwrap_or_default())
    }

    /// Runs the strategy chain over a document payload. Never fails; the
    /// worst case is guidance text plus a recovery file path.
    pub fn extract(&self, payload: &[u8]) -> ExtractionResult {
        info!("Extracting text from {} byte document", payload.len());

        for strategy in &self.strategies {
            let attempt = self.attempt(strategy.as_ref(), payload);
            if attempt.succeeded {
                if let Some(text) = attempt.text {
                    info!(
                        "Extraction method {} accepted with {} chars",
                        attempt.method_name,
                        text.chars().count()
                    );
                    return ExtractionResult {
                        text: text.to_lowercase(),
                        method: attempt.method_name.to_string(),
                        recovered_file_path: None,
                    };
                }
            }
        }

        warn!("All extraction strategies failed, persisting payload for manual recovery");
        let recovered_file_path = match self.fallback.persist(payload) {
            Ok(path) => {
                info!("Document saved for manual processing: {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Could not persist document for recovery: {}", e);
                None
            }
        };

        ExtractionResult {
            text: EXTRACTION_GUIDANCE.to_string(),
            method: FAILED_METHOD.to_string(),
            recovered_file_path,
        }
    }

    fn attempt(&self, strategy: &dyn ExtractionStrategy, payload: &[u8]) -> ExtractionAttempt {
        let text = strategy.extract(payload);
        let succeeded = text
            .as_deref()
            .map_or(false, |t| t.chars().count() > self.min_extracted_chars);

        match &text {
            Some(t) => debug!(
                "Strategy {}: {} chars ({})",
                strategy.name(),
                t.chars().count(),
                if succeeded { "accepted" } else { "too short" }
            ),
            None => debug!("Strategy {}: no result", strategy.name()),
        }

        ExtractionAttempt {
            text,
            method_name: strategy.name(),
            succeeded,
        }
    }
}
