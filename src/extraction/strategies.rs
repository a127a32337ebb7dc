//! Individual text extraction strategies
//!
//! Each strategy turns a raw document payload into text or reports that it
//! could not. Failures never propagate out of a strategy; the pipeline
//! decides whether a produced text is long enough to accept.

use crate::error::{Result, ResumeAnalyzerError};
use chrono::Utc;
use log::debug;
use lopdf::content::Content;
use lopdf::{Document, Object};
use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Guidance returned in place of text when every strategy fails. Downstream
/// checks look for the "could not extract" marker in this string.
pub const EXTRACTION_GUIDANCE: &str = "PDF received but could not extract text automatically. Please try:\n1. Convert PDF to text using an online tool\n2. Save as a different PDF format\n3. Copy text manually and paste it";

pub trait ExtractionStrategy {
    /// Label reported as the extraction method when this strategy wins.
    fn name(&self) -> &'static str;

    /// Best-effort text from the payload. `None` means the strategy could
    /// not parse the document at all.
    fn extract(&self, payload: &[u8]) -> Option<String>;
}

/// Full-fidelity structured parse of the document.
pub struct PdfExtractStrategy;

impl ExtractionStrategy for PdfExtractStrategy {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract(&self, payload: &[u8]) -> Option<String> {
        match pdf_extract::extract_text_from_mem(payload) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("pdf-extract could not parse document: {}", e);
                None
            }
        }
    }
}

/// Walks the page content streams directly and joins the text operands with
/// single spaces. Handles documents whose structure confuses the full parser
/// but whose content streams are still intact.
pub struct EventStreamStrategy;

impl EventStreamStrategy {
    fn walk_pages(payload: &[u8]) -> Result<String> {
        let document = Document::load_mem(payload)
            .map_err(|e| ResumeAnalyzerError::PdfExtraction(e.to_string()))?;

        let mut fragments: Vec<String> = Vec::new();
        for (_page_number, page_id) in document.get_pages() {
            let data = document
                .get_page_content(page_id)
                .map_err(|e| ResumeAnalyzerError::PdfExtraction(e.to_string()))?;
            let content = Content::decode(&data)
                .map_err(|e| ResumeAnalyzerError::PdfExtraction(e.to_string()))?;

            for operation in &content.operations {
                match operation.operator.as_str() {
                    "Tj" | "'" | "\"" => {
                        for operand in &operation.operands {
                            if let Object::String(bytes, _) = operand {
                                fragments.push(String::from_utf8_lossy(bytes).into_owned());
                            }
                        }
                    }
                    "TJ" => {
                        for operand in &operation.operands {
                            if let Object::Array(items) = operand {
                                for item in items {
                                    if let Object::String(bytes, _) = item {
                                        fragments.push(String::from_utf8_lossy(bytes).into_owned());
                                    }
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        Ok(fragments.join(" "))
    }
}

impl ExtractionStrategy for EventStreamStrategy {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract(&self, payload: &[u8]) -> Option<String> {
        match Self::walk_pages(payload) {
            Ok(text) => Some(text),
            Err(e) => {
                debug!("lopdf could not walk document: {}", e);
                None
            }
        }
    }
}

/// Treats the payload as opaque bytes and pulls parenthesized literal runs
/// out of a bounded prefix, the way page content streams encode text. Last
/// text-bearing resort for corrupt or oddly encoded documents.
pub struct RawPatternStrategy {
    scan_window: usize,
    literal_run: Regex,
    escape_sequence: Regex,
    whitespace: Regex,
}

impl RawPatternStrategy {
    pub fn new(scan_window: usize) -> Self {
        Self {
            scan_window,
            literal_run: Regex::new(r"\(([^)]+)\)").unwrap(),
            escape_sequence: Regex::new(r"\\\w+").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }
}

impl ExtractionStrategy for RawPatternStrategy {
    fn name(&self) -> &'static str {
        "raw extraction"
    }

    fn extract(&self, payload: &[u8]) -> Option<String> {
        let window = &payload[..payload.len().min(self.scan_window)];
        let haystack = String::from_utf8_lossy(window);

        let runs: Vec<&str> = self
            .literal_run
            .captures_iter(&haystack)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
            .collect();

        let joined = runs.join(" ");
        let without_escapes = self.escape_sequence.replace_all(&joined, " ");
        let collapsed = self.whitespace.replace_all(&without_escapes, " ");

        Some(collapsed.trim().to_string())
    }
}

/// Terminal fallback: keeps the original payload on disk so the user can
/// convert it by hand, and hands back fixed guidance instead of text.
pub struct RecoveryFallback {
    recovery_dir: PathBuf,
}

impl RecoveryFallback {
    pub fn new(recovery_dir: PathBuf) -> Self {
        Self { recovery_dir }
    }

    /// Writes the payload to a unique file under the recovery directory and
    /// returns its path. Concurrent callers get distinct files.
    pub fn persist(&self, payload: &[u8]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.recovery_dir)?;

        let prefix = format!("resume-{}-", Utc::now().format("%Y%m%d"));
        let mut file = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".pdf")
            .tempfile_in(&self.recovery_dir)?;
        file.write_all(payload)?;

        let (_, path) = file
            .keep()
            .map_err(|e| ResumeAnalyzerError::Io(e.error))?;
        Ok(path)
    }

    pub fn recovery_dir(&self) -> &Path {
        &self.recovery_dir
    }
}
