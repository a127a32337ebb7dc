//! End-to-end resume analysis orchestration

use crate::analysis::report::{AnalysisResult, ReportBuilder};
use crate::analysis::scoring::ScoringEngine;
use crate::config::Config;
use crate::error::{Result, ResumeAnalyzerError};
use crate::extraction::{ExtractionPipeline, MANUAL_INPUT_METHOD};
use crate::skills::{SkillMatcher, SkillVocabulary};
use log::{info, warn};
use unicode_segmentation::UnicodeSegmentation;

/// Owns the vocabulary-backed matcher, the extraction pipeline and the
/// scoring/report stages, and runs one analysis per call. All state is
/// read-only after construction, so a single engine serves any number of
/// analyses.
pub struct AnalysisEngine {
    matcher: SkillMatcher,
    pipeline: ExtractionPipeline,
    scoring: ScoringEngine,
    reporter: ReportBuilder,
    min_jd_chars: usize,
    min_usable_chars: usize,
    min_manual_chars: usize,
    preview_chars: usize,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Result<Self> {
        let vocabulary = SkillVocabulary::with_additional_skills(&config.analysis.custom_skills);
        let matcher = SkillMatcher::new(&vocabulary)?;
        info!("Analysis engine ready with {} skills", matcher.skill_count());

        Ok(Self {
            matcher,
            pipeline: ExtractionPipeline::new(config),
            scoring: ScoringEngine::new(),
            reporter: ReportBuilder::new(),
            min_jd_chars: config.analysis.min_job_description_chars,
            min_usable_chars: config.analysis.min_usable_chars,
            min_manual_chars: config.analysis.min_manual_chars,
            preview_chars: config.analysis.preview_chars,
        })
    }

    /// Analyzes a resume document (or manually pasted text) against a job
    /// description. Validation failures and total extraction failures are
    /// reported as errors; everything else degrades inside the pipeline.
    pub fn analyze_document(
        &self,
        payload: Option<&[u8]>,
        manual_text: Option<&str>,
        job_description: &str,
    ) -> Result<AnalysisResult> {
        self.validate_job_description(job_description)?;

        let manual_is_sufficient =
            manual_text.map_or(false, |t| t.trim().chars().count() > self.min_manual_chars);
        if payload.is_none() && !manual_is_sufficient {
            return Err(ResumeAnalyzerError::InvalidInput(
                "No resume provided. Upload a document or paste the resume text".to_string(),
            ));
        }

        let extraction = self.pipeline.resolve(payload, manual_text);
        info!("Extraction method: {}", extraction.method);

        let char_count = extraction.text.chars().count();
        if char_count < self.min_usable_chars || extraction.text.contains("could not extract") {
            warn!("Insufficient text to analyze ({} chars)", char_count);
            return Err(ResumeAnalyzerError::InsufficientText {
                suggestions: extraction_suggestions(),
                preview: truncate_graphemes(&extraction.text, self.preview_chars),
                recovered_file: extraction.recovered_file_path,
            });
        }

        Ok(self.run_analysis(&extraction.text, job_description, &extraction.method))
    }

    /// Companion entry point for callers that already hold plain text.
    pub fn analyze_text(&self, resume_text: &str, job_description: &str) -> Result<AnalysisResult> {
        self.validate_job_description(job_description)?;

        if resume_text.trim().is_empty() {
            return Err(ResumeAnalyzerError::InvalidInput(
                "Both resume text and job description are required".to_string(),
            ));
        }

        Ok(self.run_analysis(
            &resume_text.to_lowercase(),
            job_description,
            MANUAL_INPUT_METHOD,
        ))
    }

    fn run_analysis(
        &self,
        resume_text: &str,
        job_description: &str,
        method: &str,
    ) -> AnalysisResult {
        let jd_text = job_description.to_lowercase();
        let resume_skills = self.matcher.find_skills(resume_text);
        let jd_skills = self.matcher.find_skills(&jd_text);
        info!(
            "Skills found: {} in resume, {} in job description",
            resume_skills.len(),
            jd_skills.len()
        );

        let score = self.scoring.score(&jd_skills, &resume_skills);
        self.reporter.build(
            score,
            resume_skills.len(),
            jd_skills.len(),
            method,
            resume_text.chars().count(),
        )
    }

    fn validate_job_description(&self, job_description: &str) -> Result<()> {
        if job_description.trim().chars().count() < self.min_jd_chars {
            return Err(ResumeAnalyzerError::InvalidInput(
                "Please provide a detailed job description".to_string(),
            ));
        }
        Ok(())
    }

    pub fn skill_count(&self) -> usize {
        self.matcher.skill_count()
    }
}

fn extraction_suggestions() -> Vec<String> {
    vec![
        "Copy and paste your resume text directly".to_string(),
        "Convert PDF to text using: https://tools.pdf24.org/en/pdf-to-text".to_string(),
        "Save as a different PDF format".to_string(),
        "Ensure PDF is not password protected or scanned".to_string(),
    ]
}

fn truncate_graphemes(text: &str, limit: usize) -> String {
    text.graphemes(true).take(limit).collect()
}
