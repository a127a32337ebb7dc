//! Final analysis result and summary rendering

use crate::analysis::scoring::MatchScore;
use serde::{Deserialize, Serialize};

/// The record handed to whatever consumes an analysis. Field names keep the
/// camelCase wire contract of the service this tool grew out of.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub ats_score: u8,
    pub summary: String,
    pub resume_skills_count: usize,
    pub jd_skills_count: usize,
    pub extraction_method: String,
}

/// Renders the fixed summary template. Pure formatting: the same inputs
/// always produce byte-identical output.
pub struct ReportBuilder;

impl ReportBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(
        &self,
        score: MatchScore,
        resume_skills_count: usize,
        jd_skills_count: usize,
        extraction_method: &str,
        text_length: usize,
    ) -> AnalysisResult {
        let summary = self.render_summary(&score, extraction_method, text_length);

        AnalysisResult {
            matched_skills: score.matched_skills,
            missing_skills: score.missing_skills,
            ats_score: score.ats_score,
            summary,
            resume_skills_count,
            jd_skills_count,
            extraction_method: extraction_method.to_string(),
        }
    }

    fn render_summary(&self, score: &MatchScore, method: &str, text_length: usize) -> String {
        let matched = if score.matched_skills.is_empty() {
            "None".to_string()
        } else {
            score.matched_skills.join(", ")
        };
        let missing = if score.missing_skills.is_empty() {
            "None - Great job!".to_string()
        } else {
            score.missing_skills.join(", ")
        };

        format!(
            "📊 ATS COMPATIBILITY SCORE: {}% - {}\n\n✅ Matched Skills ({}): {}\n\n📋 Missing Skills ({}): {}\n\n💡 Recommendation: {}\n\nExtraction Method: {}\nText Length: {} characters",
            score.ats_score,
            score.level,
            score.matched_skills.len(),
            matched,
            score.missing_skills.len(),
            missing,
            score.recommendation,
            method,
            text_length,
        )
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
