//! Console and JSON presentation of analysis results

use crate::analysis::report::AnalysisResult;
use crate::analysis::scoring::{recommendation_for, ScoreLevel};
use crate::config::OutputFormat;
use crate::error::Result;
use colored::{Color, Colorize};

/// Trait for rendering an analysis result into a displayable string.
pub trait OutputFormatter {
    fn format_report(&self, result: &AnalysisResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Rich console presentation with optional colors.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// Structured output for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match ScoreLevel::from_score(score) {
            ScoreLevel::Excellent => ("EXCELLENT", Color::Green),
            ScoreLevel::Good => ("GOOD", Color::BrightGreen),
            ScoreLevel::Fair => ("FAIR", Color::Yellow),
            ScoreLevel::NeedsImprovement => ("NEEDS IMPROVEMENT", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, result: &AnalysisResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "ATS Score: {}% {}\n",
            result.ats_score,
            self.format_score_badge(result.ats_score)
        ));

        output.push_str(&self.format_header(
            &format!("✅ Matched Skills ({})", result.matched_skills.len()),
            3,
        ));
        if result.matched_skills.is_empty() {
            output.push_str("  None\n");
        } else {
            for skill in &result.matched_skills {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Green)));
            }
        }

        output.push_str(&self.format_header(
            &format!("📋 Missing Skills ({})", result.missing_skills.len()),
            3,
        ));
        if result.missing_skills.is_empty() {
            output.push_str(&format!(
                "  {}\n",
                self.colorize("None - Great job!", Color::Green)
            ));
        } else {
            for skill in &result.missing_skills {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Yellow)));
            }
        }

        output.push_str(&self.format_header("💡 Recommendation", 2));
        output.push_str(&format!(
            "{}\n",
            recommendation_for(
                result.ats_score,
                &result.matched_skills,
                &result.missing_skills
            )
        ));

        if self.detailed {
            output.push_str(&self.format_header("📈 Details", 3));
            output.push_str(&format!(
                "Skills detected in resume: {}\n",
                result.resume_skills_count
            ));
            output.push_str(&format!(
                "Skills required by job description: {}\n",
                result.jd_skills_count
            ));
            output.push_str(&format!(
                "Extraction method: {}\n",
                result.extraction_method
            ));
        }

        output.push_str(&format!(
            "\n{} Generated by Resume Analyzer v{}\n",
            self.colorize("ℹ️", Color::Blue),
            env!("CARGO_PKG_VERSION")
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, result: &AnalysisResult) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Picks the formatter matching the requested output format.
pub fn formatter_for(
    format: &OutputFormat,
    use_colors: bool,
    detailed: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, detailed)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::ReportBuilder;
    use crate::analysis::scoring::ScoringEngine;

    fn sample_result() -> AnalysisResult {
        let jd: Vec<String> = ["python", "react", "aws"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let resume: Vec<String> = ["python", "docker"].iter().map(|s| s.to_string()).collect();
        let score = ScoringEngine::new().score(&jd, &resume);
        ReportBuilder::new().build(score, 2, 3, "pdf-extract", 640)
    }

    #[test]
    fn console_output_lists_skills_without_colors() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_result()).unwrap();

        assert!(output.contains("ATS Score: 33% [NEEDS IMPROVEMENT]"));
        assert!(output.contains("Matched Skills (1)"));
        assert!(output.contains("• python"));
        assert!(output.contains("Missing Skills (2)"));
        assert!(output.contains("• react"));
        assert!(output.contains("• aws"));
    }

    #[test]
    fn console_detailed_mode_adds_extraction_metadata() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&sample_result()).unwrap();

        assert!(output.contains("Extraction method: pdf-extract"));
        assert!(output.contains("Skills detected in resume: 2"));
        assert!(output.contains("Skills required by job description: 3"));
    }

    #[test]
    fn json_output_keeps_the_wire_contract() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_result()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["atsScore"], 33);
        assert_eq!(value["extractionMethod"], "pdf-extract");
        assert_eq!(value["matchedSkills"][0], "python");
    }

    #[test]
    fn formatter_dispatch_follows_the_configured_format() {
        assert!(matches!(
            formatter_for(&OutputFormat::Console, true, false).supports_format(),
            OutputFormat::Console
        ));
        assert!(matches!(
            formatter_for(&OutputFormat::Json, true, false).supports_format(),
            OutputFormat::Json
        ));
    }
}
