//! ATS compatibility scoring
//!
//! Pure set comparison between the job description's skills and the
//! resume's skills. Never fails: empty inputs produce a well formed zero
//! result.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Display tier for a score. Bands are inclusive on their lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLevel {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= 85 {
            ScoreLevel::Excellent
        } else if score >= 70 {
            ScoreLevel::Good
        } else if score >= 50 {
            ScoreLevel::Fair
        } else {
            ScoreLevel::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLevel::Excellent => "Excellent",
            ScoreLevel::Good => "Good",
            ScoreLevel::Fair => "Fair",
            ScoreLevel::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScore {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub ats_score: u8,
    pub level: ScoreLevel,
    pub recommendation: String,
}

pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Splits the job description's skills into matched and missing against
    /// the resume, keeping job description order, and derives the score.
    pub fn score(&self, jd_skills: &[String], resume_skills: &[String]) -> MatchScore {
        let resume_set: HashSet<&str> = resume_skills.iter().map(|s| s.as_str()).collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut matched_skills = Vec::new();
        let mut missing_skills = Vec::new();
        for skill in jd_skills {
            if !seen.insert(skill.as_str()) {
                continue;
            }
            if resume_set.contains(skill.as_str()) {
                matched_skills.push(skill.clone());
            } else {
                missing_skills.push(skill.clone());
            }
        }

        let total = matched_skills.len() + missing_skills.len();
        let ats_score = if total == 0 {
            0
        } else {
            // Half-up rounding, same as the usual integer percentage.
            (matched_skills.len() as f64 / total as f64 * 100.0).round() as u8
        };

        let level = ScoreLevel::from_score(ats_score);
        let recommendation =
            recommendation_for(ats_score, &matched_skills, &missing_skills).to_string();

        MatchScore {
            matched_skills,
            missing_skills,
            ats_score,
            level,
            recommendation,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Canned guidance per score tier. The matched and missing lists are part
/// of the signature, but the tier is chosen from the score alone.
pub fn recommendation_for(ats_score: u8, _matched: &[String], _missing: &[String]) -> &'static str {
    if ats_score >= 85 {
        "🎉 STRONG MATCH! You should definitely apply for this position."
    } else if ats_score >= 70 {
        "✅ GOOD MATCH! You should apply. Focus on highlighting your matching skills."
    } else if ats_score >= 50 {
        "⚠️ MODERATE MATCH! Consider applying if you have related experience."
    } else if ats_score >= 30 {
        "🤔 WEAK MATCH! Only apply if you have strong related experience."
    } else {
        "❌ POOR MATCH! Not recommended to apply. Consider upskilling first."
    }
}
