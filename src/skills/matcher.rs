//! Substring skill detection over the vocabulary

use crate::error::{Result, ResumeAnalyzerError};
use crate::skills::vocabulary::SkillVocabulary;
use aho_corasick::AhoCorasick;

/// Detects vocabulary skills in free text.
///
/// All entry patterns are compiled into a single Aho-Corasick automaton at
/// construction, so one pass over the text finds every skill regardless of
/// vocabulary size.
pub struct SkillMatcher {
    automaton: AhoCorasick,
    /// Pattern index to vocabulary entry index.
    pattern_entries: Vec<usize>,
    canonical_names: Vec<String>,
}

impl SkillMatcher {
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut pattern_entries = Vec::new();
        for (entry_idx, entry) in vocabulary.entries().iter().enumerate() {
            for pattern in entry.patterns() {
                patterns.push(pattern);
                pattern_entries.push(entry_idx);
            }
        }

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                ResumeAnalyzerError::Processing(format!("Failed to build skill matcher: {}", e))
            })?;

        let canonical_names = vocabulary
            .entries()
            .iter()
            .map(|e| e.canonical.clone())
            .collect();

        Ok(Self {
            automaton,
            pattern_entries,
            canonical_names,
        })
    }

    /// Canonical names of the skills present in `text`, in vocabulary order,
    /// each at most once.
    pub fn find_skills(&self, text: &str) -> Vec<String> {
        let mut seen = vec![false; self.canonical_names.len()];

        // Overlapping scan: a leftmost-only scan would hide "sql" inside
        // "postgresql" and "node" inside "nodejs".
        for mat in self.automaton.find_overlapping_iter(text) {
            seen[self.pattern_entries[mat.pattern().as_usize()]] = true;
        }

        self.canonical_names
            .iter()
            .zip(&seen)
            .filter(|(_, hit)| **hit)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        self.canonical_names.len()
    }
}
