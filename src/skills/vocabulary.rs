//! Canonical skill vocabulary with declarative alias rules
//!
//! The vocabulary is built once at startup and read-only afterwards. Entry
//! order is the order skills are reported in, so the blocks below are part
//! of the output contract, not cosmetic.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Soft,
}

/// One canonical skill plus the alternate substrings that also count as a
/// detection (any-of semantics). The canonical name itself is always a
/// pattern, so an entry without aliases is plain substring containment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillEntry {
    pub canonical: String,
    pub category: SkillCategory,
    pub aliases: Vec<String>,
}

impl SkillEntry {
    fn technical(canonical: &str) -> Self {
        Self {
            canonical: canonical.to_string(),
            category: SkillCategory::Technical,
            aliases: Vec::new(),
        }
    }

    fn soft(canonical: &str) -> Self {
        Self {
            canonical: canonical.to_string(),
            category: SkillCategory::Soft,
            aliases: Vec::new(),
        }
    }

    fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    /// All substrings that detect this skill: canonical name first, then aliases.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical.as_str()).chain(self.aliases.iter().map(|a| a.as_str()))
    }
}

/// Ordered, immutable skill registry.
pub struct SkillVocabulary {
    entries: Vec<SkillEntry>,
}

impl SkillVocabulary {
    /// The built-in skill database.
    pub fn builtin() -> Self {
        Self {
            entries: Self::builtin_entries(),
        }
    }

    /// Built-in database plus user-supplied plain skills (no aliases).
    /// Names already present are skipped so canonical names stay unique.
    pub fn with_additional_skills(additional: &[String]) -> Self {
        let mut entries = Self::builtin_entries();
        for skill in additional {
            let name = skill.trim().to_lowercase();
            if name.is_empty() || entries.iter().any(|e| e.canonical == name) {
                continue;
            }
            entries.push(SkillEntry::technical(&name));
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn builtin_entries() -> Vec<SkillEntry> {
        vec![
            // Programming languages
            SkillEntry::technical("javascript").with_aliases(&["js"]),
            SkillEntry::technical("python"),
            SkillEntry::technical("java"),
            SkillEntry::technical("c++").with_aliases(&["c plus plus", "cpp"]),
            SkillEntry::technical("c#"),
            SkillEntry::technical("php"),
            SkillEntry::technical("ruby"),
            SkillEntry::technical("go"),
            SkillEntry::technical("swift"),
            // Web frameworks and markup
            SkillEntry::technical("react"),
            SkillEntry::technical("angular"),
            SkillEntry::technical("vue"),
            SkillEntry::technical("node.js").with_aliases(&["nodejs", "node"]),
            SkillEntry::technical("express"),
            SkillEntry::technical("django"),
            SkillEntry::technical("flask"),
            SkillEntry::technical("spring"),
            SkillEntry::technical("html").with_aliases(&["html5"]),
            SkillEntry::technical("css").with_aliases(&["css3"]),
            SkillEntry::technical("sass"),
            SkillEntry::technical("less"),
            SkillEntry::technical("bootstrap"),
            SkillEntry::technical("tailwind"),
            // Databases
            SkillEntry::technical("sql"),
            SkillEntry::technical("mysql"),
            SkillEntry::technical("postgresql"),
            SkillEntry::technical("mongodb"),
            SkillEntry::technical("redis"),
            SkillEntry::technical("oracle"),
            // Soft skills
            SkillEntry::soft("communication").with_aliases(&["communicator"]),
            SkillEntry::soft("teamwork"),
            SkillEntry::soft("leadership"),
            SkillEntry::soft("problem solving"),
            SkillEntry::soft("creativity"),
            SkillEntry::soft("time management"),
            SkillEntry::soft("adaptability"),
            SkillEntry::soft("critical thinking"),
            SkillEntry::soft("decision making"),
            SkillEntry::soft("collaboration"),
            SkillEntry::soft("negotiation"),
            SkillEntry::soft("presentation"),
            SkillEntry::soft("public speaking"),
            SkillEntry::soft("project management"),
            SkillEntry::soft("agile"),
            SkillEntry::soft("scrum"),
            SkillEntry::soft("kanban"),
            // Tooling and cloud
            SkillEntry::technical("git"),
            SkillEntry::technical("docker"),
            SkillEntry::technical("kubernetes"),
            SkillEntry::technical("aws"),
            SkillEntry::technical("azure"),
            SkillEntry::technical("gcp"),
            // APIs and data formats
            SkillEntry::technical("rest"),
            SkillEntry::technical("graphql"),
            SkillEntry::technical("api"),
            SkillEntry::technical("json"),
            SkillEntry::technical("xml"),
            // Operating systems
            SkillEntry::technical("linux"),
            SkillEntry::technical("unix"),
            SkillEntry::technical("windows"),
            SkillEntry::technical("macos"),
            // Data and analytics
            SkillEntry::technical("machine learning"),
            SkillEntry::technical("ai"),
            SkillEntry::technical("data science"),
            SkillEntry::technical("big data"),
            SkillEntry::technical("tableau"),
            SkillEntry::technical("power bi"),
            // CS fundamentals
            SkillEntry::technical("data structures").with_aliases(&["dsa"]),
            SkillEntry::technical("algorithms").with_aliases(&["algo"]),
            SkillEntry::technical("oop").with_aliases(&["object oriented programming"]),
        ]
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
