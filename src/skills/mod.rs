//! Skill vocabulary and detection

pub mod matcher;
pub mod vocabulary;

pub use matcher::SkillMatcher;
pub use vocabulary::{SkillCategory, SkillEntry, SkillVocabulary};
