//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// A strategy's output only wins when it is strictly longer than this.
    pub min_extracted_chars: usize,
    /// How far into the raw document bytes the pattern scan looks.
    pub raw_scan_window: usize,
    /// Where unreadable documents are persisted for manual recovery.
    pub recovery_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Extracted or pasted text shorter than this cannot be analyzed.
    pub min_usable_chars: usize,
    /// Pasted text must exceed this to bypass document extraction.
    pub min_manual_chars: usize,
    /// Job descriptions shorter than this (trimmed) are rejected.
    pub min_job_description_chars: usize,
    /// How much salvaged text an insufficient-text error shows back.
    pub preview_chars: usize,
    /// Extra skills matched alongside the built-in vocabulary.
    pub custom_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        let recovery_dir = std::env::temp_dir().join("resume-analyzer");

        Self {
            extraction: ExtractionConfig {
                min_extracted_chars: 100,
                raw_scan_window: 10_000,
                recovery_dir,
            },
            analysis: AnalysisConfig {
                min_usable_chars: 50,
                min_manual_chars: 50,
                min_job_description_chars: 10,
                preview_chars: 200,
                custom_skills: Vec::new(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load from an explicit path instead of the default location. Unlike
    /// [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
        })?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    pub fn recovery_dir(&self) -> &PathBuf {
        &self.extraction.recovery_dir
    }

    pub fn ensure_recovery_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.extraction.recovery_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_match_documented_contract() {
        let config = Config::default();
        assert_eq!(config.extraction.min_extracted_chars, 100);
        assert_eq!(config.extraction.raw_scan_window, 10_000);
        assert_eq!(config.analysis.min_usable_chars, 50);
        assert_eq!(config.analysis.min_manual_chars, 50);
        assert_eq!(config.analysis.min_job_description_chars, 10);
        assert_eq!(config.analysis.preview_chars, 200);
        assert!(config.analysis.custom_skills.is_empty());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = Config::default();
        config.analysis.custom_skills.push("terraform".to_string());
        config.output.detailed = true;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let restored: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(restored.analysis.custom_skills, vec!["terraform"]);
        assert!(restored.output.detailed);
        assert_eq!(
            restored.extraction.min_extracted_chars,
            config.extraction.min_extracted_chars
        );
    }
}
