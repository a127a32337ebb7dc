//! Resume analyzer: ATS-style resume and job description skill matching

mod cli;
mod config;
mod error;
mod input;
mod skills;
mod extraction;
mod analysis;
mod output;

use analysis::AnalysisEngine;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeAnalyzerError};
use input::ResumeInput;
use log::{error, info};
use skills::{SkillCategory, SkillVocabulary};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            text,
            job,
            detailed,
            output,
            save,
        } => {
            info!("Starting resume analysis");

            // Validate input files
            if let Some(resume_path) = &resume {
                cli::validate_file_extension(resume_path, &["pdf", "txt", "md"])
                    .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;
            }

            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            // Parse output format
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeAnalyzerError::InvalidInput)?;

            println!("🚀 Resume analysis");
            if let Some(resume_path) = &resume {
                println!("📄 Resume: {}", resume_path.display());
            }
            if text.is_some() {
                println!("📝 Pasted resume text provided");
            }
            println!("💼 Job Description: {}", job.display());
            println!("🔧 Output Format: {:?}", output_format);

            if detailed {
                println!("📊 Detailed report enabled");
            }

            println!("\n📂 Loading input files...");
            let job_description = input::load_job_description(&job).await?;
            let resume_input = match &resume {
                Some(path) => Some(input::load_resume(path).await?),
                None => None,
            };

            config.ensure_recovery_dir()?;
            let engine = AnalysisEngine::new(&config)?;
            println!("🧠 Matching against {} known skills...", engine.skill_count());

            let analysis = match resume_input {
                // Uploaded document: layered extraction, with pasted text as
                // the bypass.
                Some(ResumeInput::Document(bytes)) => {
                    engine.analyze_document(Some(&bytes), text.as_deref(), &job_description)
                }
                // Text and markdown resumes skip extraction entirely.
                Some(ResumeInput::Text(content)) => engine.analyze_text(&content, &job_description),
                None => match &text {
                    Some(pasted) => engine.analyze_text(pasted, &job_description),
                    None => engine.analyze_document(None, None, &job_description),
                },
            };

            let result = match analysis {
                Ok(result) => result,
                Err(ResumeAnalyzerError::InsufficientText {
                    suggestions,
                    preview,
                    recovered_file,
                }) => {
                    println!("\n❌ Could not extract usable text from the resume");
                    if !preview.is_empty() {
                        println!("\n📄 Salvaged text preview:");
                        println!("{}", preview);
                    }
                    println!("\n💡 Suggestions:");
                    for suggestion in &suggestions {
                        println!("  • {}", suggestion);
                    }
                    if let Some(path) = recovered_file {
                        println!(
                            "\n📁 Original document saved for inspection: {}",
                            path.display()
                        );
                    }
                    return Err(ResumeAnalyzerError::AnalysisFailed(
                        "no usable resume text".to_string(),
                    ));
                }
                Err(e) => return Err(e),
            };

            println!("\n📊 Analysis complete!");

            let show_detail = detailed || config.output.detailed;
            let formatter =
                output::formatter_for(&output_format, config.output.color_output, show_detail);
            println!("\n{}", formatter.format_report(&result)?);

            if let Some(save_path) = save {
                // Color codes are for terminals, not files.
                let file_formatter = output::formatter_for(&output_format, false, show_detail);
                std::fs::write(&save_path, file_formatter.format_report(&result)?)?;
                println!("\n💾 Report saved to: {}", save_path.display());
            }
        }

        Commands::Skills { technical, soft } => {
            let vocabulary =
                SkillVocabulary::with_additional_skills(&config.analysis.custom_skills);
            println!("📚 Skill Vocabulary ({} skills)\n", vocabulary.len());

            if !soft {
                println!("🔧 Technical Skills:");
                print_category(&vocabulary, SkillCategory::Technical);
                println!();
            }

            if !technical {
                println!("🤝 Soft Skills:");
                print_category(&vocabulary, SkillCategory::Soft);
                println!();
            }

            println!("💡 Add your own via custom_skills in the config file");
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config File: {}", Config::config_path().display());
                println!("Recovery Directory: {}", config.recovery_dir().display());
                println!("\nExtraction:");
                println!(
                    "  Minimum extracted characters: {}",
                    config.extraction.min_extracted_chars
                );
                println!(
                    "  Raw scan window: {} bytes",
                    config.extraction.raw_scan_window
                );
                println!("\nAnalysis:");
                println!(
                    "  Minimum usable characters: {}",
                    config.analysis.min_usable_chars
                );
                println!(
                    "  Minimum pasted characters: {}",
                    config.analysis.min_manual_chars
                );
                println!(
                    "  Minimum job description characters: {}",
                    config.analysis.min_job_description_chars
                );
                if config.analysis.custom_skills.is_empty() {
                    println!("  Custom skills: (none)");
                } else {
                    println!(
                        "  Custom skills: {}",
                        config.analysis.custom_skills.join(", ")
                    );
                }
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Print every vocabulary entry in one category, aliases included.
fn print_category(vocabulary: &SkillVocabulary, category: SkillCategory) {
    for entry in vocabulary.entries().iter().filter(|e| e.category == category) {
        if entry.aliases.is_empty() {
            println!("  • {}", entry.canonical);
        } else {
            println!(
                "  • {} (also: {})",
                entry.canonical,
                entry.aliases.join(", ")
            );
        }
    }
}
