//! Integration tests for the resume analyzer

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use resume_analyzer::analysis::AnalysisEngine;
use resume_analyzer::config::{Config, OutputFormat};
use resume_analyzer::error::ResumeAnalyzerError;
use resume_analyzer::input::{self, ResumeInput};
use resume_analyzer::output::formatter_for;
use std::path::Path;

const JOB_DESCRIPTION: &str =
    "Looking for a Python developer with strong communication skills and Docker experience";

/// Builds a small single page PDF carrying the given text, the way a resume
/// exported from a word processor would.
fn sample_pdf(text: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![50.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

#[tokio::test]
async fn test_resume_loading_from_txt() {
    let result = input::load_resume(Path::new("tests/fixtures/sample_resume.txt")).await;
    assert!(result.is_ok());

    match result.unwrap() {
        ResumeInput::Text(text) => {
            assert!(text.contains("John Doe"));
            assert!(text.contains("Python"));
            assert!(text.contains("Docker"));
        }
        ResumeInput::Document(_) => panic!("expected text input"),
    }
}

#[tokio::test]
async fn test_resume_loading_from_markdown() {
    let result = input::load_resume(Path::new("tests/fixtures/sample_resume.md")).await;
    assert!(result.is_ok());

    match result.unwrap() {
        ResumeInput::Text(text) => {
            assert!(text.contains("John Doe"));
            assert!(text.contains("Python"));
            assert!(text.contains("Docker"));
            // Should not contain markdown formatting
            assert!(!text.contains("**"));
            assert!(!text.contains("##"));
        }
        ResumeInput::Document(_) => panic!("expected text input"),
    }
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let result = input::load_resume(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(
        result,
        Err(ResumeAnalyzerError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let result = input::load_resume(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_fixture_analysis_end_to_end() {
    let resume = input::load_resume(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = input::load_job_description(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let resume_text = match resume {
        ResumeInput::Text(text) => text,
        ResumeInput::Document(_) => panic!("txt fixture should load as text"),
    };

    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let result = engine.analyze_text(&resume_text, &job).unwrap();

    assert_eq!(
        result.matched_skills,
        vec!["python", "communication", "docker"]
    );
    assert!(result.missing_skills.is_empty());
    assert_eq!(result.ats_score, 100);
    assert_eq!(result.resume_skills_count, 6);
    assert_eq!(result.jd_skills_count, 3);
    assert!(result
        .summary
        .contains("ATS COMPATIBILITY SCORE: 100% - Excellent"));
}

#[test]
fn test_pdf_analysis_end_to_end() {
    let text = "Senior backend engineer with five years of Python experience. \
                Great communicator. Shipped Docker containers to production at scale.";
    let payload = sample_pdf(text);

    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let result = engine
        .analyze_document(Some(&payload), None, JOB_DESCRIPTION)
        .unwrap();

    assert_eq!(
        result.matched_skills,
        vec!["python", "communication", "docker"]
    );
    assert!(result.missing_skills.is_empty());
    assert_eq!(result.ats_score, 100);
    assert!(
        result.extraction_method == "pdf-extract" || result.extraction_method == "lopdf",
        "extraction should succeed from a well formed PDF, got {}",
        result.extraction_method
    );
}

#[test]
fn test_manual_text_rescues_unreadable_document() {
    let recovery_dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.extraction.recovery_dir = recovery_dir.path().to_path_buf();

    let engine = AnalysisEngine::new(&config).unwrap();
    let pasted = "I have 5 years of python and docker experience, great communicator";

    let result = engine
        .analyze_document(Some(&b"garbage bytes"[..]), Some(pasted), JOB_DESCRIPTION)
        .unwrap();

    assert_eq!(result.ats_score, 100);
    assert_eq!(result.extraction_method, "manual text input");
    // The pasted text bypasses extraction, so nothing gets persisted.
    assert_eq!(std::fs::read_dir(recovery_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_unreadable_document_persists_original() {
    let recovery_dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.extraction.recovery_dir = recovery_dir.path().to_path_buf();

    let engine = AnalysisEngine::new(&config).unwrap();
    let payload = b"this is not a readable document".to_vec();

    let err = engine
        .analyze_document(Some(&payload), None, JOB_DESCRIPTION)
        .unwrap_err();

    match err {
        ResumeAnalyzerError::InsufficientText {
            suggestions,
            recovered_file,
            ..
        } => {
            assert_eq!(suggestions.len(), 4);
            let recovered = recovered_file.expect("original document should be kept");
            assert!(recovered.starts_with(recovery_dir.path()));
            assert_eq!(std::fs::read(&recovered).unwrap(), payload);
        }
        other => panic!("expected insufficient text error, got {:?}", other),
    }
}

#[test]
fn test_json_report_format() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let result = engine
        .analyze_text(
            "I have 5 years of python and docker experience, great communicator",
            JOB_DESCRIPTION,
        )
        .unwrap();

    let formatter = formatter_for(&OutputFormat::Json, false, false);
    let rendered = formatter.format_report(&result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["atsScore"], 100);
    assert_eq!(value["extractionMethod"], "manual text input");
    assert_eq!(value["matchedSkills"][0], "python");
    assert!(value["missingSkills"].as_array().unwrap().is_empty());
}
