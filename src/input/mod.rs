//! Input loading for the command line interface
//!
//! Binary documents are kept as opaque bytes so the extraction pipeline can
//! run its fallback chain over them; text and markdown files are flattened
//! to plain text and enter the engine through the manual-text path.

use crate::error::{Result, ResumeAnalyzerError};
use log::info;
use pulldown_cmark::{html, Parser};
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileKind::Pdf,
            "txt" => FileKind::Text,
            "md" | "markdown" => FileKind::Markdown,
            _ => FileKind::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            ResumeAnalyzerError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        match Self::from_extension(extension) {
            FileKind::Unknown => Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
            kind => Ok(kind),
        }
    }
}

/// Resume content in the shape the engine expects it.
pub enum ResumeInput {
    Document(Vec<u8>),
    Text(String),
}

pub async fn load_resume(path: &Path) -> Result<ResumeInput> {
    if !path.exists() {
        return Err(ResumeAnalyzerError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    match FileKind::from_path(path)? {
        FileKind::Pdf => {
            info!("Reading PDF document: {}", path.display());
            let bytes = fs::read(path).await?;
            Ok(ResumeInput::Document(bytes))
        }
        FileKind::Text => {
            info!("Reading plain text resume: {}", path.display());
            let content = fs::read_to_string(path).await?;
            Ok(ResumeInput::Text(content))
        }
        FileKind::Markdown => {
            info!("Processing markdown resume: {}", path.display());
            let markdown = fs::read_to_string(path).await?;
            Ok(ResumeInput::Text(markdown_to_text(&markdown)))
        }
        FileKind::Unknown => unreachable!("from_path rejects unknown kinds"),
    }
}

/// Job descriptions must already be plain text.
pub async fn load_job_description(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ResumeAnalyzerError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    match FileKind::from_path(path)? {
        FileKind::Text => Ok(fs::read_to_string(path).await?),
        FileKind::Markdown => {
            let markdown = fs::read_to_string(path).await?;
            Ok(markdown_to_text(&markdown))
        }
        _ => Err(ResumeAnalyzerError::InvalidInput(format!(
            "Job description must be a .txt or .md file: {}",
            path.display()
        ))),
    }
}

/// Flattens markdown by rendering it to HTML and stripping the tags.
fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let text = html_output
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let re = regex::Regex::new(r"<[^>]*>").unwrap();
    let clean_text = re.replace_all(&text, "");

    let lines: Vec<String> = clean_text
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_kinds_follow_extensions_case_insensitively() {
        assert_eq!(FileKind::from_extension("pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_extension("PDF"), FileKind::Pdf);
        assert_eq!(FileKind::from_extension("txt"), FileKind::Text);
        assert_eq!(FileKind::from_extension("md"), FileKind::Markdown);
        assert_eq!(FileKind::from_extension("markdown"), FileKind::Markdown);
        assert_eq!(FileKind::from_extension("docx"), FileKind::Unknown);
    }

    #[test]
    fn paths_without_extension_are_rejected() {
        assert!(FileKind::from_path(Path::new("/tmp/resume")).is_err());
        assert!(FileKind::from_path(Path::new("/tmp/resume.docx")).is_err());
        assert!(FileKind::from_path(Path::new("/tmp/resume.pdf")).is_ok());
    }

    #[test]
    fn markdown_headers_and_lists_flatten_to_text() {
        let markdown = "# Jane Doe\n\n## Skills\n\n- Python\n- Docker\n";
        let text = markdown_to_text(markdown);

        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Python"));
        assert!(text.contains("Docker"));
        assert!(!text.contains('#'));
        assert!(!text.contains('-'));
    }

    #[tokio::test]
    async fn text_resumes_load_as_text_input() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "python and docker background").unwrap();

        match load_resume(file.path()).await.unwrap() {
            ResumeInput::Text(text) => assert!(text.contains("python")),
            ResumeInput::Document(_) => panic!("expected text input"),
        }
    }

    #[tokio::test]
    async fn pdf_resumes_load_as_raw_bytes() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.4 not really").unwrap();

        match load_resume(file.path()).await.unwrap() {
            ResumeInput::Document(bytes) => assert!(bytes.starts_with(b"%PDF")),
            ResumeInput::Text(_) => panic!("expected document bytes"),
        }
    }

    #[tokio::test]
    async fn job_descriptions_reject_pdf_files() {
        let file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        assert!(load_job_description(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn missing_files_are_reported() {
        assert!(load_resume(Path::new("/nonexistent/resume.txt"))
            .await
            .is_err());
    }
}
