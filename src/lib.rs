//! PDF text extraction and heuristic text analysis
//!
//! This crate provides:
//! - Plain text loading from PDF files using lopdf
//! - Regex heuristics for emails, phone numbers and proper names
//! - Word frequency statistics
//! - A Spanish-language summary rendered to the console, a text file and HTML

pub mod loader;
pub mod patterns;
pub mod report;
pub mod stats;
pub mod summary;

pub use loader::{load_document, load_pdf, load_pdf_mem, ExtractedDocument};
pub use patterns::{extract_emails, extract_names, extract_phone_numbers};
pub use report::{
    generate_html_report, print_summary, render_html, save_summary_to_file, write_reports,
    ReportPaths,
};
pub use stats::{word_stats, WordStats};
pub use summary::{Analysis, TextAnalyzer};

use std::path::{Path, PathBuf};

/// High-level PDF analysis result
#[derive(Debug)]
pub struct PdfAnalysisResult {
    /// Page count
    pub page_count: u32,
    /// Structured findings
    pub analysis: Analysis,
    /// Rendered summary text
    pub summary: String,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Load a PDF file and analyze its text
pub fn analyze_pdf<P: AsRef<Path>>(path: P) -> Result<PdfAnalysisResult, Error> {
    let start = std::time::Instant::now();

    let document = load_document(path)?;
    let analysis = TextAnalyzer::new(&document.text).analyze();
    let summary = analysis.to_string();

    let processing_time_ms = start.elapsed().as_millis() as u64;
    log::debug!("Analyzed {} pages in {}ms", document.page_count, processing_time_ms);

    Ok(PdfAnalysisResult {
        page_count: document.page_count,
        analysis,
        summary,
        processing_time_ms,
    })
}

/// Analyze a PDF file, print the summary and write both report files
pub fn run<P: AsRef<Path>>(path: P, paths: &ReportPaths) -> Result<PdfAnalysisResult, Error> {
    let result = analyze_pdf(path)?;

    print_summary(&result.summary);
    write_reports(&result.summary, paths)?;

    Ok(result)
}

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF parsing error: {0}")]
    Parse(String),
    #[error("PDF is encrypted")]
    Encrypted,
}

impl From<lopdf::Error> for PdfError {
    fn from(e: lopdf::Error) -> Self {
        PdfError::Parse(e.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any failure of the load, analyze and report pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Pdf(#[from] PdfError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
