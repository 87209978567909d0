//! Report output: console, plain text file and HTML file
//!
//! None of the writers alter the summary. The HTML report escapes it so the
//! browser shows the exact characters inside a `<pre>` block.

use crate::ReportError;
use html_escape::encode_text;
use std::fs;
use std::path::{Path, PathBuf};

/// Format of the "generated at" line in the HTML report
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Title used for the HTML document and its heading
pub const REPORT_TITLE: &str = "Reporte de Análisis de PDF";

/// Output locations for the report files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// Plain text copy of the summary
    pub summary_txt: PathBuf,
    /// HTML report
    pub report_html: PathBuf,
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self::in_dir("reports")
    }
}

impl ReportPaths {
    /// `summary.txt` and `report.html` under `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            summary_txt: dir.join("summary.txt"),
            report_html: dir.join("report.html"),
        }
    }
}

/// Print the summary to standard output
pub fn print_summary(summary: &str) {
    println!("{}", summary);
}

/// Save the summary verbatim as a UTF-8 text file
pub fn save_summary_to_file<P: AsRef<Path>>(summary: &str, path: P) -> Result<(), ReportError> {
    write_file(path.as_ref(), summary)
}

/// Write the HTML report stamped with the current local time
pub fn generate_html_report<P: AsRef<Path>>(summary: &str, path: P) -> Result<(), ReportError> {
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    write_file(path.as_ref(), &render_html(summary, &timestamp))
}

/// Write both report files
pub fn write_reports(summary: &str, paths: &ReportPaths) -> Result<(), ReportError> {
    save_summary_to_file(summary, &paths.summary_txt)?;
    generate_html_report(summary, &paths.report_html)
}

/// Render the HTML report for a summary
pub fn render_html(summary: &str, timestamp: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #f9f9f9;
            padding: 40px;
            color: #333;
        }}
        h1 {{
            color: #2c3e50;
        }}
        .timestamp {{
            font-size: 0.9em;
            color: #888;
        }}
        pre {{
            background-color: #fff;
            border: 1px solid #ccc;
            padding: 20px;
            border-radius: 5px;
            white-space: pre-wrap;
            word-wrap: break-word;
        }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <p class="timestamp">Generado el {timestamp}</p>
    <pre>{summary}</pre>
</body>
</html>
"#,
        title = REPORT_TITLE,
        timestamp = timestamp,
        summary = encode_text(summary),
    )
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    let to_error = |source: std::io::Error| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, contents).map_err(to_error)?;

    log::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = ReportPaths::default();
        assert_eq!(paths.summary_txt, Path::new("reports/summary.txt"));
        assert_eq!(paths.report_html, Path::new("reports/report.html"));
    }

    #[test]
    fn test_render_html_structure() {
        let html = render_html("Resumen del documento:", "2025-06-11 10:30:00");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="es">"#));
        assert!(html.contains("<title>Reporte de Análisis de PDF</title>"));
        assert!(html.contains(r#"<p class="timestamp">Generado el 2025-06-11 10:30:00</p>"#));
        assert!(html.contains("<pre>Resumen del documento:</pre>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_render_html_escapes_summary() {
        let html = render_html("a <b> & c", "2025-06-11 10:30:00");
        assert!(html.contains("<pre>a &lt;b&gt; &amp; c</pre>"));
    }

    #[test]
    fn test_timestamp_format() {
        let stamp = chrono::NaiveDate::from_ymd_opt(2025, 6, 11)
            .and_then(|d| d.and_hms_opt(9, 5, 7))
            .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string());
        assert_eq!(stamp.as_deref(), Some("2025-06-11 09:05:07"));
    }
}
