//! Summary of the text analysis
//!
//! [`TextAnalyzer`] runs the pattern extractors and word statistics over a
//! text and renders the findings as a plain-text summary (in Spanish):
//!
//! ```text
//! Resumen del documento:
//! - Palabras totales: 7
//! - Palabras únicas: 5
//!
//! - 10 palabras más comunes:
//!   - hola: 2
//! ...
//! - Nombres propios detectados (estimado: 3):
//! Hola, Hola Python, Python
//! ```

use crate::patterns::{extract_emails, extract_names, extract_phone_numbers};
use crate::stats::{word_stats, WordStats};
use std::fmt;

/// Maximum number of names listed in the summary body
pub const MAX_LISTED_NAMES: usize = 10;

/// Analyzer over a borrowed text
#[derive(Debug, Clone, Copy)]
pub struct TextAnalyzer<'a> {
    text: &'a str,
}

impl<'a> TextAnalyzer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn extract_emails(&self) -> Vec<String> {
        extract_emails(self.text)
    }

    pub fn extract_phone_numbers(&self) -> Vec<String> {
        extract_phone_numbers(self.text)
    }

    pub fn extract_names(&self) -> Vec<String> {
        extract_names(self.text)
    }

    pub fn word_stats(&self) -> WordStats {
        word_stats(self.text)
    }

    /// Run every extraction and collect the results
    pub fn analyze(&self) -> Analysis {
        Analysis {
            stats: self.word_stats(),
            emails: self.extract_emails(),
            phones: self.extract_phone_numbers(),
            names: self.extract_names(),
        }
    }

    /// Render the summary string
    pub fn summary(&self) -> String {
        self.analyze().to_string()
    }
}

/// Structured findings for a text
///
/// The `Display` implementation produces the summary report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub stats: WordStats,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub names: Vec<String>,
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resumen del documento:")?;
        writeln!(f, "- Palabras totales: {}", self.stats.total)?;
        writeln!(f, "- Palabras únicas: {}", self.stats.unique)?;
        writeln!(f)?;
        writeln!(f, "- 10 palabras más comunes:")?;
        for (word, freq) in &self.stats.common {
            writeln!(f, "  - {}: {}", word, freq)?;
        }

        writeln!(f)?;
        writeln!(f, "- Correos encontrados ({}):", self.emails.len())?;
        write_list(f, &self.emails)?;

        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "- Teléfonos encontrados ({}):", self.phones.len())?;
        write_list(f, &self.phones)?;

        writeln!(f)?;
        writeln!(f)?;
        // The header counts every name, the body lists only the first ones
        writeln!(
            f,
            "- Nombres propios detectados (estimado: {}):",
            self.names.len()
        )?;
        let listed = &self.names[..self.names.len().min(MAX_LISTED_NAMES)];
        write!(f, "{}", listed.join(", "))?;
        if self.names.len() > MAX_LISTED_NAMES {
            write!(f, "...")?;
        }

        Ok(())
    }
}

/// Bulleted list without a trailing newline, or the "Ninguno" placeholder
fn write_list(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return write!(f, "  - Ninguno");
    }
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "  - {}", item)?;
    }
    Ok(())
}
