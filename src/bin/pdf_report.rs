//! CLI tool for PDF text analysis reports

use pdf_report::{run, ReportPaths};
use std::env;
use std::io::{self, BufRead, Write};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    let mut pdf_path: Option<String> = None;
    let mut paths = ReportPaths::default();

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage(&args[0]);
                return;
            }
            "--out-dir" => match rest.next() {
                Some(dir) => paths = ReportPaths::in_dir(dir),
                None => {
                    eprintln!("--out-dir needs a directory");
                    print_usage(&args[0]);
                    process::exit(1);
                }
            },
            _ if pdf_path.is_none() => pdf_path = Some(arg.clone()),
            _ => {
                eprintln!("Unexpected argument: {}", arg);
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    let pdf_path = match pdf_path.map_or_else(prompt_for_path, Ok) {
        Ok(path) => path,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    // Failures are reported, not signalled through the exit status
    match run(&pdf_path, &paths) {
        Ok(result) => {
            log::debug!(
                "{} pages processed in {}ms",
                result.page_count,
                result.processing_time_ms
            );
            println!("Reporte generado en '{}'", paths.report_html.display());
        }
        Err(e) => println!("Error: {}", e),
    }
}

fn prompt_for_path() -> io::Result<String> {
    print!("Ingrese la ruta del archivo PDF: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(strip_line_ending(&line).to_string())
}

/// Drop the line terminator only; spaces belong to the path
fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(&['\r', '\n'][..])
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [pdf_file] [--out-dir DIR]", program);
    eprintln!();
    eprintln!("Extracts the text of a PDF and reports word statistics, emails,");
    eprintln!("phone numbers and probable names.");
    eprintln!("Prompts for the PDF path when none is given.");
    eprintln!("Reports are written to reports/summary.txt and reports/report.html");
    eprintln!("unless --out-dir is set.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("doc.pdf\n"), "doc.pdf");
        assert_eq!(strip_line_ending("doc.pdf\r\n"), "doc.pdf");
        assert_eq!(strip_line_ending("doc.pdf"), "doc.pdf");
    }

    #[test]
    fn test_strip_line_ending_keeps_spaces() {
        assert_eq!(strip_line_ending(" mi doc.pdf \n"), " mi doc.pdf ");
    }
}
