//! Output formatting for analysis results
//!
//! Two renderings: colored text for terminals, and pretty-printed JSON for
//! anything downstream.

use std::io::{self, Write};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::analysis::Analysis;

/// An analysis paired with the path it came from, for multi-file runs.
#[derive(Debug, Clone, Serialize)]
pub struct FileAnalysis {
    /// Display path of the input ("-" for stdin)
    pub path: String,
    #[serde(flatten)]
    pub analysis: Analysis,
}

/// Print an analysis to stdout with optional color.
pub fn print_analysis(analysis: &Analysis, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    let mut lang_color = ColorSpec::new();
    lang_color.set_fg(Some(Color::Cyan));

    let mut name_color = ColorSpec::new();
    name_color.set_fg(Some(Color::Green));

    stdout.set_color(&bold)?;
    write!(stdout, "Language: ")?;
    stdout.reset()?;
    stdout.set_color(&lang_color)?;
    writeln!(stdout, "{}", analysis.language)?;
    stdout.reset()?;

    stdout.set_color(&bold)?;
    writeln!(stdout, "Functions:")?;
    stdout.reset()?;

    for name in &analysis.functions {
        write!(stdout, "  ")?;
        stdout.set_color(&name_color)?;
        writeln!(stdout, "{}", name)?;
        stdout.reset()?;
    }

    Ok(())
}

/// Print a single analysis as pretty-printed JSON to stdout.
pub fn print_json(analysis: &Analysis) -> io::Result<()> {
    let json = serde_json::to_string_pretty(analysis)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}

/// Print several analyses as a pretty-printed JSON array to stdout.
pub fn print_json_many(results: &[FileAnalysis]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(results)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
