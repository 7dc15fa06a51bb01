//! CLI entry point for codesniff

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use codesniff::{
    Analysis, FileAnalysis, Language, detect_and_extract, extract_as, print_analysis, print_json,
    print_json_many,
};
use rayon::prelude::*;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "codesniff")]
#[command(about = "Guess the language of a code snippet and list the functions it defines")]
#[command(version)]
struct Args {
    /// Snippet files to analyze; "-" or no argument reads stdin
    paths: Vec<PathBuf>,

    /// Force a language tag instead of sniffing the snippet content
    /// (python, java, cpp, javascript, plaintext)
    #[arg(short = 'l', long = "lang", value_name = "TAG")]
    lang: Option<String>,

    /// Print only the language guess
    #[arg(long = "language-only", conflicts_with_all = ["functions_only", "json"])]
    language_only: bool,

    /// Print only the function list, one name per line
    #[arg(long = "functions-only", conflicts_with = "json")]
    functions_only: bool,

    /// Output in JSON format (an object for one input, an array for several)
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Maximum snippet size; larger inputs are rejected.
    /// Use suffixes: K, M, G (e.g. 512K for 512KB)
    #[arg(long = "max-size", value_name = "SIZE")]
    max_size: Option<String>,

    /// Number of parallel workers for multi-file analysis
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,
}

/// Parse a size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    Ok(num * multiplier)
}

/// Read a snippet from a file, enforcing the size limit before reading.
fn read_snippet_file(path: &Path, max_size: Option<u64>) -> Result<String, String> {
    if let Some(limit) = max_size {
        let metadata = path.metadata().map_err(|e| e.to_string())?;
        if metadata.len() > limit {
            return Err(format!(
                "snippet is {} bytes, larger than the {} byte limit",
                metadata.len(),
                limit
            ));
        }
    }

    std::fs::read_to_string(path).map_err(|e| e.to_string())
}

/// Read a snippet from stdin, enforcing the size limit after reading.
fn read_snippet_stdin(max_size: Option<u64>) -> Result<String, String> {
    let mut snippet = String::new();
    std::io::stdin()
        .read_to_string(&mut snippet)
        .map_err(|e| e.to_string())?;

    if let Some(limit) = max_size {
        if snippet.len() as u64 > limit {
            return Err(format!(
                "snippet is {} bytes, larger than the {} byte limit",
                snippet.len(),
                limit
            ));
        }
    }

    Ok(snippet)
}

/// Analyze one snippet, honoring the language override when present.
fn analyze(snippet: &str, lang_override: Option<Language>) -> Analysis {
    match lang_override {
        Some(language) => extract_as(snippet, language),
        None => detect_and_extract(snippet),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let lang_override = args.lang.as_deref().map(|tag| {
        Language::from_str(tag).unwrap_or_else(|e| {
            eprintln!("codesniff: invalid --lang '{}': {}", tag, e);
            process::exit(1);
        })
    });

    let max_size = args.max_size.as_deref().map(|s| {
        parse_size(s).unwrap_or_else(|e| {
            eprintln!("codesniff: invalid --max-size '{}': {}", s, e);
            process::exit(1);
        })
    });

    if args.jobs > 0 {
        // Ignore failure: the global pool can only be configured once
        let _ = rayon::ThreadPoolBuilder::new()
            .num_threads(args.jobs)
            .build_global();
    }

    let stdin_only =
        args.paths.is_empty() || (args.paths.len() == 1 && args.paths[0].as_os_str() == "-");

    let results: Vec<FileAnalysis> = if stdin_only {
        let snippet = read_snippet_stdin(max_size).unwrap_or_else(|e| {
            eprintln!("codesniff: cannot read stdin: {}", e);
            process::exit(1);
        });
        vec![FileAnalysis {
            path: "-".to_string(),
            analysis: analyze(&snippet, lang_override),
        }]
    } else {
        args.paths
            .par_iter()
            .map(|path| {
                let snippet = read_snippet_file(path, max_size).unwrap_or_else(|e| {
                    eprintln!("codesniff: cannot read '{}': {}", path.display(), e);
                    process::exit(1);
                });
                FileAnalysis {
                    path: path.display().to_string(),
                    analysis: analyze(&snippet, lang_override),
                }
            })
            .collect()
    };

    let result = render(&results, &args);
    if let Err(e) = result {
        eprintln!("codesniff: error writing output: {}", e);
        process::exit(1);
    }
}

/// Render results in the selected output mode.
fn render(results: &[FileAnalysis], args: &Args) -> std::io::Result<()> {
    let multiple = results.len() > 1;

    if args.json {
        return if multiple {
            print_json_many(results)
        } else {
            print_json(&results[0].analysis)
        };
    }

    if args.language_only {
        for result in results {
            if multiple {
                println!("{}: {}", result.path, result.analysis.language);
            } else {
                println!("{}", result.analysis.language);
            }
        }
        return Ok(());
    }

    if args.functions_only {
        for result in results {
            if multiple {
                println!("{}:", result.path);
            }
            for name in &result.analysis.functions {
                println!("{}", name);
            }
        }
        return Ok(());
    }

    let use_color = should_use_color(args.color);
    for (i, result) in results.iter().enumerate() {
        if multiple {
            if i > 0 {
                println!();
            }
            println!("{}:", result.path);
        }
        print_analysis(&result.analysis, use_color)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1024").unwrap(), 1024);
        assert_eq!(parse_size("1K").unwrap(), 1024);
        assert_eq!(parse_size("1KB").unwrap(), 1024);
        assert_eq!(parse_size("5M").unwrap(), 5 * 1024 * 1024);
        assert_eq!(parse_size("2G").unwrap(), 2 * 1024 * 1024 * 1024);
        assert_eq!(parse_size(" 512k ").unwrap(), 512 * 1024);
        assert!(parse_size("abc").is_err());
        assert!(parse_size("").is_err());
    }

    #[test]
    fn test_analyze_with_override() {
        let analysis = analyze("def f():\n    pass", Some(Language::Plaintext));
        assert_eq!(analysis.language, Language::Plaintext);

        let analysis = analyze("def f():\n    pass", None);
        assert_eq!(analysis.language, Language::Python);
    }
}
