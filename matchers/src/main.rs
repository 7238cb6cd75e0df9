use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use matchers::render::{DEFAULT_CHART_WIDTH, format_bar_chart, format_report};
use matchers::{Algorithm, Comparator, RabinKarpConfig, SearchOptions};
use thiserror::Error;

#[derive(Debug, Error)]
enum InputError {
    #[error("text is required")]
    EmptyText,

    #[error("pattern is required")]
    EmptyPattern,

    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Example:
/// cargo run --release -- --text "ABABDABACDABABCABAB" --pattern "ABABCABAB"
/// cargo run --release -- --text-file data/ipsum.txt --pattern Lorem -a kmp -a bm
#[derive(Debug, clap::Parser)]
#[command(
    name = "matchers",
    about = "Compare naive, Rabin-Karp, KMP and Boyer-Moore search on one text and one pattern"
)]
struct Cli {
    #[arg(long, conflicts_with = "text_file", required_unless_present = "text_file")]
    text: Option<String>,

    /// Read the text from a file, `-` for stdin
    #[arg(
        short = 't',
        long = "text-file",
        value_name = "TEXT_FILE",
        conflicts_with = "text",
        required_unless_present = "text"
    )]
    text_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        conflicts_with = "pattern_file",
        required_unless_present = "pattern_file"
    )]
    pattern: Option<String>,

    #[arg(
        long = "pattern-file",
        value_name = "PATTERN_FILE",
        conflicts_with = "pattern",
        required_unless_present = "pattern"
    )]
    pattern_file: Option<PathBuf>,

    /// Only run these algorithms (repeatable); all four by default
    #[arg(short, long = "algo", value_enum)]
    algos: Vec<Algorithm>,

    /// Rolling-hash radix for Rabin-Karp
    #[arg(long, default_value_t = RabinKarpConfig::DEFAULT_RADIX, value_parser = clap::value_parser!(u32).range(1..))]
    radix: u32,

    /// Rolling-hash modulus for Rabin-Karp
    #[arg(long, default_value_t = RabinKarpConfig::DEFAULT_MODULUS, value_parser = clap::value_parser!(u32).range(1..))]
    modulus: u32,

    /// Width of the longest bar in the timing chart
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    chart_width: usize,

    #[arg(long)]
    no_chart: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let (text, pattern) = load_input(&cli)?;
    let options = SearchOptions {
        rabin_karp: RabinKarpConfig::new(cli.radix, cli.modulus)?,
    };

    let algorithms = if cli.algos.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        cli.algos.clone()
    };

    log::info!(
        "comparing {} algorithms, text-length={}, pattern-length={}",
        algorithms.len(),
        text.len(),
        pattern.len()
    );

    let report = Comparator::new(options).run_selected(&algorithms, text.as_bytes(), pattern.as_bytes());

    let mut out = io::stdout().lock();
    write!(out, "{}", format_report(&report))?;
    if !cli.no_chart {
        writeln!(out)?;
        write!(out, "{}", format_bar_chart(&report.timings(), cli.chart_width))?;
    }

    Ok(())
}

/// Both inputs, trimmed. Empty ones are rejected here so the matchers never see them.
fn load_input(cli: &Cli) -> Result<(String, String), InputError> {
    let text = match (&cli.text, &cli.text_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => load_text(path)?,
        (None, None) => String::new(),
    };
    let pattern = match (&cli.pattern, &cli.pattern_file) {
        (Some(pattern), _) => pattern.clone(),
        (None, Some(path)) => load_text(path)?,
        (None, None) => String::new(),
    };

    let text = text.trim();
    let pattern = pattern.trim();
    if text.is_empty() {
        return Err(InputError::EmptyText);
    }
    if pattern.is_empty() {
        return Err(InputError::EmptyPattern);
    }

    Ok((text.to_string(), pattern.to_string()))
}

fn load_text(path: &Path) -> Result<String, InputError> {
    let io_err = |source: io::Error| InputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut buf = String::new();
    if path.as_os_str() == "-" {
        io::stdin().read_to_string(&mut buf).map_err(io_err)?;
    } else {
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut buf))
            .map_err(io_err)?;
    }
    Ok(buf)
}
