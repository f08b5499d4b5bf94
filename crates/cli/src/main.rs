//! glyphdex - build the named-character catalog from local Unicode data files
//!
//! Reads `UnicodeData.txt`, `emoji-data.txt`, `MathClassEx.txt` and a CLDR
//! annotation document, and writes the catalog artifact to a file or stdout.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use glyphdex_core::catalog::{CatalogEnvelope, PlainEnvelope, PythonModuleEnvelope};
use glyphdex_core::decode::decode_source;
use glyphdex_core::params::{CatalogParams, NameCase};
use glyphdex_core::source::MarkerMatch;
use glyphdex_core::{SourceTexts, build_catalog};
use tracing::{debug, info};

/// Output framing for the artifact.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Python module with `emoji_list` and `skin_tone_selectable_emojis` (default)
    #[default]
    Python,
    /// Entry lines, blank line, flag characters
    Plain,
}

/// Section marker comparison.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkerMode {
    /// Marker lines must match byte for byte
    Exact,
    /// Surrounding whitespace is ignored
    Trimmed,
}

/// Build a de-duplicated, annotated catalog of emoji and math symbols.
#[derive(Parser, Debug)]
#[command(name = "glyphdex")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue, conflicts_with = "quiet")]
    debug: bool,

    /// Only log errors
    #[arg(short = 'q', long, action = ArgAction::SetTrue)]
    quiet: bool,

    // === Sources ===
    /// Path to UnicodeData.txt
    #[arg(long = "unicode-data")]
    unicode_data: PathBuf,

    /// Path to emoji-data.txt
    #[arg(long = "emoji-data")]
    emoji_data: PathBuf,

    /// Path to MathClassEx.txt
    #[arg(long = "math-data")]
    math_data: PathBuf,

    /// Path to the CLDR annotation document (e.g. en.xml)
    #[arg(long = "annotations")]
    annotations: PathBuf,

    /// Text encoding of the source files
    #[arg(short = 'e', long, default_value = "utf-8")]
    encoding: String,

    // === Parameters ===
    /// JSON file with catalog parameters; flags below override it
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// How the skin-tone section markers are matched
    #[arg(long = "marker-match", value_enum)]
    marker_match: Option<MarkerMode>,

    /// Title-case names instead of lowercasing them
    #[arg(long = "title-case", action = ArgAction::SetTrue)]
    title_case: bool,

    /// Prefix right-to-left characters with a left-to-right mark
    #[arg(long = "directional-marks", action = ArgAction::SetTrue)]
    directional_marks: bool,

    // === Output ===
    /// Output format
    #[arg(short = 't', long = "format", value_enum, default_value_t = OutputFormat::Python)]
    format: OutputFormat,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

fn init_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt};

    let directive = if args.debug {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let subscriber = fmt::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();
    // Called once from main; a failure only means a subscriber is already set.
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging not initialised: {e}");
    }
}

fn build_params(args: &Args) -> Result<CatalogParams> {
    let mut params = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            CatalogParams::from_json(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => CatalogParams::default(),
    };
    if let Some(mode) = args.marker_match {
        params.human_window.matching = match mode {
            MarkerMode::Exact => MarkerMatch::Exact,
            MarkerMode::Trimmed => MarkerMatch::Trimmed,
        };
    }
    if args.title_case {
        params.name_case = NameCase::Title;
    }
    if args.directional_marks {
        params.directional_marks = true;
    }
    Ok(params)
}

fn read_source(path: &Path, encoding: &str) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read source");
    decode_source(&bytes, encoding).with_context(|| format!("failed to decode {}", path.display()))
}

fn run(args: &Args) -> Result<()> {
    let params = build_params(args)?;

    let unicode_data = read_source(&args.unicode_data, &args.encoding)?;
    let emoji_data = read_source(&args.emoji_data, &args.encoding)?;
    let math_data = read_source(&args.math_data, &args.encoding)?;
    let annotations = read_source(&args.annotations, &args.encoding)?;

    let sources = SourceTexts {
        unicode_data: &unicode_data,
        emoji_data: &emoji_data,
        math_data: &math_data,
        annotations: &annotations,
    };
    let output = build_catalog(&sources, &params).context("failed to build catalog")?;

    let envelope: &dyn CatalogEnvelope = match args.format {
        OutputFormat::Python => &PythonModuleEnvelope,
        OutputFormat::Plain => &PlainEnvelope,
    };

    // Open output file or use stdout
    let mut writer: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };
    output
        .render_to(&mut writer, envelope, &params)
        .context("failed to write catalog")?;

    info!(
        entries = output.catalog.len(),
        skin_tones = output.skin_tones.len(),
        outfile = %args.outfile,
        "catalog written"
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
