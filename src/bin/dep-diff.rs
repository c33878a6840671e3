//! dep-diff - Describe the difference in dependencies between two sources.
//!
//! Usage: dep-diff [-s|--section <deps|dev|peer|all>] [-f|--format <json|yaml|text>] <OLD> <NEW>

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dep_diff::{diff, manifest, render, resolve, OutputFormat, SectionSelector};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit status used by `--exit-code` when the manifests differ.
const EXIT_DIFFERENCES: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "dep-diff", version, about = "Describe the difference in dependencies between two sources")]
struct Cli {
    /// The old manifest (JSON, or YAML with a .yaml/.yml extension)
    old: PathBuf,

    /// The new manifest
    new: PathBuf,

    /// Which sections to compare
    #[arg(short, long, value_enum, default_value_t = SectionSelector::All)]
    section: SectionSelector,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Output location. Use '-' for stdout
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Exit with status 2 when any difference is found
    #[arg(long)]
    exit_code: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "dep_diff=debug" } else { "dep_diff=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(has_differences) if has_differences && cli.exit_code => {
            ExitCode::from(EXIT_DIFFERENCES)
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs one comparison and returns whether any difference was found.
fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    tracing::debug!(old = %cli.old.display(), new = %cli.new.display(), section = %cli.section, "comparing manifests");

    let old = manifest::load(&cli.old)?;
    let new = manifest::load(&cli.new)?;

    let report = diff(&resolve(&old, cli.section), &resolve(&new, cli.section))?;
    tracing::debug!(summary = %report.summary(), "comparison finished");

    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::File::create(&cli.output)
                .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
        )
    };

    let rendered = render(&report, cli.format)?;
    write!(output, "{}", rendered)?;
    if !rendered.ends_with('\n') {
        writeln!(output)?;
    }
    output.flush()?;

    Ok(!report.is_empty())
}
