//! Command-line interface for doc2json
//! Reads Go doc comment text from stdin and writes its blocks to stdout.
//!
//! Usage:
//!   doc2json [--format `<format>`] [--config `<path>`] [--verbose] < input.txt
//!   doc2json --list-formats
//!
//! The command takes no positional arguments. Failures are reported on stderr and
//! exit with a non-zero status that identifies the failing stage.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use doc2json::godoc::formats::Format;
use doc2json::processor;
use doc2json::settings::{Doc2JsonConfig, Loader};
use doc2json::Result;

/// Environment variable holding a tracing filter, e.g. `DOC2JSON_LOG=trace`
const LOG_ENV: &str = "DOC2JSON_LOG";

#[derive(Parser)]
#[command(name = "doc2json")]
#[command(version)]
#[command(about = "Reads Go doc comment text from stdin and writes its blocks to stdout")]
struct Args {
    /// Output format (default: json)
    #[arg(long, short = 'f')]
    format: Option<Format>,

    /// TOML configuration file layered over the built-in defaults
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(long, short = 'v')]
    verbose: bool,

    /// List available output formats and exit
    #[arg(long)]
    list_formats: bool,
}

fn main() {
    let args = Args::parse();

    if args.list_formats {
        handle_list_formats_command();
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("doc2json: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    init_tracing(args.verbose, &config.logging.level);
    debug!(
        format = %config.output.format,
        trailing_newline = config.output.trailing_newline,
        "starting conversion"
    );

    processor::convert(io::stdin().lock(), io::stdout().lock(), &config.output)
}

fn load_config(args: &Args) -> Result<Doc2JsonConfig> {
    let mut loader = Loader::new();
    if let Some(path) = &args.config {
        loader = loader.with_file(path);
    }
    if let Some(format) = args.format {
        loader = loader.set_override("output.format", format.name())?;
    }
    Ok(loader.build()?)
}

fn init_tracing(verbose: bool, level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in Format::ALL {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}
