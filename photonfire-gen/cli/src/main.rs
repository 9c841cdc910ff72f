//! Photonfire code generator
//!
//! Generates service implementations from annotated Rust contracts or JSON
//! interface descriptors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use photonfire_gen::errors::GeneratorError;
use photonfire_gen::output::generate_file;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Photonfire generator - turns service contracts into HTTP client implementations
#[derive(Parser, Debug)]
#[command(name = "photonfire-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Contract source (`.rs`) or interface descriptor file (`.json`)
    #[arg(short, long)]
    input: PathBuf,

    /// File to write the generated code to (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the `-v` level.
///
/// - 0: WARN
/// - 1 (-v): INFO
/// - 2 (-vv): DEBUG
/// - 3+ (-vvv): TRACE
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,photonfire_gen=info".to_string(),
            2 => "info,photonfire_gen=debug".to_string(),
            _ => "debug,photonfire_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = if cli.dry_run { None } else { cli.output.as_deref() };
    match generate_file(&cli.input, output, cli.dry_run) {
        Ok(report) => {
            if output.is_none() {
                print!("{}", report.code);
            }
            info!(services = ?report.services, "done");
            if cli.verbose > 0 {
                for service in &report.services {
                    eprintln!("{} {}", "generated".green().bold(), service);
                }
            }
            ExitCode::SUCCESS
        }
        Err(GeneratorError::Diagnostics { diagnostics }) => {
            for diagnostic in &diagnostics {
                eprintln!(
                    "{}: {} [{}.{}]",
                    "error".red().bold(),
                    diagnostic.message(),
                    diagnostic.domain(),
                    diagnostic.id()
                );
                eprintln!("  {} {}", "-->".blue(), diagnostic.location);
            }
            eprintln!(
                "{}: {} diagnostic(s), nothing written",
                "error".red().bold(),
                diagnostics.len()
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{}: {}", "error".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
