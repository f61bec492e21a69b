//! hexline CLI tool
//!
//! Prints the hex distance between two cells and the straight-line path
//! connecting them.
//!
//! Usage:
//!   hexline [--method axial|cube] [--format text|json] <start> <end>

mod config;
mod error;
mod report;

use std::io;

use config::{parse_args, CliConfig, Command, Format};
use report::PathReport;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_usage() {
    eprintln!("hexline - Straight lines on an axial hex grid");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  hexline [options] <start> <end>");
    eprintln!();
    eprintln!("Coordinates are written x,y or (x, y), e.g. 2,5 or \"(-3, 4)\".");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --method axial|cube   Snap samples per axis (default) or by cube rounding");
    eprintln!("  --cube                Same as --method cube");
    eprintln!("  --format text|json    Output encoding (default: text)");
    eprintln!("  --json                Same as --format json");
    eprintln!("  -h, --help            Show this message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HEXLINE_METHOD  Default for --method");
    eprintln!("  HEXLINE_FORMAT  Default for --format");
    eprintln!("  RUST_LOG        Log filter (default: hexline=info,hexline_topology=info)");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the path
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexline=info,hexline_topology=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let command = CliConfig::from_env()
        .and_then(|base| parse_args(std::env::args().skip(1), base));

    let (config, start, end) = match command {
        Ok(Command::Line { config, start, end }) => (config, start, end),
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    tracing::info!(method = %config.method, ?config.format, %start, %end, "drawing line");

    let report = PathReport::new(config.method, start, end);
    tracing::info!(distance = report.distance, cells = report.path.len(), "line ready");

    let stdout = io::stdout().lock();
    match config.format {
        Format::Text => report.write_text(stdout)?,
        Format::Json => report.write_json(stdout)?,
    }

    Ok(())
}
