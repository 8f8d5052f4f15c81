use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

mod render;

#[derive(Debug, Parser)]
#[command(name = "dvw")]
#[command(about = "Volleyball scouting report CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a scouting file and print per-player statistics.
    Stats {
        input: PathBuf,
        /// Emit the full report as JSON instead of a table.
        #[arg(long)]
        json: bool,
        /// Write JSON to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print match metadata, rosters and log size without aggregating.
    Inspect { input: PathBuf },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Stats {
            input,
            json,
            output,
        } => {
            let m = dvw_parser::parse_file(&input)
                .map_err(|e| anyhow::anyhow!(e.to_string()))
                .with_context(|| format!("parse failed: {}", input.display()))?;
            let report = dvw_stats::report(&m);

            if json {
                let payload = serde_json::to_string_pretty(&report)
                    .context("failed to serialize report")?;
                match output {
                    Some(path) => fs::write(&path, payload)
                        .with_context(|| format!("failed to write: {}", path.display()))?,
                    None => println!("{payload}"),
                }
            } else {
                render::print_report(&report);
            }
        }
        Command::Inspect { input } => {
            let m = dvw_parser::parse_file(&input)
                .map_err(|e| anyhow::anyhow!(e.to_string()))
                .with_context(|| format!("parse failed: {}", input.display()))?;
            render::print_summary(&m);
        }
    }

    Ok(())
}
