//! Batch Solver Binary
//!
//! Reads a batch of forced openings (from a file, or stdin when no path is
//! given) and prints who wins each game under optimal play.
//!
//! Options: --engine memo|table, --parallel, --quiet, --json, --verbose

use anyhow::Context;
use clap::Parser;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;
use trigon::batch::Batch;
use trigon::lattice::Board;
use trigon::search::Engine;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Batch file; stdin when omitted
    input: Option<PathBuf>,
    /// Search engine
    #[arg(long, value_enum, default_value_t = Engine::Memo)]
    engine: Engine,
    /// Solve games on all cores
    #[arg(long)]
    parallel: bool,
    /// Suppress the first-move diagnostics
    #[arg(long, short)]
    quiet: bool,
    /// One JSON object per game instead of text
    #[arg(long)]
    json: bool,
    /// Debug logging on stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    trigon::log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    let board = Board::new(trigon::HEIGHT)?;
    let input = match args.input {
        Some(ref path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            buffer
        }
    };
    let batch = Batch::parse(&input, &board)?;
    let reports = match args.parallel {
        true => batch.solve_par(&board, args.engine),
        false => batch.solve(&board, args.engine),
    };
    let ref mut out = std::io::stdout().lock();
    for report in reports.iter() {
        if args.json {
            writeln!(out, "{}", serde_json::to_string(report)?)?;
            continue;
        }
        if !args.quiet {
            for candidate in report.candidates() {
                writeln!(out, "{}", candidate)?;
            }
        }
        writeln!(out, "{}", report)?;
    }
    Ok(())
}
