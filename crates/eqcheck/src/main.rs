//! Equality checker for beamline lattice records.
//!
//! Usage:
//!   beamline-eqcheck self-test
//!   beamline-eqcheck diff a.json b.json
//!
//! Reports go to stdout, logs to stderr.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use beamline_eqcheck::{diff, selftest};
use beamline_observability::LogConfig;

#[derive(Parser, Debug)]
#[command(name = "beamline-eqcheck")]
#[command(about = "Equality checks for beamline lattice records")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check every record shape against its test patterns
    SelfTest,
    /// Compare two elements stored as JSON, group by group
    Diff {
        /// First element
        a: PathBuf,
        /// Second element
        b: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut log_config = LogConfig::from_env();
    if args.verbose {
        log_config = log_config.with_default_filter("debug");
    }
    beamline_observability::init(&log_config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ok = match args.command {
        Command::SelfTest => {
            let outcomes = selftest::run_all().context("running record self-test")?;
            selftest::write_report(&outcomes, &mut out).context("writing self-test report")?;
            let failed = outcomes.iter().filter(|o| !o.passed()).count();
            info!(records = outcomes.len(), failed, "self-test finished");
            failed == 0
        }
        Command::Diff { a, b } => {
            let x = diff::load_ele(&a).with_context(|| format!("loading {}", a.display()))?;
            let y = diff::load_ele(&b).with_context(|| format!("loading {}", b.display()))?;
            diff::diff_elements(&x, &y, &mut out).context("writing diff report")?
        }
    };
    out.flush().context("flushing stdout")?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
