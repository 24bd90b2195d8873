//! # Primer CLI
//!
//! Shared plumbing for the four Primer console programs (`calculator`,
//! `gravity`, `inf_nan`, `sum`). Each binary parses its arguments, then
//! hands one of the functions in [`programs`] to [`main_with`], which
//! installs logging and settings, wires the program to stdin/stdout, prints
//! the report and exits with the matching code.

pub mod logging;
pub mod programs;

use std::io::{StdinLock, Stdout};
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::debug;

use primer_core::exit_codes;
use primer_core::settings;
use primer_core::{Console, PrimerError, PrimerResult, Settings};

/// Options accepted by every program.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// JSON settings file (gravity, time samples, policies, precision)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also print the result, or the error, as JSON
    #[arg(long)]
    pub json: bool,
}

/// What a program prints once it has its answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Plain-text lines for stdout
    pub lines: Vec<String>,

    /// Structured form of the result, printed with `--json`
    pub json: serde_json::Value,
}

impl Report {
    pub fn new(lines: Vec<String>, result: &impl Serialize) -> PrimerResult<Self> {
        Ok(Report {
            lines,
            json: serde_json::to_value(result)?,
        })
    }
}

/// Console bound to the process stdin/stdout.
pub type StdConsole = Console<StdinLock<'static>, Stdout>;

/// Load settings from `--config` (or defaults) and install them process-wide.
pub fn load_settings(common: &CommonArgs) -> PrimerResult<&'static Settings> {
    let loaded = match &common.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings::init(loaded)
}

/// Run `program` as the whole process and exit.
pub fn main_with<F>(name: &str, common: &CommonArgs, program: F) -> !
where
    F: FnOnce(&mut StdConsole, &Settings) -> PrimerResult<Report>,
{
    logging::init();
    debug!(program = name, ?common, "starting");

    let code = match execute(common, program) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            report_error(&err, common.json);
            err.exit_code()
        }
    };

    debug!(program = name, code, "finished");
    std::process::exit(code)
}

fn execute<F>(common: &CommonArgs, program: F) -> PrimerResult<()>
where
    F: FnOnce(&mut StdConsole, &Settings) -> PrimerResult<Report>,
{
    let settings = load_settings(common)?;
    let mut console = Console::stdio();

    let report = program(&mut console, settings)?;
    for line in &report.lines {
        console.println(line)?;
    }
    if common.json {
        console.println(&serde_json::to_string_pretty(&report.json)?)?;
    }
    Ok(())
}

fn report_error(err: &PrimerError, json: bool) {
    eprintln!();
    eprintln!("Error: {}", err);
    if json {
        if let Ok(text) = serde_json::to_string_pretty(err) {
            eprintln!("{}", text);
        }
    }
}
