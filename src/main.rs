//! rpnsheet - Evaluate a sheet of postfix cell expressions

mod config;
mod logger;

use anyhow::Context;
use clap::{ArgAction, Parser};
use log::info;
use rpnsheet_core::{Sheet, SheetError};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "rpnsheet", version, about = "Evaluate a sheet of postfix (RPN) cell expressions")]
struct Cli {
    /// Sheet to evaluate; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Write the evaluated sheet here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Configuration file (default: <config dir>/rpnsheet/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not print the dimensions line before the values
    #[arg(long)]
    no_echo_dimensions: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let (config, warnings) = config::load_config(cli.config.as_ref());
    logger::init(logger::level_for(cli.verbose, config.log_level));
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    if let Err(e) = run(&cli, &config) {
        let code = match e.downcast_ref::<SheetError>() {
            Some(sheet_error) => sheet_error.exit_code(),
            None => 1,
        };
        eprintln!("Error: {:#}", e);
        std::process::exit(code);
    }
}

fn run(cli: &Cli, config: &config::Config) -> anyhow::Result<()> {
    let max_bytes = config.max_input_bytes;
    let mut sheet = match cli.input.as_deref() {
        Some(path) if path != Path::new("-") => Sheet::load(path, max_bytes)
            .with_context(|| format!("failed to load {}", path.display()))?,
        _ => Sheet::read_from(io::stdin().lock(), max_bytes)?,
    };

    let stats = sheet.evaluate()?;
    info!(
        "{} cells evaluated ({} dependency pauses)",
        stats.committed, stats.pauses
    );

    let echo = config.echo_dimensions && !cli.no_echo_dimensions;
    match &cli.output {
        Some(path) => {
            sheet
                .save(path, echo)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            sheet.write_to(&mut out, echo)?;
        }
    }
    Ok(())
}
