mod cli;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use engine_logging::{engine_error, engine_info, LogDestination};
use fileharvest_core::HarvestConfig;
use fileharvest_engine::{audit_documents, AuditReport, Harvester};

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let destination = match &cli.log_file {
        Some(path) => LogDestination::TerminalAndFile(path.clone()),
        None => LogDestination::Terminal,
    };
    engine_logging::initialize(destination, cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            engine_error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = settings::resolve_config(cli)?;
    match cli.command() {
        Command::Scrape { audit } => {
            scrape(config.clone())?;
            if audit {
                audit_dir(document_dir(&config, None)?);
            }
        }
        Command::Audit { dir } => audit_dir(document_dir(&config, dir)?),
        Command::PrintConfig => println!("{}", settings::render_config(&config)?),
    }
    Ok(())
}

/// Downloads run one at a time on a single-threaded runtime.
fn scrape(config: HarvestConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building async runtime")?;
    let harvester = Harvester::new(config)?;
    runtime.block_on(harvester.run())?;
    Ok(())
}

fn document_dir(config: &HarvestConfig, explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    explicit
        .or_else(|| config.document_dir())
        .context("no document category configured and no directory given")
}

fn audit_dir(dir: PathBuf) {
    let report: AuditReport = audit_documents(&dir);
    engine_info!(
        "Audit of {}: {} checked, {} valid, {} removed, {} could not be removed, {} with uppercase names",
        dir.display(),
        report.checked(),
        report.valid.len(),
        report.removed.len(),
        report.removal_failed.len(),
        report.uppercase_names.len()
    );
}
