//! # logscope inspector
//!
//! Command-line plumbing around `logscope-core`: configuration, logging setup,
//! reading log files, fetching transaction logs over RPC and printing results.
pub mod cli;
pub mod config;
pub mod fetch;
pub mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::{load_config, InspectorConfig};
use fetch::{rpc_client, TransactionLogSource};
use logscope_core::{derive_address, filter_logs_by_program, group_logs_by_program, EventExtractor};
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use std::{path::Path, str::FromStr};

/// The main entry point for the inspector binary.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config_from_cli(cli.config.as_deref())?;
    logscope_logger::init(&config.log)?;
    tracing::debug!("Configuration loaded: {:#?}", &config);

    let output = execute(cli.command, &config).await?;
    print!("{}", output);

    Ok(())
}

/// Loads the configuration file if one was given, defaults otherwise.
fn load_config_from_cli(path: Option<&str>) -> Result<InspectorConfig> {
    match path {
        Some(config_path) => {
            eprintln!("Loading configuration from '{}'", config_path);
            load_config(config_path)
        }
        None => Ok(InspectorConfig::default()),
    }
}

/// Runs one command and returns its rendered output.
pub async fn execute(command: Commands, config: &InspectorConfig) -> Result<String> {
    match command {
        Commands::Scopes(cmd) => {
            let logs = read_log_file(&cmd.file)?;
            Ok(report::render_scopes(&group_logs_by_program(&logs)))
        }
        Commands::Filter(cmd) => {
            let logs = read_log_file(&cmd.file)?;
            Ok(report::render_lines(&filter_logs_by_program(
                &logs,
                &cmd.program,
            )))
        }
        Commands::Events(cmd) => {
            let logs = read_log_file(&cmd.file)?;
            let extractor = raw_event_extractor(&cmd.events);
            let events = match cmd.program.as_deref() {
                Some(program_id) => extractor.extract_for_program(&logs, program_id),
                None => extractor.extract(&logs),
            };
            Ok(report::render_events(&events))
        }
        Commands::Fetch(cmd) => {
            let signature = Signature::from_str(&cmd.signature)
                .with_context(|| format!("Invalid signature '{}'", cmd.signature))?;
            let client = rpc_client(&config.solana);
            tracing::info!(rpc_url = %config.solana.rpc_url, %signature, "Fetching transaction logs");
            inspect_transaction(&client, &signature, cmd.program.as_deref(), &cmd.events).await
        }
        Commands::Derive(cmd) => {
            let program_id = Pubkey::from_str(&cmd.program)
                .with_context(|| format!("Invalid program id '{}'", cmd.program))?;
            let (address, bump) = derive_address(&program_id, &cmd.seeds)?;
            Ok(report::render_derived(&address, bump))
        }
    }
}

/// Fetches a transaction's logs from `source` and renders its scopes, followed
/// by the payloads of any `events` found.
///
/// With `program` set, only lines inside that program's invocations are considered.
pub async fn inspect_transaction<S>(
    source: &S,
    signature: &Signature,
    program: Option<&str>,
    events: &[String],
) -> Result<String>
where
    S: TransactionLogSource + ?Sized,
{
    let mut logs = source.fetch_logs(signature).await?;
    if let Some(program_id) = program {
        logs = filter_logs_by_program(&logs, program_id);
    }

    let mut output = report::render_scopes(&group_logs_by_program(&logs));
    if !events.is_empty() {
        let extracted = raw_event_extractor(events).extract(&logs);
        output.push_str(&report::render_events(&extracted));
    }
    Ok(output)
}

/// An extractor that keeps each named event's payload as raw bytes.
fn raw_event_extractor(names: &[String]) -> EventExtractor<Vec<u8>> {
    let mut extractor = EventExtractor::new();
    for name in names {
        extractor.register(name.as_str(), |payload: &[u8]| Ok(payload.to_vec()));
    }
    extractor
}

fn read_log_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read log file '{}'", path.display()))?;
    Ok(contents.lines().map(str::to_string).collect())
}
