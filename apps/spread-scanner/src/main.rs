//! Spread Scanner Binary
//!
//! Scans one option chain page and prints every call/put pair that fits the
//! constraints.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin spread-scanner -- -P 27.86 -C 6 -T 40
//! cargo run --bin spread-scanner -- --file saved_chain.html --format json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default from config, `warn`)
//! - Any variable referenced as `${VAR}` in the config file

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use spread_scanner::application::ports::{DocumentSource, SourceError};
use spread_scanner::application::use_cases::{ScanReport, ScanUseCase};
use spread_scanner::cli::Args;
use spread_scanner::config::{LoggingConfig, ScannerConfig, SourceConfig, load_config};
use spread_scanner::domain::Constraints;
use spread_scanner::error::ScanError;
use spread_scanner::infrastructure::{FileDocumentSource, HttpDocumentSource};
use spread_scanner::report::{OutputFormat, render};
use spread_scanner::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    load_dotenv();

    let args = Args::parse();

    match run(&args).await {
        Ok(report) => {
            print!("{}", render(&report, args.format)?);
            if args.format == OutputFormat::Json {
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(code = %e.code(), error = %e, "Scan failed");
            if args.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&e.to_response())?);
            } else {
                eprintln!("error: {e}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Load config, apply flags, and run one scan.
async fn run(args: &Args) -> Result<ScanReport, ScanError> {
    let mut config = load_config(args.config.as_deref())
        .inspect_err(|_| init_tracing(&LoggingConfig::default()))?;
    args.apply(&mut config);

    init_tracing(&config.observability.logging);

    let constraints = config.constraints.to_constraints()?;
    log_config(&config, &constraints);

    let source = create_source(&config.source)?;
    let use_case = ScanUseCase::new(source, config.table.clone());

    use_case.execute(constraints).await
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Log the effective configuration.
fn log_config(config: &ScannerConfig, constraints: &Constraints) {
    tracing::info!(
        url = %config.source.url,
        file = ?config.source.file,
        max_cost = ?constraints.max_cost(),
        ceiling = ?constraints.ceiling(),
        floor = ?constraints.floor(),
        current_price = %constraints.current_price(),
        "Configuration loaded"
    );
}

/// Pick the file source when a path is configured, otherwise HTTP.
fn create_source(config: &SourceConfig) -> Result<Box<dyn DocumentSource>, SourceError> {
    if let Some(path) = &config.file {
        return Ok(Box::new(FileDocumentSource::new(path)));
    }

    let source = HttpDocumentSource::new(
        config.url.clone(),
        &config.user_agent,
        Duration::from_secs(config.timeout_secs),
    )?;

    Ok(Box::new(source))
}
