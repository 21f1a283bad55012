//! Discovers adapters and maintains the generated adapter registry.
//!
//! Usage:
//!
//! ```text
//! registrar <operation> <config-path>
//! ```
//!
//! The `operation` must be `discover`, `generate`, or `verify`:
//!
//! - `discover` scans the adapters root and prints the discovery report.
//! - `generate` discovers, writes the registry artifact (backing up any
//!   previous one) and, when `report_file` is configured, the discovery
//!   report next to it.
//! - `verify` loads the artifact and initialises the registry against the
//!   adapter sources without executing them, then prints the registry report.
//!
//! Reports are printed to standard output as pretty JSON. Logs go to
//! standard error and are filtered by `RUST_LOG` (default `registrar=info`).
//! Panics, including those contained while constructing adapters, are
//! reported through the same log rather than the default panic hook.

use camino::{Utf8Path, Utf8PathBuf};
use mockable::DefaultClock;
use registrar::artifact::{
    adapters::FsArtifactStore,
    ports::{ArtifactStore, ArtifactStoreError},
};
use registrar::codegen::services::{CodegenError, RegenerationService};
use registrar::config::{ConfigError, RegistrarConfig};
use registrar::discovery::{
    adapters::{FsSourceScanner, PythonAnalyzer},
    domain::ScanRules,
    ports::DiscoveryError,
    services::DiscoveryService,
};
use registrar::runtime::services::{LoadError, load_registry};
use registrar::verify::SourceClassResolver;
use serde::Serialize;
use std::env;
use std::io::{self, Write};
use std::panic;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "registrar=info";

/// Errors that end a command-line run.
#[derive(Debug, Error)]
enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    #[error(transparent)]
    Codegen(#[from] CodegenError),
    #[error(transparent)]
    Store(#[from] ArtifactStoreError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to serialise report: {0}")]
    Report(#[source] serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Discover,
    Generate,
    Verify,
}

impl Operation {
    fn parse(arg: &str) -> Result<Self, CliError> {
        match arg {
            "discover" => Ok(Self::Discover),
            "generate" => Ok(Self::Generate),
            "verify" => Ok(Self::Verify),
            other => Err(CliError::InvalidArgs(format!(
                "unknown operation '{other}'; expected discover, generate, or verify"
            ))),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    route_panics_to_tracing();
    match collect_args().and_then(|args| run(args.into_iter())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "registrar failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn route_panics_to_tracing() {
    panic::set_hook(Box::new(|info| warn!(panic = %info, "panic")));
}

fn collect_args() -> Result<Vec<String>, CliError> {
    env::args_os()
        .map(|arg| {
            arg.into_string()
                .map_err(|_| CliError::InvalidArgs("argument is not valid UTF-8".to_owned()))
        })
        .collect()
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<(Operation, Utf8PathBuf), CliError> {
    let _program = args.next();
    let operation = args
        .next()
        .ok_or_else(|| CliError::InvalidArgs("missing operation argument".to_owned()))
        .and_then(|arg| Operation::parse(&arg))?;
    let config_path = args
        .next()
        .map(Utf8PathBuf::from)
        .ok_or_else(|| CliError::InvalidArgs("missing config path argument".to_owned()))?;
    if let Some(extra) = args.next() {
        return Err(CliError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    Ok((operation, config_path))
}

fn run(args: impl Iterator<Item = String>) -> Result<(), CliError> {
    let (operation, config_path) = parse_args(args)?;
    let config = RegistrarConfig::load(&config_path)?;
    info!(operation = ?operation, config = %config_path, "starting");
    match operation {
        Operation::Discover => discover(&config),
        Operation::Generate => generate(&config),
        Operation::Verify => verify(&config),
    }
}

fn discover(config: &RegistrarConfig) -> Result<(), CliError> {
    let catalog = DiscoveryService::from_config(config).discover()?;
    print_json(&catalog.report())
}

fn generate(config: &RegistrarConfig) -> Result<(), CliError> {
    let catalog = DiscoveryService::from_config(config).discover()?;
    let store = Arc::new(FsArtifactStore::open(&config.artifact_dir)?);
    let service = RegenerationService::new(Arc::clone(&store), Arc::new(DefaultClock));
    let outcome = service.regenerate(&catalog, config.artifact_location())?;

    let report = catalog.report();
    if let Some(report_file) = &config.report_file {
        let text = serde_json::to_string_pretty(&report).map_err(CliError::Report)?;
        store.write(report_file, &text)?;
        info!(path = %report_file, "wrote discovery report");
    }

    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "wrote {} with {} adapters",
        config.artifact_dir.join(outcome.location()),
        outcome.manifest().entries().len()
    )
    .map_err(CliError::Output)?;
    if let Some(backup) = outcome.backup() {
        writeln!(
            stdout,
            "previous artifact saved as {}",
            config.artifact_dir.join(backup)
        )
        .map_err(CliError::Output)?;
    }
    Ok(())
}

fn verify(config: &RegistrarConfig) -> Result<(), CliError> {
    let store = FsArtifactStore::open(&config.artifact_dir)?;
    let resolver = source_resolver(config, &config.adapters_root);
    let registry = load_registry(&store, config.artifact_location(), &resolver)?;
    print_json(&registry.report())
}

fn source_resolver(
    config: &RegistrarConfig,
    root: &Utf8Path,
) -> SourceClassResolver<FsSourceScanner, PythonAnalyzer> {
    let scanner = FsSourceScanner::new(
        root,
        ScanRules::new(&config.scanner),
        config.module_prefix.clone(),
    );
    SourceClassResolver::new(
        Arc::new(scanner),
        Arc::new(PythonAnalyzer::new()),
        root,
        config.module_prefix.clone(),
    )
    .with_extension(config.scanner.extension())
}

fn print_json(report: &impl Serialize) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(report).map_err(CliError::Report)?;
    writeln!(io::stdout().lock(), "{text}").map_err(CliError::Output)
}
