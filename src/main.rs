//! Kumu - configuration entrypoint.
//!
//! Loads, validates and generates the configuration consumed by the Kumu
//! library, with logging set up from that same configuration.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use kumu_lib::config::{ConfigLoader, KumuConfig, ENV_PREFIX};
use kumu_lib::error::{
    report_error, set_error_reporter, ErrorContext, KumuError, KumuResult, TracingErrorReporter,
};
use kumu_lib::logging::init_logging;
use tracing::info;

/// Command line arguments for Kumu.
#[derive(Parser, Debug)]
#[clap(name = "kumu", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Show the effective tree and log settings
    Show,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file (.toml or .json)
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(error) = run(args) {
        report_error(ErrorContext::new(error, "kumu"));
        process::exit(1);
    }
}

fn run(args: Args) -> KumuResult<()> {
    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // A broken config still gets default logging so the failure is visible
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    match args.command.unwrap_or(Command::Show) {
        Command::Show => {
            let config = loaded?;
            info!(
                compressed = config.tree.compressed,
                max_key_len = config.tree.max_key_len,
                log_level = %config.log.level,
                log_json = config.log.json,
                "Effective configuration"
            );
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            loaded?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = KumuConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let contents = match output.extension().and_then(|ext| ext.to_str()) {
                Some("json") => serde_json::to_string_pretty(&default_config)?,
                _ => toml::to_string_pretty(&default_config)
                    .map_err(|e| KumuError::Custom(format!("Failed to serialize config: {e}")))?,
            };
            std::fs::write(&output, contents)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
