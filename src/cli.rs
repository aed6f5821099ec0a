use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, OutputFormat};
use crate::interpreter;
use crate::report::{self, ReportOptions};

#[derive(Parser)]
#[command(name = "rpnloop")]
#[command(about = "rpnloop - run postfix programs with while/end loops", long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default search)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" (overrides config file; RUST_LOG wins over both)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a program and print its final variables
    Run {
        /// Program file
        file: PathBuf,

        /// Report format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Omit the header line from text reports
        #[arg(long)]
        no_header: bool,
    },

    /// Load a program and print its statements as JSON
    Ast {
        /// Program file
        file: PathBuf,
    },
}

/// Run the CLI by parsing process arguments
///
/// Returns `Ok(false)` when the program itself failed; the error report has
/// already been printed in that case.
pub fn run_cli() -> Result<bool> {
    let cli = Cli::parse();
    run_cli_with_args(cli)
}

/// Run the CLI with provided arguments
pub fn run_cli_from_args(args: Vec<String>) -> Result<bool> {
    let cli = Cli::parse_from(args);
    run_cli_with_args(cli)
}

fn run_cli_with_args(cli: Cli) -> Result<bool> {
    let config = Config::builder()
        .config_path(cli.config.clone())
        .build()?;

    init_logging(cli.log_level.as_deref().unwrap_or(&config.log.level));
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Run {
            file,
            format,
            no_header,
        } => {
            let source = read_source(&file)?;
            let outcome = interpreter::run(&source);

            let options = ReportOptions {
                format: format.unwrap_or(config.output.format),
                header: config.output.header && !no_header,
            };
            let rendered = report::render(&outcome, options);

            match (&outcome, options.format) {
                (Ok(_), OutputFormat::Text) => print!("{}", rendered),
                _ => println!("{}", rendered),
            }

            Ok(outcome.is_ok())
        }

        Commands::Ast { file } => {
            let source = read_source(&file)?;
            let program = interpreter::load(&source);
            println!("{}", serde_json::to_string_pretty(&program)?);
            Ok(true)
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(anyhow!("File '{}' not found", path.display()))
        }
        result => result.with_context(|| format!("Failed to read '{}'", path.display())),
    }
}

/// Install the stderr tracing subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Installing twice is a
/// no-op.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
