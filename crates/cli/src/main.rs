//! Procureflow CLI entry point.
//!
//! This binary is the composition root for the workflow. Responsibilities:
//!
//! 1. **Wire observability**: configure `tracing-subscriber` with an
//!    `EnvFilter` and either the human or the JSON formatter. Logs go to
//!    stderr; stdout carries only the rendered reports.
//! 2. **Load configuration**: read the optional JSON config file and apply
//!    the threshold override (see [`config`]).
//! 3. **Source requests**: positional arguments, a request file, or stdin
//!    (see [`requests`]).
//! 4. **Run and render**: one engine run per request, each rendered by
//!    [`report`]. A failed run does not stop the batch, but the process exits
//!    non-zero if any run failed.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use nodes::WorkflowEngine;
use pipeline::Timestamp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod report;
mod requests;

/// Procurement workflow runner
#[derive(Parser, Debug)]
#[command(name = "procureflow", version)]
#[command(about = "Run procurement requests through intake, supplier selection and approval")]
struct Cli {
    /// Requests to process, e.g. "Order 3 laptops"
    #[arg(value_name = "REQUEST")]
    requests: Vec<String>,

    /// Read requests from a file, one per line ("-" reads stdin)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Workflow configuration file (JSON)
    #[arg(short, long, env = "PROCUREFLOW_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the auto-approval threshold
    #[arg(long, env = "PROCUREFLOW_APPROVAL_THRESHOLD", value_name = "N")]
    threshold: Option<u32>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable trace and outcome
    Text,
    /// One JSON object per request
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json);

    let config = config::load(cli.config.as_deref(), cli.threshold)?;
    let engine = WorkflowEngine::new(config);
    let requests = requests::collect(cli.requests, cli.file.as_deref())?;

    let mut stdout = std::io::stdout().lock();
    let mut failed = 0usize;
    for (index, request) in requests.iter().enumerate() {
        let outcome = engine.run(request);
        if outcome.is_err() {
            failed += 1;
        }

        match cli.output {
            OutputFormat::Text => {
                if index > 0 {
                    writeln!(stdout)?;
                }
                write!(stdout, "{}", report::render_text(&outcome))?;
            }
            OutputFormat::Json => {
                let line = report::render_json(request, &outcome, Timestamp::now())
                    .context("serialising run report")?;
                writeln!(stdout, "{line}")?;
            }
        }
    }
    stdout.flush()?;

    if failed > 0 {
        bail!("{failed} of {} request(s) failed", requests.len());
    }
    Ok(())
}

fn init_tracing(level: &str, json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
