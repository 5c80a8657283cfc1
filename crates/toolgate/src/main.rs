//! toolgate — static review of tool schemas in Python sources

mod config;
mod discover;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use toolgate_application::{CommentSink, ReviewPipeline, SchemaOracle, SourceAccessor};
use toolgate_domain::FileOutcome;
use toolgate_providers::{ConsoleSink, FilesystemSource, JsonSink, OpenAiOracle, RulesOracle};

use crate::config::{AppConfig, OracleConfig};

#[derive(Parser)]
#[command(name = "toolgate", version, about = "Static review of tool schemas in Python sources")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract tool definitions from Python files and validate their schemas
    Check {
        /// Files or directories to review (directories are walked for *.py)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Path to a TOML config file (default: ./toolgate.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Exit non-zero when any schema is invalid or any file fails
        #[arg(long)]
        fail_on_invalid: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    logging::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Check {
            paths,
            config,
            format,
            fail_on_invalid,
        } => {
            let app_config = config::load(config.as_deref())?;
            check(&app_config, &paths, format, fail_on_invalid).await
        }
    }
}

async fn check(
    config: &AppConfig,
    paths: &[PathBuf],
    format: OutputFormat,
    fail_on_invalid: bool,
) -> anyhow::Result<ExitCode> {
    let files = discover::python_files(paths);
    if files.is_empty() {
        info!("no Python files found under the given paths");
        return Ok(ExitCode::SUCCESS);
    }
    info!(files = files.len(), oracle = %config.oracle.provider, "starting review");

    let oracle = build_oracle(&config.oracle)?;
    let pipeline = ReviewPipeline::new(config.markers.clone(), oracle);
    let source = FilesystemSource::new();

    // Unreadable files become failed outcomes up front; the batch only
    // sees content that actually loaded. Input order is restored after.
    let mut loaded = Vec::new();
    let mut slots: Vec<Option<FileOutcome>> = vec![None; files.len()];
    for (index, path) in files.iter().enumerate() {
        match source.fetch(path).await {
            Ok(content) => loaded.push((index, path.clone(), content)),
            Err(error) => slots[index] = Some(FileOutcome::failed(path.clone(), error)),
        }
    }

    let batch: Vec<(String, String)> = loaded
        .iter()
        .map(|(_, path, content)| (path.clone(), content.clone()))
        .collect();
    let outcomes = pipeline.review_batch(batch).await;
    for ((index, _, _), outcome) in loaded.into_iter().zip(outcomes) {
        slots[index] = Some(outcome);
    }
    let outcomes: Vec<FileOutcome> = slots.into_iter().flatten().collect();

    let sink: Box<dyn CommentSink> = match format {
        OutputFormat::Text => Box::new(ConsoleSink::new()),
        OutputFormat::Json => Box::new(JsonSink::new()),
    };
    sink.publish(&outcomes).await?;

    let failed = outcomes.iter().filter(|o| o.failed).count();
    let invalid: usize = outcomes.iter().map(|o| o.invalid).sum();
    if fail_on_invalid && (failed > 0 || invalid > 0) {
        info!(failed, invalid, "review found issues");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn build_oracle(config: &OracleConfig) -> anyhow::Result<Arc<dyn SchemaOracle>> {
    match config.provider.as_str() {
        "rules" => Ok(Arc::new(RulesOracle::new())),
        "openai" => {
            let api_key = config
                .api_key
                .clone()
                .context("oracle.api_key is required for the openai provider")?;
            Ok(Arc::new(OpenAiOracle::new(
                api_key,
                config.base_url.clone(),
                config.model.clone(),
                Duration::from_secs(config.timeout_secs),
                reqwest::Client::new(),
            )))
        }
        other => anyhow::bail!("unknown oracle provider '{other}' (expected 'rules' or 'openai')"),
    }
}
