use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use illustrate::cli::CliOptions;
use illustrate::config::setup_logging;
use illustrate::openai::OpenAiClient;
use illustrate::pipeline::{self, RunConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliOptions::parse();

    setup_logging(cli.debug).context("Failed to set up logging")?;

    let client = OpenAiClient::new(cli.openai_api_key, cli.text_model, cli.image_model);
    let config = RunConfig {
        input_dir: cli.input_dir,
        image_count: usize::from(cli.count),
        cooldown: Duration::from_secs(cli.cooldown_seconds),
    };

    let outcome = pipeline::run(&config, &client, &client).await?;

    if outcome.failed_indices.is_empty() {
        info!(
            "Run complete: {} images for {}",
            outcome.image_paths.len(),
            outcome.base_name
        );
    } else {
        warn!(
            "Run complete with gaps: {} of {} images saved, missing indices {:?}",
            outcome.image_paths.len(),
            config.image_count,
            outcome.failed_indices
        );
    }
    Ok(())
}
