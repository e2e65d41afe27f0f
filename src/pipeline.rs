//! The run itself: load inputs, summarize, name, save the prompt, fetch images.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use tracing::{error, info};

use crate::constants::PLACEHOLDER_TOKEN;
use crate::error::IllustrateError;
use crate::inputs::InputTexts;
use crate::naming::{base_name, image_file_name};
use crate::openai::{ImageGenerator, TextSummarizer};
use crate::prompt::{assemble, save_prompt};
use crate::summary::{summary_token, truncate_for_context};

/// Settings for one run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Directory holding the three input files; outputs land here too.
    pub input_dir: PathBuf,
    /// How many images to request, one call each.
    pub image_count: usize,
    /// Wait after a failed image attempt before moving to the next index.
    pub cooldown: Duration,
}

/// What a finished run produced. Partial completion is a valid terminal
/// state; missing images show up as gaps in `image_paths`.
#[derive(Debug)]
pub struct RunOutcome {
    /// Shared stem of every output file of this run.
    pub base_name: String,
    /// Where the assembled prompt was written.
    pub prompt_path: PathBuf,
    /// Every image that was saved, in request order.
    pub image_paths: Vec<PathBuf>,
    /// 1-based indices whose attempt failed and was skipped.
    pub failed_indices: Vec<usize>,
}

/// Runs the whole pipeline once.
///
/// Only a missing input file or a failed prompt write abort the run; a
/// summarization failure degrades to a placeholder token and each image
/// failure costs one cooldown and one gap in the output.
pub async fn run(
    config: &RunConfig,
    summarizer: &dyn TextSummarizer,
    images: &dyn ImageGenerator,
) -> Result<RunOutcome, IllustrateError> {
    let inputs = InputTexts::load(&config.input_dir)?;

    let token = match summarizer
        .summarize(truncate_for_context(&inputs.body))
        .await
    {
        Ok(raw) => {
            let token = summary_token(&raw);
            if token.is_empty() {
                error!("Summarizer returned an empty summary, using placeholder");
                PLACEHOLDER_TOKEN.to_string()
            } else {
                token
            }
        }
        Err(err) => {
            error!("Encountered an error while summarizing: {err}");
            PLACEHOLDER_TOKEN.to_string()
        }
    };

    let base = base_name(Local::now(), &token);
    let full_prompt = assemble(&inputs);
    let prompt_path = save_prompt(&config.input_dir, &base, &full_prompt)?;

    println!("Complete Prompt:\n{full_prompt}");
    println!("\nSummary:\n{token}");
    println!("\nFilename:\n{base}");

    let mut image_paths = Vec::new();
    let mut failed_indices = Vec::new();
    for index in 1..=config.image_count {
        info!("Requesting image {index} of {}", config.image_count);
        match fetch_one(config, images, &full_prompt, &base, index).await {
            Ok(path) => {
                info!("Saved: {}", path.display());
                image_paths.push(path);
            }
            Err(err) => {
                error!("Encountered an error: {err}");
                failed_indices.push(index);
                tokio::time::sleep(config.cooldown).await;
            }
        }
    }

    Ok(RunOutcome {
        base_name: base,
        prompt_path,
        image_paths,
        failed_indices,
    })
}

/// One image attempt: generate, then write `<base>-NN.png`. Any failure here
/// is recovered by the caller; the index is skipped rather than retried.
async fn fetch_one(
    config: &RunConfig,
    images: &dyn ImageGenerator,
    prompt: &str,
    base: &str,
    index: usize,
) -> Result<PathBuf, IllustrateError> {
    let bytes = images.generate(prompt).await?;
    let path = config.input_dir.join(image_file_name(base, index));
    fs::write(&path, &bytes).map_err(|err| IllustrateError::FileWrite(path.clone(), err))?;
    Ok(path)
}
