//! CLI parser
use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};

#[derive(Parser, Debug)]
/// CLI Options
pub struct CliOptions {
    #[clap(long, help = "Enable debug logging", env = "ILLUSTRATE_DEBUG")]
    /// Enable debug logging. Env: ILLUSTRATE_DEBUG
    pub debug: bool,

    #[clap(
        long,
        short = 'n',
        default_value = "10",
        env = "ILLUSTRATE_COUNT",
        value_parser = clap::value_parser!(u8).range(1..=99)
    )]
    /// Number of images to generate per run, 1 to 99 so image indices stay
    /// two digits, defaults to `10`. Env: ILLUSTRATE_COUNT
    pub count: u8,

    #[clap(long, default_value = "120", env = "ILLUSTRATE_COOLDOWN_SECONDS")]
    /// Seconds to wait after a failed image attempt, defaults to `120`.
    /// Env: ILLUSTRATE_COOLDOWN_SECONDS
    pub cooldown_seconds: u64,

    #[clap(long, short, default_value = ".", env = "ILLUSTRATE_INPUT_DIR")]
    /// Directory holding `input.txt`, `pre-prompt.txt` and `post-prompt.txt`;
    /// outputs are written there too. Env: ILLUSTRATE_INPUT_DIR
    pub input_dir: PathBuf,

    #[clap(long, default_value = DEFAULT_TEXT_MODEL)]
    /// Text model used to summarize the input into a filename token.
    pub text_model: String,

    #[clap(long, default_value = DEFAULT_IMAGE_MODEL)]
    /// Image model used for generation.
    pub image_model: String,

    #[clap(required = true, long, env = "OPENAI_API_KEY", hide_env_values = true)]
    /// OpenAI API key. Env: OPENAI_API_KEY
    pub openai_api_key: String,
}
