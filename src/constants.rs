//! Shared constants for things
//!

/// Body text file expected in the input directory.
pub const INPUT_FILE: &str = "input.txt";

/// Text prepended to the body when assembling the image prompt.
pub const PRE_PROMPT_FILE: &str = "pre-prompt.txt";

/// Text appended to the body when assembling the image prompt.
pub const POST_PROMPT_FILE: &str = "post-prompt.txt";

/// Default text model for summarization.
pub const DEFAULT_TEXT_MODEL: &str = "gpt-3.5-turbo";

/// Default image model for generation.
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

/// Chat completions endpoint.
pub const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Image generations endpoint.
pub const IMAGES_GENERATIONS_URL: &str = "https://api.openai.com/v1/images/generations";

/// System instruction driving the summarizer.
pub const SUMMARIZE_INSTRUCTION: &str =
    "Summarize the following text into the most relevant 5 words:";

/// Filename token used when summarization fails or comes back empty.
pub const PLACEHOLDER_TOKEN: &str = "untitled";

/// Most bytes of body text sent to the summarizer; the image prompt still
/// carries the full body.
pub const MAX_SUMMARY_INPUT_BYTES: usize = 16 * 1024;

/// Most words kept from the summarizer's reply.
pub const SUMMARY_WORD_LIMIT: usize = 5;
