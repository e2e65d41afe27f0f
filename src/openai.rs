//! OpenAI-backed implementations of the two remote capabilities the pipeline
//! needs: text summarization and image generation.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{CHAT_COMPLETIONS_URL, IMAGES_GENERATIONS_URL, SUMMARIZE_INSTRUCTION};
use crate::error::IllustrateError;

/// Capability: turn a block of text into a short summary phrase.
#[async_trait]
pub trait TextSummarizer {
    /// Returns the raw summary text for `text`, unnormalized.
    async fn summarize(&self, text: &str) -> Result<String, IllustrateError>;
}

/// Capability: produce one image for a prompt, as raw bytes.
#[async_trait]
pub trait ImageGenerator {
    /// Returns the raw image bytes for `prompt`, after any URL download or
    /// base64 decode the service requires.
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, IllustrateError>;
}

/// Client for the OpenAI chat-completions and images endpoints.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    text_model: String,
    image_model: String,
}

impl OpenAiClient {
    /// Builds a client. No request timeout is set; the transport's defaults
    /// apply.
    pub fn new(api_key: String, text_model: String, image_model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            text_model,
            image_model,
        }
    }
}

// -----------------------------
// Chat completions (text)
// -----------------------------

#[derive(Serialize, Debug)]
struct ChatCompletionsRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionsResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChatChoiceMessage {
    content: String,
}

/// Pulls the first completion's text out of a parsed response.
fn first_choice(response: ChatCompletionsResponse) -> Result<String, IllustrateError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| IllustrateError::MalformedResponse("no choices returned".to_string()))
}

#[async_trait]
impl TextSummarizer for OpenAiClient {
    async fn summarize(&self, text: &str) -> Result<String, IllustrateError> {
        let req_body = ChatCompletionsRequest {
            model: &self.text_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SUMMARIZE_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let resp = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&req_body)
            .send()
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            return Err(IllustrateError::Http {
                what: "chat completions".to_string(),
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let parsed: ChatCompletionsResponse = serde_json::from_slice(&bytes)?;
        first_choice(parsed)
    }
}

// -----------------------------
// Images
// -----------------------------

/// Request body for POST /v1/images/generations
/// Docs: https://platform.openai.com/docs/api-reference/images
#[derive(Serialize, Debug)]
struct ImagesGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
}

#[derive(Deserialize, Debug)]
struct ImagesGenerateResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Deserialize, Debug)]
struct ImageData {
    b64_json: Option<String>,
    url: Option<String>,
    revised_prompt: Option<String>,
}

#[async_trait]
impl ImageGenerator for OpenAiClient {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, IllustrateError> {
        let req_body = ImagesGenerateRequest {
            model: &self.image_model,
            prompt,
            n: 1,
            size: "1024x1024",
        };

        let resp = self
            .client
            .post(IMAGES_GENERATIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&req_body)
            .send()
            .await?;

        let status = resp.status();
        let resp_bytes = resp.bytes().await?;
        if !status.is_success() {
            return Err(IllustrateError::Http {
                what: "image generation".to_string(),
                status,
                body: String::from_utf8_lossy(&resp_bytes).into_owned(),
            });
        }

        let parsed: ImagesGenerateResponse = serde_json::from_slice(&resp_bytes)?;
        let first = parsed
            .data
            .into_iter()
            .next()
            .ok_or(IllustrateError::MissingImagePayload)?;

        if let Some(revised_prompt) = first.revised_prompt {
            debug!("Revised prompt from OpenAI: {revised_prompt}");
        }

        // DALL-E models answer with a URL by default; GPT image models always
        // answer inline base64.
        if let Some(url) = first.url {
            self.download(&url).await
        } else if let Some(b64_json) = first.b64_json {
            Ok(general_purpose::STANDARD.decode(b64_json)?)
        } else {
            Err(IllustrateError::MissingImagePayload)
        }
    }
}

impl OpenAiClient {
    /// Fetches the raw image bytes behind a result URL.
    async fn download(&self, url: &str) -> Result<Vec<u8>, IllustrateError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            return Err(IllustrateError::Http {
                what: "image download".to_string(),
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_choice_extracts_content() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"A quiet fox"}},
            {"message":{"role":"assistant","content":"ignored"}}]}"#;
        let parsed: ChatCompletionsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(first_choice(parsed).unwrap(), "A quiet fox");
    }

    #[test]
    fn test_first_choice_empty_is_malformed() {
        let parsed: ChatCompletionsResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            first_choice(parsed),
            Err(IllustrateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_image_data_accepts_url_or_b64() {
        let raw = r#"{"data":[{"url":"https://example.com/img.png"}]}"#;
        let parsed: ImagesGenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.data[0].url.as_deref(),
            Some("https://example.com/img.png")
        );
        assert!(parsed.data[0].b64_json.is_none());

        let raw = r#"{"data":[{"b64_json":"aGVsbG8=","revised_prompt":"a revised prompt"}]}"#;
        let parsed: ImagesGenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.data[0].b64_json.as_deref(), Some("aGVsbG8="));
    }
}
