//! Text-generation collaborator: daily quote and teaser lines, with canned
//! fallbacks so the page never waits on or shows an empty answer.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TextGenConfig;
use crate::model::Quote;

pub const OFFLINE_QUOTE: (&str, &str) = ("The cosmos is within us. We are made of star-stuff.", "Carl Sagan");
pub const FAILED_QUOTE: (&str, &str) = ("Look up at the stars and not down at your feet.", "Stephen Hawking");
pub const OFFLINE_TEASER: &str = "A fascinating journey into the depths of this topic...";
pub const FAILED_TEASER: &str = "Click to read more...";

const QUOTE_PROMPT: &str = "Generate a short, profound, and poetic quote about the universe, stars, coding, or exploration. Return a JSON object with \"text\" and \"author\" (you can invent a persona or attribute to \"Gemini AI\" if it is original).";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TextGenError {
    #[error("no API key configured for text generation")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(String),
    #[error("service answered with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("empty response")]
    EmptyResponse,
}

/// Anything that turns a prompt into text.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    /// With `json`, the answer must be a JSON document.
    async fn generate(&self, prompt: &str, json: bool) -> Result<String, TextGenError>;
}

/// REST client for the Gemini `generateContent` endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct GeminiClient {
    config: TextGenConfig,
}

impl GeminiClient {
    pub fn new(config: TextGenConfig) -> Self {
        Self { config }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn request_body(prompt: &str, json: bool) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: [Content { parts: [Part { text: prompt }] }],
        generation_config: json.then(|| GenerationConfig {
            response_mime_type: "application/json",
            response_schema: serde_json::json!({
                "type": "OBJECT",
                "properties": {
                    "text": { "type": "STRING" },
                    "author": { "type": "STRING" }
                },
                "required": ["text", "author"]
            }),
        }),
    }
}

/// Concatenated text of the first candidate.
fn response_text(body: &str) -> Result<String, TextGenError> {
    let resp: GenerateResponse = serde_json::from_str(body).map_err(|e| TextGenError::Decode(e.to_string()))?;
    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(TextGenError::EmptyResponse);
    }
    Ok(text)
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, json: bool) -> Result<String, TextGenError> {
        let key = self.config.api_key.as_deref().ok_or(TextGenError::MissingApiKey)?;
        let resp = Request::post(&self.config.generate_url(key))
            .json(&request_body(prompt, json))
            .map_err(|e| TextGenError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| TextGenError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(TextGenError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| TextGenError::Decode(e.to_string()))?;
        response_text(&body)
    }
}

fn quote(pair: (&str, &str)) -> Quote {
    Quote::new(pair.0, pair.1)
}

/// Never fails; falls back to a fixed quote when the service is missing or broken.
pub async fn fetch_daily_quote(generator: &impl TextGenerator) -> Quote {
    let result = generator
        .generate(QUOTE_PROMPT, true)
        .await
        .and_then(|raw| serde_json::from_str::<Quote>(&raw).map_err(|e| TextGenError::Decode(e.to_string())));
    match result {
        Ok(q) => q,
        Err(TextGenError::MissingApiKey) => {
            log::warn!("no API key for text generation, using default quote");
            quote(OFFLINE_QUOTE)
        }
        Err(e) => {
            log::error!("failed to fetch daily quote: {e}");
            quote(FAILED_QUOTE)
        }
    }
}

/// Never fails; falls back to a fixed line when the service is missing or broken.
pub async fn fetch_teaser(generator: &impl TextGenerator, title: &str) -> String {
    let prompt = format!("Write a 2-sentence alluring teaser summary for a blog post titled \"{title}\".");
    match generator.generate(&prompt, false).await {
        Ok(text) => text,
        Err(TextGenError::MissingApiKey) => {
            log::warn!("no API key for text generation, using default teaser");
            OFFLINE_TEASER.to_string()
        }
        Err(e) => {
            log::error!("failed to fetch teaser for {title:?}: {e}");
            FAILED_TEASER.to_string()
        }
    }
}
