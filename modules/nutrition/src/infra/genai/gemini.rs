use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};
use url::Url;

use crate::config::GenAiConfig;
use crate::domain::error::GenAiError;
use crate::domain::ports::TextGenerator;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl GeminiClient {
    /// Builds a client from configuration. A missing or blank key is an error.
    pub fn new(cfg: &GenAiConfig) -> Result<Self, GenAiError> {
        let api_key = cfg
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(GenAiError::MissingApiKey)?
            .to_owned();

        let endpoint = Url::parse(&cfg.base_url)
            .and_then(|base| {
                base.join(&format!("v1beta/models/{}:generateContent", cfg.model))
            })
            .map_err(|e| GenAiError::client(format!("invalid base url {}: {e}", cfg.base_url)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| {
                error!(?e, "failed to create generative AI http client");
                GenAiError::client(e.to_string())
            })?;

        Ok(Self {
            http,
            endpoint,
            api_key,
        })
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip_all, fields(endpoint = %self.endpoint.path()))]
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(?e, "generative AI request failed");
                GenAiError::upstream(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(%status, "generative AI returned an error status");
            return Err(GenAiError::upstream(format!("HTTP {status}: {detail}")));
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            error!(?e, "unreadable generative AI response");
            GenAiError::upstream(format!("unreadable response: {e}"))
        })?;

        let text = parsed.into_text();
        if text.trim().is_empty() {
            return Err(GenAiError::EmptyOutput);
        }
        debug!(chars = text.len(), "generative AI reply received");
        Ok(text)
    }
}

/// Stands in when no usable client could be built; every call reports why.
pub struct UnavailableGenerator {
    reason: GenAiError,
}

impl UnavailableGenerator {
    #[must_use]
    pub fn new(reason: GenAiError) -> Self {
        Self { reason }
    }
}

#[async_trait]
impl TextGenerator for UnavailableGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenAiError> {
        Err(self.reason.clone())
    }
}
