//! Gemini `generateContent` client with cancellation support

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::SummaryConfig;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummaryError {
    #[error("[Gemini] Network error: {message}")]
    Network { message: String },

    #[error("[Gemini] API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("[Gemini] Parse error: {message}")]
    Parse { message: String },

    #[error("Request cancelled")]
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Deserialize, Default)]
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
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    /// A client when the summary is enabled and a key is available
    pub fn from_config(config: &SummaryConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        let api_key = config.resolve_api_key()?;
        Some(Self::new(api_key, config.model.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_URL, self.model, self.api_key
        )
    }

    /// Request body with thinking disabled
    pub fn build_request_body(prompt: &str) -> Result<String, SummaryError> {
        let body = RequestBody {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        };

        serde_json::to_string(&body).map_err(|e| SummaryError::Parse {
            message: format!("Failed to serialize request body: {}", e),
        })
    }

    /// Concatenated text of the first candidate; `None` when it has no text
    pub fn extract_text(body: &str) -> Result<Option<String>, SummaryError> {
        let response: GenerateResponse =
            serde_json::from_str(body).map_err(|e| SummaryError::Parse {
                message: e.to_string(),
            })?;

        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        Ok((!text.is_empty()).then_some(text))
    }

    /// Send one request, racing it against `cancel_token`
    pub async fn generate_with_cancel(
        &self,
        prompt: &str,
        cancel_token: &CancellationToken,
    ) -> Result<Option<String>, SummaryError> {
        if cancel_token.is_cancelled() {
            return Err(SummaryError::Cancelled);
        }

        let body = Self::build_request_body(prompt)?;

        tokio::select! {
            biased;

            _ = cancel_token.cancelled() => {
                log::debug!("Summary request cancelled");
                Err(SummaryError::Cancelled)
            }

            result = self.send(body) => result,
        }
    }

    async fn send(&self, body: String) -> Result<Option<String>, SummaryError> {
        let response = self
            .client
            .post(self.build_url())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SummaryError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| SummaryError::Network {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(SummaryError::Api {
                code: status.as_u16(),
                message: text,
            });
        }

        Self::extract_text(&text)
    }
}
