use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{build_prompt, DescriptionGenerator, DescriptionInput, GeneratorError};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL: &str = "gemini-2.0-flash";

/// Gemini-backed generator. Every call is a fresh round trip, with no retry
/// and no caching; the injected client carries the request timeout.
pub struct GeminiGenerator {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiGenerator {
    pub fn new(http: reqwest::Client, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

#[async_trait]
impl DescriptionGenerator for GeminiGenerator {
    async fn generate(&self, input: &DescriptionInput) -> Result<String, GeneratorError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GeneratorError::NotConfigured)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, MODEL, api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(input) }] }]
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeneratorError::Provider(e.to_string()))?;

        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|e| GeneratorError::Provider(e.to_string()))?;

        if !status.is_success() {
            // Surface the provider's own message when the body carries one.
            let message = serde_json::from_str::<ProviderError>(&payload)
                .map(|e| e.error.message)
                .unwrap_or(payload);
            return Err(GeneratorError::Provider(message));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&payload)
            .map_err(|e| GeneratorError::Provider(e.to_string()))?;

        let text = parsed
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        Ok(text.trim().to_string())
    }
}
