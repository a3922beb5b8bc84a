use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::application::ModelClient;
use crate::domain::{DomainError, GenerationRequest};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODELS_PATH: &str = "/v1beta/models";
/// Flash-tier model: fast and cheap enough for interactive report generation.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const RESPONSE_MIME_TYPE: &str = "application/json";
/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "API_KEY";

/// Gemini generateContent request payload.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(serde::Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a Value>,
    temperature: f32,
}

/// Minimal subset of the generateContent response we care about.
#[derive(Deserialize)]
struct ApiResponse {
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
    #[serde(default)]
    text: String,
}

/// HTTP client for the Gemini `generateContent` API.
///
/// Implements [`ModelClient`] so the analyze use case stays decoupled from
/// transport and serialization details.
///
/// **API key**: resolved per request, immediately before the network call:
/// an explicit override set via [`with_api_key`](Self::with_api_key) if
/// present, otherwise the `API_KEY` environment variable read fresh on every
/// call. Nothing is read at construction time and nothing is cached, so a
/// hosting platform may inject the credential after the process starts. A
/// missing or empty key fails the request with a configuration error before
/// any I/O happens.
///
/// The underlying HTTP client carries a 60-second request timeout; the
/// request contract itself has no cancellation or retry semantics.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Pin the credential instead of reading `API_KEY` from the environment.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the endpoint, e.g. to target a Gemini-compatible proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Resolve the credential for this request.
    ///
    /// Explicit override wins; otherwise the environment is consulted at
    /// call time. Empty values count as missing, matching the hosting
    /// platforms that define the variable but leave it blank.
    fn resolve_api_key(&self) -> Result<String, DomainError> {
        let key = match &self.api_key {
            Some(key) => Some(key.clone()),
            None => std::env::var(API_KEY_VAR).ok(),
        };

        key.filter(|k| !k.is_empty()).ok_or_else(|| {
            DomainError::configuration(format!(
                "{API_KEY_VAR} is not set. Register the API key as the '{API_KEY_VAR}' \
                 environment variable of the hosting environment and rerun."
            ))
        })
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            MODELS_PATH,
            self.model
        )
    }

    /// Concatenate the text parts of the first candidate.
    fn extract_text(response: ApiResponse) -> String {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError> {
        // Credential check comes first: a misconfigured deployment must fail
        // before any network I/O is attempted.
        let api_key = self.resolve_api_key()?;

        let payload = ApiRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: request.system_instruction(),
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: request.user_text(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE,
                response_schema: request.response_schema(),
                temperature: request.temperature(),
            },
        };

        let response = self
            .client
            .post(self.endpoint_url())
            .header("x-goog-api-key", &api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("GeminiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(DomainError::provider(format!(
                "GeminiClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::provider(format!("GeminiClient: failed to parse response: {e}"))
        })?;

        Ok(Self::extract_text(api_response))
    }
}
