//! Analysis Client — the single point of entry for all Gemini API calls.
//!
//! One request yields exactly one structured reply: no streaming, no caching,
//! no automatic retry. Failures are classified into `AnalysisError` and
//! surfaced unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::analysis::request::{AnalysisRequest, RequestPart};
use crate::analysis::result::AnalysisResult;
use crate::analysis::schema::response_schema;
use crate::errors::AnalysisError;

/// The model used for all analysis calls.
/// Intentionally hardcoded — the reply contract is tuned to it.
pub const MODEL: &str = "gemini-3-flash-preview";

/// Production endpoint; override with GEMINI_API_URL for a local stub.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// The first candidate's first text part — the structured reply body.
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

/// The single Gemini client used by the analyze endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url.into(),
        }
    }

    /// Issues exactly one generateContent call and validates the reply.
    ///
    /// The credential precondition is checked before anything touches the
    /// network — a missing key never produces an outbound request.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AnalysisError::MissingCredential)?;

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: request.parts,
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        info!("Dispatching analysis request to {MODEL}");

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, MODEL
            ))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::Service {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the API's own message when the error body parses
            let message = serde_json::from_str::<GoogleError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(AnalysisError::Service {
                status: Some(status.as_u16()),
                message,
            });
        }

        let reply: GenerateContentResponse = response.json().await.map_err(|e| {
            AnalysisError::MalformedResponse(format!("unreadable reply envelope: {e}"))
        })?;

        if let Some(usage) = &reply.usage_metadata {
            debug!(
                "Analysis call succeeded: prompt_tokens={}, reply_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        let text = reply.first_text().ok_or_else(|| {
            AnalysisError::MalformedResponse("reply contained no text part".to_string())
        })?;

        parse_result(text)
    }
}

/// Validates the raw structured-text reply against the result contract in a
/// single pass. A missing or ill-typed field rejects the whole reply — the
/// raw text is never surfaced as valid data.
pub fn parse_result(text: &str) -> Result<AnalysisResult, AnalysisError> {
    let text = strip_json_fences(text);
    serde_json::from_str(text).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
}

/// Strips ```json ... ``` or ``` ... ``` fences in case the model wraps its
/// reply despite the JSON response mime type.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(inner) => inner
            .trim_start()
            .strip_suffix("```")
            .map(str::trim)
            .unwrap_or_else(|| inner.trim_start()),
        None => text,
    }
}
