//! Verdict transports
//!
//! Each transport is one tier of the request pipeline: a single attempt
//! at turning a scenario into a `VerdictResult`. The pipeline iterates an
//! ordered list of these, so tiers can be added, reordered, and tested in
//! isolation. Fake transports with scripted outcomes ship here for tests.

use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::config::ZenithConfig;
use crate::prompt;
use crate::verdict::VerdictResult;

/// Transport-tier errors. Every variant routes the pipeline to the next
/// tier; none of them escape `evaluate`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    #[error("Backend returned empty response")]
    EmptyResponse,

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),
}

/// One tier of the fallback sequence.
pub trait VerdictTransport: Send + Sync {
    /// Attempt the scenario exactly once. No internal retries.
    fn attempt(&self, scenario: &str) -> Result<VerdictResult, TransportError>;

    /// Short name for tier-transition diagnostics.
    fn name(&self) -> &'static str;
}

// Wire types for the structured `generateContent` request body.

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn for_scenario(scenario: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: scenario.to_string(),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: prompt::system_instruction(),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: prompt::response_schema(),
            },
        }
    }
}

fn map_send_error(e: reqwest::Error, timeout_secs: u64) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(timeout_secs)
    } else {
        TransportError::Http(format!("Request failed: {}", e))
    }
}

/// Pull the result document out of a `generateContent` response envelope
/// and parse it as a `VerdictResult`. Missing text or a malformed document
/// is a protocol failure for the tier.
fn parse_envelope(envelope: serde_json::Value) -> Result<VerdictResult, TransportError> {
    let text = envelope
        .get("candidates")
        .and_then(|v| v.get(0))
        .and_then(|v| v.get("content"))
        .and_then(|v| v.get("parts"))
        .and_then(|v| v.get(0))
        .and_then(|v| v.get("text"))
        .and_then(|v| v.as_str())
        .ok_or(TransportError::EmptyResponse)?;

    serde_json::from_str(text)
        .map_err(|e| TransportError::InvalidJson(format!("result document malformed: {}", e)))
}

/// Primary tier: structured client call with the credential carried in
/// the `x-goog-api-key` header and a typed request body.
pub struct SdkTransport {
    url: String,
    api_key: String,
    timeout_secs: u64,
    client: reqwest::blocking::Client,
}

impl SdkTransport {
    pub fn new(config: &ZenithConfig, api_key: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            url: format!(
                "{}/v1beta/models/{}:generateContent",
                config.endpoint, config.model
            ),
            api_key: api_key.to_string(),
            timeout_secs: config.timeout_secs,
            client,
        })
    }
}

impl VerdictTransport for SdkTransport {
    fn attempt(&self, scenario: &str) -> Result<VerdictResult, TransportError> {
        let body = GenerateContentRequest::for_scenario(scenario);

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| map_send_error(e, self.timeout_secs))?;

        if !response.status().is_success() {
            return Err(TransportError::Http(format!(
                "HTTP {} from backend",
                response.status()
            )));
        }

        let envelope: serde_json::Value = response
            .json()
            .map_err(|e| TransportError::InvalidJson(format!("Failed to parse response: {}", e)))?;

        parse_envelope(envelope)
    }

    fn name(&self) -> &'static str {
        "sdk"
    }
}

/// Secondary tier: raw REST POST against the same public endpoint with a
/// hand-built payload and the credential as a query parameter. Zero
/// shared machinery with the primary beyond the instruction and schema,
/// so it survives drift in the structured client path.
pub struct RestTransport {
    url: String,
    timeout_secs: u64,
    client: reqwest::blocking::Client,
}

impl RestTransport {
    pub fn new(config: &ZenithConfig, api_key: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            url: format!(
                "{}/v1beta/models/{}:generateContent?key={}",
                config.endpoint, config.model, api_key
            ),
            timeout_secs: config.timeout_secs,
            client,
        })
    }
}

impl VerdictTransport for RestTransport {
    fn attempt(&self, scenario: &str) -> Result<VerdictResult, TransportError> {
        let payload = serde_json::json!({
            "contents": [{
                "parts": [{ "text": scenario }]
            }],
            "systemInstruction": {
                "parts": [{ "text": prompt::system_instruction() }]
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": prompt::response_schema()
            }
        });

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .map_err(|e| map_send_error(e, self.timeout_secs))?;

        if !response.status().is_success() {
            return Err(TransportError::Http(format!(
                "HTTP {} from backend",
                response.status()
            )));
        }

        let envelope: serde_json::Value = response
            .json()
            .map_err(|e| TransportError::InvalidJson(format!("Failed to parse response: {}", e)))?;

        parse_envelope(envelope)
    }

    fn name(&self) -> &'static str {
        "rest"
    }
}

/// Scripted transport for tests: returns pre-defined outcomes in order
/// and counts attempts, so fallback behavior can be asserted without a
/// network.
pub struct FakeTransport {
    name: &'static str,
    responses: std::sync::Mutex<Vec<Result<VerdictResult, TransportError>>>,
    attempts: std::sync::Mutex<usize>,
}

impl FakeTransport {
    pub fn new(
        name: &'static str,
        responses: Vec<Result<VerdictResult, TransportError>>,
    ) -> Self {
        Self {
            name,
            responses: std::sync::Mutex::new(responses),
            attempts: std::sync::Mutex::new(0),
        }
    }

    /// A transport that always succeeds with the given result.
    pub fn always_ok(name: &'static str, result: VerdictResult) -> Self {
        Self::new(name, vec![Ok(result)])
    }

    /// A transport that always fails with the given error.
    pub fn always_err(name: &'static str, error: TransportError) -> Self {
        Self::new(name, vec![Err(error)])
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl VerdictTransport for FakeTransport {
    fn attempt(&self, _scenario: &str) -> Result<VerdictResult, TransportError> {
        let mut attempts = self.attempts.lock().unwrap();
        *attempts += 1;

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(TransportError::EmptyResponse);
        }
        if responses.len() == 1 {
            // Keep repeating the final scripted outcome.
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
