//! Share-card image acquisition
//!
//! Sub-step A of the image pipeline: obtain a visual for a principle,
//! either freshly generated by the image backend or drawn at random from
//! the curated fallback pool. The result is never absent; generation
//! failure of any kind (missing credential included) degrades to the
//! pool, flagged so the UI can label it as archive visuals.

use std::time::Duration;

use anyhow::Result;
use base64::Engine;
use rand::Rng;
use tracing::warn;

use crate::config::ZenithConfig;
use crate::principles::PrincipleItem;

/// Curated fallbacks matching the card's dark/abstract aesthetic.
pub const FALLBACK_POOL: [&str; 7] = [
    "https://images.unsplash.com/photo-1494438639946-1ebd1d20bf85?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1506259091721-347f798196d4?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1478760329108-5c3ed9d495a0?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1550684848-fac1c5b4e853?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1504198266287-1659872e6590?q=80&w=1000&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1614850523459-c2f4c699c52e?q=80&w=1000&auto=format&fit=crop",
];

/// Uniform pool pick as a pure function of the random source, so tests
/// can inject a deterministic generator and assert coverage.
pub fn pick_fallback<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FALLBACK_POOL[rng.gen_range(0..FALLBACK_POOL.len())]
}

/// Fixed prompt template: one visual style, one accent color, no text.
pub fn image_prompt(principle: &PrincipleItem) -> String {
    format!(
        "Abstract dark industrial artwork representing the life principle \"{}\": {}. \
         Minimalist geometry, matte black surfaces, a single amber accent light, \
         cinematic shadows. Strictly no text, no letters, no numbers, no watermarks.",
        principle.title, principle.content
    )
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageError {
    #[error("No credential configured for image generation")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid image payload: {0}")]
    InvalidPayload(String),
}

/// Narrow capability: synthesize one square illustrative image.
pub trait ImageGenerator: Send + Sync {
    fn generate(&self, principle: &PrincipleItem) -> Result<Vec<u8>, ImageError>;
}

/// Narrow capability: fetch raw bytes for a pool URL.
pub trait PoolFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError>;
}

/// The resolved visual plus its provenance flag for UI labeling.
#[derive(Debug, Clone)]
pub struct CardImage {
    pub bytes: Vec<u8>,
    pub from_fallback_pool: bool,
}

/// Real generator against the image backend's `:predict` endpoint.
pub struct BackendImageGenerator {
    url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl BackendImageGenerator {
    pub fn new(config: &ZenithConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            url: format!(
                "{}/v1beta/models/{}:predict",
                config.endpoint, config.image_model
            ),
            api_key: config.credential().map(str::to_string),
            client,
        })
    }
}

impl ImageGenerator for BackendImageGenerator {
    fn generate(&self, principle: &PrincipleItem) -> Result<Vec<u8>, ImageError> {
        let api_key = self.api_key.as_deref().ok_or(ImageError::MissingCredential)?;

        let payload = serde_json::json!({
            "instances": [{ "prompt": image_prompt(principle) }],
            "parameters": { "sampleCount": 1, "aspectRatio": "1:1" }
        });

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .map_err(|e| ImageError::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ImageError::Http(format!(
                "HTTP {} from image backend",
                response.status()
            )));
        }

        let envelope: serde_json::Value = response
            .json()
            .map_err(|e| ImageError::InvalidPayload(format!("Failed to parse response: {}", e)))?;

        let encoded = envelope
            .get("predictions")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("bytesBase64Encoded"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| ImageError::InvalidPayload("no image in response".to_string()))?;

        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| ImageError::InvalidPayload(format!("base64 decode failed: {}", e)))
    }
}

/// Plain HTTP fetcher for pool URLs.
pub struct HttpPoolFetcher {
    client: reqwest::blocking::Client,
}

impl HttpPoolFetcher {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;
        Ok(Self { client })
    }
}

impl PoolFetcher for HttpPoolFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ImageError::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ImageError::Http(format!(
                "HTTP {} fetching pool image",
                response.status()
            )));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| ImageError::Http(format!("Failed to read body: {}", e)))
    }
}

/// Resolve the card visual: generation first, pool on any failure.
/// Only an unfetchable pool image can make this error.
pub fn resolve_card_image<R: Rng + ?Sized>(
    generator: &dyn ImageGenerator,
    fetcher: &dyn PoolFetcher,
    principle: &PrincipleItem,
    rng: &mut R,
) -> Result<CardImage, ImageError> {
    match generator.generate(principle) {
        Ok(bytes) => Ok(CardImage {
            bytes,
            from_fallback_pool: false,
        }),
        Err(e) => {
            warn!("image generation failed, using archive visuals: {}", e);
            let url = pick_fallback(rng);
            let bytes = fetcher.fetch(url)?;
            Ok(CardImage {
                bytes,
                from_fallback_pool: true,
            })
        }
    }
}
