//! Zenith configuration
//!
//! Configuration lives in `<config dir>/zenith/config.toml` with
//! environment overrides for the credential. The credential is injected
//! into the pipeline at construction time; nothing reads it ad hoc, which
//! keeps the pipeline deterministic under test.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "zenith";
const CONFIG_FILE: &str = "config.toml";

/// Environment variables checked for the credential, in priority order
const KEY_ENV_VARS: &[&str] = &["ZENITH_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZenithConfig {
    /// Opaque backend credential. Absence is a handled state (the
    /// pipeline degrades to its offline fallback), not an error.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Backend base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Language model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Image model identifier for share-card generation
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// HTTP client timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Simulated latency before returning the offline fallback when no
    /// credential is configured. Keeps perceived latency consistent with
    /// a real run; tests set this to zero.
    #[serde(default = "default_mock_latency_ms")]
    pub mock_latency_ms: u64,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "imagen-3.0-generate-002".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_mock_latency_ms() -> u64 {
    1500
}

impl Default for ZenithConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            model: default_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout_secs(),
            mock_latency_ms: default_mock_latency_ms(),
        }
    }
}

impl ZenithConfig {
    /// Load from the config file (if present), then apply environment
    /// overrides. Missing file means defaults; a malformed file is an
    /// error rather than a silent fallback.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };

        for var in KEY_ENV_VARS {
            if let Ok(key) = std::env::var(var) {
                config.api_key = Some(key);
                break;
            }
        }

        Ok(config)
    }

    /// Parse one specific config file.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("invalid config at {}: {}", path.display(), e))
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// The usable credential, if one is configured. Empty/whitespace
    /// values and the literal build-injection placeholder "undefined"
    /// count as absent.
    pub fn credential(&self) -> Option<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some("") | Some("undefined") | None => None,
            Some(key) => Some(key),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_offline_safe() {
        let config = ZenithConfig::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_credential());
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.mock_latency_ms, 1500);
    }

    #[test]
    fn placeholder_and_blank_keys_count_as_absent() {
        for bad in [None, Some(""), Some("   "), Some("undefined")] {
            let config = ZenithConfig {
                api_key: bad.map(str::to_string),
                ..Default::default()
            };
            assert!(!config.has_credential(), "key {:?} should be absent", bad);
        }
    }

    #[test]
    fn real_key_is_detected_and_trimmed() {
        let config = ZenithConfig {
            api_key: Some("  zk-test-123  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.credential(), Some("zk-test-123"));
    }

    #[test]
    fn partial_config_file_fills_in_defaults() {
        let config: ZenithConfig = toml::from_str("api_key = \"zk-abc\"").unwrap();
        assert_eq!(config.credential(), Some("zk-abc"));
        assert_eq!(config.endpoint, default_endpoint());
        assert_eq!(config.image_model, default_image_model());
    }

    #[test]
    fn config_file_on_disk_loads_and_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "api_key = \"zk-disk\"\nmodel = \"gemini-2.5-pro\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = ZenithConfig::load_from(&path).unwrap();
        assert_eq!(config.credential(), Some("zk-disk"));
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.mock_latency_ms, default_mock_latency_ms());
    }

    #[test]
    fn malformed_config_file_is_an_error_not_a_silent_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = \"not a number\"").unwrap();
        assert!(ZenithConfig::load_from(&path).is_err());
    }
}
