//! Request pipeline - tiered verdict evaluation
//!
//! `evaluate` always resolves to a `VerdictResult`; failures degrade
//! through the transport tiers and terminate at the fixed offline
//! fallback. The caller never sees an error. Tier transitions are logged
//! as diagnostics only; they are not part of the contract.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::ZenithConfig;
use crate::transport::{RestTransport, SdkTransport, VerdictTransport};
use crate::verdict::VerdictResult;

pub struct ZenithPipeline {
    transports: Vec<Box<dyn VerdictTransport>>,
    credential_present: bool,
    mock_latency: Duration,
}

impl ZenithPipeline {
    /// Build the standard two-tier pipeline from configuration. Without a
    /// credential no transports are constructed at all; evaluation goes
    /// straight to the offline fallback.
    pub fn new(config: &ZenithConfig) -> Result<Self> {
        let mock_latency = Duration::from_millis(config.mock_latency_ms);

        let transports: Vec<Box<dyn VerdictTransport>> = match config.credential() {
            Some(key) => vec![
                Box::new(SdkTransport::new(config, key)?),
                Box::new(RestTransport::new(config, key)?),
            ],
            None => Vec::new(),
        };

        Ok(Self {
            credential_present: config.has_credential(),
            transports,
            mock_latency,
        })
    }

    /// Assemble a pipeline from explicit tiers. Used by tests to inject
    /// failures at the transport boundary.
    pub fn with_transports(
        transports: Vec<Box<dyn VerdictTransport>>,
        mock_latency: Duration,
    ) -> Self {
        Self {
            credential_present: !transports.is_empty(),
            transports,
            mock_latency,
        }
    }

    /// Evaluate a free-text scenario. Never fails.
    ///
    /// Tier order: credential gate, then each transport exactly once in
    /// sequence, then the terminal fallback.
    pub fn evaluate(&self, scenario: &str) -> VerdictResult {
        if !self.credential_present {
            debug!("no credential configured, running offline fallback");
            // Deliberate fixed wait so the offline path feels like a real
            // run instead of an instant canned answer.
            thread::sleep(self.mock_latency);
            return VerdictResult::offline_fallback();
        }

        for transport in &self.transports {
            match transport.attempt(scenario) {
                Ok(result) => {
                    info!(tier = transport.name(), "verdict obtained");
                    return result;
                }
                Err(e) => {
                    warn!(tier = transport.name(), "tier failed: {}", e);
                }
            }
        }

        warn!("all transports failed, returning offline fallback");
        VerdictResult::offline_fallback()
    }
}
