//! Pipeline contract tests through the public API
//!
//! The "always succeeds" behavior is contractual: callers must never see
//! an error from `evaluate`, and every degraded path must land on the
//! fixed offline value. Failures are injected at the transport boundary.

use std::time::{Duration, Instant};

use zenith_common::config::ZenithConfig;
use zenith_common::pipeline::ZenithPipeline;
use zenith_common::transport::{FakeTransport, TransportError, VerdictTransport};
use zenith_common::verdict::{Verdict, VerdictResult};

fn zero_latency_offline_config(api_key: Option<&str>) -> ZenithConfig {
    ZenithConfig {
        api_key: api_key.map(str::to_string),
        mock_latency_ms: 0,
        ..Default::default()
    }
}

#[test]
fn absent_credential_always_yields_the_unchanged_mock() {
    for key in [None, Some(""), Some("undefined")] {
        let pipeline = ZenithPipeline::new(&zero_latency_offline_config(key)).unwrap();
        let result = pipeline.evaluate("Should I quit my stable job to start a company?");
        assert_eq!(result, VerdictResult::offline_fallback());
    }
}

#[test]
fn offline_path_waits_the_configured_simulated_latency() {
    let config = ZenithConfig {
        api_key: None,
        mock_latency_ms: 80,
        ..Default::default()
    };
    let pipeline = ZenithPipeline::new(&config).unwrap();

    let start = Instant::now();
    let _ = pipeline.evaluate("scenario");
    assert!(start.elapsed() >= Duration::from_millis(80));
}

#[test]
fn secondary_runs_exactly_once_after_primary_failure() {
    // FakeTransport counts attempts; wrap in a local newtype to keep a
    // handle after moving tiers into the pipeline.
    use std::sync::Arc;

    struct Tier(Arc<FakeTransport>);
    impl VerdictTransport for Tier {
        fn attempt(&self, scenario: &str) -> Result<VerdictResult, TransportError> {
            self.0.attempt(scenario)
        }
        fn name(&self) -> &'static str {
            self.0.name()
        }
    }

    let primary = Arc::new(FakeTransport::always_err(
        "sdk",
        TransportError::Http("HTTP 500 from backend".into()),
    ));
    let secondary = Arc::new(FakeTransport::always_err(
        "rest",
        TransportError::EmptyResponse,
    ));

    let pipeline = ZenithPipeline::with_transports(
        vec![
            Box::new(Tier(primary.clone())),
            Box::new(Tier(secondary.clone())),
        ],
        Duration::ZERO,
    );

    let result = pipeline.evaluate("Should I quit my stable job to start a company?");

    assert_eq!(primary.attempts(), 1);
    assert_eq!(secondary.attempts(), 1);
    assert_eq!(result, VerdictResult::offline_fallback());
    assert_eq!(result.verdict, Verdict::Caution);
    assert_eq!(result.score, 65);
    assert_eq!(result.relevant_principle_ids, vec![17, 27, 28, 1]);
}

#[test]
fn successful_tier_result_passes_through_untouched() {
    let upstream = VerdictResult {
        verdict: Verdict::Rejected,
        score: 130, // out of range on purpose: the contract does not clamp
        analysis: "Irreversible downside detected.".to_string(),
        relevant_principle_ids: vec![34, 9999], // unknown id tolerated
        risk_factors: vec!["Reputation exposure".to_string()],
    };

    let pipeline = ZenithPipeline::with_transports(
        vec![Box::new(FakeTransport::always_ok("sdk", upstream.clone()))],
        Duration::ZERO,
    );

    assert_eq!(pipeline.evaluate("scenario"), upstream);
}
