//! Verdict types - the pipeline's output contract
//!
//! A `VerdictResult` is created fresh per request and owned by the caller.
//! Field names follow the backend's camelCase wire format so a transport
//! response deserializes directly into it.

use serde::{Deserialize, Serialize};

/// Tri-state judgment on a submitted scenario.
///
/// Deserialization rejects anything outside these three values, so a
/// malformed upstream verdict fails the tier instead of leaking through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Approved,
    Caution,
    Rejected,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Approved => "APPROVED",
            Verdict::Caution => "CAUTION",
            Verdict::Rejected => "REJECTED",
        }
    }
}

/// Structured result of one pipeline evaluation.
///
/// `score` is declared an integer with no bounds; the UI renders it as
/// "score/100" but nothing here clamps it. `relevant_principle_ids` should
/// reference known catalog ids but is not validated; rendering treats
/// unknown ids as no match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictResult {
    pub verdict: Verdict,
    pub score: i64,
    pub analysis: String,
    pub relevant_principle_ids: Vec<u32>,
    pub risk_factors: Vec<String>,
}

impl VerdictResult {
    /// The terminal fallback value. Returned unchanged whenever no
    /// transport can produce a real verdict; this tier cannot fail.
    pub fn offline_fallback() -> Self {
        Self {
            verdict: Verdict::Caution,
            score: 65,
            analysis: "KERNEL DIAGNOSTIC COMPLETE.\n\n[OFFLINE MODE ACTIVE]\n\nConnection to main neural frame could not be established. Running local heuristic analysis.\n\nDetected potential fragility in decision structure. The proposed path fits linear progression models which carry hidden risk (See #27). \n\nRecommendation: Proceed only if you can design a safe failure floor (#28).".to_string(),
            relevant_principle_ids: vec![17, 27, 28, 1],
            risk_factors: vec![
                "Offline Heuristics".to_string(),
                "Uncapped Downside Risk".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_roundtrips_uppercase_wire_values() {
        for (v, wire) in [
            (Verdict::Approved, "\"APPROVED\""),
            (Verdict::Caution, "\"CAUTION\""),
            (Verdict::Rejected, "\"REJECTED\""),
        ] {
            assert_eq!(serde_json::to_string(&v).unwrap(), wire);
            let parsed: Verdict = serde_json::from_str(wire).unwrap();
            assert_eq!(parsed, v);
        }
    }

    #[test]
    fn verdict_rejects_values_outside_the_enum() {
        assert!(serde_json::from_str::<Verdict>("\"MAYBE\"").is_err());
        assert!(serde_json::from_str::<Verdict>("\"approved\"").is_err());
    }

    #[test]
    fn result_parses_camel_case_wire_format() {
        let wire = r#"{
            "verdict": "APPROVED",
            "score": 88,
            "analysis": "Aligned with asymmetric upside.",
            "relevantPrincipleIds": [11, 28],
            "riskFactors": []
        }"#;
        let result: VerdictResult = serde_json::from_str(wire).unwrap();
        assert_eq!(result.verdict, Verdict::Approved);
        assert_eq!(result.score, 88);
        assert_eq!(result.relevant_principle_ids, vec![11, 28]);
        assert!(result.risk_factors.is_empty());
    }

    #[test]
    fn result_requires_all_fields() {
        // Missing riskFactors must fail, matching the schema's required set.
        let wire = r#"{
            "verdict": "CAUTION",
            "score": 50,
            "analysis": "x",
            "relevantPrincipleIds": []
        }"#;
        assert!(serde_json::from_str::<VerdictResult>(wire).is_err());
    }

    #[test]
    fn offline_fallback_is_the_fixed_canned_value() {
        let mock = VerdictResult::offline_fallback();
        assert_eq!(mock.verdict, Verdict::Caution);
        assert_eq!(mock.score, 65);
        assert_eq!(mock.relevant_principle_ids, vec![17, 27, 28, 1]);
        assert_eq!(
            mock.risk_factors,
            vec!["Offline Heuristics", "Uncapped Downside Risk"]
        );
        assert!(mock.analysis.contains("[OFFLINE MODE ACTIVE]"));
        // Stable across calls: callers may compare results for equality.
        assert_eq!(mock, VerdictResult::offline_fallback());
    }
}
