//! System instruction and response schema for the verdict backend
//!
//! Both transports send the same instruction and schema; only the
//! carrier differs. The instruction interpolates the full catalog so the
//! model audits against the actual 35 principles, and the schema pins the
//! result shape down to the 3-value verdict enum.

use crate::principles::PRINCIPLES;

/// Build the fixed system instruction with the catalog as context.
pub fn system_instruction() -> String {
    let catalog: String = PRINCIPLES
        .iter()
        .map(|p| {
            format!(
                "ID {} ({}): {} - {}",
                p.id,
                p.category.as_str(),
                p.title,
                p.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\nYou are the Zenith Protocol Kernel, an anti-fragile decision support system. \n\
         Your goal is to audit the user's decision against 35 specific Life Principles.\n\n\
         Role: Ruthless, rational, architect-style advisor.\n\
         Tone: Cold, precise, technical, \"Cyberpunk/Industrial\".\n\n\
         Task:\n\
         1. Analyze the user's input (a decision or dilemma).\n\
         2. Check against the 35 Principles (provided in context).\n\
         3. Identify aligned principles (supporting the decision).\n\
         4. Identify violated principles (risks).\n\
         5. Output a structured JSON.\n\n\
         Principles Context:\n{catalog}\n\n\
         Rules:\n\
         - If a decision is \"Hesitant\", apply Principle #17 (Absolute Yes).\n\
         - If a decision has high downside, apply Principle #28 (Lower Bound).\n\
         - If a decision relies on external validation, apply Principle #9 & #35.\n\
         - Output purely valid JSON.\n"
    )
}

/// Response schema sent with every request: all five fields required,
/// verdict constrained to the closed enum. `score` is an unbounded
/// integer by (acknowledged) design.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "verdict": { "type": "STRING", "enum": ["APPROVED", "CAUTION", "REJECTED"] },
            "score": { "type": "INTEGER" },
            "analysis": { "type": "STRING" },
            "relevantPrincipleIds": {
                "type": "ARRAY",
                "items": { "type": "INTEGER" }
            },
            "riskFactors": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["verdict", "score", "analysis", "relevantPrincipleIds", "riskFactors"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_interpolates_every_principle() {
        let instruction = system_instruction();
        for p in PRINCIPLES.iter() {
            assert!(
                instruction.contains(&format!("ID {} ({})", p.id, p.category.as_str())),
                "principle {} missing from instruction",
                p.id
            );
            assert!(instruction.contains(p.title));
        }
    }

    #[test]
    fn schema_requires_all_result_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec!["verdict", "score", "analysis", "relevantPrincipleIds", "riskFactors"]
        );
        let verdicts = &schema["properties"]["verdict"]["enum"];
        assert_eq!(verdicts.as_array().unwrap().len(), 3);
    }
}
