use std::collections::HashMap;

use calm_profile_core::engine::AssessmentResult;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Loosely-typed request body as an external HTTP handler receives it.
///
/// `responses` maps stringified question indices to answer strings;
/// `context` also answers to the legacy `meta` name and camelCase field
/// spellings. Unknown fields (hourly rate, meeting load, and whatever else
/// a form variant sends) are tolerated and dropped.
#[derive(Debug, Default, Deserialize)]
pub struct AssessRequest {
    #[serde(default)]
    pub responses: HashMap<String, Value>,
    #[serde(default, alias = "meta")]
    pub context: ContextParams,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContextParams {
    #[serde(default, alias = "teamSize")]
    pub team_size: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

/// Successful scoring envelope: the result record plus a `success` flag.
#[derive(Debug, Serialize)]
pub struct AssessResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: AssessmentResult,
}

impl AssessResponse {
    pub fn new(result: AssessmentResult) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

/// Generic failure envelope. Deliberately carries no detail: a failure
/// here means the request body itself was malformed, and the upstream
/// handler logs the cause without echoing submitted data back.
pub fn failure_body() -> Value {
    json!({
        "success": false,
        "error": "failed to score assessment"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_accepts_meta_alias_and_camel_case() {
        let body = json!({
            "responses": {"0": "A"},
            "meta": {"teamSize": "2-5", "platform": "slack"}
        });
        let request: AssessRequest =
            serde_json::from_value(body).unwrap_or_default();
        assert_eq!(request.context.team_size.as_deref(), Some("2-5"));
        assert_eq!(request.context.platform.as_deref(), Some("slack"));
    }

    #[test]
    fn unknown_context_fields_are_dropped() {
        let body = json!({
            "context": {"team_size": "6-15", "hourlyRate": "130", "meetingLoad": "heavy"}
        });
        let request: AssessRequest =
            serde_json::from_value(body).unwrap_or_default();
        assert_eq!(request.context.team_size.as_deref(), Some("6-15"));
        assert_eq!(request.context.platform, None);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let request: AssessRequest =
            serde_json::from_value(json!({})).unwrap_or_default();
        assert!(request.responses.is_empty());
        assert_eq!(request.context.team_size, None);
    }
}
