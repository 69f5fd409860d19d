use std::collections::HashMap;

use calm_profile_core::axes::{Answer, ResponseSet};
use calm_profile_core::content::Platform;
use calm_profile_core::engine::{score, Context};
use calm_profile_core::metrics::TeamSize;
use serde_json::Value;
use thiserror::Error;

use crate::protocol::{AssessRequest, AssessResponse, ContextParams};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Score a parsed request.
///
/// Total: unparseable question keys, non-A/B answer values, and unknown
/// context values all read as absent, so any request of the envelope shape
/// scores successfully.
pub fn assess(request: &AssessRequest) -> AssessResponse {
    let responses = parse_responses(&request.responses);
    let context = parse_context(&request.context);
    AssessResponse::new(score(&responses, context))
}

/// Parse and score a raw JSON body.
///
/// The only failure mode is a body that does not match the envelope shape;
/// everything downstream of deserialization is defined away. Callers map
/// the error to [`crate::protocol::failure_body`].
pub fn assess_json(body: &str) -> Result<Value, ApiError> {
    let request: AssessRequest = serde_json::from_str(body)?;
    Ok(serde_json::to_value(assess(&request))?)
}

fn parse_responses(raw: &HashMap<String, Value>) -> ResponseSet {
    raw.iter()
        .filter_map(|(key, value)| {
            let question = key.trim().parse::<usize>().ok()?;
            let answer = value.as_str().and_then(Answer::parse)?;
            Some((question, answer))
        })
        .collect()
}

fn parse_context(params: &ContextParams) -> Context {
    Context {
        team_size: params.team_size.as_deref().and_then(TeamSize::parse),
        platform: params.platform.as_deref().and_then(Platform::parse),
    }
}
