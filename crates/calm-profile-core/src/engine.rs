use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;

use crate::archetype::{classify, Archetype, ArchetypeMix};
use crate::axes::{aggregate, AxisScores, ResponseSet};
use crate::content::{bundle_for, tool_stack_for, Platform};
use crate::metrics::{derive_metrics, CostMetrics, TeamSize};
use crate::overhead::overhead_index;

/// Organizational context submitted alongside the answers. Every field is
/// optional; absence only changes defaults, never the outcome's validity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    pub team_size: Option<TeamSize>,
    pub platform: Option<Platform>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchetypeResult {
    pub primary: Archetype,
    pub mix: ArchetypeMix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub overhead_index: u8,
    pub axes: AxisScores,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub strengths: Vec<&'static str>,
    pub quick_wins: Vec<&'static str>,
    pub tool_stack: Vec<&'static str>,
}

/// The complete scoring outcome for one submission. Created once per call
/// and owned by the caller; the engine keeps nothing between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub assessment_id: String,
    pub archetype: ArchetypeResult,
    pub scores: ScoreBreakdown,
    pub metrics: CostMetrics,
    pub recommendations: Recommendations,
    pub tagline: &'static str,
}

/// Score one submission end to end.
///
/// Total over its input domain: missing answers score neutrally and
/// missing context falls back to a solo team on the default tool stack.
/// Apart from the generated assessment id the output is a pure function
/// of the inputs.
pub fn score(responses: &ResponseSet, context: Context) -> AssessmentResult {
    let axes = aggregate(responses);
    let overhead = overhead_index(axes);
    let classification = classify(axes);
    let metrics = derive_metrics(overhead, context.team_size);
    let bundle = bundle_for(classification.primary);

    AssessmentResult {
        assessment_id: new_assessment_id(),
        archetype: ArchetypeResult {
            primary: classification.primary,
            mix: classification.mix,
        },
        scores: ScoreBreakdown {
            overhead_index: overhead,
            axes,
        },
        metrics,
        recommendations: Recommendations {
            strengths: bundle.strengths.to_vec(),
            quick_wins: bundle.quick_wins.to_vec(),
            tool_stack: tool_stack_for(classification.primary, context.platform).to_vec(),
        },
        tagline: bundle.tagline,
    }
}

/// Short `cp_`-prefixed token. Uniqueness is advisory; callers own
/// persistence and any stronger keying.
fn new_assessment_id() -> String {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(|byte| char::from(byte).to_ascii_lowercase())
        .collect();
    format!("cp_{token}")
}
