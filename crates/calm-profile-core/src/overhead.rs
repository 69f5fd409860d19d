use crate::axes::{Axis, AxisScores};

/// Contribution of each inverted axis to the overhead index. Low structure
/// and low tempo discipline dominate perceived operational overhead. The
/// weights sum to 1.0, so the index stays in [0, 100] with no clamping.
pub const OVERHEAD_WEIGHTS: [(Axis, f64); 4] = [
    (Axis::Structure, 0.4),
    (Axis::Tempo, 0.3),
    (Axis::Collaboration, 0.2),
    (Axis::Scope, 0.1),
];

/// Composite operational-overhead percentage. Each axis enters as its
/// complement: overhead is framed as the absence of axis strength.
pub fn overhead_index(axes: AxisScores) -> u8 {
    let weighted: f64 = OVERHEAD_WEIGHTS
        .iter()
        .map(|&(axis, weight)| f64::from(axes.inverted(axis)) * weight)
        .sum();
    weighted.round() as u8
}
