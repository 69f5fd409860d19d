use serde::Serialize;

use crate::axes::{Axis, AxisScores};

/// The four behavioral-profile labels a respondent can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Architect,
    Conductor,
    Curator,
    Craftsperson,
}

impl Archetype {
    /// Selection order for the primary archetype. When two archetypes land
    /// on the same mix percentage, the one listed first wins. The ordering
    /// is a deliberate constant of the classifier, not incidental.
    pub const PRIORITY: [Self; 4] = [
        Self::Architect,
        Self::Conductor,
        Self::Curator,
        Self::Craftsperson,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Architect => "architect",
            Self::Conductor => "conductor",
            Self::Curator => "curator",
            Self::Craftsperson => "craftsperson",
        }
    }
}

/// One weighted term of an affinity profile: an axis score, optionally
/// inverted so that weakness on the axis is what counts.
#[derive(Debug, Clone, Copy)]
struct AffinityTerm {
    axis: Axis,
    weight: f64,
    inverted: bool,
}

const fn term(axis: Axis, weight: f64) -> AffinityTerm {
    AffinityTerm {
        axis,
        weight,
        inverted: false,
    }
}

const fn inv(axis: Axis, weight: f64) -> AffinityTerm {
    AffinityTerm {
        axis,
        weight,
        inverted: true,
    }
}

/// Affinity weight vectors. Each row sums to 1.0; the four rows are not
/// normalized against each other — that happens per respondent in
/// `classify`.
const AFFINITY_PROFILES: [(Archetype, [AffinityTerm; 4]); 4] = [
    (
        Archetype::Architect,
        [
            term(Axis::Structure, 0.45),
            term(Axis::Scope, 0.25),
            inv(Axis::Tempo, 0.20),
            inv(Axis::Collaboration, 0.10),
        ],
    ),
    (
        Archetype::Conductor,
        [
            term(Axis::Collaboration, 0.40),
            term(Axis::Tempo, 0.30),
            term(Axis::Structure, 0.20),
            term(Axis::Scope, 0.10),
        ],
    ),
    (
        Archetype::Curator,
        [
            term(Axis::Scope, 0.45),
            inv(Axis::Structure, 0.25),
            inv(Axis::Tempo, 0.20),
            inv(Axis::Collaboration, 0.10),
        ],
    ),
    (
        Archetype::Craftsperson,
        [
            term(Axis::Structure, 0.40),
            inv(Axis::Scope, 0.30),
            inv(Axis::Tempo, 0.20),
            term(Axis::Collaboration, 0.10),
        ],
    ),
];

/// Normalized affinity percentages. Each entry is rounded independently,
/// so the sum can drift from 100 by up to the number of archetypes minus
/// one; the drift is accepted rather than redistributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchetypeMix {
    pub architect: u8,
    pub conductor: u8,
    pub curator: u8,
    pub craftsperson: u8,
}

impl ArchetypeMix {
    pub fn get(self, archetype: Archetype) -> u8 {
        match archetype {
            Archetype::Architect => self.architect,
            Archetype::Conductor => self.conductor,
            Archetype::Curator => self.curator,
            Archetype::Craftsperson => self.craftsperson,
        }
    }

    pub fn total(self) -> u16 {
        u16::from(self.architect)
            + u16::from(self.conductor)
            + u16::from(self.curator)
            + u16::from(self.craftsperson)
    }
}

/// Outcome of classification: the full mix plus the selected primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub primary: Archetype,
    pub mix: ArchetypeMix,
}

fn raw_affinity(axes: AxisScores, archetype: Archetype) -> f64 {
    AFFINITY_PROFILES
        .iter()
        .find(|(candidate, _)| *candidate == archetype)
        .map_or(0.0, |(_, terms)| {
            terms
                .iter()
                .map(|t| {
                    let value = if t.inverted {
                        axes.inverted(t.axis)
                    } else {
                        axes.get(t.axis)
                    };
                    f64::from(value) * t.weight
                })
                .sum()
        })
}

/// Compute archetype affinities from the axis scores, normalize them to a
/// percentage mix, and select the primary.
///
/// The normalization total is strictly positive for any axis scores except
/// the degenerate all-weights-on-zero case, which substitutes 1 to stay
/// total. Ties on the mix resolve by [`Archetype::PRIORITY`].
pub fn classify(axes: AxisScores) -> Classification {
    let total: f64 = Archetype::PRIORITY
        .iter()
        .map(|&archetype| raw_affinity(axes, archetype))
        .sum();
    let total = if total > 0.0 { total } else { 1.0 };

    let pct = |archetype: Archetype| (raw_affinity(axes, archetype) / total * 100.0).round() as u8;
    let mix = ArchetypeMix {
        architect: pct(Archetype::Architect),
        conductor: pct(Archetype::Conductor),
        curator: pct(Archetype::Curator),
        craftsperson: pct(Archetype::Craftsperson),
    };

    let (primary, _) = Archetype::PRIORITY.into_iter().fold(
        (Archetype::Architect, 0u8),
        |(best, best_pct), candidate| {
            let candidate_pct = mix.get(candidate);
            if candidate_pct > best_pct {
                (candidate, candidate_pct)
            } else {
                (best, best_pct)
            }
        },
    );

    Classification { primary, mix }
}
