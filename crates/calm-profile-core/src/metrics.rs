use serde::Serialize;

/// Weekly friction floor. Even the lowest overhead profile loses a few
/// hours to coordination baseline, so the estimate never drops below this.
pub const MIN_HOURS_LOST_PER_WEEK: u64 = 3;

pub const WEEKS_PER_YEAR: u64 = 52;

/// Fixed blended hourly rate in USD for the annual cost estimate.
pub const BLENDED_HOURLY_RATE_USD: u64 = 130;

/// Categorical team-size bands captured by the context form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSize {
    Solo,
    TwoToFive,
    SixToFifteen,
    SixteenToFifty,
    FiftyPlus,
}

impl TeamSize {
    /// Lenient parse of the wire value; unknown bands read as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "solo" => Some(Self::Solo),
            "2-5" => Some(Self::TwoToFive),
            "6-15" => Some(Self::SixToFifteen),
            "16-50" => Some(Self::SixteenToFifty),
            "50+" => Some(Self::FiftyPlus),
            _ => None,
        }
    }

    /// Headcount multiplier approximating the band, not a literal count.
    pub fn factor(self) -> u64 {
        match self {
            Self::Solo => 1,
            Self::TwoToFive => 4,
            Self::SixToFifteen => 10,
            Self::SixteenToFifty => 25,
            Self::FiftyPlus => 55,
        }
    }
}

/// Monetized time-loss estimates for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostMetrics {
    pub hours_lost_per_week: u64,
    pub annual_cost: u64,
}

/// Convert the overhead index and team context into time and cost
/// estimates. One index point costs roughly ten minutes per week; an
/// absent team size scales like a solo operator.
pub fn derive_metrics(overhead_index: u8, team_size: Option<TeamSize>) -> CostMetrics {
    let hours_lost_per_week =
        MIN_HOURS_LOST_PER_WEEK.max((f64::from(overhead_index) / 6.0).round() as u64);
    let team_factor = team_size.map_or(1, TeamSize::factor);
    let annual_cost = hours_lost_per_week * WEEKS_PER_YEAR * BLENDED_HOURLY_RATE_USD * team_factor;

    CostMetrics {
        hours_lost_per_week,
        annual_cost,
    }
}
