//! Probability calculation utilities for ball simulation.
//!
//! All functions are pure - they take rating profiles as input and return
//! probabilities. This allows easy unit testing without needing a full
//! MatchEngine. Malformed inputs (zero or negative averages) are defused by
//! the clamps below; nothing here can fail.

use crate::models::PlayerRatings;

/// Base per-ball dismissal rate before batter/bowler adjustment.
pub const BASE_DISMISSAL_RATE: f64 = 0.025;

/// Dismissal probability is clamped to this range.
pub const DISMISSAL_MIN: f64 = 0.005;
pub const DISMISSAL_MAX: f64 = 0.08;

// ============================================================================
// Dismissal Probability
// ============================================================================

/// Per-ball dismissal probability for a batter facing an optional bowler.
///
/// A higher batting average lowers the chance, a lower bowling average
/// raises it. Result is always within [DISMISSAL_MIN, DISMISSAL_MAX].
pub fn dismissal_probability(batter: &PlayerRatings, bowler: Option<&PlayerRatings>) -> f64 {
    let batting_factor = 37.5 / batter.batting_average.max(15.0);

    let bowler_factor = match bowler {
        Some(b) if b.bowling_average > 0.0 => 30.0 / b.bowling_average.max(20.0),
        _ => 1.0,
    };

    (BASE_DISMISSAL_RATE * batting_factor * bowler_factor).clamp(DISMISSAL_MIN, DISMISSAL_MAX)
}

// ============================================================================
// Scoring Distribution
// ============================================================================

/// Normalized probability of each run outcome off the bat.
///
/// Covers run values {0, 1, 2, 3, 4, 6}; a 5 is never modeled. Components
/// always sum to 1.0 (up to floating-point rounding).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringDistribution {
    pub dot: f64,
    pub single: f64,
    pub two: f64,
    pub three: f64,
    pub four: f64,
    pub six: f64,
}

impl ScoringDistribution {
    /// (run value, probability) pairs in ascending run order.
    ///
    /// Ascending order is a deliberate tie-break for the cumulative draw:
    /// if rounding leaves a residual gap it biases toward the dot ball,
    /// never toward a boundary.
    pub fn pairs(&self) -> [(u8, f64); 6] {
        [
            (0, self.dot),
            (1, self.single),
            (2, self.two),
            (3, self.three),
            (4, self.four),
            (6, self.six),
        ]
    }

    pub fn total(&self) -> f64 {
        self.dot + self.single + self.two + self.three + self.four + self.six
    }
}

/// Run-outcome distribution for a batter facing an optional bowler.
///
/// The batter's strike rate (scaled by the bowler's economy, when rated)
/// sets an aggression level that shifts mass from dot balls to boundaries.
/// Singles, twos and threes are fixed running outcomes.
pub fn scoring_distribution(
    batter: &PlayerRatings,
    bowler: Option<&PlayerRatings>,
) -> ScoringDistribution {
    let economy_factor = match bowler {
        Some(b) if b.economy_rate > 0.0 => b.economy_rate / 6.0,
        _ => 1.0,
    };
    let aggression = (batter.strike_rate / 100.0) * economy_factor;

    let raw = ScoringDistribution {
        dot: (0.55 - 0.15 * aggression).max(0.35),
        single: 0.30,
        two: 0.10,
        three: 0.02,
        four: (0.05 + 0.08 * aggression).min(0.15),
        six: (0.02 + 0.06 * aggression).min(0.10),
    };

    let total = raw.total();
    ScoringDistribution {
        dot: raw.dot / total,
        single: raw.single / total,
        two: raw.two / total,
        three: raw.three / total,
        four: raw.four / total,
        six: raw.six / total,
    }
}

// ============================================================================
// Tests
// ============================================================================
