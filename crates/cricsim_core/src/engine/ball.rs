//! Single-delivery simulation.
//!
//! [`simulate_ball`] draws one outcome from the probability model. Check
//! order is fixed: extras first (mutually exclusive with everything else),
//! then dismissal, then the run draw. Any `Rng` works; the match engine
//! feeds its seeded ChaCha stream through here.

use super::probability::{dismissal_probability, scoring_distribution};
use crate::models::PlayerRatings;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Chance that a delivery is an extra (wide or no-ball).
pub const EXTRA_PROBABILITY: f64 = 0.05;

/// Share of extras that are wides (the rest are no-balls).
pub const WIDE_SHARE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    Wide,
    NoBall,
}

/// Outcome of one delivery. Exactly one variant per ball.
///
/// Extras never consume a legal ball of the over and never dismiss the
/// batter; both properties are enforced by construction here and honored
/// by the innings engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BallOutcome {
    Dot,
    Runs { runs: u8 },
    Wicket,
    Extra { kind: ExtraKind, runs: u8 },
}

impl BallOutcome {
    /// Runs added to the team score by this delivery.
    pub fn runs(&self) -> u32 {
        match self {
            BallOutcome::Dot | BallOutcome::Wicket => 0,
            BallOutcome::Runs { runs } => *runs as u32,
            BallOutcome::Extra { runs, .. } => *runs as u32,
        }
    }

    /// Whether this delivery counts toward the over's six balls.
    pub fn is_legal(&self) -> bool {
        !matches!(self, BallOutcome::Extra { .. })
    }

    pub fn is_wicket(&self) -> bool {
        matches!(self, BallOutcome::Wicket)
    }
}

impl std::fmt::Display for BallOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BallOutcome::Dot => write!(f, "no run"),
            BallOutcome::Runs { runs } => write!(f, "{} run(s)", runs),
            BallOutcome::Wicket => write!(f, "WICKET!"),
            BallOutcome::Extra { kind: ExtraKind::Wide, runs } => write!(f, "wide, {} run(s)", runs),
            BallOutcome::Extra { kind: ExtraKind::NoBall, runs } => {
                write!(f, "no-ball, {} run(s)", runs)
            }
        }
    }
}

/// Simulate one delivery from `bowler` to `batter`.
pub fn simulate_ball<R: Rng>(
    batter: &PlayerRatings,
    bowler: &PlayerRatings,
    rng: &mut R,
) -> BallOutcome {
    // Extras are checked before anything else and end the draw.
    if rng.gen::<f64>() < EXTRA_PROBABILITY {
        let kind = if rng.gen::<f64>() < WIDE_SHARE {
            ExtraKind::Wide
        } else {
            ExtraKind::NoBall
        };
        let runs = match kind {
            ExtraKind::Wide => 1,
            ExtraKind::NoBall => 1 + rng.gen_range(0..=1u8),
        };
        return BallOutcome::Extra { kind, runs };
    }

    if rng.gen::<f64>() < dismissal_probability(batter, Some(bowler)) {
        return BallOutcome::Wicket;
    }

    let dist = scoring_distribution(batter, Some(bowler));
    let draw = rng.gen::<f64>();
    let mut cumulative = 0.0;
    for (runs, prob) in dist.pairs() {
        cumulative += prob;
        if draw < cumulative {
            return if runs == 0 {
                BallOutcome::Dot
            } else {
                BallOutcome::Runs { runs }
            };
        }
    }

    // Unreachable barring floating-point edge cases in the cumulative sum.
    BallOutcome::Dot
}

// ============================================================================
// Tests
// ============================================================================
