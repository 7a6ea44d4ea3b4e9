//! Innings aggregate state.
//!
//! One [`InningsState`] is owned and mutated by the innings engine for the
//! duration of an innings, then frozen read-only inside the match result.
//! All per-player figures are keyed by [`PlayerId`]; name resolution is the
//! presentation layer's job.

use super::PlayerId;
use crate::engine::ball::BallOutcome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Balls per over. Extras do not count toward this.
pub const BALLS_PER_OVER: u8 = 6;

/// Wickets that close an innings.
pub const WICKETS_PER_INNINGS: u8 = 10;

/// Runs and balls faced for one batter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingCard {
    pub runs: u32,
    pub balls: u32,
}

impl BattingCard {
    /// Strike rate over the innings (runs per 100 balls), 0 if no balls faced.
    pub fn strike_rate(&self) -> f64 {
        if self.balls == 0 {
            0.0
        } else {
            self.runs as f64 * 100.0 / self.balls as f64
        }
    }
}

/// Overs/runs/wickets for one bowler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingFigures {
    /// Completed overs bowled.
    pub overs: u32,
    /// Runs conceded, extras included.
    pub runs: u32,
    pub wickets: u32,
}

impl BowlingFigures {
    /// Runs conceded per completed over, 0 if none bowled yet.
    pub fn economy(&self) -> f64 {
        if self.overs == 0 {
            0.0
        } else {
            self.runs as f64 / self.overs as f64
        }
    }
}

/// One dismissal, recorded at the moment the wicket fell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallOfWicket {
    /// Team score when the wicket fell.
    pub score: u32,
    /// Wicket number (1-based).
    pub wicket: u8,
    pub batter: PlayerId,
}

/// One delivery in the ball-by-ball log (opt-in, see
/// `MatchEngine::with_ball_log`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallEvent {
    /// Completed overs when the ball was bowled.
    pub over: u32,
    /// Legal deliveries bowled in the over including this one; an extra
    /// repeats the previous count (it does not consume a ball).
    pub ball: u8,
    pub bowler: PlayerId,
    pub batter: PlayerId,
    pub outcome: BallOutcome,
    /// Running team score after this delivery.
    pub score: u32,
    /// Running wicket count after this delivery.
    pub wickets: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InningsState {
    pub score: u32,
    pub wickets: u8,
    /// Completed overs.
    pub overs: u32,
    /// Legal deliveries in the current over (0..=5 between deliveries).
    pub balls: u8,
    pub extras: u32,
    pub batting: BTreeMap<PlayerId, BattingCard>,
    pub bowling: BTreeMap<PlayerId, BowlingFigures>,
    pub fall_of_wickets: Vec<FallOfWicket>,
    /// Ball-by-ball log, present only when recording was enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balls_log: Option<Vec<BallEvent>>,
}

impl InningsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overs in the conventional x.y display encoding: completed overs
    /// plus balls of the unfinished over after the decimal point
    /// (19 overs 4 balls -> 19.4).
    pub fn overs_float(&self) -> f64 {
        self.overs as f64 + self.balls as f64 / 10.0
    }

    /// Runs scored off the bat (score minus extras).
    pub fn bat_runs(&self) -> u32 {
        self.batting.values().map(|c| c.runs).sum()
    }

    /// Checks the aggregate invariants that must hold for any innings,
    /// in progress or complete. Returns the first violation found.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.score != self.bat_runs() + self.extras {
            return Err(format!(
                "score {} != batter runs {} + extras {}",
                self.score,
                self.bat_runs(),
                self.extras
            ));
        }
        if self.wickets as usize != self.fall_of_wickets.len() {
            return Err(format!(
                "wickets {} != fall-of-wicket entries {}",
                self.wickets,
                self.fall_of_wickets.len()
            ));
        }
        if self.wickets > WICKETS_PER_INNINGS {
            return Err(format!("wickets {} exceeds {}", self.wickets, WICKETS_PER_INNINGS));
        }
        if self.balls >= BALLS_PER_OVER {
            return Err(format!("balls-in-over {} not below {}", self.balls, BALLS_PER_OVER));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
