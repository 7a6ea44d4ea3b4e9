//! Match-level data structures.
//!
//! [`MatchResult`] is the sink of the simulation pipeline: both frozen
//! innings, the team scorelines, the toss record, result text, and the
//! player-of-match award all land here. The embedded [`MatchSetup`] keeps
//! the id -> name mapping available to presentation layers.

use super::{InningsState, MatchSetup, PlayerId, TeamSide};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchFormat {
    T20,
    ODI,
    Test,
}

impl MatchFormat {
    /// Maximum overs per innings for this format. For Test the cap is a
    /// typical day's play; multi-day logic is out of scope.
    pub fn max_overs(&self) -> u32 {
        match self {
            MatchFormat::T20 => 20,
            MatchFormat::ODI => 50,
            MatchFormat::Test => 90,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchFormat::T20 => "T20",
            MatchFormat::ODI => "ODI",
            MatchFormat::Test => "Test",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Completed,
    /// Terminal state reachable only from outside the simulation
    /// (e.g. a rained-off match in a surrounding scheduling layer).
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TossDecision {
    Bat,
    Bowl,
}

/// Toss record: who won it and what they chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toss {
    pub winner: TeamSide,
    pub decision: TossDecision,
}

/// Final team-level line: score, wickets lost, overs faced
/// (x.y display encoding, see `InningsState::overs_float`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scoreline {
    pub score: u32,
    pub wickets: u8,
    pub overs: f64,
}

impl Scoreline {
    pub fn from_innings(innings: &InningsState) -> Self {
        Self {
            score: innings.score,
            wickets: innings.wickets,
            overs: innings.overs_float(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub schema_version: u8,
    pub match_id: String,
    pub format: MatchFormat,
    /// Seed the match was simulated with; replaying it reproduces this
    /// result exactly.
    pub seed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Resolved rosters (id -> name/role mapping for presentation).
    pub setup: MatchSetup,
    pub toss: Toss,
    /// Side that batted the first innings.
    pub first_batting: TeamSide,
    pub innings1: InningsState,
    pub innings2: InningsState,
    pub scoreline_a: Scoreline,
    pub scoreline_b: Scoreline,
    pub status: MatchStatus,
    /// `None` encodes a tie. Once completed this is one of the two
    /// competing sides by construction; a third party cannot be encoded.
    pub winner: Option<TeamSide>,
    pub result_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_of_match: Option<PlayerId>,
    /// Name view of the award, resolved at result construction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_of_match_name: Option<String>,
}

impl MatchResult {
    pub fn team_name(&self, side: TeamSide) -> &str {
        &self.setup.sheet(side).name
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|side| self.team_name(side))
    }

    /// Scoreline for one side.
    pub fn scoreline(&self, side: TeamSide) -> &Scoreline {
        match side {
            TeamSide::A => &self.scoreline_a,
            TeamSide::B => &self.scoreline_b,
        }
    }

    /// Per-player performance records combined across both innings.
    ///
    /// This is the hand-off point for career-stat aggregation: the
    /// simulation never mutates roster ratings, an external aggregator
    /// folds these records instead.
    pub fn performance_records(&self) -> Vec<PlayerPerformance> {
        let mut by_id: BTreeMap<PlayerId, PlayerPerformance> = BTreeMap::new();

        for innings in [&self.innings1, &self.innings2] {
            for (id, card) in &innings.batting {
                let record = by_id
                    .entry(*id)
                    .or_insert_with(|| PlayerPerformance::blank(*id, &self.setup));
                record.runs += card.runs;
                record.balls_faced += card.balls;
            }
            for (id, figures) in &innings.bowling {
                let record = by_id
                    .entry(*id)
                    .or_insert_with(|| PlayerPerformance::blank(*id, &self.setup));
                record.overs_bowled += figures.overs;
                record.runs_conceded += figures.runs;
                record.wickets += figures.wickets;
            }
        }

        by_id.into_values().collect()
    }
}

/// One player's combined match figures, for external aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPerformance {
    pub id: PlayerId,
    pub name: String,
    pub side: TeamSide,
    pub runs: u32,
    pub balls_faced: u32,
    pub overs_bowled: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
}

impl PlayerPerformance {
    fn blank(id: PlayerId, setup: &MatchSetup) -> Self {
        Self {
            id,
            name: setup.player_name(id),
            side: setup.side_of(id),
            runs: 0,
            balls_faced: 0,
            overs_bowled: 0,
            runs_conceded: 0,
            wickets: 0,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
