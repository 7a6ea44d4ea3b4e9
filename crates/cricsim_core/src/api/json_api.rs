//! JSON API for match simulation.
//!
//! String-in, string-out facade for host environments that do not link
//! against the Rust types directly. The request carries everything needed
//! for a reproducible simulation, including the seed.

use crate::engine::{MatchEngine, MatchPlan};
use crate::error::{Result, SimError};
use crate::models::{MatchFormat, Player, PlayerRatings, Role, Team};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub format: MatchFormat,
    pub team_a: TeamData,
    pub team_b: TeamData,
    #[serde(default)]
    pub match_id: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    /// Record a ball-by-ball log into the result (increases output size).
    #[serde(default)]
    pub record_balls: bool,
}

#[derive(Debug, Deserialize)]
pub struct TeamData {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub players: Vec<PlayerData>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub role: Role,
    #[serde(flatten)]
    pub ratings: PlayerRatings,
}

impl TeamData {
    fn into_team(self) -> Team {
        let team_id = self.id.unwrap_or_else(|| self.name.clone());
        let players = self
            .players
            .into_iter()
            .enumerate()
            .map(|(i, p)| Player {
                id: p.id.unwrap_or_else(|| format!("{team_id}-{i}")),
                name: p.name,
                role: p.role,
                ratings: p.ratings,
            })
            .collect();
        Team {
            id: team_id,
            name: self.name,
            players,
        }
    }
}

/// Simulate a match from a JSON request, returning the result as JSON.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    if request.schema_version != crate::SCHEMA_VERSION {
        return Err(SimError::SchemaVersionMismatch {
            found: request.schema_version,
            expected: crate::SCHEMA_VERSION,
        });
    }

    let match_id = request
        .match_id
        .unwrap_or_else(|| format!("match-{}", request.seed));
    let mut plan = MatchPlan::new(
        match_id,
        request.team_a.into_team(),
        request.team_b.into_team(),
        request.format,
        request.seed,
    );
    plan.venue = request.venue;

    let mut engine = MatchEngine::new(plan)?;
    if request.record_balls {
        engine = engine.with_ball_log();
    }
    let result = engine.simulate()?;
    Ok(serde_json::to_string(&result)?)
}

// ============================================================================
// Tests
// ============================================================================
