//! Roster loading.
//!
//! Teams and players come in as JSON (see `sample_teams.json` for the
//! shape); every loaded team is validated before it reaches the engine.

pub mod embedded;

pub use embedded::{default_teams, SAMPLE_TEAMS_JSON};

use crate::error::{Result, SimError};
use crate::models::Team;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TeamsFile {
    teams: Vec<Team>,
}

/// Parse and validate teams from a JSON document.
pub fn load_teams_from_json(json: &str) -> Result<Vec<Team>> {
    let file: TeamsFile = serde_json::from_str(json)?;
    for team in &file.teams {
        team.validate()?;
    }
    Ok(file.teams)
}

/// Read and parse a team file from disk.
pub fn load_teams_from_path(path: &Path) -> Result<Vec<Team>> {
    let json = std::fs::read_to_string(path)?;
    load_teams_from_json(&json)
}

/// Case-insensitive team lookup.
pub fn team_by_name<'a>(teams: &'a [Team], name: &str) -> Result<&'a Team> {
    teams
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| SimError::TeamNotFound(name.to_string()))
}

/// Available team names, in file order.
pub fn team_names(teams: &[Team]) -> Vec<&str> {
    teams.iter().map(|t| t.name.as_str()).collect()
}

// ============================================================================
// Tests
// ============================================================================
