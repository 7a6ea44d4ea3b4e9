//! Embedded roster data.
//!
//! The sample teams ship inside the binary via `include_str!`, so the
//! library and CLI work with zero file IO out of the box.

use super::load_teams_from_json;
use crate::models::Team;
use once_cell::sync::Lazy;

/// Sample international teams JSON (~6KB).
pub const SAMPLE_TEAMS_JSON: &str = include_str!("sample_teams.json");

static DEFAULT_TEAMS: Lazy<Vec<Team>> = Lazy::new(|| {
    load_teams_from_json(SAMPLE_TEAMS_JSON).expect("embedded sample_teams.json is valid")
});

/// The built-in sample teams, parsed once.
pub fn default_teams() -> &'static [Team] {
    &DEFAULT_TEAMS
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_default_teams_load() {
        let teams = default_teams();
        assert!(teams.len() >= 2, "need at least two sample teams");
        for team in teams {
            assert_eq!(team.players.len(), 11, "{} is not a full XI", team.name);
            team.validate().unwrap();
        }
    }

    #[test]
    fn test_default_teams_are_playable() {
        for team in default_teams() {
            let batsmen = team.players.iter().filter(|p| p.role == Role::Batsman).count();
            assert!(batsmen > 0, "{} has no specialist batsmen", team.name);
            assert!(team.bowlers().len() >= 3, "{} has a thin attack", team.name);
            for player in &team.players {
                assert!(player.ratings.batting_average > 0.0);
                assert!(player.ratings.strike_rate > 0.0);
            }
        }
    }
}
