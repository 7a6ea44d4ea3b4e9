//! Shared test rosters.

use crate::models::{Player, Role, Team};

/// The reference scenario roster: 5 batsmen (avg 40-48, SR 120-140),
/// 2 all-rounders (35/125, bowling 28 @ 7.0), 1 keeper (38/115),
/// 3 bowlers (25-27 @ 6.0-7.0).
pub(crate) fn scenario_team(prefix: &str, name: &str) -> Team {
    let mut team = Team::new(prefix, name);
    for i in 0..5 {
        team.players.push(
            Player::new(
                format!("{prefix}_BAT{i}"),
                format!("{name} Batsman {}", i + 1),
                Role::Batsman,
            )
            .with_batting(40.0 + i as f64 * 2.0, 120.0 + i as f64 * 5.0),
        );
    }
    for i in 0..2 {
        team.players.push(
            Player::new(
                format!("{prefix}_AR{i}"),
                format!("{name} All-rounder {}", i + 1),
                Role::AllRounder,
            )
            .with_batting(35.0, 125.0)
            .with_bowling(28.0, 7.0),
        );
    }
    team.players.push(
        Player::new(format!("{prefix}_WK"), format!("{name} Keeper"), Role::WicketKeeper)
            .with_batting(38.0, 115.0),
    );
    for i in 0..3 {
        team.players.push(
            Player::new(
                format!("{prefix}_BOWL{i}"),
                format!("{name} Bowler {}", i + 1),
                Role::Bowler,
            )
            .with_batting(10.0, 70.0)
            .with_bowling(25.0 + i as f64, 6.0 + i as f64 * 0.5),
        );
    }
    team
}
