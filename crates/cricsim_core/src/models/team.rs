use super::{Player, Role};
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Playing XI limit. Rosters larger than this are rejected by
/// [`Team::validate`].
pub const PLAYING_XI: usize = 11;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(SimError::InvalidRoster("team name is empty".to_string()));
        }
        if self.players.is_empty() {
            return Err(SimError::InvalidRoster(format!("team {} has no players", self.name)));
        }
        if self.players.len() > PLAYING_XI {
            return Err(SimError::InvalidRoster(format!(
                "team {} has {} players, playing XI allows at most {}",
                self.name,
                self.players.len(),
                PLAYING_XI
            )));
        }
        for (i, a) in self.players.iter().enumerate() {
            if self.players[i + 1..].iter().any(|b| b.id == a.id) {
                return Err(SimError::InvalidRoster(format!(
                    "team {} has duplicate player id {}",
                    self.name, a.id
                )));
            }
        }
        Ok(())
    }

    fn players_by_role(&self, role: Role) -> Vec<&Player> {
        self.players.iter().filter(|p| p.role == role).collect()
    }

    /// Batting order: top-3 batsmen, wicket-keepers, all-rounders,
    /// remaining batsmen, then bowlers. Each bucket sorted by descending
    /// batting average (stable, so roster order breaks ties).
    pub fn batting_order(&self) -> Vec<&Player> {
        let mut batsmen = self.players_by_role(Role::Batsman);
        let mut keepers = self.players_by_role(Role::WicketKeeper);
        let mut all_rounders = self.players_by_role(Role::AllRounder);
        let mut bowlers = self.players_by_role(Role::Bowler);

        let by_batting_desc = |a: &&Player, b: &&Player| {
            b.ratings
                .batting_average
                .partial_cmp(&a.ratings.batting_average)
                .unwrap_or(Ordering::Equal)
        };
        batsmen.sort_by(by_batting_desc);
        keepers.sort_by(by_batting_desc);
        all_rounders.sort_by(by_batting_desc);
        bowlers.sort_by(by_batting_desc);

        let top = batsmen.len().min(3);
        let mut order = Vec::with_capacity(self.players.len());
        order.extend_from_slice(&batsmen[..top]);
        order.extend(keepers);
        order.extend(all_rounders);
        order.extend_from_slice(&batsmen[top..]);
        order.extend(bowlers);
        order
    }

    /// Bowling options: bowlers first, then all-rounders, each sorted by
    /// ascending bowling average. Unrated bowlers (average 0.0) sort last
    /// within their bucket.
    pub fn bowlers(&self) -> Vec<&Player> {
        let by_bowling_asc = |a: &&Player, b: &&Player| {
            let key = |p: &Player| {
                if p.ratings.bowling_average > 0.0 {
                    p.ratings.bowling_average
                } else {
                    f64::INFINITY
                }
            };
            key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal)
        };

        let mut bowlers = self.players_by_role(Role::Bowler);
        let mut all_rounders = self.players_by_role(Role::AllRounder);
        bowlers.sort_by(by_bowling_asc);
        all_rounders.sort_by(by_bowling_asc);

        bowlers.extend(all_rounders);
        bowlers
    }
}

// ============================================================================
// Tests
// ============================================================================
