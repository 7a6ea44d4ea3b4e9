//! Match setup: resolved rosters with stable per-match player ids.
//!
//! Built once from the two competing [`Team`]s before the first ball.
//! Every figure recorded during simulation references players through
//! [`PlayerId`] slots assigned here (team A occupies 0..11, team B 11..22),
//! so duplicate names across rosters can never corrupt the bookkeeping.

use super::{Player, PlayerId, PlayerRatings, Role, Team};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// PlayerId offset for team B slots.
pub const TEAM_B_ID_OFFSET: u8 = 11;

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    A,
    B,
}

impl TeamSide {
    pub fn other(&self) -> TeamSide {
        match self {
            TeamSide::A => TeamSide::B,
            TeamSide::B => TeamSide::A,
        }
    }
}

/// One resolved roster entry: everything the simulation needs to know
/// about a player, keyed by its per-match id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    pub ratings: PlayerRatings,
}

/// One team's resolved sheet: roster slots plus the derived batting order
/// and bowling rotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSheet {
    pub team_id: String,
    pub name: String,
    /// Slots in roster order; index == id - side offset.
    pub slots: Vec<RosterSlot>,
    /// Batting order as slot ids (see [`Team::batting_order`]).
    pub batting_order: Vec<PlayerId>,
    /// Bowling rotation as slot ids (see [`Team::bowlers`]).
    pub bowlers: Vec<PlayerId>,
}

impl TeamSheet {
    fn from_team(team: &Team, id_offset: u8) -> Self {
        let slots: Vec<RosterSlot> = team
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| RosterSlot {
                id: PlayerId(id_offset + i as u8),
                name: p.name.clone(),
                role: p.role,
                ratings: p.ratings,
            })
            .collect();

        let slot_id = |player: &Player| {
            let idx = team
                .players
                .iter()
                .position(|p| p.id == player.id)
                .expect("ordering references a roster player");
            PlayerId(id_offset + idx as u8)
        };

        let batting_order = team.batting_order().into_iter().map(slot_id).collect();
        let bowlers = team.bowlers().into_iter().map(slot_id).collect();

        Self {
            team_id: team.id.clone(),
            name: team.name.clone(),
            slots,
            batting_order,
            bowlers,
        }
    }

    pub fn slot(&self, id: PlayerId) -> Option<&RosterSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Batting order resolved to slots, in order.
    pub fn batting_slots(&self) -> Vec<&RosterSlot> {
        self.batting_order.iter().filter_map(|id| self.slot(*id)).collect()
    }

    /// Bowling rotation resolved to slots, in order.
    pub fn bowler_slots(&self) -> Vec<&RosterSlot> {
        self.bowlers.iter().filter_map(|id| self.slot(*id)).collect()
    }
}

/// Resolved setup for one match: both team sheets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSetup {
    pub team_a: TeamSheet,
    pub team_b: TeamSheet,
}

impl MatchSetup {
    pub fn new(team_a: &Team, team_b: &Team) -> Result<Self> {
        team_a.validate()?;
        team_b.validate()?;
        Ok(Self {
            team_a: TeamSheet::from_team(team_a, 0),
            team_b: TeamSheet::from_team(team_b, TEAM_B_ID_OFFSET),
        })
    }

    pub fn sheet(&self, side: TeamSide) -> &TeamSheet {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    /// Which side a player id belongs to.
    pub fn side_of(&self, id: PlayerId) -> TeamSide {
        if id.0 < TEAM_B_ID_OFFSET {
            TeamSide::A
        } else {
            TeamSide::B
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&RosterSlot> {
        self.sheet(self.side_of(id)).slot(id)
    }

    /// Name view for presentation; falls back to the raw id when a slot
    /// is unknown (should not happen for ids produced by this setup).
    pub fn player_name(&self, id: PlayerId) -> String {
        self.player(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("Player #{}", id))
    }
}

// ============================================================================
// Tests
// ============================================================================
