//! Player-of-match selection.
//!
//! Deterministic, no randomness: combined figures across both innings,
//! wicket hauls trump batting, then the 40-run bar, then the plain top
//! scorer. Ties resolve to the lowest player id (the first roster entry
//! encountered), which keeps the award stable for identical figures.

use crate::models::{InningsState, PlayerId};
use std::collections::BTreeMap;

/// Wickets that outrank any batting performance.
pub const WICKET_HAUL: u32 = 3;

/// Runs that make a batting performance award-worthy on its own.
pub const BATTING_BAR: u32 = 40;

/// Select the player of the match from the two frozen innings.
///
/// Returns `None` only when no batting data exists at all (no award).
pub fn select_player_of_match(innings1: &InningsState, innings2: &InningsState) -> Option<PlayerId> {
    let mut runs: BTreeMap<PlayerId, u32> = BTreeMap::new();
    let mut wickets: BTreeMap<PlayerId, u32> = BTreeMap::new();

    for innings in [innings1, innings2] {
        for (id, card) in &innings.batting {
            *runs.entry(*id).or_default() += card.runs;
        }
        for (id, figures) in &innings.bowling {
            *wickets.entry(*id).or_default() += figures.wickets;
        }
    }

    let top_bowler = top_entry(&wickets);
    let top_scorer = top_entry(&runs);

    if let Some((id, w)) = top_bowler {
        if w >= WICKET_HAUL {
            return Some(id);
        }
    }
    if let Some((id, r)) = top_scorer {
        if r >= BATTING_BAR {
            return Some(id);
        }
    }
    // Otherwise the highest scorer, however modest.
    top_scorer.map(|(id, _)| id)
}

/// Highest value in the map; ascending key iteration means the lowest id
/// wins ties (strictly-greater comparison keeps the first maximum).
fn top_entry(map: &BTreeMap<PlayerId, u32>) -> Option<(PlayerId, u32)> {
    let mut best: Option<(PlayerId, u32)> = None;
    for (id, value) in map {
        match best {
            Some((_, top)) if *value <= top => {}
            _ => best = Some((*id, *value)),
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
