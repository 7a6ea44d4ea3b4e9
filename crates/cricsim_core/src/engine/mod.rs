//! Match simulation engine.
//!
//! [`MatchEngine`] orchestrates a full two-innings match: toss, first
//! innings, target computation, chase, result determination, and the
//! player-of-match award. The engine owns a ChaCha stream seeded from the
//! plan, so the same plan always produces the same result bit for bit.

pub mod awards;
pub mod ball;
pub mod innings;
pub mod probability;
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use awards::select_player_of_match;
pub use ball::{simulate_ball, BallOutcome, ExtraKind};
pub use innings::{simulate_innings, InningsEngine, InningsPhase};
pub use probability::{dismissal_probability, scoring_distribution, ScoringDistribution};

use crate::error::Result;
use crate::models::{
    InningsState, MatchFormat, MatchResult, MatchSetup, MatchStatus, Scoreline, Team, TeamSide,
    Toss, TossDecision, WICKETS_PER_INNINGS,
};
use chrono::{DateTime, Utc};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Chance the toss winner chooses to bat. Placeholder for a future
/// skill-weighted toss.
const ELECT_BAT_PROBABILITY: f64 = 0.6;

/// Everything needed to simulate one match.
#[derive(Debug, Clone)]
pub struct MatchPlan {
    pub match_id: String,
    pub team_a: Team,
    pub team_b: Team,
    pub format: MatchFormat,
    pub seed: u64,
    pub venue: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl MatchPlan {
    pub fn new(
        match_id: impl Into<String>,
        team_a: Team,
        team_b: Team,
        format: MatchFormat,
        seed: u64,
    ) -> Self {
        Self {
            match_id: match_id.into(),
            team_a,
            team_b,
            format,
            seed,
            venue: None,
            date: None,
        }
    }
}

pub struct MatchEngine {
    rng: ChaCha8Rng,
    /// Original seed, carried into the result for reproducibility.
    original_seed: u64,
    plan: MatchPlan,
    setup: MatchSetup,
    status: MatchStatus,
    record_balls: bool,
}

impl MatchEngine {
    /// Resolves rosters and seeds the random stream. Roster problems are
    /// reported here; `RosterInsufficient` for a side that cannot field
    /// an innings surfaces later, from the innings engine.
    pub fn new(plan: MatchPlan) -> Result<Self> {
        let setup = MatchSetup::new(&plan.team_a, &plan.team_b)?;
        let rng = ChaCha8Rng::seed_from_u64(plan.seed);
        Ok(Self {
            rng,
            original_seed: plan.seed,
            setup,
            status: MatchStatus::NotStarted,
            record_balls: false,
            plan,
        })
    }

    /// Record ball-by-ball logs into both innings (larger result).
    pub fn with_ball_log(mut self) -> Self {
        self.record_balls = true;
        self
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Simulate the match to completion.
    ///
    /// All-or-nothing: an error from either innings aborts the whole
    /// match with no partial state.
    pub fn simulate(&mut self) -> Result<MatchResult> {
        self.status = MatchStatus::InProgress;

        let toss = self.conduct_toss();
        let first_batting = match toss.decision {
            TossDecision::Bat => toss.winner,
            TossDecision::Bowl => toss.winner.other(),
        };
        debug!(
            "toss: {} won, elected to {:?}; {} bat first",
            self.setup.sheet(toss.winner).name,
            toss.decision,
            self.setup.sheet(first_batting).name
        );

        let innings1 = self.run_innings(first_batting, None)?;
        let target = innings1.score + 1;
        let innings2 = self.run_innings(first_batting.other(), Some(target))?;

        let (scoreline_a, scoreline_b) = match first_batting {
            TeamSide::A => (Scoreline::from_innings(&innings1), Scoreline::from_innings(&innings2)),
            TeamSide::B => (Scoreline::from_innings(&innings2), Scoreline::from_innings(&innings1)),
        };

        let (winner, result_text) = result_summary(
            first_batting,
            &innings1,
            &innings2,
            &self.setup.sheet(TeamSide::A).name,
            &self.setup.sheet(TeamSide::B).name,
        );
        debug!("result: {}", result_text);

        let player_of_match = select_player_of_match(&innings1, &innings2);
        let player_of_match_name = player_of_match.map(|id| self.setup.player_name(id));

        self.status = MatchStatus::Completed;

        Ok(MatchResult {
            schema_version: crate::SCHEMA_VERSION,
            match_id: self.plan.match_id.clone(),
            format: self.plan.format,
            seed: self.original_seed,
            venue: self.plan.venue.clone(),
            date: self.plan.date,
            setup: self.setup.clone(),
            toss,
            first_batting,
            innings1,
            innings2,
            scoreline_a,
            scoreline_b,
            status: self.status,
            winner,
            result_text,
            player_of_match,
            player_of_match_name,
        })
    }

    fn conduct_toss(&mut self) -> Toss {
        let winner = if self.rng.gen::<f64>() < 0.5 {
            TeamSide::A
        } else {
            TeamSide::B
        };
        let decision = if self.rng.gen::<f64>() < ELECT_BAT_PROBABILITY {
            TossDecision::Bat
        } else {
            TossDecision::Bowl
        };
        Toss { winner, decision }
    }

    fn run_innings(&mut self, batting: TeamSide, target: Option<u32>) -> Result<InningsState> {
        let batting_sheet = self.setup.sheet(batting);
        let bowling_sheet = self.setup.sheet(batting.other());

        let mut engine = InningsEngine::new(
            &batting_sheet.name,
            &bowling_sheet.name,
            batting_sheet.batting_slots(),
            bowling_sheet.bowler_slots(),
            self.plan.format.max_overs(),
        )?;
        if let Some(target) = target {
            engine = engine.with_target(target);
        }
        if self.record_balls {
            engine = engine.with_ball_log();
        }
        Ok(engine.run(&mut self.rng))
    }
}

/// Winner and result text from the two frozen innings.
///
/// Chasing side wins by wickets in hand, defending side by the run
/// margin, equal scores tie (no winner).
fn result_summary(
    first_batting: TeamSide,
    innings1: &InningsState,
    innings2: &InningsState,
    name_a: &str,
    name_b: &str,
) -> (Option<TeamSide>, String) {
    let name_of = |side: TeamSide| match side {
        TeamSide::A => name_a,
        TeamSide::B => name_b,
    };
    let chasing = first_batting.other();

    if innings2.score > innings1.score {
        let wickets_left = WICKETS_PER_INNINGS - innings2.wickets;
        (
            Some(chasing),
            format!("{} won by {} wickets", name_of(chasing), wickets_left),
        )
    } else if innings2.score < innings1.score {
        let margin = innings1.score - innings2.score;
        (
            Some(first_batting),
            format!("{} won by {} runs", name_of(first_batting), margin),
        )
    } else {
        (None, "Match tied".to_string())
    }
}

/// Simulate a match in one call - the main library entry point.
pub fn simulate_match(plan: MatchPlan) -> Result<MatchResult> {
    MatchEngine::new(plan)?.simulate()
}

// ============================================================================
// Tests
// ============================================================================
