//! Innings engine: the over-by-over state machine.
//!
//! Drives one innings ball by ball: striker/non-striker rotation, new
//! batsman introduction after a wicket, bowler rotation at the end of each
//! over, and the termination conditions (all wickets down, overs cap,
//! target reached, batting order exhausted).
//!
//! The engine owns its [`InningsState`] while running and releases it
//! frozen from [`InningsEngine::run`].

use super::ball::{simulate_ball, BallOutcome};
use crate::error::{Result, SimError};
use crate::models::{
    BallEvent, FallOfWicket, InningsState, PlayerId, RosterSlot, BALLS_PER_OVER,
    WICKETS_PER_INNINGS,
};
use log::debug;
use rand::Rng;

/// Innings lifecycle. `InProgress -> Complete` fires on any termination
/// condition; a completed engine never bowls again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InningsPhase {
    NotStarted,
    InProgress,
    Complete,
}

pub struct InningsEngine<'a> {
    batting_team: String,
    batting_order: Vec<&'a RosterSlot>,
    bowlers: Vec<&'a RosterSlot>,
    max_overs: u32,
    target: Option<u32>,
    record_balls: bool,
    phase: InningsPhase,
    innings: InningsState,
    /// Indices into `batting_order`.
    striker: usize,
    non_striker: usize,
    next_batter: usize,
    /// Monotonic; the active bowler is `bowlers[bowler_index % len]`.
    bowler_index: usize,
}

impl<'a> InningsEngine<'a> {
    /// Fails with [`SimError::RosterInsufficient`] before any ball is
    /// simulated when the batting side cannot field two batters or the
    /// bowling side has no bowler.
    pub fn new(
        batting_team: &str,
        bowling_team: &str,
        batting_order: Vec<&'a RosterSlot>,
        bowlers: Vec<&'a RosterSlot>,
        max_overs: u32,
    ) -> Result<Self> {
        if batting_order.len() < 2 {
            return Err(SimError::RosterInsufficient {
                team: batting_team.to_string(),
                needed: 2,
                found: batting_order.len(),
            });
        }
        if bowlers.is_empty() {
            return Err(SimError::RosterInsufficient {
                team: bowling_team.to_string(),
                needed: 1,
                found: 0,
            });
        }

        let mut innings = InningsState::new();
        // First two in the order open; both start on zero.
        innings.batting.entry(batting_order[0].id).or_default();
        innings.batting.entry(batting_order[1].id).or_default();

        Ok(Self {
            batting_team: batting_team.to_string(),
            batting_order,
            bowlers,
            max_overs,
            target: None,
            record_balls: false,
            phase: InningsPhase::NotStarted,
            innings,
            striker: 0,
            non_striker: 1,
            next_batter: 2,
            bowler_index: 0,
        })
    }

    /// Second-innings chase: the innings stops the instant score reaches
    /// this value.
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = Some(target);
        self
    }

    /// Record a ball-by-ball log into the innings state.
    pub fn with_ball_log(mut self) -> Self {
        self.record_balls = true;
        self
    }

    pub fn phase(&self) -> InningsPhase {
        self.phase
    }

    fn target_reached(&self) -> bool {
        self.target.is_some_and(|t| self.innings.score >= t)
    }

    /// Run the innings to completion and release the frozen state.
    pub fn run<R: Rng>(mut self, rng: &mut R) -> InningsState {
        self.phase = InningsPhase::InProgress;
        if self.record_balls {
            self.innings.balls_log = Some(Vec::new());
        }
        debug!(
            "{} innings: {} batters, {} bowlers, max {} overs, target {:?}",
            self.batting_team,
            self.batting_order.len(),
            self.bowlers.len(),
            self.max_overs,
            self.target
        );

        while self.innings.wickets < WICKETS_PER_INNINGS && self.innings.overs < self.max_overs {
            // Win-by-chase is checked before the next delivery.
            if self.target_reached() {
                break;
            }
            self.bowl_one(rng);
            if self.phase == InningsPhase::Complete {
                break;
            }
        }
        self.phase = InningsPhase::Complete;

        debug!(
            "{} innings closed: {}/{} in {:.1} overs",
            self.batting_team,
            self.innings.score,
            self.innings.wickets,
            self.innings.overs_float()
        );
        self.innings
    }

    /// Simulate one delivery and fold it into the innings state.
    fn bowl_one<R: Rng>(&mut self, rng: &mut R) {
        let striker = self.batting_order[self.striker];
        let bowler = self.bowlers[self.bowler_index % self.bowlers.len()];
        let outcome = simulate_ball(&striker.ratings, &bowler.ratings, rng);

        if let BallOutcome::Extra { runs, .. } = outcome {
            let runs = runs as u32;
            self.innings.extras += runs;
            self.innings.score += runs;
            self.innings.bowling.entry(bowler.id).or_default().runs += runs;
            self.record(bowler.id, striker.id, outcome);
            // A wide or no-ball does not count as a legal delivery; same
            // striker and bowler face the re-bowled ball.
            return;
        }

        // Legal delivery.
        self.innings.balls += 1;
        self.innings.batting.entry(striker.id).or_default().balls += 1;
        let figures = self.innings.bowling.entry(bowler.id).or_default();

        if outcome.is_wicket() {
            figures.wickets += 1;
            self.innings.wickets += 1;
            self.innings.fall_of_wickets.push(FallOfWicket {
                score: self.innings.score,
                wicket: self.innings.wickets,
                batter: striker.id,
            });
            self.record(bowler.id, striker.id, outcome);

            if self.next_batter < self.batting_order.len() {
                self.striker = self.next_batter;
                self.next_batter += 1;
                self.innings.batting.entry(self.batting_order[self.striker].id).or_default();
            } else {
                // Order exhausted: all out, even mid-over.
                self.phase = InningsPhase::Complete;
                return;
            }
        } else {
            let runs = outcome.runs();
            figures.runs += runs;
            self.innings.score += runs;
            self.innings
                .batting
                .get_mut(&striker.id)
                .expect("striker card initialized on entry")
                .runs += runs;
            self.record(bowler.id, striker.id, outcome);

            // Odd runs leave the batters at swapped ends.
            if runs % 2 == 1 {
                std::mem::swap(&mut self.striker, &mut self.non_striker);
            }
        }

        if self.innings.balls == BALLS_PER_OVER {
            self.innings.balls = 0;
            self.innings.overs += 1;
            self.innings
                .bowling
                .get_mut(&bowler.id)
                .expect("figures initialized above")
                .overs += 1;
            // Mandatory end change, next bowler in the rotation.
            std::mem::swap(&mut self.striker, &mut self.non_striker);
            self.bowler_index += 1;
        }
    }

    fn record(&mut self, bowler: PlayerId, batter: PlayerId, outcome: BallOutcome) {
        if let Some(events) = self.innings.balls_log.as_mut() {
            events.push(BallEvent {
                over: self.innings.overs,
                ball: self.innings.balls,
                bowler,
                batter,
                outcome,
                score: self.innings.score,
                wickets: self.innings.wickets,
            });
        }
    }
}

/// Simulate a single innings outside a full match (testing and analysis).
///
/// `batting_order` and `bowlers` are roster slots as produced by
/// [`crate::models::MatchSetup`].
pub fn simulate_innings<R: Rng>(
    batting_order: &[&RosterSlot],
    bowlers: &[&RosterSlot],
    max_overs: u32,
    target: Option<u32>,
    rng: &mut R,
) -> Result<InningsState> {
    let mut engine = InningsEngine::new(
        "batting side",
        "bowling side",
        batting_order.to_vec(),
        bowlers.to_vec(),
        max_overs,
    )?;
    if let Some(target) = target {
        engine = engine.with_target(target);
    }
    Ok(engine.run(rng))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerId, PlayerRatings, Role};
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn slot(id: u8, name: &str, bat_avg: f64, sr: f64, bowl_avg: f64, econ: f64) -> RosterSlot {
        RosterSlot {
            id: PlayerId(id),
            name: name.to_string(),
            role: if bowl_avg > 0.0 { Role::Bowler } else { Role::Batsman },
            ratings: PlayerRatings {
                batting_average: bat_avg,
                strike_rate: sr,
                bowling_average: bowl_avg,
                economy_rate: econ,
            },
        }
    }

    /// Full XI: 5 batsmen, 2 all-rounders, 1 keeper, 3 bowlers
    /// (the reference test roster shape).
    fn full_order() -> Vec<RosterSlot> {
        let mut order = Vec::new();
        for i in 0..5 {
            order.push(slot(i, &format!("Bat {}", i), 40.0 + i as f64 * 2.0, 120.0 + i as f64 * 5.0, 0.0, 0.0));
        }
        order.push(slot(5, "Keeper", 38.0, 115.0, 0.0, 0.0));
        for i in 0..2 {
            order.push(slot(6 + i, &format!("AR {}", i), 35.0, 125.0, 28.0, 7.0));
        }
        for i in 0..3 {
            order.push(slot(8 + i, &format!("Bowl {}", i), 10.0, 70.0, 25.0 + i as f64, 6.0 + i as f64 * 0.5));
        }
        order
    }

    fn attack() -> Vec<RosterSlot> {
        vec![
            slot(11, "Quick A", 10.0, 70.0, 25.0, 6.0),
            slot(12, "Quick B", 9.0, 65.0, 26.0, 6.5),
            slot(13, "Spinner", 12.0, 75.0, 27.0, 7.0),
        ]
    }

    /// Replays a fixed script of uniform draws (each value is a u64 that the
    /// `Standard` f64 distribution maps back to the intended number). The
    /// script cycles, so a whole innings can run on a short pattern.
    struct ScriptRng {
        values: Vec<u64>,
        i: usize,
    }

    impl ScriptRng {
        fn cycling(uniform_draws: &[f64]) -> Self {
            let values = uniform_draws
                .iter()
                .map(|v| ((v * (1u64 << 53) as f64) as u64) << 11)
                .collect();
            Self { values, i: 0 }
        }
    }

    impl RngCore for ScriptRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            let v = self.values[self.i % self.values.len()];
            self.i += 1;
            v
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn refs(slots: &[RosterSlot]) -> Vec<&RosterSlot> {
        slots.iter().collect()
    }

    #[test]
    fn test_roster_insufficient_batters() {
        let order = vec![slot(0, "Lonely", 40.0, 120.0, 0.0, 0.0)];
        let bowlers = attack();
        let err = InningsEngine::new("Shorthanded", "Opponents", refs(&order), refs(&bowlers), 20)
            .err()
            .expect("one batter must be rejected");
        match err {
            SimError::RosterInsufficient { team, needed, found } => {
                assert_eq!(team, "Shorthanded");
                assert_eq!(needed, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_roster_insufficient_bowlers() {
        let order = full_order();
        let err = InningsEngine::new("Batters", "No Attack", refs(&order), Vec::new(), 20)
            .err()
            .expect("zero bowlers must be rejected");
        assert!(matches!(err, SimError::RosterInsufficient { needed: 1, .. }));
    }

    #[test]
    fn test_innings_invariants_across_seeds() {
        let order = full_order();
        let bowlers = attack();
        for seed in [1u64, 7, 42, 1234, 99999] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let innings =
                simulate_innings(&refs(&order), &refs(&bowlers), 20, None, &mut rng).unwrap();
            innings.check_invariants().unwrap_or_else(|e| panic!("seed {}: {}", seed, e));
            assert!(innings.overs <= 20, "seed {}: overs {}", seed, innings.overs);
            assert!(innings.wickets <= WICKETS_PER_INNINGS);
            assert_eq!(innings.wickets as usize, innings.fall_of_wickets.len());
        }
    }

    #[test]
    fn test_t20_scenario_score_in_expected_band() {
        let order = full_order();
        let bowlers = attack();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let innings = simulate_innings(&refs(&order), &refs(&bowlers), 20, None, &mut rng).unwrap();
        assert!(
            (50..=250).contains(&innings.score),
            "T20 score outside expected band: {}",
            innings.score
        );
    }

    #[test]
    fn test_chase_stops_the_instant_target_is_reached() {
        let order = full_order();
        let bowlers = attack();
        for seed in [3u64, 17, 404, 9000] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let target = 30;
            let engine = InningsEngine::new(
                "Chasers",
                "Defenders",
                refs(&order),
                refs(&bowlers),
                20,
            )
            .unwrap()
            .with_target(target)
            .with_ball_log();
            let innings = engine.run(&mut rng);

            assert!(innings.score >= target, "seed {}: chase fell short at {}", seed, innings.score);
            // Max overshoot is one boundary.
            assert!(innings.score < target + 6, "seed {}: overshot to {}", seed, innings.score);

            let events = innings.balls_log.as_ref().expect("log enabled");
            let reaching = events
                .iter()
                .position(|e| e.score >= target)
                .expect("some ball reached the target");
            assert_eq!(
                reaching,
                events.len() - 1,
                "seed {}: balls recorded after the target was reached",
                seed
            );
        }
    }

    #[test]
    fn test_short_order_all_out_ends_innings_early() {
        // Two weak batters, long format: the first wicket exhausts the
        // order and closes the innings even though 9 wickets remain.
        let order = vec![
            slot(0, "Tail A", 8.0, 60.0, 0.0, 0.0),
            slot(1, "Tail B", 7.0, 55.0, 0.0, 0.0),
        ];
        let bowlers = attack();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let innings = simulate_innings(&refs(&order), &refs(&bowlers), 90, None, &mut rng).unwrap();

        assert_eq!(innings.wickets, 1, "order of two ends on the first wicket");
        assert_eq!(innings.fall_of_wickets.len(), 1);
        assert!(innings.overs < 90);
        innings.check_invariants().unwrap();
    }

    // ------------------------------------------------------------------
    // Scripted-draw tests: exact rotation and bookkeeping semantics
    // ------------------------------------------------------------------

    /// Per legal ball the engine consumes three uniform draws:
    /// extra check, dismissal check, run draw.
    const NO_EXTRA: f64 = 0.9;
    const NO_WICKET: f64 = 0.9;
    const ALWAYS_WICKET: f64 = 0.001;

    #[test]
    fn test_single_swaps_strike_and_over_end_swaps_back() {
        // Pattern per over: ball 1 is a single (strike swap), balls 2-6
        // are dots. The end-of-over swap hands the strike back, so the
        // same opener faces ball 1 of every over.
        let order = vec![
            slot(0, "Opener A", 40.0, 100.0, 0.0, 0.0),
            slot(1, "Opener B", 40.0, 100.0, 0.0, 0.0),
        ];
        let bowlers = attack();

        // Draw 0.5 lands in the single band, 0.1 in the dot band, for the
        // normalized distribution of these ratings.
        let mut rng = ScriptRng::cycling(&[
            NO_EXTRA, NO_WICKET, 0.5, // ball 1: single
            NO_EXTRA, NO_WICKET, 0.1, // ball 2: dot
            NO_EXTRA, NO_WICKET, 0.1, // ball 3: dot
            NO_EXTRA, NO_WICKET, 0.1, // ball 4: dot
            NO_EXTRA, NO_WICKET, 0.1, // ball 5: dot
            NO_EXTRA, NO_WICKET, 0.1, // ball 6: dot
        ]);

        let engine = InningsEngine::new("Pair", "Attack", refs(&order), refs(&bowlers), 20)
            .unwrap()
            .with_ball_log();
        let innings = engine.run(&mut rng);

        assert_eq!(innings.score, 20, "one single per over for 20 overs");
        assert_eq!(innings.wickets, 0);
        assert_eq!(innings.overs, 20);
        assert_eq!(innings.extras, 0);

        let a = innings.batting.get(&PlayerId(0)).unwrap();
        let b = innings.batting.get(&PlayerId(1)).unwrap();
        assert_eq!((a.runs, a.balls), (20, 20), "opener A faces only ball 1 of each over");
        assert_eq!((b.runs, b.balls), (0, 100), "opener B soaks up the dots");

        let events = innings.balls_log.as_ref().unwrap();
        assert_eq!(events.len(), 120);
        for over in 0..20u32 {
            let base = (over * 6) as usize;
            assert_eq!(events[base].batter, PlayerId(0), "over {} ball 1", over);
            for ball in 1..6 {
                assert_eq!(events[base + ball].batter, PlayerId(1), "over {} ball {}", over, ball + 1);
            }
        }

        // Round-robin: overs 0,3,..,18 to the first bowler and so on.
        let b0 = innings.bowling.get(&PlayerId(11)).unwrap();
        let b1 = innings.bowling.get(&PlayerId(12)).unwrap();
        let b2 = innings.bowling.get(&PlayerId(13)).unwrap();
        assert_eq!((b0.overs, b0.runs), (7, 7));
        assert_eq!((b1.overs, b1.runs), (7, 7));
        assert_eq!((b2.overs, b2.runs), (6, 6));
    }

    #[test]
    fn test_wicket_every_ball_walks_through_the_order() {
        let order = full_order(); // ids 0..=10
        let bowlers = attack();
        let mut rng = ScriptRng::cycling(&[NO_EXTRA, ALWAYS_WICKET]);

        let engine = InningsEngine::new("Collapse", "Attack", refs(&order), refs(&bowlers), 20)
            .unwrap()
            .with_ball_log();
        let innings = engine.run(&mut rng);

        assert_eq!(innings.wickets, 10);
        assert_eq!(innings.score, 0);
        assert_eq!(innings.overs, 1, "ten wickets take ten balls");
        assert_eq!(innings.balls, 4);

        // The end-of-over swap puts the surviving opener on strike for
        // ball 7; the last man (index 7 at that point) never faces.
        let fall_order: Vec<PlayerId> =
            innings.fall_of_wickets.iter().map(|f| f.batter).collect();
        let expected: Vec<PlayerId> =
            [0u8, 2, 3, 4, 5, 6, 1, 8, 9, 10].iter().map(|i| PlayerId(*i)).collect();
        assert_eq!(fall_order, expected);

        let not_out = innings.batting.get(&PlayerId(7)).unwrap();
        assert_eq!((not_out.runs, not_out.balls), (0, 0));

        let b0 = innings.bowling.get(&PlayerId(11)).unwrap();
        let b1 = innings.bowling.get(&PlayerId(12)).unwrap();
        assert_eq!((b0.overs, b0.wickets), (1, 6));
        assert_eq!((b1.overs, b1.wickets), (0, 4));

        innings.check_invariants().unwrap();
    }

    #[test]
    fn test_extras_do_not_consume_balls() {
        // Wide (extra draw low, wide branch), then the single/dot over
        // pattern. One wide per over cycle: score gains the extra run but
        // the over still takes six legal balls.
        let order = vec![
            slot(0, "Opener A", 40.0, 100.0, 0.0, 0.0),
            slot(1, "Opener B", 40.0, 100.0, 0.0, 0.0),
        ];
        let bowlers = attack();
        let mut rng = ScriptRng::cycling(&[
            0.01, 0.5, // wide (extra check passes, kind draw < 0.7)
            NO_EXTRA, NO_WICKET, 0.1, // ball 1: dot
            NO_EXTRA, NO_WICKET, 0.1, // ball 2: dot
            NO_EXTRA, NO_WICKET, 0.1, // ball 3: dot
            NO_EXTRA, NO_WICKET, 0.1, // ball 4: dot
            NO_EXTRA, NO_WICKET, 0.1, // ball 5: dot
            NO_EXTRA, NO_WICKET, 0.1, // ball 6: dot
        ]);

        let engine = InningsEngine::new("Pair", "Attack", refs(&order), refs(&bowlers), 5)
            .unwrap()
            .with_ball_log();
        let innings = engine.run(&mut rng);

        assert_eq!(innings.overs, 5);
        assert_eq!(innings.extras, 5, "one wide per over");
        assert_eq!(innings.score, 5);
        assert_eq!(innings.bat_runs(), 0);

        let events = innings.balls_log.as_ref().unwrap();
        assert_eq!(events.len(), 35, "six legal balls plus one wide per over");
        let wides = events.iter().filter(|e| !e.outcome.is_legal()).count();
        assert_eq!(wides, 5);
        innings.check_invariants().unwrap();
    }
}
