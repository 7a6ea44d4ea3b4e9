pub mod innings;
pub mod match_result;
pub mod match_setup;
pub mod player;
pub mod team;

pub use innings::{
    BallEvent, BattingCard, BowlingFigures, FallOfWicket, InningsState, BALLS_PER_OVER,
    WICKETS_PER_INNINGS,
};
pub use match_result::{
    MatchFormat, MatchResult, MatchStatus, PlayerPerformance, Scoreline, Toss, TossDecision,
};
pub use match_setup::{MatchSetup, RosterSlot, TeamSheet, TeamSide, TEAM_B_ID_OFFSET};
pub use player::{Player, PlayerId, PlayerRatings, Role};
pub use team::{Team, PLAYING_XI};
