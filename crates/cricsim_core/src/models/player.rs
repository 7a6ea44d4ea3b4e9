use serde::{Deserialize, Serialize};

/// Stable per-match player key (0..10 team A, 11..21 team B).
///
/// Figures inside an innings are keyed by this id, never by name:
/// names are not guaranteed unique across a match. Name lookup happens
/// only at the presentation boundary via [`super::MatchSetupExport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
}

impl Role {
    /// Whether this role is expected to bowl in a standard XI.
    pub fn can_bowl(&self) -> bool {
        matches!(self, Role::Bowler | Role::AllRounder)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Batsman => "batsman",
            Role::Bowler => "bowler",
            Role::AllRounder => "all-rounder",
            Role::WicketKeeper => "wicket-keeper",
        }
    }
}

/// Career rating profile used to parameterize per-ball probabilities.
///
/// Immutable for the duration of a match. Non-positive or missing values
/// are defused by the clamps in `engine::probability`, so these fields
/// never need validation before simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerRatings {
    /// Career batting average (runs per dismissal).
    #[serde(default = "default_batting_average")]
    pub batting_average: f64,
    /// Runs per 100 balls faced.
    #[serde(default = "default_strike_rate")]
    pub strike_rate: f64,
    /// Runs conceded per wicket taken. 0.0 = unrated.
    #[serde(default)]
    pub bowling_average: f64,
    /// Runs conceded per over bowled. 0.0 = unrated.
    #[serde(default)]
    pub economy_rate: f64,
}

fn default_batting_average() -> f64 {
    30.0
}

fn default_strike_rate() -> f64 {
    100.0
}

impl Default for PlayerRatings {
    fn default() -> Self {
        Self {
            batting_average: 30.0,
            strike_rate: 100.0,
            bowling_average: 0.0,
            economy_rate: 0.0,
        }
    }
}

/// Roster entry for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Roster-level identifier (e.g. "IND_BAT1"). Unique within a team.
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(flatten)]
    pub ratings: PlayerRatings,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            ratings: PlayerRatings::default(),
        }
    }

    pub fn with_batting(mut self, average: f64, strike_rate: f64) -> Self {
        self.ratings.batting_average = average;
        self.ratings.strike_rate = strike_rate;
        self
    }

    pub fn with_bowling(mut self, average: f64, economy_rate: f64) -> Self {
        self.ratings.bowling_average = average;
        self.ratings.economy_rate = economy_rate;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
