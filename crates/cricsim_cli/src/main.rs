//! Cricket match simulation CLI.
//!
//! Loads rosters (embedded samples or a JSON file), runs a seeded match,
//! and prints the scorecard. `--commentary` replays the ball-by-ball log.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cricsim_cli::scorecard;
use cricsim_core::data::{load_teams_from_path, team_by_name};
use cricsim_core::{MatchEngine, MatchFormat, MatchPlan, Team};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cricsim")]
#[command(about = "Simulate cricket matches ball by ball", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a match between two teams
    Simulate {
        /// First team name
        #[arg(long)]
        team_a: String,

        /// Second team name
        #[arg(long)]
        team_b: String,

        /// Match format
        #[arg(long, value_enum, default_value = "t20")]
        format: CliFormat,

        /// Seed for the random stream (derived from the clock if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Team data JSON file (embedded sample teams if omitted)
        #[arg(long)]
        teams: Option<PathBuf>,

        /// Venue shown on the scorecard
        #[arg(long)]
        venue: Option<String>,

        /// Print ball-by-ball commentary
        #[arg(long, default_value = "false")]
        commentary: bool,

        /// Print the raw MatchResult JSON instead of a scorecard
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List available teams and their rosters
    Teams {
        /// Team data JSON file (embedded sample teams if omitted)
        #[arg(long)]
        teams: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliFormat {
    T20,
    Odi,
    Test,
}

impl From<CliFormat> for MatchFormat {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::T20 => MatchFormat::T20,
            CliFormat::Odi => MatchFormat::ODI,
            CliFormat::Test => MatchFormat::Test,
        }
    }
}

fn load_teams(path: Option<&PathBuf>) -> Result<Vec<Team>> {
    match path {
        Some(path) => load_teams_from_path(path)
            .with_context(|| format!("loading teams from {}", path.display())),
        None => Ok(cricsim_core::data::default_teams().to_vec()),
    }
}

fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            team_a,
            team_b,
            format,
            seed,
            teams,
            venue,
            commentary,
            json,
        } => {
            anyhow::ensure!(
                !team_a.eq_ignore_ascii_case(&team_b),
                "a team cannot play itself"
            );

            let pool = load_teams(teams.as_ref())?;
            let side_a = team_by_name(&pool, &team_a)?.clone();
            let side_b = team_by_name(&pool, &team_b)?.clone();

            let seed = seed.unwrap_or_else(clock_seed);
            let format: MatchFormat = format.into();
            let match_id = format!("{}-vs-{}-{}", side_a.id, side_b.id, seed);

            let mut plan = MatchPlan::new(match_id, side_a, side_b, format, seed);
            plan.venue = venue;

            let mut engine = MatchEngine::new(plan)?;
            if commentary {
                engine = engine.with_ball_log();
            }
            let result = engine.simulate()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                if commentary {
                    scorecard::print_commentary(&result);
                }
                scorecard::print_scorecard(&result);
                println!("(seed {} replays this match)", seed);
            }
        }

        Commands::Teams { teams } => {
            let pool = load_teams(teams.as_ref())?;
            for team in &pool {
                scorecard::print_roster(team);
            }
        }
    }

    Ok(())
}
