//! Text scorecard and commentary rendering.
//!
//! This is the name-keyed presentation boundary: everything below
//! resolves player ids through the result's embedded setup.

use cricsim_core::models::{InningsState, TeamSide};
use cricsim_core::{MatchResult, Team};

const RULE: &str = "======================================================================";
const THIN: &str = "----------------------------------------------------------------------";

pub fn print_scorecard(result: &MatchResult) {
    println!("\n{RULE}");
    println!(
        "{} vs {}  ({})",
        result.team_name(TeamSide::A),
        result.team_name(TeamSide::B),
        result.format.label()
    );
    if let Some(venue) = &result.venue {
        println!("Venue: {venue}");
    }
    println!(
        "Toss: {} won and elected to {}",
        result.team_name(result.toss.winner),
        match result.toss.decision {
            cricsim_core::TossDecision::Bat => "bat",
            cricsim_core::TossDecision::Bowl => "bowl",
        }
    );
    println!("{RULE}");

    print_innings(result, &result.innings1, result.first_batting);
    print_innings(result, &result.innings2, result.first_batting.other());

    println!("\n{RULE}");
    println!("RESULT: {}", result.result_text);
    if let Some(name) = &result.player_of_match_name {
        println!("Player of the Match: {name}");
    }
    println!("{RULE}\n");
}

fn print_innings(result: &MatchResult, innings: &InningsState, batting: TeamSide) {
    let batting_sheet = result.setup.sheet(batting);
    let bowling_sheet = result.setup.sheet(batting.other());

    println!(
        "\n{} Innings: {}/{} ({:.1} overs)",
        batting_sheet.name,
        innings.score,
        innings.wickets,
        innings.overs_float()
    );
    println!("{THIN}");

    // Batting card in batting order; players who never came in are skipped.
    for id in &batting_sheet.batting_order {
        if let Some(card) = innings.batting.get(id) {
            println!(
                "  {:<28} {:>4} ({} balls, SR {:.1})",
                result.setup.player_name(*id),
                card.runs,
                card.balls,
                card.strike_rate()
            );
        }
    }
    println!("  {:<28} {:>4}", "Extras", innings.extras);

    if !innings.fall_of_wickets.is_empty() {
        let falls: Vec<String> = innings
            .fall_of_wickets
            .iter()
            .map(|f| format!("{}/{} ({})", f.score, f.wicket, result.setup.player_name(f.batter)))
            .collect();
        println!("  Fall of wickets: {}", falls.join(", "));
    }

    println!("  Bowling:");
    for id in &bowling_sheet.bowlers {
        if let Some(figures) = innings.bowling.get(id) {
            println!(
                "    {:<26} {:>2}-{:<3}-{:<2} (econ {:.2})",
                result.setup.player_name(*id),
                figures.overs,
                figures.runs,
                figures.wickets,
                figures.economy()
            );
        }
    }
}

pub fn print_commentary(result: &MatchResult) {
    for (innings, batting) in [
        (&result.innings1, result.first_batting),
        (&result.innings2, result.first_batting.other()),
    ] {
        let Some(events) = innings.balls_log.as_ref() else {
            continue;
        };
        println!("\n{RULE}");
        println!("{} Innings", result.team_name(batting));
        println!("{RULE}");
        for event in events {
            println!(
                "{}.{} {} to {}: {} - {}/{}",
                event.over,
                event.ball,
                result.setup.player_name(event.bowler),
                result.setup.player_name(event.batter),
                event.outcome,
                event.score,
                event.wickets
            );
        }
    }
}

pub fn print_roster(team: &Team) {
    println!("\n{} ({} players)", team.name, team.players.len());
    println!("{THIN}");
    for (i, player) in team.batting_order().iter().enumerate() {
        println!(
            "{:>2}. {:<26} ({:<13}) Avg: {:.1}, SR: {:.1}",
            i + 1,
            player.name,
            player.role.label(),
            player.ratings.batting_average,
            player.ratings.strike_rate
        );
    }
    let bowlers = team.bowlers();
    if !bowlers.is_empty() {
        println!("  Bowling options:");
        for player in bowlers {
            println!(
                "      {:<26} Avg: {:.1}, Econ: {:.1}",
                player.name,
                player.ratings.bowling_average,
                player.ratings.economy_rate
            );
        }
    }
}
