//! Demo binary: plays a short engine-versus-engine match and prints the
//! final board and outcome.

use quince_chess::engines::engine_negamax::NegamaxEngine;
use quince_chess::engines::engine_random::RandomEngine;
use quince_chess::utils::engine_match_harness::{run_match, MatchConfig, MatchOutcome};
use quince_chess::utils::render_game_state::render_game_state;

fn main() {
    let mut white = NegamaxEngine::new(2);
    let mut black = RandomEngine::new();

    let config = MatchConfig {
        max_plies: 120,
        ..MatchConfig::default()
    };

    match run_match(&mut white, &mut black, &config) {
        Ok(result) => {
            println!("{}", render_game_state(&result.final_state));
            println!();
            println!("outcome: {}", describe_outcome(result.outcome));
            println!("plies played: {}", result.played_moves_lan.len());
            println!("moves: {}", result.played_moves_lan.join(" "));
            println!(
                "think time: white {} ms, black {} ms",
                result.white_total_time_ns / 1_000_000,
                result.black_total_time_ns / 1_000_000
            );
        }
        Err(message) => {
            eprintln!("match failed: {message}");
            std::process::exit(1);
        }
    }
}

fn describe_outcome(outcome: MatchOutcome) -> &'static str {
    match outcome {
        MatchOutcome::WhiteWinCheckmate => "white wins by checkmate",
        MatchOutcome::BlackWinCheckmate => "black wins by checkmate",
        MatchOutcome::DrawStalemate => "draw by stalemate",
        MatchOutcome::DrawRepetition => "draw by threefold repetition",
        MatchOutcome::DrawFiftyMoveRule => "draw by the fifty-move rule",
        MatchOutcome::DrawInsufficientMaterial => "draw by insufficient material",
        MatchOutcome::DrawMaxPlies => "draw by ply cap",
    }
}
