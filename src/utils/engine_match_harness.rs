//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any I/O
//! protocol, classifying the result with the terminal-state rules.

use std::time::Instant;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_rules::{
    is_checkmate, is_fifty_move_rule, is_insufficient_material, is_stalemate,
    is_threefold_repetition,
};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawRepetition,
    DrawFiftyMoveRule,
    DrawInsufficientMaterial,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves_lan: Vec<String>,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

pub fn run_match<'a>(
    white: &'a mut dyn Engine,
    black: &'a mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let mut game_state = GameState::new_game();
    let mut played_moves_lan = Vec::new();
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    white.new_game();
    black.new_game();

    let outcome = loop {
        if is_checkmate(&game_state) {
            break match game_state.side_to_move {
                Color::White => MatchOutcome::BlackWinCheckmate,
                Color::Black => MatchOutcome::WhiteWinCheckmate,
            };
        }
        if is_stalemate(&game_state) {
            break MatchOutcome::DrawStalemate;
        }
        if is_threefold_repetition(&game_state) {
            break MatchOutcome::DrawRepetition;
        }
        if is_fifty_move_rule(&game_state) {
            break MatchOutcome::DrawFiftyMoveRule;
        }
        if is_insufficient_material(&game_state) {
            break MatchOutcome::DrawInsufficientMaterial;
        }
        if played_moves_lan.len() >= usize::from(config.max_plies) {
            break MatchOutcome::DrawMaxPlies;
        }

        let mover_is_white = game_state.side_to_move == Color::White;
        let engine = if mover_is_white {
            &mut *white
        } else {
            &mut *black
        };

        let started = Instant::now();
        let output = engine.choose_move(&game_state, &config.go_params)?;
        let elapsed = started.elapsed().as_nanos();
        if mover_is_white {
            white_total_time_ns += elapsed;
        } else {
            black_total_time_ns += elapsed;
        }

        let chosen = output
            .best_move
            .ok_or("engine returned no move in a non-terminal position")?;

        played_moves_lan.push(chosen.move_description.to_string());
        game_state = chosen.game_after_move;
    };

    Ok(MatchResult {
        outcome,
        final_state: game_state,
        played_moves_lan,
        white_total_time_ns,
        black_total_time_ns,
    })
}

#[cfg(test)]
mod tests {
    use super::{run_match, MatchConfig, MatchOutcome};
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn ply_capped_match_completes_with_a_classified_outcome() {
        let mut white = RandomEngine::with_seed(21);
        let mut black = RandomEngine::with_seed(22);
        let config = MatchConfig {
            max_plies: 3,
            ..MatchConfig::default()
        };

        let result =
            run_match(&mut white, &mut black, &config).expect("match should complete");

        // No mate is reachable inside three plies from the start.
        assert_eq!(result.outcome, MatchOutcome::DrawMaxPlies);
        assert_eq!(result.played_moves_lan.len(), 3);
        assert_eq!(result.final_state.move_index, 5);
    }
}
