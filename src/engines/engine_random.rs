//! Random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! harness testing, and low-strength gameplay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator::with_seed(seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut legal_moves = self.move_generator.generate_legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let picked = self.rng.random_range(0..legal_moves.len());
        out.best_move = Some(legal_moves.swap_remove(picked));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::game_state::GameState;

    #[test]
    fn returns_some_legal_move_from_the_start() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(11);

        let out = engine
            .choose_move(&game, &GoParams::default())
            .expect("engine should choose a move");
        assert!(out.best_move.is_some());
    }

    #[test]
    fn returns_none_on_a_terminal_position() {
        let game = GameState::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .expect("FEN should parse");
        let mut engine = RandomEngine::with_seed(11);

        let out = engine
            .choose_move(&game, &GoParams::default())
            .expect("engine should not error");
        assert!(out.best_move.is_none());
    }
}
