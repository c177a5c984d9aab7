//! Fixed-depth negamax engine.
//!
//! Wraps the core alpha-beta search with the reference configuration:
//! three plies of nominal depth, material scoring, and the mobility/castling
//! positional bonus.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::PossibleMove;
use crate::search::board_scoring::MaterialScorer;
use crate::search::negamax::{choose_move, SearchConfig};

pub struct NegamaxEngine {
    config: SearchConfig,
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
}

impl NegamaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig {
                depth,
                ..SearchConfig::default()
            },
            move_generator: LegalMoveGenerator::new(),
            scorer: MaterialScorer,
        }
    }

    /// Engine with deterministic move ordering, for reproducible tests.
    pub fn with_seed(depth: u8, seed: u64) -> Self {
        Self {
            config: SearchConfig {
                depth,
                ..SearchConfig::default()
            },
            move_generator: LegalMoveGenerator::with_seed(seed),
            scorer: MaterialScorer,
        }
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().depth)
    }
}

impl Engine for NegamaxEngine {
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        // Honor explicit depth overrides; otherwise use the configured depth.
        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth).max(1),
            ..self.config
        };

        let result = choose_move(game_state, &mut self.move_generator, &self.scorer, &config);

        let mut out = EngineOutput::default();
        out.best_move = result.best_move;
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            config.depth, result.best_score, result.nodes
        ));
        Ok(out)
    }
}

/// Pick a move for the side to move with the reference search depth and
/// heuristic weights. Returns `None` only on a terminal position; callers
/// are expected to check checkmate/draw first.
pub fn computer_move(game_state: &GameState) -> Option<PossibleMove> {
    let mut generator = LegalMoveGenerator::new();
    choose_move(
        game_state,
        &mut generator,
        &MaterialScorer,
        &SearchConfig::default(),
    )
    .best_move
}

#[cfg(test)]
mod tests {
    use super::NegamaxEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::chess_rules::is_checkmate;
    use crate::game_state::game_state::GameState;

    #[test]
    fn honors_go_depth_override() {
        let game = GameState::new_game();
        let mut engine = NegamaxEngine::with_seed(3, 5);
        let params = GoParams { depth: Some(1) };

        let out = engine
            .choose_move(&game, &params)
            .expect("engine should choose a move");

        assert!(out.best_move.is_some());
        let joined = out.info_lines.join("\n");
        assert!(joined.contains("info depth 1"), "expected depth-1 info");
    }

    #[test]
    fn engine_delivers_mate_in_one() {
        let game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1")
            .expect("FEN should parse");
        let mut engine = NegamaxEngine::with_seed(2, 17);

        let out = engine
            .choose_move(&game, &GoParams::default())
            .expect("engine should choose a move");
        let best = out.best_move.expect("a move must exist");
        assert!(is_checkmate(&best.game_after_move));
    }
}
