//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::PossibleMove;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Chosen move, or `None` when the position has no legal moves.
    pub best_move: Option<PossibleMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
