//! Generated-move payload types and the generator seam.

use std::fmt;

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::utils::coordinates::Square;

/// One candidate move in source/destination form.
///
/// `resulting_piece` is the kind occupying the destination afterwards; it
/// differs from the moving piece only for pawn promotions. `dangerous` marks
/// promotions and captures where the mover's value is at least the captured
/// piece's value; the search extends past its nominal horizon along such
/// moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    pub source: Square,
    pub dest: Square,
    pub resulting_piece: PieceKind,
    pub dangerous: bool,
}

impl fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

/// A legal move together with the snapshot it produces.
#[derive(Debug, Clone)]
pub struct PossibleMove {
    pub move_description: MoveDescription,
    pub game_after_move: GameState,
}

/// Seam behind which move generation (and its ordering policy) is selected.
///
/// `&mut self` because implementations own the random source that breaks
/// ordering ties.
pub trait MoveGenerator: Send {
    fn generate_legal_moves(&mut self, game_state: &GameState) -> Vec<PossibleMove>;
}
