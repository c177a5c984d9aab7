//! Helpers shared by the per-path legal move generators.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::{MoveDescription, PossibleMove};

/// Final legality gate for a candidate state.
///
/// `next` must still have `side_to_move` set to the mover so the check test
/// looks at the mover's own king. A candidate that leaves that king targeted
/// is discarded; otherwise the turn passes to the opponent, the resulting
/// position is recorded in the repetition history, and the move is emitted.
pub(crate) fn push_if_legal(
    mut next: GameState,
    move_description: MoveDescription,
    out: &mut Vec<PossibleMove>,
) {
    if is_king_in_check(&next) {
        return;
    }

    next.side_to_move = next.side_to_move.opposite();
    next.record_repetition();

    out.push(PossibleMove {
        move_description,
        game_after_move: next,
    });
}
