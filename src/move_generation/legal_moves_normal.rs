//! Sliding and stepping moves for every non-pawn piece.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_if_legal;
use crate::move_generation::move_generator::{MoveDescription, PossibleMove};
use crate::utils::coordinates::{
    coordinate_to_square, is_valid_coordinate, square_to_coordinate, Square,
};

/// Walk each attack direction up to the piece's slide range, stopping at the
/// first blocker. A friendly blocker ends the walk before it; an enemy
/// blocker is included as a capture and then ends it.
pub fn normal_piece_moves(
    game_state: &GameState,
    piece: Piece,
    square: Square,
    out: &mut Vec<PossibleMove>,
) {
    let from = square_to_coordinate(square);

    for &direction in piece.kind.attack_directions() {
        for step in 1..=piece.kind.attack_range() {
            let dest = (from.0 + step * direction.0, from.1 + step * direction.1);
            if !is_valid_coordinate(dest) {
                break;
            }

            let dest_piece = game_state.piece_at(dest);
            if dest_piece.active && dest_piece.color == game_state.side_to_move {
                break;
            }
            let is_capture = dest_piece.active;

            let mut next = game_state.clone();
            next.move_index = game_state.move_index + 1;

            let mut dangerous = false;
            if is_capture {
                next.last_capture_or_pawn_move = game_state.move_index + 1;
                dangerous = piece.kind.value() >= dest_piece.kind.value();
            }

            next.piece_at_mut(from).active = false;
            let mut moved = piece;
            moved.move_count = piece.move_count + 1;
            moved.last_move_index = game_state.move_index + 1;
            *next.piece_at_mut(dest) = moved;

            // An unmoved king leaving its square forfeits castling, whether
            // or not this particular move is a capture or retreat.
            if piece.kind == PieceKind::King && piece.move_count == 0 {
                *next.castling_advantage_mut(game_state.side_to_move) = -1;
            }

            push_if_legal(
                next,
                MoveDescription {
                    source: square,
                    dest: coordinate_to_square(dest),
                    resulting_piece: piece.kind,
                    dangerous,
                },
                out,
            );

            if is_capture {
                break;
            }
        }
    }
}
