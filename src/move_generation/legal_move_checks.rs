//! King location and square-targeting checks.
//!
//! `is_square_targeted` answers "can the side NOT to move reach this square
//! in one move", ignoring pins on the attacker; that is exactly what king
//! safety and castling-path validation need.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::utils::coordinates::{
    coordinate_to_square, is_valid_coordinate, simplified_direction_vector, square_to_coordinate,
    Square,
};

/// Square of the side-to-move's king.
pub fn king_square(game_state: &GameState) -> Option<Square> {
    for file in 0..8i8 {
        for rank in 0..8i8 {
            let piece = game_state.piece_at((file, rank));
            if piece.active
                && piece.kind == PieceKind::King
                && piece.color == game_state.side_to_move
            {
                return Some(coordinate_to_square((file, rank)));
            }
        }
    }
    None
}

#[inline]
pub fn is_king_in_check(game_state: &GameState) -> bool {
    match king_square(game_state) {
        Some(square) => is_square_targeted(game_state, square),
        None => false,
    }
}

/// True iff some active piece of the side NOT to move can reach
/// `target_square` in one move. Attacker pins are irrelevant here.
pub fn is_square_targeted(game_state: &GameState, target_square: Square) -> bool {
    let target = square_to_coordinate(target_square);

    for file in 0..8i8 {
        for rank in 0..8i8 {
            let piece = game_state.piece_at((file, rank));
            if !piece.active || piece.color == game_state.side_to_move {
                continue;
            }

            let coordinate = (file, rank);

            if piece.kind != PieceKind::Pawn {
                let needed_direction = simplified_direction_vector(coordinate, target);
                if !piece
                    .kind
                    .attack_directions()
                    .contains(&needed_direction)
                {
                    continue;
                }

                // Walk outward along the matching direction until blocked.
                for step in 1..=piece.kind.attack_range() {
                    let dest = (
                        coordinate.0 + step * needed_direction.0,
                        coordinate.1 + step * needed_direction.1,
                    );
                    if !is_valid_coordinate(dest) {
                        break;
                    }

                    let dest_piece = game_state.piece_at(dest);
                    if dest_piece.active && dest_piece.color != game_state.side_to_move {
                        // Another attacker-side piece blocks the line.
                        break;
                    }

                    if dest == target {
                        return true;
                    }

                    if dest_piece.active && dest_piece.color == game_state.side_to_move {
                        break;
                    }
                }
            } else {
                let direction = piece.color.pawn_direction();
                for file_delta in [-1i8, 1i8] {
                    if (coordinate.0 + file_delta, coordinate.1 + direction) == target {
                        return true;
                    }
                }
            }
        }
    }

    false
}
