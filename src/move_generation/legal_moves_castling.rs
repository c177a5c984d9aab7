//! Castling move generation.
//!
//! Tried only for a king that has never moved. Both the queenside ('a' file)
//! and kingside ('h' file) rooks are probed; each castle relocates king and
//! rook atomically and leaves the capture/pawn-move counter untouched.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_targeted;
use crate::move_generation::legal_move_shared::push_if_legal;
use crate::move_generation::move_generator::{MoveDescription, PossibleMove};
use crate::utils::coordinates::{coordinate_to_square, square_to_coordinate, Square};

const KING_FILE: i8 = 4;

pub fn castling_moves(
    game_state: &GameState,
    king: Piece,
    king_square: Square,
    out: &mut Vec<PossibleMove>,
) {
    let king_coordinate = square_to_coordinate(king_square);
    let rank = king_coordinate.1;

    for rook_file in [0i8, 7i8] {
        let rook_piece = game_state.piece_at((rook_file, rank));
        if !(rook_piece.active
            && rook_piece.color == game_state.side_to_move
            && rook_piece.kind == PieceKind::Rook
            && rook_piece.move_count == 0)
        {
            continue;
        }

        let king_dest_file = if rook_file == 0 { 2i8 } else { 6i8 };
        let rook_dest_file = if rook_file == 0 { 3i8 } else { 5i8 };

        let mut can_castle = !is_square_targeted(game_state, king_square);

        // No piece may occupy any square strictly between king and rook.
        let (low, high) = if rook_file < KING_FILE {
            (rook_file, KING_FILE)
        } else {
            (KING_FILE, rook_file)
        };
        for file in low + 1..high {
            if game_state.piece_at((file, rank)).active {
                can_castle = false;
            }
        }

        // The king may not pass through or land on a targeted square.
        let (path_low, path_high) = if king_dest_file < KING_FILE {
            (king_dest_file, KING_FILE)
        } else {
            (KING_FILE, king_dest_file)
        };
        for file in path_low..=path_high {
            if is_square_targeted(game_state, coordinate_to_square((file, rank))) {
                can_castle = false;
            }
        }

        if !can_castle {
            continue;
        }

        let mut next = game_state.clone();
        next.move_index = game_state.move_index + 1;
        *next.castling_advantage_mut(game_state.side_to_move) = 1;
        // Castling is neither a capture nor a pawn move; the fifty-move
        // counter carries over unchanged from the cloned state.

        next.piece_at_mut(king_coordinate).active = false;
        let mut moved_king = king;
        moved_king.move_count = king.move_count + 1;
        moved_king.last_move_index = game_state.move_index + 1;
        *next.piece_at_mut((king_dest_file, rank)) = moved_king;

        next.piece_at_mut((rook_file, rank)).active = false;
        let mut moved_rook = rook_piece;
        moved_rook.move_count = rook_piece.move_count + 1;
        moved_rook.last_move_index = game_state.move_index + 1;
        *next.piece_at_mut((rook_dest_file, rank)) = moved_rook;

        push_if_legal(
            next,
            MoveDescription {
                source: king_square,
                dest: coordinate_to_square((king_dest_file, rank)),
                resulting_piece: PieceKind::King,
                dangerous: false,
            },
            out,
        );
    }
}
