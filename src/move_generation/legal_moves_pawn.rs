//! Pawn move generation: pushes, captures, promotions, and en passant.

use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::push_if_legal;
use crate::move_generation::move_generator::{MoveDescription, PossibleMove};
use crate::utils::coordinates::{
    coordinate_to_square, is_valid_coordinate, square_to_coordinate, Coordinate, Square,
};

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

pub fn pawn_moves(
    game_state: &GameState,
    pawn: Piece,
    pawn_square: Square,
    out: &mut Vec<PossibleMove>,
) {
    pawn_advance_and_capture_moves(game_state, pawn, pawn_square, out);
    pawn_en_passant_moves(game_state, pawn, pawn_square, out);
}

/// Forward pushes, diagonal captures, and their promotion expansions.
fn pawn_advance_and_capture_moves(
    game_state: &GameState,
    pawn: Piece,
    pawn_square: Square,
    out: &mut Vec<PossibleMove>,
) {
    let from = square_to_coordinate(pawn_square);
    let direction = pawn.color.pawn_direction();

    let mut potential_dests: Vec<Coordinate> = Vec::with_capacity(4);

    let forward_one = (from.0, from.1 + direction);
    if is_valid_coordinate(forward_one) && !game_state.piece_at(forward_one).active {
        potential_dests.push(forward_one);

        let forward_two = (from.0, from.1 + 2 * direction);
        if pawn.move_count == 0
            && is_valid_coordinate(forward_two)
            && !game_state.piece_at(forward_two).active
        {
            potential_dests.push(forward_two);
        }
    }

    for file_delta in [-1i8, 1i8] {
        let capture_dest = (from.0 + file_delta, from.1 + direction);
        if !is_valid_coordinate(capture_dest) {
            continue;
        }
        let capture_piece = game_state.piece_at(capture_dest);
        if capture_piece.active && capture_piece.color != game_state.side_to_move {
            potential_dests.push(capture_dest);
        }
    }

    for dest in potential_dests {
        // A pawn reaching the back rank becomes four promotion variants
        // instead of one pawn move.
        let resulting_kinds: &[PieceKind] = if dest.1 == 0 || dest.1 == 7 {
            &PROMOTION_KINDS
        } else {
            &[PieceKind::Pawn]
        };

        let dest_piece = game_state.piece_at(dest);
        for &resulting_kind in resulting_kinds {
            let dangerous = (dest_piece.active
                && dest_piece.color != game_state.side_to_move
                && pawn.kind.value() >= dest_piece.kind.value())
                || resulting_kind != PieceKind::Pawn;

            let mut next = game_state.clone();
            next.move_index = game_state.move_index + 1;
            next.last_capture_or_pawn_move = game_state.move_index + 1;

            next.piece_at_mut(from).active = false;
            let mut moved = pawn;
            moved.kind = resulting_kind;
            moved.move_count = pawn.move_count + 1;
            moved.last_move_index = game_state.move_index + 1;
            *next.piece_at_mut(dest) = moved;

            push_if_legal(
                next,
                MoveDescription {
                    source: pawn_square,
                    dest: coordinate_to_square(dest),
                    resulting_piece: resulting_kind,
                    dangerous,
                },
                out,
            );
        }
    }
}

/// En passant: only from the rank next to the opponent's double-push arrival,
/// and only on the ply immediately after an adjacent enemy pawn double-moved.
fn pawn_en_passant_moves(
    game_state: &GameState,
    pawn: Piece,
    pawn_square: Square,
    out: &mut Vec<PossibleMove>,
) {
    let from = square_to_coordinate(pawn_square);
    let direction = pawn.color.pawn_direction();

    let capture_rank = match pawn.color {
        Color::White => 4i8,
        Color::Black => 3i8,
    };
    if from.1 != capture_rank {
        return;
    }

    for file_delta in [-1i8, 1i8] {
        let adjacent = (from.0 + file_delta, from.1);
        if !is_valid_coordinate(adjacent) {
            continue;
        }

        let adjacent_piece = game_state.piece_at(adjacent);
        let just_double_pushed = adjacent_piece.active
            && adjacent_piece.color != game_state.side_to_move
            && adjacent_piece.kind == PieceKind::Pawn
            && adjacent_piece.last_move_index == game_state.move_index
            && adjacent_piece.move_count == 1;
        if !just_double_pushed {
            continue;
        }

        let dest = (from.0 + file_delta, from.1 + direction);

        let mut next = game_state.clone();
        next.move_index = game_state.move_index + 1;
        next.last_capture_or_pawn_move = game_state.move_index + 1;

        next.piece_at_mut(from).active = false;
        let mut moved = pawn;
        moved.move_count = pawn.move_count + 1;
        moved.last_move_index = game_state.move_index + 1;
        *next.piece_at_mut(dest) = moved;

        // The captured pawn is not on the destination square.
        next.piece_at_mut(adjacent).active = false;

        push_if_legal(
            next,
            MoveDescription {
                source: pawn_square,
                dest: coordinate_to_square(dest),
                resulting_piece: PieceKind::Pawn,
                dangerous: false,
            },
            out,
        );
    }
}
