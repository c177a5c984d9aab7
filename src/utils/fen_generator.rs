//! GameState-to-FEN serializer.
//!
//! Derives FEN's castling-rights, en-passant, and clock fields back out of
//! the per-piece move history, so `parse_fen` and `generate_fen` round-trip.

use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::utils::coordinates::coordinate_to_square;

pub fn generate_fen(game_state: &GameState) -> String {
    let mut fen = String::new();

    for rank in (0..8).rev() {
        let mut empty_run = 0u32;

        for file in 0..8 {
            let piece = game_state.board[file][rank];
            if piece.active {
                if empty_run > 0 {
                    fen.push_str(&empty_run.to_string());
                    empty_run = 0;
                }
                fen.push(piece_to_fen_char(piece.color, piece.kind));
            } else {
                empty_run += 1;
            }
        }

        if empty_run > 0 {
            fen.push_str(&empty_run.to_string());
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match game_state.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push(' ');
    fen.push_str(&castling_rights_field(game_state));

    fen.push(' ');
    fen.push_str(&en_passant_field(game_state));

    let halfmove = game_state
        .move_index
        .saturating_sub(game_state.last_capture_or_pawn_move);
    let fullmove = game_state.move_index / 2;

    fen.push_str(&format!(" {halfmove} {fullmove}"));

    fen
}

fn castling_rights_field(game_state: &GameState) -> String {
    let mut rights = String::new();

    for &(color, rank, symbol_pair) in &[
        (Color::White, 0usize, ['K', 'Q']),
        (Color::Black, 7usize, ['k', 'q']),
    ] {
        let king = game_state.board[4][rank];
        if !is_unmoved(king, color, PieceKind::King) {
            continue;
        }
        if is_unmoved(game_state.board[7][rank], color, PieceKind::Rook) {
            rights.push(symbol_pair[0]);
        }
        if is_unmoved(game_state.board[0][rank], color, PieceKind::Rook) {
            rights.push(symbol_pair[1]);
        }
    }

    if rights.is_empty() {
        "-".to_owned()
    } else {
        rights
    }
}

fn is_unmoved(piece: Piece, color: Color, kind: PieceKind) -> bool {
    piece.active && piece.color == color && piece.kind == kind && piece.move_count == 0
}

fn en_passant_field(game_state: &GameState) -> String {
    let pusher = game_state.side_to_move.opposite();
    let arrival_rank = match pusher {
        Color::White => 3i8,
        Color::Black => 4i8,
    };

    for file in 0..8i8 {
        let piece = game_state.piece_at((file, arrival_rank));
        if piece.active
            && piece.color == pusher
            && piece.kind == PieceKind::Pawn
            && piece.move_count == 1
            && piece.last_move_index == game_state.move_index
        {
            let target = (file, arrival_rank - pusher.pawn_direction());
            return coordinate_to_square(target).to_string();
        }
    }

    "-".to_owned()
}

fn piece_to_fen_char(color: Color, kind: PieceKind) -> char {
    let lower = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match color {
        Color::White => lower.to_ascii_uppercase(),
        Color::Black => lower,
    }
}
