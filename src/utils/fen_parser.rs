//! FEN-to-GameState parser.
//!
//! Builds a fully-populated board snapshot from a Forsyth-Edwards Notation
//! string. FEN's castling-rights, en-passant, and clock fields are mapped
//! onto the per-piece `move_count`/`last_move_index` history this engine
//! derives those rules from.

use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::utils::coordinates::{algebraic_to_square, is_valid_coordinate, square_to_coordinate};

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;

    let fullmove = fullmove_part
        .parse::<u32>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?
        .max(1);
    let halfmove = halfmove_part
        .parse::<u32>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;

    // The ply counter starts at 2 * fullmove so that placeholder history
    // indices (1) on already-moved pieces always predate it.
    game_state.move_index = 2 * fullmove + game_state.side_to_move.index() as u32;
    game_state.last_capture_or_pawn_move = game_state.move_index.saturating_sub(halfmove);

    mark_unmoved_pawns(&mut game_state);
    apply_castling_rights(castling_part, &mut game_state)?;
    apply_en_passant_square(en_passant_part, &mut game_state)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7usize.saturating_sub(fen_rank_idx);
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=8).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += step;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if file >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            // Everything starts out marked as already moved; the rights and
            // pawn-rank passes below clear the pieces that provably have not.
            game_state.board[file][board_rank] = Piece {
                active: true,
                color,
                kind,
                move_count: 1,
                last_move_index: 1,
            };
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

/// A pawn still on its color's starting rank cannot have moved.
fn mark_unmoved_pawns(game_state: &mut GameState) {
    for file in 0..8 {
        for &(color, rank) in &[(Color::White, 1usize), (Color::Black, 6usize)] {
            let piece = &mut game_state.board[file][rank];
            if piece.active && piece.color == color && piece.kind == PieceKind::Pawn {
                piece.move_count = 0;
                piece.last_move_index = 0;
            }
        }
    }
}

fn apply_castling_rights(castling_part: &str, game_state: &mut GameState) -> Result<(), String> {
    if castling_part == "-" {
        return Ok(());
    }

    for ch in castling_part.chars() {
        let (color, rook_file) = match ch {
            'K' => (Color::White, 7usize),
            'Q' => (Color::White, 0usize),
            'k' => (Color::Black, 7usize),
            'q' => (Color::Black, 0usize),
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        };

        let rank = match color {
            Color::White => 0usize,
            Color::Black => 7usize,
        };

        let king = game_state.board[4][rank];
        let rook = game_state.board[rook_file][rank];

        // A right whose king or rook is missing from its home square is
        // ignored rather than rejected.
        if king.active
            && king.color == color
            && king.kind == PieceKind::King
            && rook.active
            && rook.color == color
            && rook.kind == PieceKind::Rook
        {
            mark_unmoved(&mut game_state.board[4][rank]);
            mark_unmoved(&mut game_state.board[rook_file][rank]);
        }
    }

    Ok(())
}

fn mark_unmoved(piece: &mut Piece) {
    piece.move_count = 0;
    piece.last_move_index = 0;
}

fn apply_en_passant_square(
    en_passant_part: &str,
    game_state: &mut GameState,
) -> Result<(), String> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let target = square_to_coordinate(algebraic_to_square(en_passant_part)?);
    let pusher = game_state.side_to_move.opposite();
    let pawn_coordinate = (target.0, target.1 + pusher.pawn_direction());

    if !is_valid_coordinate(pawn_coordinate) {
        return Err(format!("Invalid en-passant square: {en_passant_part}"));
    }

    let move_index = game_state.move_index;
    let pawn = game_state.piece_at_mut(pawn_coordinate);
    if pawn.active && pawn.color == pusher && pawn.kind == PieceKind::Pawn {
        // Make the pawn read as having just double-pushed.
        pawn.move_count = 1;
        pawn.last_move_index = move_index;
    }

    Ok(())
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
