//! Game-ending rules: checkmate, stalemate, and the draw family.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// No legal moves and the king is not under attack.
pub fn is_stalemate(game_state: &GameState) -> bool {
    !is_king_in_check(game_state) && !has_any_legal_move(game_state)
}

/// No legal moves and the king is under attack.
pub fn is_checkmate(game_state: &GameState) -> bool {
    is_king_in_check(game_state) && !has_any_legal_move(game_state)
}

/// Some position signature has now occurred three or more times.
pub fn is_threefold_repetition(game_state: &GameState) -> bool {
    game_state
        .repetition_counts
        .values()
        .any(|&count| count >= 3)
}

/// One hundred half-moves without a capture or pawn move.
pub fn is_fifty_move_rule(game_state: &GameState) -> bool {
    game_state
        .move_index
        .saturating_sub(game_state.last_capture_or_pawn_move)
        >= 100
}

/// Non-king material summary used by the insufficient-material test.
/// Bishops are distinguished by the shade of square they stand on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NonKingMaterial {
    Knight,
    Bishop { dark_squared: bool },
    Major,
}

/// Conservative insufficient-material detection: two lone kings, a lone king
/// versus king plus one minor piece, or same-shade bishop versus bishop.
/// Other theoretically drawn balances (for example two knights against a lone
/// king) are not flagged.
pub fn is_insufficient_material(game_state: &GameState) -> bool {
    let mut white = Vec::new();
    let mut black = Vec::new();

    for file in 0..8i8 {
        for rank in 0..8i8 {
            let piece = game_state.piece_at((file, rank));
            if !piece.active || piece.kind == PieceKind::King {
                continue;
            }

            let item = match piece.kind {
                PieceKind::Knight => NonKingMaterial::Knight,
                PieceKind::Bishop => NonKingMaterial::Bishop {
                    dark_squared: (file + rank) % 2 == 0,
                },
                _ => NonKingMaterial::Major,
            };

            match piece.color {
                Color::White => white.push(item),
                Color::Black => black.push(item),
            }
        }
    }

    let (smaller, larger) = if white.len() < black.len() {
        (white, black)
    } else {
        (black, white)
    };

    if smaller.is_empty() {
        match larger.len() {
            0 => true,
            1 => matches!(
                larger[0],
                NonKingMaterial::Knight | NonKingMaterial::Bishop { .. }
            ),
            _ => false,
        }
    } else if smaller.len() == 1 && larger.len() == 1 {
        matches!(
            (smaller[0], larger[0]),
            (
                NonKingMaterial::Bishop { dark_squared: a },
                NonKingMaterial::Bishop { dark_squared: b },
            ) if a == b
        )
    } else {
        false
    }
}

pub fn is_draw(game_state: &GameState) -> bool {
    is_stalemate(game_state)
        || is_threefold_repetition(game_state)
        || is_fifty_move_rule(game_state)
        || is_insufficient_material(game_state)
}
