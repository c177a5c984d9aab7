//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the square array for debugging,
//! tests, and diagnostics in text environments.

use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            let piece = game_state.board[file][rank];
            if piece.active {
                out.push(piece_to_unicode(piece.color, piece.kind));
            } else {
                out.push('·');
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn renders_starting_position_frame() {
        let rendered = render_game_state(&GameState::new_game());

        assert!(rendered.starts_with("  a b c d e f g h\n"));
        assert!(rendered.ends_with("  a b c d e f g h"));
        assert!(rendered.contains('♔'));
        assert!(rendered.contains('♚'));
        assert_eq!(rendered.lines().count(), 10);
    }
}
