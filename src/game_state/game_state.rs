//! Snapshot board state representation.
//!
//! `GameState` is the central model for the engine. Every candidate move
//! produces a brand-new `GameState`; nothing is mutated in place once a state
//! has been handed to move generation or search, so sibling search branches
//! never observe each other's edits.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, Piece};
use crate::utils::coordinates::Coordinate;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Full game snapshot: board, side to move, clocks, and repetition history.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Ply counter; increments by exactly one per move.
    pub move_index: u32,
    pub side_to_move: Color,
    /// `move_index` of the last capture or pawn move, for the fifty-move rule.
    pub last_capture_or_pawn_move: u32,

    /// Castling heuristic markers: -1 once that side's king first moves
    /// without castling, +1 once it castles, 0 otherwise.
    pub castling_advantage_white: i32,
    pub castling_advantage_black: i32,

    /// Board squares indexed `[file][rank]`; inactive pieces mark empty squares.
    pub board: [[Piece; 8]; 8],

    /// Occurrence count per position signature, for threefold repetition.
    pub repetition_counts: HashMap<u64, u32>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            move_index: 0,
            side_to_move: Color::White,
            last_capture_or_pawn_move: 0,
            castling_advantage_white: 0,
            castling_advantage_black: 0,
            board: [[Piece::EMPTY; 8]; 8],
            repetition_counts: HashMap::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece at an in-bounds coordinate. Out-of-range coordinates are a
    /// caller defect; gate on `is_valid_coordinate` first.
    #[inline]
    pub fn piece_at(&self, coordinate: Coordinate) -> Piece {
        self.board[coordinate.0 as usize][coordinate.1 as usize]
    }

    #[inline]
    pub fn piece_at_mut(&mut self, coordinate: Coordinate) -> &mut Piece {
        &mut self.board[coordinate.0 as usize][coordinate.1 as usize]
    }

    #[inline]
    pub fn castling_advantage(&self, color: Color) -> i32 {
        match color {
            Color::White => self.castling_advantage_white,
            Color::Black => self.castling_advantage_black,
        }
    }

    #[inline]
    pub fn castling_advantage_mut(&mut self, color: Color) -> &mut i32 {
        match color {
            Color::White => &mut self.castling_advantage_white,
            Color::Black => &mut self.castling_advantage_black,
        }
    }

    /// Signature of side-to-move plus per-square (color, kind) occupancy.
    ///
    /// Castling rights and en-passant eligibility are intentionally not part
    /// of the signature, so two positions that differ only in those rights
    /// count as repetitions of each other.
    pub fn position_signature(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.side_to_move.hash(&mut hasher);

        for file in 0..8 {
            for rank in 0..8 {
                let piece = self.board[file][rank];
                if piece.active {
                    1u8.hash(&mut hasher);
                    piece.color.hash(&mut hasher);
                    piece.kind.hash(&mut hasher);
                } else {
                    0u8.hash(&mut hasher);
                }
            }
        }

        hasher.finish()
    }

    /// Record the current position in the repetition history.
    pub fn record_repetition(&mut self) {
        let signature = self.position_signature();
        *self.repetition_counts.entry(signature).or_insert(0) += 1;
    }

    /// Static material evaluation in centipawns from the perspective of the
    /// side to move: own material counts positive, opponent material negative.
    pub fn material_balance(&self) -> i32 {
        let mut advantage = 0i32;

        for file in 0..8 {
            for rank in 0..8 {
                let piece = self.board[file][rank];
                if piece.active {
                    if piece.color == self.side_to_move {
                        advantage += piece.kind.value();
                    } else {
                        advantage -= piece.kind.value();
                    }
                }
            }
        }

        advantage
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn starting_position_basics() {
        let game = GameState::new_game();

        assert_eq!(game.side_to_move, Color::White);
        assert_eq!(game.material_balance(), 0);
        assert_eq!(game.castling_advantage_white, 0);
        assert_eq!(game.castling_advantage_black, 0);
        assert!(game.repetition_counts.is_empty());

        let e1 = game.piece_at((4, 0));
        assert!(e1.active);
        assert_eq!(e1.kind, PieceKind::King);
        assert_eq!(e1.color, Color::White);
        assert!(!game.piece_at((4, 4)).active);
    }

    #[test]
    fn material_balance_is_mover_relative() {
        // White up a rook.
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(game.material_balance(), 500);

        let mut flipped = game.clone();
        flipped.side_to_move = Color::Black;
        assert_eq!(flipped.material_balance(), -500);
    }

    #[test]
    fn signature_ignores_move_counters_but_not_side() {
        let game = GameState::new_game();
        let mut counters_changed = game.clone();
        counters_changed.move_index += 4;
        counters_changed.piece_at_mut((6, 0)).move_count = 2;

        assert_eq!(
            game.position_signature(),
            counters_changed.position_signature()
        );

        let mut side_changed = game.clone();
        side_changed.side_to_move = Color::Black;
        assert_ne!(game.position_signature(), side_changed.position_signature());
    }
}
