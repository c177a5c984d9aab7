//! Core piece and side types for the board model.
//!
//! Pieces carry their own move history (`move_count`, `last_move_index`)
//! because castling eligibility, pawn double pushes, and en-passant timing
//! are all decided from per-piece history rather than separate rights flags.

pub use crate::game_state::game_state::GameState;
use crate::utils::coordinates::Coordinate;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

/// Piece kind (color is stored separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

const KNIGHT_DIRECTIONS: [Coordinate; 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

const BISHOP_DIRECTIONS: [Coordinate; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ROOK_DIRECTIONS: [Coordinate; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const ROYAL_DIRECTIONS: [Coordinate; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    /// Maximum number of steps this piece slides along one attack direction.
    #[inline]
    pub const fn attack_range(self) -> i8 {
        match self {
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => 1,
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => 8,
        }
    }

    /// Attack direction vectors. Pawns attack diagonally forward by
    /// special-case logic in the targeting and move-generation code, so their
    /// direction set is empty here.
    #[inline]
    pub fn attack_directions(self) -> &'static [Coordinate] {
        match self {
            PieceKind::Pawn => &[],
            PieceKind::Knight => &KNIGHT_DIRECTIONS,
            PieceKind::Bishop => &BISHOP_DIRECTIONS,
            PieceKind::Rook => &ROOK_DIRECTIONS,
            PieceKind::Queen | PieceKind::King => &ROYAL_DIRECTIONS,
        }
    }
}

/// One board square's content. `active == false` marks an empty square; the
/// board is a fixed 8x8 array that is never resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub active: bool,
    pub color: Color,
    pub kind: PieceKind,
    /// Number of times this piece has moved.
    pub move_count: u32,
    /// `move_index` of the ply on which this piece last moved.
    pub last_move_index: u32,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        active: false,
        color: Color::White,
        kind: PieceKind::Pawn,
        move_count: 0,
        last_move_index: 0,
    };

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            active: true,
            color,
            kind,
            move_count: 0,
            last_move_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, PieceKind};

    #[test]
    fn piece_values_follow_material_scale() {
        assert_eq!(PieceKind::Pawn.value(), 100);
        assert_eq!(PieceKind::Knight.value(), PieceKind::Bishop.value());
        assert_eq!(PieceKind::Rook.value(), 500);
        assert_eq!(PieceKind::Queen.value(), 900);
        assert!(PieceKind::King.value() > PieceKind::Queen.value());
    }

    #[test]
    fn attack_geometry_matches_piece_kind() {
        assert!(PieceKind::Pawn.attack_directions().is_empty());
        assert_eq!(PieceKind::Knight.attack_directions().len(), 8);
        assert_eq!(PieceKind::Bishop.attack_directions().len(), 4);
        assert_eq!(PieceKind::Rook.attack_directions().len(), 4);
        assert_eq!(PieceKind::Queen.attack_directions().len(), 8);
        assert_eq!(PieceKind::King.attack_directions().len(), 8);

        assert_eq!(PieceKind::Knight.attack_range(), 1);
        assert_eq!(PieceKind::King.attack_range(), 1);
        assert_eq!(PieceKind::Queen.attack_range(), 8);
    }

    #[test]
    fn color_helpers() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::White.pawn_direction(), 1);
        assert_eq!(Color::Black.pawn_direction(), -1);
    }
}
