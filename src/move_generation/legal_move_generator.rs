//! Full legal move generation pipeline.
//!
//! Collects the three generation paths (normal piece moves, castling, pawn
//! moves) for every piece of the side to move, then orders the result:
//! a random shuffle followed by a stable sort on the resulting position's
//! static evaluation, ascending. Equal-evaluation moves therefore stay in
//! randomized order while better-evaluated successors come first, giving the
//! search a weak move-ordering heuristic without deterministic tie-breaking.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_castling::castling_moves;
use crate::move_generation::legal_moves_normal::normal_piece_moves;
use crate::move_generation::legal_moves_pawn::pawn_moves;
use crate::move_generation::move_generator::{MoveGenerator, PossibleMove};
use crate::utils::coordinates::coordinate_to_square;

/// Append every legal move for the side to move, unordered.
pub(crate) fn collect_legal_moves(game_state: &GameState, out: &mut Vec<PossibleMove>) {
    for file in 0..8i8 {
        for rank in 0..8i8 {
            let piece = game_state.piece_at((file, rank));
            if !piece.active || piece.color != game_state.side_to_move {
                continue;
            }

            let square = coordinate_to_square((file, rank));

            if piece.kind != PieceKind::Pawn {
                normal_piece_moves(game_state, piece, square, out);
            }
            if piece.kind == PieceKind::King && piece.move_count == 0 {
                castling_moves(game_state, piece, square, out);
            }
            if piece.kind == PieceKind::Pawn {
                pawn_moves(game_state, piece, square, out);
            }
        }
    }
}

/// True iff the side to move has at least one legal move.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
    let mut buffer = Vec::new();

    for file in 0..8i8 {
        for rank in 0..8i8 {
            let piece = game_state.piece_at((file, rank));
            if !piece.active || piece.color != game_state.side_to_move {
                continue;
            }

            let square = coordinate_to_square((file, rank));

            if piece.kind != PieceKind::Pawn {
                normal_piece_moves(game_state, piece, square, &mut buffer);
            }
            if piece.kind == PieceKind::King && piece.move_count == 0 {
                castling_moves(game_state, piece, square, &mut buffer);
            }
            if piece.kind == PieceKind::Pawn {
                pawn_moves(game_state, piece, square, &mut buffer);
            }

            if !buffer.is_empty() {
                return true;
            }
        }
    }

    false
}

/// Number of legal moves for the side to move, without any ordering work.
pub fn legal_move_count(game_state: &GameState) -> usize {
    let mut moves = Vec::with_capacity(64);
    collect_legal_moves(game_state, &mut moves);
    moves.len()
}

/// Legal move generator owning the random source used for ordering ties.
pub struct LegalMoveGenerator {
    rng: StdRng,
}

impl LegalMoveGenerator {
    /// Generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Generator with a fixed seed, for reproducible move ordering in tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, game_state: &GameState) -> Vec<PossibleMove> {
        let mut moves = Vec::with_capacity(64);
        collect_legal_moves(game_state, &mut moves);

        moves.shuffle(&mut self.rng);
        // Stable sort: equal evaluations keep their shuffled order. The
        // resulting position's evaluation is from the opponent's perspective,
        // so ascending puts the mover's best outcomes first.
        moves.sort_by_cached_key(|possible| possible.game_after_move.material_balance());

        moves
    }
}

impl Default for LegalMoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&mut self, game_state: &GameState) -> Vec<PossibleMove> {
        self.generate(game_state)
    }
}

/// Convenience entry point with OS-seeded ordering.
pub fn possible_moves(game_state: &GameState) -> Vec<PossibleMove> {
    LegalMoveGenerator::new().generate(game_state)
}

#[cfg(test)]
mod tests {
    use super::{has_any_legal_move, legal_move_count, possible_moves, LegalMoveGenerator};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_checks::{is_square_targeted, king_square};

    #[test]
    fn starting_position_has_exactly_twenty_moves() {
        let game = GameState::new_game();
        let moves = possible_moves(&game);

        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|m| !m.move_description.dangerous));

        let pawn_moves = moves
            .iter()
            .filter(|m| {
                m.move_description.resulting_piece
                    == crate::game_state::chess_types::PieceKind::Pawn
            })
            .count();
        assert_eq!(pawn_moves, 16);
    }

    #[test]
    fn no_generated_move_leaves_the_movers_king_targeted() {
        // Knight on c3 is pinned by the a5 bishop; startpos included for
        // breadth. The mover's king must be safe in every resulting position.
        let positions = [
            GameState::new_game(),
            GameState::from_fen("4k3/8/8/b7/8/2N5/8/4K3 w - - 0 1")
                .expect("FEN should parse"),
        ];

        for game in &positions {
            for possible in possible_moves(game) {
                let mut mover_view = possible.game_after_move.clone();
                mover_view.side_to_move = game.side_to_move;
                let king = king_square(&mover_view).expect("king should survive every move");
                assert!(
                    !is_square_targeted(&mover_view, king),
                    "move {} leaves the king en prise",
                    possible.move_description
                );
            }
        }
    }

    #[test]
    fn pinned_knight_has_no_moves() {
        let game = GameState::from_fen("4k3/8/8/b7/8/2N5/8/4K3 w - - 0 1")
            .expect("FEN should parse");

        assert!(possible_moves(&game)
            .iter()
            .all(|m| m.move_description.source.to_string() != "c3"));
        assert!(has_any_legal_move(&game));
    }

    #[test]
    fn ordering_is_eval_ascending_and_seed_reproducible() {
        let game = GameState::new_game();

        let moves = LegalMoveGenerator::with_seed(7).generate(&game);
        let evals: Vec<i32> = moves
            .iter()
            .map(|m| m.game_after_move.material_balance())
            .collect();
        assert!(evals.windows(2).all(|pair| pair[0] <= pair[1]));

        let again = LegalMoveGenerator::with_seed(7).generate(&game);
        let first: Vec<String> = moves
            .iter()
            .map(|m| m.move_description.to_string())
            .collect();
        let second: Vec<String> = again
            .iter()
            .map(|m| m.move_description.to_string())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn move_counts_match_the_counting_helpers() {
        let game = GameState::new_game();
        assert_eq!(legal_move_count(&game), 20);
        assert!(has_any_legal_move(&game));
    }
}
