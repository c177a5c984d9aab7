//! Legal-move tree node counting for generator validation.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::collect_legal_moves;

/// Count leaf nodes of the legal move tree rooted at `game_state`.
///
/// Uses the unordered collection path; ordering is irrelevant to node counts.
pub fn perft_legal(game_state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = Vec::with_capacity(64);
    collect_legal_moves(game_state, &mut moves);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|possible| perft_legal(&possible.game_after_move, depth - 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::perft_legal;
    use crate::game_state::game_state::GameState;

    #[test]
    fn startpos_perft_matches_known_counts() {
        let game = GameState::new_game();
        assert_eq!(perft_legal(&game, 1), 20);
        assert_eq!(perft_legal(&game, 2), 400);
        assert_eq!(perft_legal(&game, 3), 8_902);
    }

    #[test]
    fn sparse_endgame_perft() {
        // Lone kings: each side has at most 8 king steps, fewer at the edge.
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert_eq!(perft_legal(&game, 1), 5);
    }
}
