//! Recursive negamax search with alpha-beta pruning and dangerous-move
//! extensions.
//!
//! Each node enumerates every child position up front (move ordering needs
//! all sibling evaluations before sorting), then recurses with the opponent's
//! tolerated bound threaded down in negated form. Lines reached through a
//! dangerous move (promotion, or a capture by an equal-or-stronger piece)
//! are searched past the nominal horizon until they quiet down.

use crate::game_state::chess_rules::{is_checkmate, is_draw};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{MoveGenerator, PossibleMove};
use crate::search::board_scoring::{
    positional_bonus, BoardScorer, CASTLING_FACTOR, MOBILITY_FACTOR, WIN_SCORE,
};

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Nominal search depth in plies.
    pub depth: u8,
    /// Centipawns per legal-move mobility difference.
    pub mobility_factor: i32,
    /// Centipawns per castling-advantage point difference.
    pub castling_factor: i32,
    /// Hard cap on how far dangerous-move extensions may run past the
    /// horizon. Capture chains exhaust on their own long before this in real
    /// positions; the cap only guarantees termination.
    pub max_extension_plies: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            mobility_factor: MOBILITY_FACTOR,
            castling_factor: CASTLING_FACTOR,
            max_extension_plies: 16,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best_move: Option<PossibleMove>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Pick the best move for the side to move.
///
/// Ties are broken by first encounter in the generator's randomized,
/// evaluation-sorted order. Returns `best_move: None` only on a terminal
/// position; callers are expected to test checkmate/draw first.
pub fn choose_move<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &mut G,
    scorer: &S,
    config: &SearchConfig,
) -> SearchOutcome {
    let mut children = generator.generate_legal_moves(game_state);
    let mut nodes = 1u64;

    if children.is_empty() {
        return SearchOutcome {
            best_move: None,
            best_score: -WIN_SCORE,
            nodes,
        };
    }

    let bonus = positional_bonus(game_state, config.mobility_factor, config.castling_factor);

    let mut best_index: Option<usize> = None;
    let mut best_score = -WIN_SCORE;

    for index in 0..children.len() {
        let bound = best_score
            .saturating_add(bonus)
            .clamp(-WIN_SCORE, WIN_SCORE);

        let score = -evaluate(
            &children[index].game_after_move,
            generator,
            scorer,
            i32::from(config.depth) - 1,
            bound,
            children[index].move_description.dangerous,
            config,
            &mut nodes,
        );

        if best_index.is_none() || score > best_score {
            best_index = Some(index);
            best_score = score;
        }
    }

    let best_move = best_index.map(|index| children.swap_remove(index));

    SearchOutcome {
        best_move,
        best_score,
        nodes,
    }
}

/// Negamax value of `game_state` for its side to move.
///
/// `alpha_bound` is the caller's running best (bonus-adjusted); once this
/// node can guarantee more than the caller tolerates (`bound > -alpha_bound`)
/// the remaining siblings are skipped and a winning sentinel comes back, so
/// the caller discards the line without further work.
fn evaluate<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &mut G,
    scorer: &S,
    depth: i32,
    alpha_bound: i32,
    parent_move_dangerous: bool,
    config: &SearchConfig,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if is_checkmate(game_state) {
        return -WIN_SCORE;
    }
    if is_draw(game_state) {
        return 0;
    }

    // Search horizon: static evaluation unless the move that got us here was
    // dangerous, in which case the line is extended (up to the hard cap).
    if depth <= 0
        && (!parent_move_dangerous || depth <= -i32::from(config.max_extension_plies))
    {
        return scorer.score(game_state);
    }

    let children = generator.generate_legal_moves(game_state);
    let bonus = positional_bonus(game_state, config.mobility_factor, config.castling_factor);

    // A non-terminal position always has at least one move, so the running
    // best is guaranteed to move off the sentinel.
    let mut best = -WIN_SCORE;

    for child in &children {
        let bound = best.saturating_add(bonus).clamp(-WIN_SCORE, WIN_SCORE);
        if bound > -alpha_bound {
            // The opponent already has a better alternative than allowing
            // this position; nothing here can change their choice.
            return WIN_SCORE;
        }

        let score = -evaluate(
            &child.game_after_move,
            generator,
            scorer,
            depth - 1,
            bound,
            child.move_description.dangerous,
            config,
            nodes,
        );

        if score > best {
            best = score;
        }
    }

    best.saturating_add(bonus)
}

#[cfg(test)]
mod tests {
    use super::{choose_move, evaluate, SearchConfig, SearchOutcome};
    use crate::game_state::chess_rules::is_checkmate;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::move_generation::move_generator::{MoveGenerator, PossibleMove};
    use crate::search::board_scoring::{positional_bonus, BoardScorer, MaterialScorer, WIN_SCORE};

    fn search(game: &GameState, depth: u8, seed: u64) -> SearchOutcome {
        let mut generator = LegalMoveGenerator::with_seed(seed);
        let config = SearchConfig {
            depth,
            ..SearchConfig::default()
        };
        choose_move(game, &mut generator, &MaterialScorer, &config)
    }

    #[test]
    fn finds_back_rank_mate_in_one() {
        let game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1")
            .expect("FEN should parse");

        for depth in [1u8, 2, 3] {
            let outcome = search(&game, depth, 42);
            let best = outcome.best_move.expect("a move must exist");
            assert!(
                is_checkmate(&best.game_after_move),
                "depth {depth} search should deliver mate, chose {}",
                best.move_description
            );
            assert_eq!(outcome.best_score, WIN_SCORE);
        }
    }

    #[test]
    fn stalemate_scores_zero_and_mate_scores_losing() {
        let stalemate = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("FEN should parse");
        let mated = GameState::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        )
        .expect("FEN should parse");

        let mut generator = LegalMoveGenerator::with_seed(1);
        let config = SearchConfig::default();
        let mut nodes = 0u64;

        let stalemate_score = evaluate(
            &stalemate,
            &mut generator,
            &MaterialScorer,
            2,
            -WIN_SCORE,
            false,
            &config,
            &mut nodes,
        );
        assert_eq!(stalemate_score, 0);

        let mated_score = evaluate(
            &mated,
            &mut generator,
            &MaterialScorer,
            2,
            -WIN_SCORE,
            false,
            &config,
            &mut nodes,
        );
        assert_eq!(mated_score, -WIN_SCORE);
    }

    #[test]
    fn dangerous_capture_is_searched_past_the_horizon() {
        // The d5 pawn is poisoned: e6 recaptures the queen. A pure depth-1
        // search would grab it; the dangerous-move extension must not.
        let game = GameState::from_fen("4k3/8/4p3/3p4/8/8/8/3QK3 w - - 0 1")
            .expect("FEN should parse");

        let outcome = search(&game, 1, 9);
        let best = outcome.best_move.expect("a move must exist");
        assert_ne!(best.move_description.to_string(), "d1d5");
    }

    #[test]
    fn pruned_search_matches_full_width_where_the_best_move_is_unique() {
        let positions = [
            // Unique mate in one.
            "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
            // Undefended queen hangs on d5.
            "k7/8/8/3q4/8/8/8/K2Q4 w - - 0 1",
        ];

        for fen in positions {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            for depth in [1u8, 2] {
                let pruned = search(&game, depth, 3)
                    .best_move
                    .expect("pruned search should find a move");
                let full = full_width_choose(&game, depth, 4)
                    .expect("full-width search should find a move");
                assert_eq!(
                    pruned.move_description.to_string(),
                    full.move_description.to_string(),
                    "depth {depth} disagreement on {fen}"
                );
            }
        }
    }

    /// Reference search without any cutoffs, for pruning-soundness checks.
    fn full_width_choose(game: &GameState, depth: u8, seed: u64) -> Option<PossibleMove> {
        let mut generator = LegalMoveGenerator::with_seed(seed);
        let config = SearchConfig {
            depth,
            ..SearchConfig::default()
        };

        let mut children = generator.generate_legal_moves(game);
        if children.is_empty() {
            return None;
        }

        let mut best_index = 0usize;
        let mut best_score = i32::MIN;
        for index in 0..children.len() {
            let score = -full_width_evaluate(
                &children[index].game_after_move,
                &mut generator,
                i32::from(depth) - 1,
                children[index].move_description.dangerous,
                &config,
            );
            if score > best_score {
                best_index = index;
                best_score = score;
            }
        }

        Some(children.swap_remove(best_index))
    }

    fn full_width_evaluate(
        game: &GameState,
        generator: &mut LegalMoveGenerator,
        depth: i32,
        parent_move_dangerous: bool,
        config: &SearchConfig,
    ) -> i32 {
        if is_checkmate(game) {
            return -WIN_SCORE;
        }
        if crate::game_state::chess_rules::is_draw(game) {
            return 0;
        }
        if depth <= 0
            && (!parent_move_dangerous || depth <= -i32::from(config.max_extension_plies))
        {
            return MaterialScorer.score(game);
        }

        let children = generator.generate_legal_moves(game);
        let bonus = positional_bonus(game, config.mobility_factor, config.castling_factor);

        let mut best = -WIN_SCORE;
        for child in &children {
            let score = -full_width_evaluate(
                &child.game_after_move,
                generator,
                depth - 1,
                child.move_description.dangerous,
                config,
            );
            if score > best {
                best = score;
            }
        }

        best.saturating_add(bonus)
    }
}
