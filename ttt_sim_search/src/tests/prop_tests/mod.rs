mod generator;
use generator::*;

use proptest::prelude::*;

use ttt_sim::prelude::*;

use crate::{alpha_beta::AlphaBetaSearch, minimax::MinimaxSearch};

const CASES: u32 = 64;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn alpha_beta_score_matches_minimax(
        board in arb_reachable_board(),
        maximizing in any::<bool>(),
        ai in arb_mark(),
    ) {
        let matchup = Matchup::versus(ai);
        let m = MinimaxSearch::new().evaluate(&board, maximizing, matchup);
        let ab = AlphaBetaSearch::new().evaluate(&board, maximizing, matchup);
        prop_assert_eq!(m.score, ab.score);
    }

    #[test]
    fn alpha_beta_never_visits_more_nodes(
        board in arb_reachable_board(),
        maximizing in any::<bool>(),
        ai in arb_mark(),
    ) {
        let matchup = Matchup::versus(ai);
        let m = MinimaxSearch::new().evaluate(&board, maximizing, matchup);
        let ab = AlphaBetaSearch::new().evaluate(&board, maximizing, matchup);
        prop_assert!(ab.counter.states_visited <= m.counter.states_visited);
        prop_assert!(ab.counter.states_visited >= 1);
    }

    #[test]
    fn move_selection_is_deterministic(board in arb_reachable_board(), ai in arb_mark()) {
        let matchup = Matchup::versus(ai);
        let first = AlphaBetaSearch::new().search(&board, matchup);
        let second = AlphaBetaSearch::new().search(&board, matchup);
        prop_assert_eq!(first.best_move, second.best_move);
        prop_assert_eq!(first.score, second.score);
        prop_assert_eq!(first.counter, second.counter);
    }

    #[test]
    fn selected_move_achieves_the_reported_score(board in arb_reachable_board(), ai in arb_mark()) {
        prop_assume!(board.winner().is_none() && !board.is_full());
        let matchup = Matchup::versus(ai);
        let result = MinimaxSearch::new().search(&board, matchup);
        let mv = result.best_move.expect("non-full board must yield a move");
        let child = board.apply(mv, matchup.ai).expect("selected move must be legal");
        let eval = MinimaxSearch::new().evaluate(&child, false, matchup);
        prop_assert_eq!(result.score, eval.score);
    }
}
