use ttt_sim::{
    game_tree_search::{EvalResult, GameTreeSearch, Matchup, Score, SearchCounter},
    types::game_state::Board,
};

/// Minimax with alpha-beta pruning.
///
/// Returns the identical score as [`crate::minimax::MinimaxSearch`] for
/// every input; pruning only cuts the number of states visited. `alpha`
/// is the best score the maximizer can already guarantee, `beta` the
/// minimizer's counterpart; once `beta <= alpha` the remaining sibling
/// moves of the node cannot change the parent's decision and are skipped
/// (and never counted).
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphaBetaSearch;

impl AlphaBetaSearch {
    pub fn new() -> Self {
        Self
    }
}

fn alpha_beta(
    board: &Board,
    maximizing: bool,
    matchup: Matchup,
    mut alpha: Score,
    mut beta: Score,
    counter: &mut SearchCounter,
) -> Score {
    counter.bump();
    // Same terminal check order as plain minimax: win before full board.
    if board.is_win_for(matchup.ai) {
        return Score::WIN;
    }
    if board.is_win_for(matchup.human) {
        return Score::LOSS;
    }
    if board.is_full() {
        return Score::DRAW;
    }

    let mut best = if maximizing { Score::MIN } else { Score::MAX };
    for mv in board.available_moves() {
        let child = board
            .apply(mv, matchup.mark_for(maximizing))
            .expect("available_moves returned an occupied cell");
        let score = alpha_beta(&child, !maximizing, matchup, alpha, beta, counter);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }

        if beta <= alpha {
            break;
        }
    }
    best
}

impl GameTreeSearch for AlphaBetaSearch {
    fn evaluate(&mut self, board: &Board, maximizing: bool, matchup: Matchup) -> EvalResult {
        let mut counter = SearchCounter::default();
        let score = alpha_beta(
            board,
            maximizing,
            matchup,
            Score::MIN,
            Score::MAX,
            &mut counter,
        );
        EvalResult { score, counter }
    }
}
