use ttt_sim::{
    game_tree_search::{EvalResult, GameTreeSearch, Matchup, Score, SearchCounter},
    types::game_state::Board,
};

/// Plain exhaustive minimax over the full remaining game tree.
///
/// No move ordering, no pruning: every reachable state below the root is
/// visited, so the node count serves as the baseline the pruning strategy
/// is measured against. The result is deterministic perfect play.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimaxSearch;

impl MinimaxSearch {
    pub fn new() -> Self {
        Self
    }
}

fn minimax(board: &Board, maximizing: bool, matchup: Matchup, counter: &mut SearchCounter) -> Score {
    counter.bump();
    // Terminal checks in this order: a win takes precedence over a full
    // board, so a full winning board still scores as a win.
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
        let score = minimax(&child, !maximizing, matchup, counter);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

impl GameTreeSearch for MinimaxSearch {
    fn evaluate(&mut self, board: &Board, maximizing: bool, matchup: Matchup) -> EvalResult {
        let mut counter = SearchCounter::default();
        let score = minimax(board, maximizing, matchup, &mut counter);
        EvalResult { score, counter }
    }
}
