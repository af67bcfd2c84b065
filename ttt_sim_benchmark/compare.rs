use instant::Instant;

use ttt_sim::prelude::*;
use ttt_sim::thiserror;
use ttt_sim_search::{alpha_beta::AlphaBetaSearch, minimax::MinimaxSearch};

/// The fixed benchmark positions, AI side to move in each.
pub const FIXED_POSITIONS: [(&str, &str); 4] = [
    ("Empty Board", "........."),
    ("Early Game", "XOX......"),
    ("Mid Game", "XOXOX...O"),
    ("End Game", "XOXOXO..."),
];

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid board literal")]
    BadPosition(#[from] BoardError),
    #[error("failed to serialize report")]
    SerializeError(#[from] serde_json::Error),
}

/// One benchmark position measured under both strategies.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CompareRow {
    pub name: &'static str,
    pub board: String,
    pub score: Score,
    pub minimax_nodes: u64,
    pub minimax_time_ms: f64,
    pub alpha_beta_nodes: u64,
    pub alpha_beta_time_ms: f64,
    pub node_reduction_percent: f64,
}

/// `(1 - ab / minimax) * 100`, with an explicit guard for a position
/// that records zero minimax nodes.
pub fn node_reduction_percent(minimax_nodes: u64, alpha_beta_nodes: u64) -> f64 {
    if minimax_nodes == 0 {
        return 0.0;
    }
    (1.0 - (alpha_beta_nodes as f64) / (minimax_nodes as f64)) * 100.0
}

fn timed_evaluate<S: GameTreeSearch>(
    mut search: S,
    board: &Board,
    matchup: Matchup,
) -> (EvalResult, f64) {
    let t0 = Instant::now();
    let result = search.evaluate(board, true, matchup);
    (result, t0.elapsed().as_secs_f64() * 1e3)
}

pub fn run_compare(matchup: Matchup) -> Result<Vec<CompareRow>, ReportError> {
    let mut rows = Vec::with_capacity(FIXED_POSITIONS.len());
    for (name, literal) in FIXED_POSITIONS {
        let board: Board = literal.parse()?;
        let (minimax, minimax_time_ms) = timed_evaluate(MinimaxSearch::new(), &board, matchup);
        let (alpha_beta, alpha_beta_time_ms) = timed_evaluate(AlphaBetaSearch::new(), &board, matchup);
        debug_assert_eq!(minimax.score, alpha_beta.score);
        rows.push(CompareRow {
            name,
            board: board.to_literal(),
            score: minimax.score,
            minimax_nodes: minimax.counter.states_visited,
            minimax_time_ms,
            alpha_beta_nodes: alpha_beta.counter.states_visited,
            alpha_beta_time_ms,
            node_reduction_percent: node_reduction_percent(
                minimax.counter.states_visited,
                alpha_beta.counter.states_visited,
            ),
        });
    }
    Ok(rows)
}

pub fn print_report(rows: &[CompareRow]) -> Result<(), ReportError> {
    println!();
    println!("{}", "=".repeat(50));
    println!("Performance Comparison: Minimax vs Alpha-Beta Pruning");
    println!("{}", "=".repeat(50));
    for row in rows {
        let board: Board = row.board.parse()?;
        println!();
        println!("Test Case: {}", row.name);
        print!("{board}");
        println!(
            "Minimax:   {:6} nodes  |  {:.4} seconds",
            row.minimax_nodes,
            row.minimax_time_ms / 1e3
        );
        println!(
            "AlphaBeta: {:6} nodes  |  {:.4} seconds",
            row.alpha_beta_nodes,
            row.alpha_beta_time_ms / 1e3
        );
        println!("Improvement: {:.1}% node reduction", row.node_reduction_percent);
        println!("{}", "-".repeat(50));
    }
    Ok(())
}
