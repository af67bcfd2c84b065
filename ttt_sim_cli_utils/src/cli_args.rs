use std::str::FromStr;

use structopt::StructOpt;

use ttt_sim::{
    game_tree_search::{EvalResult, GameTreeSearch, Matchup, SearchResult},
    types::game_state::{Board, Mark},
};
use ttt_sim_search::{alpha_beta::AlphaBetaSearch, minimax::MinimaxSearch};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Minimax,
    AlphaBeta,
}

impl FromStr for SearchAlgorithm {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" => Ok(Self::Minimax),
            "alpha-beta" | "alphabeta" | "ab" => Ok(Self::AlphaBeta),
            _ => Err("expected minimax|alpha-beta"),
        }
    }
}

#[derive(Debug, StructOpt, Clone, Default)]
pub struct SearchOpts {
    #[structopt(
        short = "A",
        long = "--algorithm",
        help = "minimax|alpha-beta: algorithm used for the game tree search."
    )]
    pub algorithm: Option<SearchAlgorithm>,

    #[structopt(
        short = "a",
        long = "--ai-mark",
        help = "Mark played by the AI (X or O). The other mark belongs to the human."
    )]
    pub ai_mark: Option<Mark>,
}

impl SearchOpts {
    pub fn matchup(&self) -> Matchup {
        Matchup::versus(self.ai_mark.unwrap_or(Mark::X))
    }

    pub fn make_search(&self) -> GenericSearch {
        match self.algorithm.unwrap_or(SearchAlgorithm::AlphaBeta) {
            SearchAlgorithm::Minimax => GenericSearch::Minimax(MinimaxSearch::new()),
            SearchAlgorithm::AlphaBeta => GenericSearch::AlphaBeta(AlphaBetaSearch::new()),
        }
    }
}

pub enum GenericSearch {
    Minimax(MinimaxSearch),
    AlphaBeta(AlphaBetaSearch),
}

impl GameTreeSearch for GenericSearch {
    fn evaluate(&mut self, board: &Board, maximizing: bool, matchup: Matchup) -> EvalResult {
        match self {
            Self::Minimax(s) => s.evaluate(board, maximizing, matchup),
            Self::AlphaBeta(s) => s.evaluate(board, maximizing, matchup),
        }
    }

    fn search(&mut self, board: &Board, matchup: Matchup) -> SearchResult {
        match self {
            Self::Minimax(s) => s.search(board, matchup),
            Self::AlphaBeta(s) => s.search(board, matchup),
        }
    }
}
