use std::{
    fmt::{self, Display},
    ops::{Add, Neg},
};

use crate::types::game_state::{Board, Mark, Move};

/// Game-theoretic value of a position, viewed from the AI's mark and
/// independent of whose turn it is: -1 the human's mark wins, 0 draw,
/// +1 the AI's mark wins.
///
/// `MIN` and `MAX` sit strictly outside the reachable range and stand in
/// for the infinities when initializing fold accumulators and alpha-beta
/// windows; comparisons behave identically to true infinities because
/// every reachable score lies between them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score(i8);

impl Score {
    pub const LOSS: Score = Score(-1);
    pub const DRAW: Score = Score(0);
    pub const WIN: Score = Score(1);
    pub const MIN: Score = Score(-2);
    pub const MAX: Score = Score(2);

    #[inline]
    pub fn value(self) -> i8 {
        self.0
    }
}

impl Neg for Score {
    type Output = Score;

    #[inline]
    fn neg(self) -> Score {
        Score(-self.0)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// Fixed role-to-mark assignment for one session: the AI plays `ai`,
/// the human plays `human`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    pub ai: Mark,
    pub human: Mark,
}

impl Matchup {
    #[inline]
    pub fn versus(ai: Mark) -> Matchup {
        Matchup {
            ai,
            human: ai.opposite(),
        }
    }

    /// The mark placed at a node: the AI's when maximizing, the human's
    /// when minimizing.
    #[inline]
    pub fn mark_for(self, maximizing: bool) -> Mark {
        if maximizing {
            self.ai
        } else {
            self.human
        }
    }
}

/// Number of states visited during one top-level search invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCounter {
    /// Number of `evaluate` invocations, terminal calls included.
    pub states_visited: u64,
}

impl SearchCounter {
    pub const ZERO: SearchCounter = SearchCounter { states_visited: 0 };

    #[inline]
    pub fn bump(&mut self) {
        self.states_visited += 1;
    }

    #[inline]
    pub fn add_in_place(&mut self, c: &SearchCounter) {
        self.states_visited += c.states_visited;
    }

    pub fn summary(&self, dt_ns: u128) -> String {
        let dt_ms: f64 = 1e-6 * (dt_ns as f64);
        let rate: f64 = (1e-6_f64 * 1e9_f64) * (self.states_visited as f64) / (dt_ns as f64);
        format!("dt={dt_ms:.2}ms rate={rate:.4} Mstates/s")
    }
}

impl Add for SearchCounter {
    type Output = SearchCounter;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut a = self;
        a.add_in_place(&rhs);
        a
    }
}

/// Outcome of a full-depth evaluation of one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalResult {
    pub score: Score,
    pub counter: SearchCounter,
}

/// Outcome of a top-level move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The selected move; `None` iff the position has no empty cell.
    pub best_move: Option<Move>,
    pub score: Score,
    pub counter: SearchCounter,
}

pub trait GameTreeSearch {
    /// Evaluates `board` to full depth with the side given by
    /// `maximizing` to move. The returned counter covers exactly this
    /// invocation.
    fn evaluate(&mut self, board: &Board, maximizing: bool, matchup: Matchup) -> EvalResult;

    /// Picks the AI's move: every empty cell is tried in ascending index
    /// order and evaluated as a minimizing position (it becomes the
    /// human's turn). Strict-max selection keeps the first occurrence, so
    /// ties resolve to the lowest index.
    fn search(&mut self, board: &Board, matchup: Matchup) -> SearchResult {
        let mut counter = SearchCounter::default();
        let mut best_move = None;
        let mut best = Score::MIN;
        for mv in board.available_moves() {
            let child = board
                .apply(mv, matchup.ai)
                .expect("available_moves returned an occupied cell");
            let result = self.evaluate(&child, false, matchup);
            counter.add_in_place(&result.counter);
            if result.score > best {
                best = result.score;
                best_move = Some(mv);
            }
        }
        SearchResult {
            best_move,
            score: best,
            counter,
        }
    }
}
