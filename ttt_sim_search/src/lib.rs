/// Implementation for plain exhaustive minimax search
pub mod minimax;

/// Implementation for minimax with alpha-beta pruning
pub mod alpha_beta;

pub mod prelude {
    pub use crate::alpha_beta::AlphaBetaSearch;
    pub use crate::minimax::MinimaxSearch;
    pub use ttt_sim::prelude::*;
}
