pub mod minimax;
pub mod random;
pub mod rough;

pub use minimax::{
    best_move_minimax, best_move_minimax_iterative, negamax, negamax_iterative, MinimaxAI,
    SearchMode,
};
pub use random::RandomAI;
pub use rough::{best_move_heuristic, RoughOutcomeAI};
