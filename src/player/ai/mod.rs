pub mod alpha_beta;
pub mod eval;
pub mod minimax;
pub mod random;
pub mod search;

pub use alpha_beta::{alpha_beta, alpha_beta_with_stats, AlphaBetaAI};
pub use eval::evaluate;
pub use minimax::{minimax, minimax_with_stats, MinimaxAI};
pub use random::RandomAI;
pub use search::{Score, SearchResult, SearchStats, ThinkingInfo, LOSS_SCORE, WIN_SCORE};
