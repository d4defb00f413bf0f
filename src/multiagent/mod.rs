//! Adversarial game-tree agents
//!
//! Pac-Man is agent 0 and maximises; ghosts (agents 1..n) move in order after
//! it. A search depth of `d` means `d` full rounds of moves. All agents share
//! these rules:
//!
//! - the stop action is never expanded
//! - a node whose agent has no other legal action is evaluated as a leaf
//! - among root actions the strictly greatest value wins, the first one seen
//!   on ties
//!
//! | Agent | Ghost plies |
//! |-------|-------------|
//! | [`MinimaxAgent`] | minimum over actions |
//! | [`AlphaBetaAgent`] | minimum, with pruning |
//! | [`ExpectimaxAgent`] | mean over actions |

pub mod alpha_beta;
pub mod evaluation;
pub mod expectimax;
pub mod game;
pub mod minimax;
pub mod reflex;
mod tree;

#[cfg(test)]
pub(crate) mod testing;

pub use alpha_beta::AlphaBetaAgent;
pub use evaluation::{
    ActionEvaluationFn, EvaluationFn, EvaluationRegistry, better_evaluation, default_evaluations,
    pacman_evaluations, reflex_evaluation, score_evaluation,
};
pub use expectimax::ExpectimaxAgent;
pub use game::{AgentIndex, GameState, Move, PACMAN, PacmanView};
pub use minimax::MinimaxAgent;
pub use reflex::{GreedyAgent, ReflexAgent};
