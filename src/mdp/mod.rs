//! Markov decision processes and offline planning
//!
//! - [`MarkovDecisionProcess`]: a fully known model (states, actions,
//!   transition distribution, rewards)
//! - [`ValueIterationAgent`]: synchronous value iteration over such a model
//! - [`Gridworld`]: the classic noisy grid world, plus an [`Environment`]
//!   adapter that samples its transitions for online learners
//!
//! [`Environment`]: crate::pipeline::Environment

use std::hash::Hash;

pub mod gridworld;
pub mod value_iteration;

pub use gridworld::{GridAction, GridState, Gridworld, GridworldEnvironment};
pub use value_iteration::ValueIterationAgent;

/// A fully known Markov decision process.
pub trait MarkovDecisionProcess {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    /// Every state, in a fixed order.
    fn states(&self) -> Vec<Self::State>;

    fn start_state(&self) -> Self::State;

    /// Actions available in `state`; empty for terminal states.
    fn possible_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Successor states with their probabilities. Probabilities sum to one
    /// and no successor appears twice.
    fn transitions(&self, state: &Self::State, action: &Self::Action) -> Vec<(Self::State, f64)>;

    fn reward(&self, state: &Self::State, action: &Self::Action, next_state: &Self::State) -> f64;

    fn is_terminal(&self, state: &Self::State) -> bool;
}
