//! Search, adversarial and learning agents for Pac-Man style worlds
//!
//! This crate provides:
//! - Generic graph search (DFS, BFS, UCS, A*) over any [`search::SearchProblem`]
//! - Game-tree agents (minimax, alpha-beta, expectimax) plus reflex and greedy
//!   agents over any [`multiagent::GameState`]
//! - Tabular and approximate Q-learning driven by a [`pipeline::TrainingPipeline`]
//! - Value iteration over any [`mdp::MarkovDecisionProcess`], with gridworlds
//!   and the parameter analysis built on them

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod learning;
pub mod logging;
pub mod mdp;
pub mod multiagent;
pub mod pipeline;
pub mod ports;
pub mod registry;
pub mod search;
pub mod utils;

pub use config::{AgentsConfig, LearningConfig, SearchAgentConfig, ValueIterationConfig};
pub use error::{Error, Result};
pub use learning::{ApproximateQAgent, QLearningAgent};
pub use mdp::{Gridworld, MarkovDecisionProcess, ValueIterationAgent};
pub use multiagent::{AlphaBetaAgent, ExpectimaxAgent, GameState, MinimaxAgent};
pub use ports::{Agent, Learner, Observer};
pub use registry::Registry;
pub use search::{SearchProblem, SearchStrategy};
