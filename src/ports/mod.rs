//! Ports (trait boundaries) between the algorithms and their drivers.
//!
//! The environments themselves are consumed through the problem traits of
//! each algorithm module ([`crate::search::SearchProblem`],
//! [`crate::multiagent::GameState`], [`crate::mdp::MarkovDecisionProcess`]);
//! these ports describe how a driver talks to the agents.

pub mod agent;
pub mod learner;
pub mod observer;

pub use agent::Agent;
pub use learner::{EpisodeReport, Learner};
pub use observer::Observer;
