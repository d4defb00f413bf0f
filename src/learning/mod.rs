//! Online reinforcement learning
//!
//! Temporal difference agents that learn from transitions reported by a
//! driver (see [`crate::pipeline`]). Q-values are either tabulated
//! ([`QTable`]) or approximated as a weighted sum of features
//! ([`LinearQFunction`]); the agent logic in [`QLearningAgent`] is shared.
//!
//! ## Usage Example
//!
//! ```
//! use pacai::{
//!     config::LearningConfig,
//!     learning::QLearningAgent,
//!     ports::{Agent, Learner},
//! };
//!
//! // A single decision: from 0 either go 'l'eft or 'r'ight and stop.
//! let mut agent: QLearningAgent<u8, char> = QLearningAgent::new(
//!     LearningConfig { epsilon: 0.0, alpha: 1.0, ..Default::default() },
//!     |state: &u8| if *state == 0 { vec!['l', 'r'] } else { vec![] },
//! )
//! .with_seed(7);
//!
//! agent.start_episode();
//! let action = agent.select_action(&0).unwrap();
//! agent.observe(&1, 1.0);
//! agent.stop_episode();
//!
//! assert_eq!(agent.q_value(&0, &action), 1.0);
//! ```

pub mod agent;
pub mod approximate;
pub mod episode;
pub mod features;
pub mod q_table;
pub mod tie_break;

pub use agent::{LegalActionsFn, QLearningAgent};
pub use approximate::{
    ApproximateQAgent, FeatureExtractor, FeatureRegistry, FeatureVector, IdentityExtractor,
    LinearQFunction, SharedExtractor, default_features,
};
pub use episode::EpisodeTracker;
pub use features::{SimpleExtractor, pacman_features};
pub use q_table::{QFunction, QTable};
pub use tie_break::TieBreak;
