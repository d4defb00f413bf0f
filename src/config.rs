//! Configuration structs for every agent family
//!
//! Each struct carries the framework defaults in its `Default` impl and can be
//! deserialized from JSON with any field omitted. [`AgentsConfig`] bundles
//! them for the command line.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, learning::TieBreak, pipeline::TrainingConfig};

/// Configuration for the game-tree search agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchAgentConfig {
    /// Number of full rounds (every agent moves once) to look ahead
    pub depth: usize,
    /// Registry key of the leaf evaluation function
    pub evaluation: String,
}

impl Default for SearchAgentConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            evaluation: "score".to_string(),
        }
    }
}

impl SearchAgentConfig {
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }
}

/// Hyper-parameters of the Q-learning agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Learning rate α
    pub alpha: f64,
    /// Exploration probability ε
    pub epsilon: f64,
    /// Discount factor γ
    pub gamma: f64,
    /// Episodes after which learning and exploration are switched off
    pub num_training: usize,
    /// How ties between equally valued actions are broken
    pub tie_break: TieBreak,
    /// Seed for exploration and tie-breaking
    pub seed: Option<u64>,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            epsilon: 0.5,
            gamma: 1.0,
            num_training: 100,
            tie_break: TieBreak::Uniform,
            seed: None,
        }
    }
}

impl LearningConfig {
    /// Defaults used by the Pac-Man Q-learning agents.
    pub fn pacman() -> Self {
        Self {
            alpha: 0.2,
            epsilon: 0.05,
            gamma: 0.8,
            num_training: 0,
            ..Default::default()
        }
    }

    /// Check that rates and probabilities are within `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("epsilon", self.epsilon),
            ("gamma", self.gamma),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} must be within [0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Parameters of offline value iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueIterationConfig {
    /// Discount factor γ
    pub discount_rate: f64,
    /// Number of synchronous Bellman passes
    pub iterations: usize,
}

impl Default for ValueIterationConfig {
    fn default() -> Self {
        Self {
            discount_rate: 0.9,
            iterations: 100,
        }
    }
}

impl ValueIterationConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.discount_rate) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "discount_rate must be within [0, 1], got {}",
                    self.discount_rate
                ),
            });
        }
        Ok(())
    }
}

/// Top-level configuration file for the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentsConfig {
    pub search: SearchAgentConfig,
    pub learning: LearningConfig,
    pub value_iteration: ValueIterationConfig,
    pub training: TrainingConfig,
}

impl AgentsConfig {
    /// Load a JSON configuration file; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid JSON, or holds values
    /// outside their allowed ranges.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.learning.validate()?;
        self.value_iteration.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let search = SearchAgentConfig::default();
        assert_eq!(search.depth, 2);
        assert_eq!(search.evaluation, "score");

        let learning = LearningConfig::default();
        assert_eq!(learning.alpha, 0.5);
        assert_eq!(learning.epsilon, 0.5);
        assert_eq!(learning.gamma, 1.0);
        assert_eq!(learning.num_training, 100);

        let vi = ValueIterationConfig::default();
        assert_eq!(vi.discount_rate, 0.9);
        assert_eq!(vi.iterations, 100);
    }

    #[test]
    fn test_pacman_preset() {
        let config = LearningConfig::pacman();
        assert_eq!(config.epsilon, 0.05);
        assert_eq!(config.gamma, 0.8);
        assert_eq!(config.alpha, 0.2);
        assert_eq!(config.num_training, 0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AgentsConfig =
            serde_json::from_str(r#"{ "learning": { "alpha": 0.1 }, "search": { "depth": 3 } }"#)
                .unwrap();
        assert_eq!(config.learning.alpha, 0.1);
        assert_eq!(config.learning.epsilon, 0.5);
        assert_eq!(config.search.depth, 3);
        assert_eq!(config.search.evaluation, "score");
        assert_eq!(config.value_iteration, ValueIterationConfig::default());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = LearningConfig {
            epsilon: 1.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("epsilon"));

        let vi = ValueIterationConfig {
            discount_rate: -0.1,
            ..Default::default()
        };
        assert!(vi.validate().is_err());
    }
}
