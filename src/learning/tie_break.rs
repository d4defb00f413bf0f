//! How the greedy policy chooses between equally valued actions

use std::{fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::utils::choose_best;

/// Tie-breaking rule for [`super::QLearningAgent::policy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Every maximising action is equally likely.
    #[default]
    Uniform,
    /// Walk the actions in order and swap to each later tie with
    /// probability 1/2. Later ties are favoured: with three tied actions
    /// the last is picked half of the time.
    Sequential,
}

impl TieBreak {
    /// Pick an action with the greatest value, or `None` for no actions.
    pub fn pick<A, R>(self, scored: impl IntoIterator<Item = (A, f64)>, rng: &mut R) -> Option<A>
    where
        A: Clone,
        R: Rng + ?Sized,
    {
        match self {
            TieBreak::Uniform => choose_best(scored, rng),
            TieBreak::Sequential => {
                let mut best: Option<(A, f64)> = None;
                for (action, value) in scored {
                    match best.as_ref().map(|(_, top)| *top) {
                        Some(top) if value < top => {}
                        Some(top) if value == top => {
                            if rng.random_bool(0.5) {
                                best = Some((action, value));
                            }
                        }
                        _ => best = Some((action, value)),
                    }
                }
                best.map(|(action, _)| action)
            }
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::Uniform => write!(f, "uniform"),
            TieBreak::Sequential => write!(f, "sequential"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(TieBreak::Uniform),
            "sequential" => Ok(TieBreak::Sequential),
            _ => Err(crate::Error::ParseTieBreak {
                input: s.to_string(),
                expected: "uniform, sequential".to_string(),
            }),
        }
    }
}
