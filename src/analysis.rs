//! Gridworld parameter analysis
//!
//! Each [`Question`] asks for a discount, noise and living reward under which
//! value iteration produces a particular kind of policy. [`Question::answer`]
//! gives the chosen parameters (or `None` when no setting works) and
//! [`Question::verify`] checks them by planning and following the resulting
//! policy without slips.

use std::fmt;

use serde::Serialize;

use crate::{
    config::ValueIterationConfig,
    grid::Position,
    mdp::{GridAction, GridState, Gridworld, ValueIterationAgent},
};

/// Longest walk followed before a policy is declared to never exit.
const ROLLOUT_LIMIT: usize = 100;

/// Exit rewards on the discount grid.
const CLOSE_EXIT: f64 = 1.0;
const DISTANT_EXIT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridParameters {
    pub discount: f64,
    pub noise: f64,
    pub living_reward: f64,
}

impl GridParameters {
    pub const fn new(discount: f64, noise: f64, living_reward: f64) -> Self {
        Self {
            discount,
            noise,
            living_reward,
        }
    }

    /// `grid` with this noise and living reward.
    pub fn apply(&self, grid: Gridworld) -> Gridworld {
        grid.with_noise(self.noise).with_living_reward(self.living_reward)
    }

    pub fn value_iteration(&self, iterations: usize) -> ValueIterationConfig {
        ValueIterationConfig {
            discount_rate: self.discount,
            iterations,
        }
    }
}

impl fmt::Display for GridParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "discount {}, noise {}, living reward {}",
            self.discount, self.noise, self.living_reward
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    /// Bridge grid: cross the bridge to the +10 exit.
    BridgeCrossing,
    /// Discount grid: prefer the close exit, walking along the cliff.
    CloseExitRiskingCliff,
    /// Discount grid: prefer the close exit, keeping away from the cliff.
    CloseExitAvoidingCliff,
    /// Discount grid: prefer the distant exit, walking along the cliff.
    DistantExitRiskingCliff,
    /// Discount grid: prefer the distant exit, keeping away from the cliff.
    DistantExitAvoidingCliff,
    /// Discount grid: never exit and never fall.
    AvoidEveryExit,
    /// Bridge grid: a Q-learner finds the crossing within 50 episodes.
    LearnBridgeCrossing,
}

impl Question {
    pub const ALL: [Question; 7] = [
        Question::BridgeCrossing,
        Question::CloseExitRiskingCliff,
        Question::CloseExitAvoidingCliff,
        Question::DistantExitRiskingCliff,
        Question::DistantExitAvoidingCliff,
        Question::AvoidEveryExit,
        Question::LearnBridgeCrossing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Question::BridgeCrossing => "bridge-crossing",
            Question::CloseExitRiskingCliff => "close-exit-risking-cliff",
            Question::CloseExitAvoidingCliff => "close-exit-avoiding-cliff",
            Question::DistantExitRiskingCliff => "distant-exit-risking-cliff",
            Question::DistantExitAvoidingCliff => "distant-exit-avoiding-cliff",
            Question::AvoidEveryExit => "avoid-every-exit",
            Question::LearnBridgeCrossing => "learn-bridge-crossing",
        }
    }

    pub fn grid(self) -> Gridworld {
        match self {
            Question::BridgeCrossing | Question::LearnBridgeCrossing => Gridworld::bridge_grid(),
            _ => Gridworld::discount_grid(),
        }
    }

    /// Parameters producing the requested behaviour; `None` if impossible.
    pub fn answer(self) -> Option<GridParameters> {
        match self {
            // Without noise nothing can slip off the bridge.
            Question::BridgeCrossing => Some(GridParameters::new(0.9, 0.0, 0.0)),
            // A steep living cost rushes to the nearest exit.
            Question::CloseExitRiskingCliff => Some(GridParameters::new(0.9, 0.2, -2.0)),
            // A low discount makes the long exit worthless; noise keeps the
            // walk away from the cliff.
            Question::CloseExitAvoidingCliff => Some(GridParameters::new(0.3, 0.2, -2.0)),
            Question::DistantExitRiskingCliff => Some(GridParameters::new(0.9, 0.0, 0.0)),
            Question::DistantExitAvoidingCliff => Some(GridParameters::new(0.9, 0.2, 0.0)),
            // Living is worth more than any exit.
            Question::AvoidEveryExit => Some(GridParameters::new(0.9, 0.2, 1.0)),
            // Fifty episodes of epsilon-greedy exploration cannot reliably
            // cross a bridge lined with -100 cliffs.
            Question::LearnBridgeCrossing => None,
        }
    }

    /// Plan with the answer and check the noiseless walk from the start.
    ///
    /// `None` when there is no answer or the question is about learning
    /// rather than planning.
    pub fn verify(self) -> Option<bool> {
        if self == Question::LearnBridgeCrossing {
            return None;
        }
        let parameters = self.answer()?;
        let agent = ValueIterationAgent::new(
            parameters.apply(self.grid()),
            &parameters.value_iteration(100),
        );
        let rollout = Rollout::follow(&agent, ROLLOUT_LIMIT);

        let satisfied = match self {
            Question::BridgeCrossing => rollout.exit == Some(DISTANT_EXIT),
            Question::CloseExitRiskingCliff => {
                rollout.exit == Some(CLOSE_EXIT) && rollout.skirts_cliff()
            }
            Question::CloseExitAvoidingCliff => {
                rollout.exit == Some(CLOSE_EXIT) && !rollout.skirts_cliff()
            }
            Question::DistantExitRiskingCliff => {
                rollout.exit == Some(DISTANT_EXIT) && rollout.skirts_cliff()
            }
            Question::DistantExitAvoidingCliff => {
                rollout.exit == Some(DISTANT_EXIT) && !rollout.skirts_cliff()
            }
            Question::AvoidEveryExit => rollout.exit.is_none(),
            Question::LearnBridgeCrossing => return None,
        };
        Some(satisfied)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A walk that follows a policy from the start, always moving as intended.
#[derive(Debug, Clone, PartialEq)]
pub struct Rollout {
    /// Cells visited, the start included
    pub path: Vec<Position>,
    /// Reward of the exit taken, or `None` if the walk never exited
    pub exit: Option<f64>,
}

impl Rollout {
    pub fn follow(agent: &ValueIterationAgent<Gridworld>, max_steps: usize) -> Self {
        let grid = agent.mdp();
        let mut position = grid.start();
        let mut path = vec![position];

        for _ in 0..max_steps {
            match agent.policy(&GridState::Cell(position)) {
                Some(GridAction::Move(direction)) => {
                    position = grid.intended_successor(position, direction);
                    path.push(position);
                }
                Some(GridAction::Exit) => {
                    return Self {
                        path,
                        exit: grid.exit_reward(position),
                    };
                }
                None => break,
            }
        }
        Self { path, exit: None }
    }

    /// Whether the walk runs along the row just above the discount grid's
    /// cliff.
    pub fn skirts_cliff(&self) -> bool {
        self.path.iter().any(|p| p.y == 3 && p.x >= 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_planning_answer_verifies() {
        for question in Question::ALL {
            match question {
                Question::LearnBridgeCrossing => {
                    assert_eq!(question.answer(), None);
                    assert_eq!(question.verify(), None);
                }
                _ => assert_eq!(question.verify(), Some(true), "{question}"),
            }
        }
    }

    #[test]
    fn test_noisy_bridge_is_not_crossed() {
        let parameters = GridParameters::new(0.9, 0.2, 0.0);
        let agent = ValueIterationAgent::new(
            parameters.apply(Gridworld::bridge_grid()),
            &parameters.value_iteration(100),
        );
        let rollout = Rollout::follow(&agent, ROLLOUT_LIMIT);
        assert_eq!(rollout.exit, Some(1.0));
    }
}
