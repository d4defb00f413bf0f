//! Training pipeline for online learners

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::environment::Environment;
use crate::{
    Result,
    ports::{Learner, Observer},
};

/// Training configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Number of episodes to run, training and testing combined
    pub episodes: usize,

    /// Episodes are cut off after this many steps
    pub max_steps: usize,

    /// Random seed for the agent and environment
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 100,
            max_steps: 1000,
            seed: None,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Episodes played
    pub episodes: usize,

    /// Steps taken over all episodes
    pub total_steps: usize,

    /// Mean episode reward
    pub average_reward: f64,

    /// Total reward of every episode, in order
    pub rewards: Vec<f64>,

    /// Episode after which the learner stopped training, if it did
    pub training_completed_at: Option<usize>,
}

impl TrainingResult {
    pub fn new(rewards: Vec<f64>, total_steps: usize, training_completed_at: Option<usize>) -> Self {
        let average_reward = if rewards.is_empty() {
            0.0
        } else {
            rewards.iter().sum::<f64>() / rewards.len() as f64
        };
        Self {
            episodes: rewards.len(),
            total_steps,
            average_reward,
            rewards,
            training_completed_at,
        }
    }

    /// Mean reward of the last `n` episodes.
    pub fn average_of_last(&self, n: usize) -> f64 {
        let tail = &self.rewards[self.rewards.len().saturating_sub(n)..];
        if tail.is_empty() {
            0.0
        } else {
            tail.iter().sum::<f64>() / tail.len() as f64
        }
    }
}

/// Drives a learner through episodes of an environment
///
/// Per step: `select_action` → `Environment::step` → `observe`. Episodes end
/// at a terminal state, when the learner has no action, or after
/// `max_steps`.
pub struct TrainingPipeline<'a> {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer + 'a>>,
}

impl<'a> TrainingPipeline<'a> {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer + 'a>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run every configured episode.
    ///
    /// # Errors
    ///
    /// Fails only if an observer fails.
    pub fn run<E, L>(&mut self, agent: &mut L, env: &mut E) -> Result<TrainingResult>
    where
        E: Environment,
        L: Learner<E::State, Action = E::Action> + ?Sized,
    {
        info!(
            agent = agent.name(),
            episodes = self.config.episodes,
            max_steps = self.config.max_steps,
            "starting training"
        );
        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut rewards = Vec::with_capacity(self.config.episodes);
        let mut total_steps = 0;
        let mut training_completed_at = None;

        for episode in 0..self.config.episodes {
            for observer in &mut self.observers {
                observer.on_episode_start(episode)?;
            }

            let (reward, steps) = self.run_episode(episode, agent, env)?;
            let report = agent.stop_episode();
            debug!(episode, reward, steps, "episode finished");

            rewards.push(reward);
            total_steps += steps;

            for observer in &mut self.observers {
                observer.on_episode_end(episode, reward, steps)?;
            }
            if report.training_complete {
                training_completed_at = Some(report.episode);
                for observer in &mut self.observers {
                    observer.on_training_complete(report.episode)?;
                }
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::new(rewards, total_steps, training_completed_at);
        info!(
            episodes = result.episodes,
            average_reward = result.average_reward,
            "training finished"
        );
        Ok(result)
    }

    fn run_episode<E, L>(
        &mut self,
        episode: usize,
        agent: &mut L,
        env: &mut E,
    ) -> Result<(f64, usize)>
    where
        E: Environment,
        L: Learner<E::State, Action = E::Action> + ?Sized,
    {
        agent.start_episode();
        let mut state = env.reset();
        let mut total = 0.0;
        let mut steps = 0;

        while steps < self.config.max_steps && !env.is_terminal(&state) {
            let Some(action) = agent.select_action(&state) else {
                break;
            };
            let step = env.step(&state, &action);
            agent.observe(&step.next_state, step.reward);

            total += step.reward;
            steps += 1;
            for observer in &mut self.observers {
                observer.on_step(episode, steps, step.reward)?;
            }
            state = step.next_state;
        }

        Ok((total, steps))
    }
}
