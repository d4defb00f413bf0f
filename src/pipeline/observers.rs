//! Observer implementations for training pipelines
//!
//! Observers allow composable data collection during training without coupling
//! training logic to specific output formats.

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{Result, ports::Observer};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    total_reward: f64,
    episodes: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            total_reward: 0.0,
            episodes: 0,
        }
    }

    fn average(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_reward / self.episodes as f64
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes (avg reward {msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, reward: f64, _steps: usize) -> Result<()> {
        self.total_reward += reward;
        self.episodes += 1;

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(format!("{:.2}", self.average()));
        }
        Ok(())
    }

    fn on_training_complete(&mut self, episodes: usize) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.println(format!("training complete after {episodes} episodes"));
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{:.2}", self.average()));
        }
        Ok(())
    }
}

/// Metrics observer - Tracks episode rewards and lengths
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    rewards: Vec<f64>,
    lengths: Vec<usize>,
    training_completed_at: Option<usize>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn episodes(&self) -> usize {
        self.rewards.len()
    }

    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    pub fn training_completed_at(&self) -> Option<usize> {
        self.training_completed_at
    }

    pub fn average_reward(&self) -> f64 {
        mean(self.rewards.iter().copied())
    }

    pub fn average_length(&self) -> f64 {
        mean(self.lengths.iter().map(|&length| length as f64))
    }

    /// Mean reward of the episodes played after training finished.
    pub fn average_test_reward(&self) -> Option<f64> {
        let start = self.training_completed_at?;
        (start < self.rewards.len()).then(|| mean(self.rewards[start..].iter().copied()))
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            episodes: self.episodes(),
            average_reward: self.average_reward(),
            average_length: self.average_length(),
            training_completed_at: self.training_completed_at,
            average_test_reward: self.average_test_reward(),
        }
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    if count == 0 {
        0.0
    } else {
        values.sum::<f64>() / count as f64
    }
}

/// Snapshot of [`MetricsObserver`] suitable for printing or serializing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub episodes: usize,
    pub average_reward: f64,
    pub average_length: f64,
    pub training_completed_at: Option<usize>,
    pub average_test_reward: Option<f64>,
}

impl Observer for MetricsObserver {
    fn on_episode_end(&mut self, _episode: usize, reward: f64, steps: usize) -> Result<()> {
        self.rewards.push(reward);
        self.lengths.push(steps);
        Ok(())
    }

    fn on_training_complete(&mut self, episodes: usize) -> Result<()> {
        self.training_completed_at = Some(episodes);
        Ok(())
    }
}
