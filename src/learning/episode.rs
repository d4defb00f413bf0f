//! Episode bookkeeping shared by every reinforcement learner

use tracing::info;

use crate::{config::LearningConfig, ports::EpisodeReport};

const REPORT_INTERVAL: usize = 100;

/// Tracks the last decision, per-episode rewards and the training budget.
///
/// After `num_training` episodes the tracker freezes learning: `alpha` and
/// `epsilon` both drop to zero so the agent acts greedily and stops
/// updating.
#[derive(Debug, Clone)]
pub struct EpisodeTracker<S, A> {
    alpha: f64,
    epsilon: f64,
    num_training: usize,
    last: Option<(S, A)>,
    episode_reward: f64,
    episodes_so_far: usize,
    accumulated_train_rewards: f64,
    accumulated_test_rewards: f64,
    window_rewards: f64,
}

impl<S, A> EpisodeTracker<S, A> {
    pub fn new(config: &LearningConfig) -> Self {
        Self {
            alpha: config.alpha,
            epsilon: config.epsilon,
            num_training: config.num_training,
            last: None,
            episode_reward: 0.0,
            episodes_so_far: 0,
            accumulated_train_rewards: 0.0,
            accumulated_test_rewards: 0.0,
            window_rewards: 0.0,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn num_training(&self) -> usize {
        self.num_training
    }

    pub fn episodes_so_far(&self) -> usize {
        self.episodes_so_far
    }

    pub fn is_training(&self) -> bool {
        self.episodes_so_far < self.num_training
    }

    /// Reward collected so far in the current episode.
    pub fn episode_reward(&self) -> f64 {
        self.episode_reward
    }

    pub fn accumulated_train_rewards(&self) -> f64 {
        self.accumulated_train_rewards
    }

    pub fn accumulated_test_rewards(&self) -> f64 {
        self.accumulated_test_rewards
    }

    /// The most recent decision that has not been observed yet.
    pub fn last(&self) -> Option<&(S, A)> {
        self.last.as_ref()
    }

    pub fn record(&mut self, state: S, action: A) {
        self.last = Some((state, action));
    }

    /// Consume the pending decision and credit `reward` to the episode.
    pub fn complete(&mut self, reward: f64) -> Option<(S, A)> {
        let last = self.last.take()?;
        self.episode_reward += reward;
        Some(last)
    }

    pub fn start_episode(&mut self) {
        self.last = None;
        self.episode_reward = 0.0;
    }

    pub fn stop_episode(&mut self) -> EpisodeReport {
        if self.is_training() {
            self.accumulated_train_rewards += self.episode_reward;
        } else {
            self.accumulated_test_rewards += self.episode_reward;
        }
        self.window_rewards += self.episode_reward;
        self.episodes_so_far += 1;

        if self.episodes_so_far >= self.num_training {
            self.epsilon = 0.0;
            self.alpha = 0.0;
        }

        if self.episodes_so_far.is_multiple_of(REPORT_INTERVAL) {
            self.report_window();
        }

        let training_complete = self.episodes_so_far == self.num_training;
        if training_complete {
            info!(
                episodes = self.episodes_so_far,
                average_reward = self.accumulated_train_rewards / self.num_training as f64,
                "training complete, learning frozen"
            );
        }

        let report = EpisodeReport {
            episode: self.episodes_so_far,
            reward: self.episode_reward,
            training_complete,
        };
        self.last = None;
        self.episode_reward = 0.0;
        report
    }

    fn report_window(&mut self) {
        let average = self.window_rewards / REPORT_INTERVAL as f64;
        if self.episodes_so_far <= self.num_training {
            info!(
                episodes = self.episodes_so_far,
                num_training = self.num_training,
                average_reward = average,
                "training progress"
            );
        } else {
            let tested = self.episodes_so_far - self.num_training;
            info!(
                tested,
                average_reward = average,
                test_average = self.accumulated_test_rewards / tested as f64,
                "testing progress"
            );
        }
        self.window_rewards = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(num_training: usize) -> EpisodeTracker<u8, u8> {
        EpisodeTracker::new(&LearningConfig {
            num_training,
            ..Default::default()
        })
    }

    #[test]
    fn test_freezes_after_budget() {
        let mut tracker = tracker(2);
        assert!(tracker.is_training());
        assert!(!tracker.stop_episode().training_complete);
        assert_eq!(tracker.alpha(), 0.5);

        let report = tracker.stop_episode();
        assert!(report.training_complete);
        assert_eq!(report.episode, 2);
        assert!(!tracker.is_training());
        assert_eq!(tracker.alpha(), 0.0);
        assert_eq!(tracker.epsilon(), 0.0);

        assert!(!tracker.stop_episode().training_complete);
    }

    #[test]
    fn test_zero_budget_learns_through_first_episode() {
        let mut tracker = tracker(0);
        assert!(!tracker.is_training());
        assert_eq!(tracker.alpha(), 0.5);
        assert_eq!(tracker.epsilon(), 0.5);

        let report = tracker.stop_episode();
        assert!(!report.training_complete);
        assert_eq!(tracker.alpha(), 0.0);
        assert_eq!(tracker.epsilon(), 0.0);
    }

    #[test]
    fn test_complete_consumes_pending_decision() {
        let mut tracker = tracker(10);
        assert_eq!(tracker.complete(1.0), None);
        assert_eq!(tracker.episode_reward(), 0.0);

        tracker.record(3, 4);
        assert_eq!(tracker.complete(2.5), Some((3, 4)));
        assert_eq!(tracker.complete(2.5), None);
        assert_eq!(tracker.episode_reward(), 2.5);
    }

    #[test]
    fn test_rewards_split_between_train_and_test() {
        let mut tracker = tracker(1);
        tracker.record(0, 0);
        tracker.complete(3.0);
        tracker.stop_episode();

        tracker.start_episode();
        tracker.record(0, 0);
        tracker.complete(-1.0);
        let report = tracker.stop_episode();

        assert_eq!(report.reward, -1.0);
        assert_eq!(tracker.accumulated_train_rewards(), 3.0);
        assert_eq!(tracker.accumulated_test_rewards(), -1.0);
    }
}
