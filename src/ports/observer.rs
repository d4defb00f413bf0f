//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing training events,
//! allowing composable data collection without coupling the training
//! loop to specific output formats or metrics.

use crate::Result;

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_episodes)` - once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_step(...)` - for each transition
///    - `on_episode_end(...)`
///    - `on_training_complete(episode)` - once, when the learner's training
///      budget is used up
/// 3. `on_training_end()` - once at the end
///
/// # Examples
///
/// ```
/// use pacai::ports::Observer;
///
/// struct EpisodeCounter {
///     episodes: usize,
/// }
///
/// impl Observer for EpisodeCounter {
///     fn on_episode_end(
///         &mut self,
///         _episode: usize,
///         _reward: f64,
///         _steps: usize,
///     ) -> pacai::Result<()> {
///         self.episodes += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called before the first step of episode `episode` (0-based).
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each transition has been observed by the learner.
    fn on_step(&mut self, _episode: usize, _step: usize, _reward: f64) -> Result<()> {
        Ok(())
    }

    /// Called when an episode ends with its total reward and length.
    fn on_episode_end(&mut self, _episode: usize, _reward: f64, _steps: usize) -> Result<()> {
        Ok(())
    }

    /// Called when the learner finishes its training budget after
    /// `episodes` episodes.
    fn on_training_complete(&mut self, _episodes: usize) -> Result<()> {
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        (**self).on_training_start(total_episodes)
    }

    fn on_episode_start(&mut self, episode: usize) -> Result<()> {
        (**self).on_episode_start(episode)
    }

    fn on_step(&mut self, episode: usize, step: usize, reward: f64) -> Result<()> {
        (**self).on_step(episode, step, reward)
    }

    fn on_episode_end(&mut self, episode: usize, reward: f64, steps: usize) -> Result<()> {
        (**self).on_episode_end(episode, reward, steps)
    }

    fn on_training_complete(&mut self, episodes: usize) -> Result<()> {
        (**self).on_training_complete(episodes)
    }

    fn on_training_end(&mut self) -> Result<()> {
        (**self).on_training_end()
    }
}
