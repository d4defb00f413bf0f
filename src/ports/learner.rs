//! Learner port - the contract between reinforcement agents and the
//! training driver

use super::agent::Agent;

/// Summary of a finished episode, returned by [`Learner::stop_episode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeReport {
    /// Number of episodes completed so far, this one included
    pub episode: usize,
    /// Sum of rewards observed during the episode
    pub reward: f64,
    /// True exactly once: when this episode used up the training budget
    pub training_complete: bool,
}

/// An agent that learns online from observed transitions.
///
/// # Event Sequence
///
/// The driver calls, for every episode:
/// 1. `start_episode()`
/// 2. repeatedly `select_action(state)` followed by `observe(next, reward)`
/// 3. `stop_episode()`
///
/// [`Agent::select_action`] records the chosen `(state, action)` pair on the
/// learner; [`Learner::observe`] completes that transition and applies the
/// learning update. The learner never updates itself without an `observe`.
pub trait Learner<S>: Agent<S> {
    /// Complete the last recorded transition with its outcome.
    ///
    /// Does nothing if no action has been recorded since the last
    /// observation.
    fn observe(&mut self, next_state: &S, reward: f64);

    fn start_episode(&mut self);

    fn stop_episode(&mut self) -> EpisodeReport;

    fn episodes_so_far(&self) -> usize;

    /// Whether the learner is still inside its training budget.
    fn is_training(&self) -> bool;
}
