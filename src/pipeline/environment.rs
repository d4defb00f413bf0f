//! Environment port consumed by the training driver

/// Outcome of one environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S> {
    pub next_state: S,
    pub reward: f64,
}

/// An episodic environment that an online learner interacts with.
///
/// Unlike [`crate::mdp::MarkovDecisionProcess`] the dynamics are hidden: the
/// learner only sees sampled transitions. Which actions are legal is the
/// learner's knowledge, not the environment's; an episode ends early when the
/// learner has no action to offer.
pub trait Environment {
    type State: Clone;
    type Action: Clone;

    /// Start a new episode and return its initial state.
    fn reset(&mut self) -> Self::State;

    /// Take `action` in `state`, sampling the successor.
    fn step(&mut self, state: &Self::State, action: &Self::Action) -> Step<Self::State>;

    fn is_terminal(&self, state: &Self::State) -> bool;
}
