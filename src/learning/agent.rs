//! Q-learning agent (off-policy TD control)

use std::fmt;

use rand::{Rng, rngs::StdRng, seq::IndexedRandom};
use tracing::trace;

use super::{
    episode::EpisodeTracker,
    q_table::{QFunction, QTable},
};
use crate::{
    config::LearningConfig,
    multiagent::{GameState, PACMAN},
    ports::{Agent, EpisodeReport, Learner},
    utils::build_rng,
};

/// Legal actions of a state, supplied by the environment.
pub type LegalActionsFn<S, A> = Box<dyn Fn(&S) -> Vec<A>>;

/// Q-learning agent
///
/// Learns `Q*` by always updating toward the best next-state value,
/// regardless of the action actually taken next:
///
/// `Q(s, a) ← Q(s, a) + α (r + γ V(s') − Q(s, a))`
///
/// where `V(s') = max_a' Q(s', a')`, or `0.0` when `s'` has no legal actions.
/// The Q-value storage is pluggable through [`QFunction`]; the default is a
/// [`QTable`].
pub struct QLearningAgent<S, A, Q = QTable<S, A>> {
    q: Q,
    legal_actions: LegalActionsFn<S, A>,
    config: LearningConfig,
    tracker: EpisodeTracker<S, A>,
    rng: StdRng,
    name: String,
}

impl<S, A> QLearningAgent<S, A, QTable<S, A>>
where
    S: Clone + Eq + std::hash::Hash,
    A: Clone + Eq + std::hash::Hash,
{
    /// Tabular agent over the actions reported by `legal_actions`.
    pub fn new(config: LearningConfig, legal_actions: impl Fn(&S) -> Vec<A> + 'static) -> Self {
        Self::with_q_function(config, QTable::new(), legal_actions)
    }

    pub fn q_table(&self) -> &QTable<S, A> {
        &self.q
    }
}

impl<S, Q> QLearningAgent<S, S::Action, Q>
where
    S: GameState + 'static,
    Q: QFunction<S, S::Action>,
{
    /// Agent acting as pac-man in a multi-agent game.
    pub fn for_game(config: LearningConfig, q: Q) -> Self {
        Self::with_q_function(config, q, |state: &S| state.legal_actions(PACMAN))
    }

    /// Observe the next game state, rewarding the change in score since the
    /// recorded decision.
    pub fn observe_score(&mut self, state: &S) {
        let Some((previous, _)) = self.tracker.last() else {
            return;
        };
        let reward = state.score() - previous.score();
        self.observe(state, reward);
    }
}

impl<S, A, Q> QLearningAgent<S, A, Q>
where
    S: Clone,
    A: Clone,
    Q: QFunction<S, A>,
{
    pub fn with_q_function(
        config: LearningConfig,
        q: Q,
        legal_actions: impl Fn(&S) -> Vec<A> + 'static,
    ) -> Self {
        Self {
            q,
            legal_actions: Box::new(legal_actions),
            tracker: EpisodeTracker::new(&config),
            rng: build_rng(config.seed),
            config,
            name: "q_learning".to_string(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = build_rng(Some(seed));
        self.config.seed = Some(seed);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    pub fn q_function(&self) -> &Q {
        &self.q
    }

    pub fn tracker(&self) -> &EpisodeTracker<S, A> {
        &self.tracker
    }

    /// Current learning rate; zero once training is over.
    pub fn alpha(&self) -> f64 {
        self.tracker.alpha()
    }

    /// Current exploration probability; zero once training is over.
    pub fn epsilon(&self) -> f64 {
        self.tracker.epsilon()
    }

    pub fn gamma(&self) -> f64 {
        self.config.gamma
    }

    pub fn legal_actions(&self, state: &S) -> Vec<A> {
        (self.legal_actions)(state)
    }

    pub fn q_value(&self, state: &S, action: &A) -> f64 {
        self.q.q_value(state, action)
    }

    /// Best Q-value over the legal actions of `state`; `0.0` if there are
    /// none.
    pub fn value(&self, state: &S) -> f64 {
        self.legal_actions(state)
            .iter()
            .map(|action| self.q.q_value(state, action))
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Action with the best Q-value, ties broken by the configured
    /// [`super::TieBreak`]; `None` if `state` has no legal actions.
    pub fn policy(&mut self, state: &S) -> Option<A> {
        let scored: Vec<(A, f64)> = self
            .legal_actions(state)
            .into_iter()
            .map(|action| {
                let value = self.q.q_value(state, &action);
                (action, value)
            })
            .collect();
        self.config.tie_break.pick(scored, &mut self.rng)
    }

    /// Apply one TD update for the transition `(state, action, next_state,
    /// reward)`.
    pub fn update(&mut self, state: &S, action: &A, next_state: &S, reward: f64) {
        let alpha = self.tracker.alpha();
        if alpha == 0.0 {
            return;
        }
        let correction =
            reward + self.config.gamma * self.value(next_state) - self.q.q_value(state, action);
        self.q.apply_correction(state, action, alpha * correction);
    }
}

impl<S, A, Q> Agent<S> for QLearningAgent<S, A, Q>
where
    S: Clone,
    A: Clone + fmt::Debug,
    Q: QFunction<S, A>,
{
    type Action = A;

    /// ε-greedy action selection; the choice is recorded for the next
    /// [`Learner::observe`].
    fn select_action(&mut self, state: &S) -> Option<A> {
        let legal = self.legal_actions(state);
        if legal.is_empty() {
            return None;
        }

        let choice = if self.rng.random::<f64>() < self.tracker.epsilon() {
            legal.choose(&mut self.rng).cloned()
        } else {
            self.policy(state)
        };
        let action = choice?;
        trace!(?action, epsilon = self.tracker.epsilon(), "q-learning chose action");

        self.tracker.record(state.clone(), action.clone());
        Some(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<S, A, Q> Learner<S> for QLearningAgent<S, A, Q>
where
    S: Clone,
    A: Clone + fmt::Debug,
    Q: QFunction<S, A>,
{
    fn observe(&mut self, next_state: &S, reward: f64) {
        if let Some((state, action)) = self.tracker.complete(reward) {
            self.update(&state, &action, next_state, reward);
        }
    }

    fn start_episode(&mut self) {
        self.tracker.start_episode();
    }

    fn stop_episode(&mut self) -> EpisodeReport {
        let report = self.tracker.stop_episode();
        if report.training_complete {
            self.q.training_complete();
        }
        report
    }

    fn episodes_so_far(&self) -> usize {
        self.tracker.episodes_so_far()
    }

    fn is_training(&self) -> bool {
        self.tracker.is_training()
    }
}

impl<S, A, Q: fmt::Debug> fmt::Debug for QLearningAgent<S, A, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QLearningAgent")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("q", &self.q)
            .finish_non_exhaustive()
    }
}
