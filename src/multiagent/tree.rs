//! Shared plumbing for the depth-limited game-tree agents

use std::fmt;

use super::{
    evaluation::{EvaluationFn, EvaluationRegistry},
    game::{AgentIndex, GameState, Move},
};
use crate::{Result, config::SearchAgentConfig};

/// Depth limit plus leaf evaluation, shared by minimax, alpha-beta and
/// expectimax.
///
/// One unit of depth is a full round in which every agent moves once. Agent 0
/// moves first; after the last agent the round wraps back to agent 0 one
/// level deeper.
#[derive(Clone)]
pub(crate) struct TreeSearch<S> {
    depth: usize,
    evaluation: EvaluationFn<S>,
}

impl<S: GameState> TreeSearch<S> {
    pub(crate) fn new(depth: usize, evaluation: EvaluationFn<S>) -> Self {
        Self { depth, evaluation }
    }

    pub(crate) fn from_config(
        config: &SearchAgentConfig,
        registry: &EvaluationRegistry<S>,
    ) -> Result<Self> {
        let evaluation = registry.resolve(&config.evaluation)?.clone();
        Ok(Self::new(config.depth, evaluation))
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn evaluate(&self, state: &S) -> f64 {
        (self.evaluation)(state)
    }

    /// Leaf test: depth budget spent or game over.
    pub(crate) fn is_cutoff(&self, state: &S, depth: usize) -> bool {
        depth >= self.depth || state.is_terminal()
    }

    /// Agent and depth of the ply that follows `agent`'s move.
    pub(crate) fn next_ply(&self, state: &S, agent: AgentIndex, depth: usize) -> (AgentIndex, usize) {
        let next = agent + 1;
        if next >= state.num_agents() {
            (0, depth + 1)
        } else {
            (next, depth)
        }
    }
}

impl<S> fmt::Debug for TreeSearch<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSearch")
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

/// Legal actions of `agent` with stop removed; stop is never expanded.
pub(crate) fn expandable_actions<S: GameState>(state: &S, agent: AgentIndex) -> Vec<S::Action> {
    state
        .legal_actions(agent)
        .into_iter()
        .filter(|action| !action.is_stop())
        .collect()
}

/// First entry with the strictly greatest value.
pub(crate) fn first_best<A>(scored: impl IntoIterator<Item = (A, f64)>) -> Option<(A, f64)> {
    let mut best: Option<(A, f64)> = None;
    for (action, value) in scored {
        if best.as_ref().is_none_or(|(_, top)| value > *top) {
            best = Some((action, value));
        }
    }
    best
}
