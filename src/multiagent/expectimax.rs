//! Expectimax search

use tracing::debug;

use super::{
    evaluation::{EvaluationFn, EvaluationRegistry},
    game::{AgentIndex, GameState, PACMAN},
    tree::{TreeSearch, expandable_actions, first_best},
};
use crate::{Result, config::SearchAgentConfig, ports::Agent};

/// Depth-limited expectimax: ghosts are modelled as choosing uniformly at
/// random among their legal (non-stop) actions.
#[derive(Debug, Clone)]
pub struct ExpectimaxAgent<S> {
    tree: TreeSearch<S>,
}

impl<S: GameState> ExpectimaxAgent<S> {
    pub fn new(depth: usize, evaluation: EvaluationFn<S>) -> Self {
        Self {
            tree: TreeSearch::new(depth, evaluation),
        }
    }

    pub fn from_config(
        config: &SearchAgentConfig,
        registry: &EvaluationRegistry<S>,
    ) -> Result<Self> {
        Ok(Self {
            tree: TreeSearch::from_config(config, registry)?,
        })
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    pub fn best_action(&self, state: &S) -> Option<(S::Action, f64)> {
        let (agent, depth) = self.tree.next_ply(state, PACMAN, 0);
        first_best(expandable_actions(state, PACMAN).into_iter().map(|action| {
            let successor = state.generate_successor(PACMAN, action);
            (action, self.value(&successor, agent, depth))
        }))
    }

    /// Expected value of `state` with `agent` to move at `depth`.
    pub fn value(&self, state: &S, agent: AgentIndex, depth: usize) -> f64 {
        if self.tree.is_cutoff(state, depth) {
            return self.tree.evaluate(state);
        }
        let actions = expandable_actions(state, agent);
        if actions.is_empty() {
            return self.tree.evaluate(state);
        }

        let (next_agent, next_depth) = self.tree.next_ply(state, agent, depth);
        let count = actions.len();
        let values = actions.into_iter().map(|action| {
            let successor = state.generate_successor(agent, action);
            self.value(&successor, next_agent, next_depth)
        });
        if agent == PACMAN {
            values.fold(f64::NEG_INFINITY, f64::max)
        } else {
            values.sum::<f64>() / count as f64
        }
    }
}

impl<S: GameState> Agent<S> for ExpectimaxAgent<S> {
    type Action = S::Action;

    fn select_action(&mut self, state: &S) -> Option<S::Action> {
        let (action, value) = self.best_action(state)?;
        debug!(depth = self.tree.depth(), ?action, value, "expectimax chose action");
        Some(action)
    }

    fn name(&self) -> &str {
        "expectimax"
    }
}
