//! Minimax with alpha-beta pruning

use tracing::debug;

use super::{
    evaluation::{EvaluationFn, EvaluationRegistry},
    game::{AgentIndex, GameState, PACMAN},
    tree::{TreeSearch, expandable_actions},
};
use crate::{Result, config::SearchAgentConfig, ports::Agent};

/// Minimax with an `(alpha, beta)` window.
///
/// Returns the same root action as [`super::MinimaxAgent`] for every
/// evaluation function while expanding fewer nodes. Values outside the window
/// are bounds rather than exact minimax values (fail-soft).
#[derive(Debug, Clone)]
pub struct AlphaBetaAgent<S> {
    tree: TreeSearch<S>,
}

impl<S: GameState> AlphaBetaAgent<S> {
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

    /// Best root action for pac-man together with its value.
    ///
    /// Alpha is raised after every root child so later children are searched
    /// with a tighter window; a later child only wins with a strictly greater
    /// value.
    pub fn best_action(&self, state: &S) -> Option<(S::Action, f64)> {
        let (agent, depth) = self.tree.next_ply(state, PACMAN, 0);
        let mut best: Option<(S::Action, f64)> = None;
        let mut alpha = f64::NEG_INFINITY;

        for action in expandable_actions(state, PACMAN) {
            let successor = state.generate_successor(PACMAN, action);
            let value = self.value(&successor, agent, depth, alpha, f64::INFINITY);
            if best.is_none_or(|(_, top)| value > top) {
                best = Some((action, value));
                alpha = alpha.max(value);
            }
        }
        best
    }

    /// Windowed value of `state` with `agent` to move at `depth`.
    pub fn value(
        &self,
        state: &S,
        agent: AgentIndex,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        if self.tree.is_cutoff(state, depth) {
            return self.tree.evaluate(state);
        }
        let actions = expandable_actions(state, agent);
        if actions.is_empty() {
            return self.tree.evaluate(state);
        }

        let (next_agent, next_depth) = self.tree.next_ply(state, agent, depth);
        if agent == PACMAN {
            let mut best = f64::NEG_INFINITY;
            for action in actions {
                let successor = state.generate_successor(agent, action);
                best = best.max(self.value(&successor, next_agent, next_depth, alpha, beta));
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for action in actions {
                let successor = state.generate_successor(agent, action);
                best = best.min(self.value(&successor, next_agent, next_depth, alpha, beta));
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl<S: GameState> Agent<S> for AlphaBetaAgent<S> {
    type Action = S::Action;

    fn select_action(&mut self, state: &S) -> Option<S::Action> {
        let (action, value) = self.best_action(state)?;
        debug!(depth = self.tree.depth(), ?action, value, "alpha-beta chose action");
        Some(action)
    }

    fn name(&self) -> &str {
        "alpha_beta"
    }
}
