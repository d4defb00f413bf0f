//! One-step agents: reflex (scores actions) and greedy (scores successors)

use rand::rngs::StdRng;
use tracing::trace;

use super::{
    evaluation::{ActionEvaluationFn, EvaluationFn},
    game::{GameState, PACMAN},
    tree::expandable_actions,
};
use crate::{
    ports::Agent,
    utils::{build_rng, choose_best},
};

/// Scores every legal action, stop included, and picks uniformly among the
/// best.
pub struct ReflexAgent<S: GameState> {
    evaluation: ActionEvaluationFn<S, S::Action>,
    rng: StdRng,
}

impl<S: GameState> ReflexAgent<S> {
    pub fn new(evaluation: ActionEvaluationFn<S, S::Action>) -> Self {
        Self {
            evaluation,
            rng: build_rng(None),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = build_rng(Some(seed));
        self
    }
}

impl<S: GameState> Agent<S> for ReflexAgent<S> {
    type Action = S::Action;

    fn select_action(&mut self, state: &S) -> Option<S::Action> {
        let scored: Vec<_> = state
            .legal_actions(PACMAN)
            .into_iter()
            .map(|action| (action, (self.evaluation)(state, action)))
            .collect();
        trace!(?scored, "reflex scores");
        choose_best(scored, &mut self.rng)
    }

    fn name(&self) -> &str {
        "reflex"
    }
}

/// Evaluates the successor of every non-stop action and picks uniformly among
/// the best.
pub struct GreedyAgent<S> {
    evaluation: EvaluationFn<S>,
    rng: StdRng,
}

impl<S: GameState> GreedyAgent<S> {
    pub fn new(evaluation: EvaluationFn<S>) -> Self {
        Self {
            evaluation,
            rng: build_rng(None),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = build_rng(Some(seed));
        self
    }
}

impl<S: GameState> Agent<S> for GreedyAgent<S> {
    type Action = S::Action;

    fn select_action(&mut self, state: &S) -> Option<S::Action> {
        let scored = expandable_actions(state, PACMAN).into_iter().map(|action| {
            let successor = state.generate_successor(PACMAN, action);
            (action, (self.evaluation)(&successor))
        });
        choose_best(scored.collect::<Vec<_>>(), &mut self.rng)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::multiagent::{
        evaluation::score_evaluation,
        testing::{Pick, TreeGame, branch, leaf},
    };

    #[test]
    fn test_greedy_picks_best_successor() {
        let game = TreeGame::new(branch(vec![leaf(1.0), leaf(9.0), leaf(4.0)]), 1);
        let mut agent = GreedyAgent::new(Arc::new(score_evaluation::<TreeGame>)).with_seed(3);
        assert_eq!(agent.select_action(&game), Some(Pick(1)));
    }

    #[test]
    fn test_reflex_breaks_ties_among_best_only() {
        let game = TreeGame::new(branch(vec![leaf(0.0), leaf(0.0), leaf(0.0)]), 1);
        let evaluation: ActionEvaluationFn<TreeGame, Pick> =
            Arc::new(|_state: &TreeGame, action: Pick| if action.0 == 0 { 0.0 } else { 1.0 });
        let mut agent = ReflexAgent::new(evaluation).with_seed(11);
        for _ in 0..20 {
            let choice = agent.select_action(&game);
            assert!(matches!(choice, Some(Pick(1 | 2))));
        }
    }

    #[test]
    fn test_no_actions() {
        let mut agent = GreedyAgent::new(Arc::new(score_evaluation::<TreeGame>));
        assert_eq!(agent.select_action(&TreeGame::new(leaf(0.0), 1)), None);
    }
}
