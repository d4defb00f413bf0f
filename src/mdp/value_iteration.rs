//! Value iteration

use std::collections::HashMap;

use tracing::{debug, trace};

use super::MarkovDecisionProcess;
use crate::{config::ValueIterationConfig, ports::Agent};

/// Plans offline by value iteration, then acts greedily on the result.
///
/// Runs exactly `iterations` synchronous Bellman passes at construction.
/// Each pass reads only the previous pass's table and writes a fresh one;
/// the two are swapped afterwards. States without actions carry their
/// previous value over unchanged.
pub struct ValueIterationAgent<M: MarkovDecisionProcess> {
    mdp: M,
    discount_rate: f64,
    iterations: usize,
    values: HashMap<M::State, f64>,
}

impl<M: MarkovDecisionProcess> ValueIterationAgent<M> {
    pub fn new(mdp: M, config: &ValueIterationConfig) -> Self {
        let mut agent = Self {
            mdp,
            discount_rate: config.discount_rate,
            iterations: config.iterations,
            values: HashMap::new(),
        };
        agent.run();
        agent
    }

    fn run(&mut self) {
        let states = self.mdp.states();
        let mut next = HashMap::with_capacity(states.len());
        let mut residual = 0.0_f64;

        for pass in 0..self.iterations {
            next.clear();
            residual = 0.0;
            for state in &states {
                let previous = self.value(state);
                let actions = self.mdp.possible_actions(state);
                let value = if actions.is_empty() {
                    previous
                } else {
                    actions
                        .iter()
                        .map(|action| self.q_value(state, action))
                        .fold(f64::NEG_INFINITY, f64::max)
                };
                residual = residual.max((value - previous).abs());
                next.insert(state.clone(), value);
            }
            std::mem::swap(&mut self.values, &mut next);
            trace!(pass, residual, "value iteration pass");
        }

        debug!(
            iterations = self.iterations,
            states = states.len(),
            residual,
            "value iteration finished"
        );
    }

    pub fn mdp(&self) -> &M {
        &self.mdp
    }

    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Computed value of `state`; `0.0` for states never seen.
    pub fn value(&self, state: &M::State) -> f64 {
        self.values.get(state).copied().unwrap_or(0.0)
    }

    /// Expected discounted return of taking `action` in `state` and then
    /// following the computed values.
    pub fn q_value(&self, state: &M::State, action: &M::Action) -> f64 {
        self.mdp
            .transitions(state, action)
            .iter()
            .map(|(next, probability)| {
                probability
                    * (self.mdp.reward(state, action, next) + self.discount_rate * self.value(next))
            })
            .sum()
    }

    /// Action with the greatest Q-value; the first one seen wins ties.
    pub fn policy(&self, state: &M::State) -> Option<M::Action> {
        let mut best: Option<(M::Action, f64)> = None;
        for action in self.mdp.possible_actions(state) {
            let value = self.q_value(state, &action);
            if best.as_ref().is_none_or(|(_, top)| value > *top) {
                best = Some((action, value));
            }
        }
        best.map(|(action, _)| action)
    }
}

impl<M: MarkovDecisionProcess> Agent<M::State> for ValueIterationAgent<M> {
    type Action = M::Action;

    fn select_action(&mut self, state: &M::State) -> Option<M::Action> {
        self.policy(state)
    }

    fn name(&self) -> &str {
        "value_iteration"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One state, one self-loop action paying 1 per step.
    struct Loop;

    impl MarkovDecisionProcess for Loop {
        type State = ();
        type Action = ();

        fn states(&self) -> Vec<()> {
            vec![()]
        }

        fn start_state(&self) {}

        fn possible_actions(&self, _state: &()) -> Vec<()> {
            vec![()]
        }

        fn transitions(&self, _state: &(), _action: &()) -> Vec<((), f64)> {
            vec![((), 1.0)]
        }

        fn reward(&self, _state: &(), _action: &(), _next: &()) -> f64 {
            1.0
        }

        fn is_terminal(&self, _state: &()) -> bool {
            false
        }
    }

    #[test]
    fn test_geometric_series() {
        let config = ValueIterationConfig {
            discount_rate: 0.5,
            iterations: 3,
        };
        let agent = ValueIterationAgent::new(Loop, &config);
        // 1 + 0.5 + 0.25
        assert_eq!(agent.value(&()), 1.75);
        assert_eq!(agent.q_value(&(), &()), 1.0 + 0.5 * 1.75);
    }

    #[test]
    fn test_zero_iterations_keeps_zero_table() {
        let config = ValueIterationConfig {
            discount_rate: 0.9,
            iterations: 0,
        };
        let agent = ValueIterationAgent::new(Loop, &config);
        assert_eq!(agent.value(&()), 0.0);
        assert_eq!(agent.policy(&()), Some(()));
    }
}
