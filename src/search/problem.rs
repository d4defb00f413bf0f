//! Search problem port consumed by the graph-search algorithms

use std::hash::Hash;

/// One outgoing edge of a search state.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    /// State reached by taking `action`
    pub state: S,
    pub action: A,
    /// Non-negative step cost of the edge
    pub cost: f64,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: f64) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// A deterministic, fully observable search problem.
///
/// Implementations own the state space; the algorithms in
/// [`crate::search`] only call these three methods.
///
/// # Examples
///
/// ```
/// use pacai::search::{SearchProblem, Successor, breadth_first_search};
///
/// /// Count up from 0 to 3 in steps of one or two.
/// struct CountTo3;
///
/// impl SearchProblem for CountTo3 {
///     type State = u32;
///     type Action = u32;
///
///     fn start_state(&self) -> u32 {
///         0
///     }
///
///     fn is_goal(&self, state: &u32) -> bool {
///         *state == 3
///     }
///
///     fn successors(&self, state: &u32) -> Vec<Successor<u32, u32>> {
///         [1, 2]
///             .into_iter()
///             .filter(|step| state + step <= 3)
///             .map(|step| Successor::new(state + step, step, 1.0))
///             .collect()
///     }
/// }
///
/// assert_eq!(breadth_first_search(&CountTo3), vec![1, 2]);
/// ```
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal test.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Outgoing edges of `state`, in the order they should be considered.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;
}
