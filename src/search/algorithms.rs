//! Uninformed and informed graph search

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::{
    frontier::{Frontier, Node, PriorityFrontier, Queue, Stack},
    problem::SearchProblem,
};

/// Result of a search run: the plan and how much work it took.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<A> {
    /// Actions from the start to a goal; empty when no goal was reached
    /// (or the start already is one)
    pub path: Vec<A>,
    /// Number of states whose successors were generated
    pub expanded: usize,
    /// Cost of `path`, or `None` if no goal was found
    pub cost: Option<f64>,
}

impl<A> SearchOutcome<A> {
    fn found(path: Vec<A>, cost: f64, expanded: usize) -> Self {
        Self {
            path,
            expanded,
            cost: Some(cost),
        }
    }

    fn exhausted(expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            expanded,
            cost: None,
        }
    }

    /// Whether a goal was reached.
    pub fn is_found(&self) -> bool {
        self.cost.is_some()
    }
}

/// Heuristic that always estimates zero remaining cost.
pub fn null_heuristic<S>(_state: &S) -> f64 {
    0.0
}

/// Search the deepest nodes first.
///
/// Returns the first goal path found, which need not be the shortest.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    depth_first_search_with_stats(problem).path
}

/// Search the shallowest nodes first; the plan has the fewest steps.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    breadth_first_search_with_stats(problem).path
}

/// Search the node of least total cost first.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Vec<P::Action> {
    uniform_cost_search_with_stats(problem).path
}

/// Search the node with the lowest cost plus heuristic estimate first.
///
/// The heuristic is trusted as given. With an admissible heuristic the plan is
/// optimal; otherwise the search stays complete but may return a costlier
/// plan.
pub fn a_star_search<P, H>(problem: &P, heuristic: H) -> Vec<P::Action>
where
    P: SearchProblem,
    H: Fn(&P::State) -> f64,
{
    a_star_search_with_stats(problem, heuristic).path
}

pub fn depth_first_search_with_stats<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    let outcome = discovery_search(problem, Stack::new());
    log_outcome("dfs", &outcome);
    outcome
}

pub fn breadth_first_search_with_stats<P: SearchProblem>(
    problem: &P,
) -> SearchOutcome<P::Action> {
    let outcome = discovery_search(problem, Queue::new());
    log_outcome("bfs", &outcome);
    outcome
}

pub fn uniform_cost_search_with_stats<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    let outcome = best_first_search(problem, null_heuristic);
    log_outcome("ucs", &outcome);
    outcome
}

pub fn a_star_search_with_stats<P, H>(problem: &P, heuristic: H) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    H: Fn(&P::State) -> f64,
{
    let outcome = best_first_search(problem, heuristic);
    log_outcome("astar", &outcome);
    outcome
}

/// Graph search that marks states when they are first discovered, so every
/// state enters the frontier at most once.
fn discovery_search<P, F>(problem: &P, mut frontier: F) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    F: Frontier<Node<P::State, P::Action>>,
{
    let start = problem.start_state();
    let mut discovered = HashSet::from([start.clone()]);
    frontier.push(Node::root(start));
    let mut expanded = 0;

    while let Some(node) = frontier.pop() {
        if problem.is_goal(&node.state) {
            return SearchOutcome::found(node.path, node.cost, expanded);
        }

        expanded += 1;
        for successor in problem.successors(&node.state) {
            if discovered.insert(successor.state.clone()) {
                frontier.push(node.child(successor));
            }
        }
    }

    SearchOutcome::exhausted(expanded)
}

/// Best-first search on `g + h` with lazy deletion.
///
/// A state is pushed again whenever a strictly cheaper path to it is found;
/// the older, costlier entries stay in the heap and are skipped when popped.
fn best_first_search<P, H>(problem: &P, heuristic: H) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    H: Fn(&P::State) -> f64,
{
    let start = problem.start_state();
    let mut best_cost: HashMap<P::State, f64> = HashMap::from([(start.clone(), 0.0)]);
    let mut frontier = PriorityFrontier::new();
    let start_priority = heuristic(&start);
    frontier.push(Node::root(start), start_priority);
    let mut expanded = 0;

    while let Some(node) = frontier.pop() {
        let is_stale = best_cost
            .get(&node.state)
            .is_some_and(|&best| node.cost > best);
        if is_stale {
            continue;
        }

        if problem.is_goal(&node.state) {
            return SearchOutcome::found(node.path, node.cost, expanded);
        }

        expanded += 1;
        for successor in problem.successors(&node.state) {
            let cost = node.cost + successor.cost;
            let improves = best_cost
                .get(&successor.state)
                .is_none_or(|&best| cost < best);
            if improves {
                best_cost.insert(successor.state.clone(), cost);
                let priority = cost + heuristic(&successor.state);
                frontier.push(node.child(successor), priority);
            }
        }
    }

    SearchOutcome::exhausted(expanded)
}

fn log_outcome<A>(strategy: &str, outcome: &SearchOutcome<A>) {
    match outcome.cost {
        Some(cost) => debug!(
            strategy,
            expanded = outcome.expanded,
            steps = outcome.path.len(),
            cost,
            "search reached a goal"
        ),
        None => debug!(
            strategy,
            expanded = outcome.expanded,
            "frontier exhausted without reaching a goal"
        ),
    }
}
