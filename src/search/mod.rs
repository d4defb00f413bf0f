//! Generic graph search over an abstract [`SearchProblem`]
//!
//! Four strategies share one contract: return the actions that lead from the
//! start state to a goal, or an empty plan when the frontier runs dry. An
//! empty plan is a normal outcome ("no plan found"), not an error.
//!
//! | Strategy | Frontier | Guarantee |
//! |----------|----------|-----------|
//! | depth-first | stack | some path |
//! | breadth-first | queue | fewest steps |
//! | uniform-cost | priority queue on `g` | least cost (non-negative costs) |
//! | A* | priority queue on `g + h` | least cost with an admissible `h` |

pub mod algorithms;
mod frontier;
pub mod problem;

use std::{fmt, str::FromStr};

pub use algorithms::{
    SearchOutcome, a_star_search, a_star_search_with_stats, breadth_first_search,
    breadth_first_search_with_stats, depth_first_search, depth_first_search_with_stats,
    null_heuristic, uniform_cost_search, uniform_cost_search_with_stats,
};
pub use problem::{SearchProblem, Successor};
use serde::{Deserialize, Serialize};

/// Selects one of the search algorithms by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    DepthFirst,
    #[default]
    BreadthFirst,
    UniformCost,
    AStar,
}

impl SearchStrategy {
    /// Whether the strategy consults the heuristic.
    pub fn is_informed(self) -> bool {
        self == SearchStrategy::AStar
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SearchStrategy::DepthFirst => "dfs",
            SearchStrategy::BreadthFirst => "bfs",
            SearchStrategy::UniformCost => "ucs",
            SearchStrategy::AStar => "astar",
        };
        f.write_str(label)
    }
}

impl FromStr for SearchStrategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depth_first" => Ok(SearchStrategy::DepthFirst),
            "bfs" | "breadth-first" | "breadth_first" => Ok(SearchStrategy::BreadthFirst),
            "ucs" | "uniform-cost" | "uniform_cost" => Ok(SearchStrategy::UniformCost),
            "astar" | "a*" | "a-star" | "a_star" => Ok(SearchStrategy::AStar),
            _ => Err(crate::Error::ParseSearchStrategy {
                input: s.to_string(),
                expected: "dfs, bfs, ucs, astar".to_string(),
            }),
        }
    }
}

/// Run `strategy` on `problem`, returning the plan with search statistics.
///
/// The heuristic is only consulted by [`SearchStrategy::AStar`].
pub fn search<P, H>(problem: &P, strategy: SearchStrategy, heuristic: H) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    H: Fn(&P::State) -> f64,
{
    match strategy {
        SearchStrategy::DepthFirst => depth_first_search_with_stats(problem),
        SearchStrategy::BreadthFirst => breadth_first_search_with_stats(problem),
        SearchStrategy::UniformCost => uniform_cost_search_with_stats(problem),
        SearchStrategy::AStar => a_star_search_with_stats(problem, heuristic),
    }
}
