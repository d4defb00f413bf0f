//! Graph search on weighted graphs and on the built-in mazes

mod common;

use common::{WeightedGraph, walk};
use pacai::{
    grid::{GridHeuristic, Maze, Position, PositionSearchProblem, maze::BUILT_IN},
    search::{
        SearchStrategy, a_star_search, breadth_first_search, depth_first_search, null_heuristic,
        search, uniform_cost_search,
    },
};

const STRATEGIES: [SearchStrategy; 4] = [
    SearchStrategy::DepthFirst,
    SearchStrategy::BreadthFirst,
    SearchStrategy::UniformCost,
    SearchStrategy::AStar,
];

fn maze_problem(name: &str) -> PositionSearchProblem {
    PositionSearchProblem::from_layout(Maze::by_name(name).unwrap()).unwrap()
}

#[test]
fn breadth_first_takes_fewest_edges_uniform_cost_the_cheapest() {
    let graph = WeightedGraph::detour();

    assert_eq!(breadth_first_search(&graph), vec![('S', 'G')]);
    assert_eq!(
        uniform_cost_search(&graph),
        vec![('S', 'A'), ('A', 'B'), ('B', 'G')]
    );
    assert_eq!(
        a_star_search(&graph, null_heuristic),
        uniform_cost_search(&graph)
    );

    let bfs = search(&graph, SearchStrategy::BreadthFirst, null_heuristic);
    let ucs = search(&graph, SearchStrategy::UniformCost, null_heuristic);
    assert_eq!(bfs.cost, Some(10.0));
    assert_eq!(ucs.cost, Some(3.0));
}

#[test]
fn unreachable_goal_yields_empty_plans() {
    let graph = WeightedGraph {
        goal: 'Z',
        ..WeightedGraph::detour()
    };
    for strategy in STRATEGIES {
        let outcome = search(&graph, strategy, null_heuristic);
        assert!(!outcome.is_found(), "{strategy}");
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.expanded, 4, "{strategy} expands every reachable state");
    }
    assert!(depth_first_search(&graph).is_empty());
}

#[test]
fn start_on_goal_needs_no_moves() {
    let graph = WeightedGraph {
        goal: 'S',
        ..WeightedGraph::detour()
    };
    for strategy in STRATEGIES {
        let outcome = search(&graph, strategy, null_heuristic);
        assert_eq!(outcome.cost, Some(0.0), "{strategy}");
        assert!(outcome.path.is_empty());
        assert_eq!(outcome.expanded, 0);
    }
}

#[test]
fn every_strategy_reaches_the_food_in_the_built_in_mazes() {
    for name in BUILT_IN {
        let problem = maze_problem(name);
        let start = problem.maze().start().unwrap();
        let goal = problem.goal();

        for strategy in STRATEGIES {
            let heuristic = |position: &Position| GridHeuristic::Manhattan.estimate(*position, goal);
            let outcome = search(&problem, strategy, heuristic);
            assert!(outcome.is_found(), "{strategy} on {name}");
            assert_eq!(walk(problem.maze(), start, &outcome.path), Some(goal));
            assert_eq!(
                problem.cost_of_actions(&outcome.path),
                outcome.cost,
                "{strategy} on {name}"
            );
        }
    }
}

#[test]
fn optimal_strategies_agree_on_the_tiny_maze() {
    let problem = maze_problem("tiny");
    let goal = problem.goal();

    assert_eq!(breadth_first_search(&problem).len(), 8);
    for heuristic in [
        GridHeuristic::Null,
        GridHeuristic::Manhattan,
        GridHeuristic::Euclidean,
    ] {
        let outcome = search(&problem, SearchStrategy::AStar, |position: &Position| {
            heuristic.estimate(*position, goal)
        });
        assert_eq!(outcome.cost, Some(8.0), "{heuristic}");
    }
    let ucs = search(&problem, SearchStrategy::UniformCost, null_heuristic);
    assert_eq!(ucs.cost, Some(8.0));
}

#[test]
fn manhattan_guidance_expands_no_more_than_uniform_cost() {
    let problem = maze_problem("small");
    let goal = problem.goal();
    let ucs = search(&problem, SearchStrategy::UniformCost, null_heuristic);
    let astar = search(&problem, SearchStrategy::AStar, |position: &Position| {
        GridHeuristic::Manhattan.estimate(*position, goal)
    });
    assert_eq!(ucs.cost, astar.cost);
    assert!(astar.expanded <= ucs.expanded);
}
