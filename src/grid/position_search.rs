//! Path-finding to a single goal cell, plus grid heuristics

use std::{fmt, str::FromStr};

use super::{
    direction::{Direction, Position, euclidean_distance, manhattan_distance},
    maze::Maze,
};
use crate::{
    Error, Result,
    search::{SearchProblem, Successor},
};

type CostFn = Box<dyn Fn(Position) -> f64>;

/// Search problem for reaching one goal cell in a maze.
///
/// States are positions; each step costs `cost(next_position)`, which is 1
/// unless a cost function is supplied.
pub struct PositionSearchProblem {
    maze: Maze,
    start: Position,
    goal: Position,
    cost: CostFn,
}

impl PositionSearchProblem {
    pub fn new(maze: Maze, start: Position, goal: Position) -> Self {
        Self {
            maze,
            start,
            goal,
            cost: Box::new(|_| 1.0),
        }
    }

    /// Build the classic problem: from pac-man's start to the only food dot.
    ///
    /// # Errors
    ///
    /// Fails when the layout has no pac-man or does not contain exactly one
    /// food dot.
    pub fn from_layout(maze: Maze) -> Result<Self> {
        let start = maze.start().ok_or_else(|| Error::InvalidLayout {
            message: "layout has no pac-man start".to_string(),
        })?;
        let mut food = maze.food().iter().copied();
        let (Some(goal), None) = (food.next(), food.next()) else {
            return Err(Error::InvalidLayout {
                message: format!(
                    "position search needs exactly one food dot, found {}",
                    maze.food().len()
                ),
            });
        };
        Ok(Self::new(maze, start, goal))
    }

    /// Replace the per-step cost function.
    pub fn with_cost(mut self, cost: impl Fn(Position) -> f64 + 'static) -> Self {
        self.cost = Box::new(cost);
        self
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Total cost of following `actions` from the start, or `None` if the
    /// sequence walks into a wall.
    pub fn cost_of_actions(&self, actions: &[Direction]) -> Option<f64> {
        let mut position = self.start;
        let mut total = 0.0;
        for &action in actions {
            position = position.step(action);
            if self.maze.is_wall(position) {
                return None;
            }
            total += (self.cost)(position);
        }
        Some(total)
    }
}

impl fmt::Debug for PositionSearchProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionSearchProblem")
            .field("start", &self.start)
            .field("goal", &self.goal)
            .finish_non_exhaustive()
    }
}

impl SearchProblem for PositionSearchProblem {
    type State = Position;
    type Action = Direction;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        self.maze
            .open_directions(*state)
            .into_iter()
            .map(|direction| {
                let next = state.step(direction);
                Successor::new(next, direction, (self.cost)(next))
            })
            .collect()
    }
}

/// Distance heuristics towards a fixed goal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridHeuristic {
    /// Always zero; turns A* into uniform-cost search
    #[default]
    Null,
    Manhattan,
    Euclidean,
}

impl GridHeuristic {
    /// Estimated remaining cost from `position` to `goal`.
    pub fn estimate(self, position: Position, goal: Position) -> f64 {
        match self {
            GridHeuristic::Null => 0.0,
            GridHeuristic::Manhattan => manhattan_distance(position, goal),
            GridHeuristic::Euclidean => euclidean_distance(position, goal),
        }
    }
}

impl fmt::Display for GridHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GridHeuristic::Null => "null",
            GridHeuristic::Manhattan => "manhattan",
            GridHeuristic::Euclidean => "euclidean",
        };
        f.write_str(label)
    }
}

impl FromStr for GridHeuristic {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "null" | "none" => Ok(GridHeuristic::Null),
            "manhattan" => Ok(GridHeuristic::Manhattan),
            "euclidean" => Ok(GridHeuristic::Euclidean),
            _ => Err(Error::ParseHeuristic {
                input: s.to_string(),
                expected: "null, manhattan, euclidean".to_string(),
            }),
        }
    }
}
