//! Grid geometry shared by the search problems and the Pac-Man agents
//!
//! - [`Direction`] and [`Position`] for moves and cells
//! - [`Maze`] for parsed text layouts
//! - [`PositionSearchProblem`] and [`GridHeuristic`] for path-finding

pub mod direction;
pub mod maze;
pub mod position_search;

pub use direction::{Direction, Position, euclidean_distance, manhattan_distance};
pub use maze::Maze;
pub use position_search::{GridHeuristic, PositionSearchProblem};
