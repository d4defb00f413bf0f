//! Text mazes in the classic Pac-Man layout format
//!
//! Layout characters:
//!
//! | Char | Meaning |
//! |------|---------|
//! | `%`  | wall |
//! | `P`  | pac-man start |
//! | `G`  | ghost start |
//! | `.`  | food |
//! | `o`  | capsule |
//! | ` `  | open floor |

use std::collections::{BTreeSet, HashSet, VecDeque};

use super::direction::{Direction, Position};
use crate::{Error, Result};

/// Names accepted by [`Maze::by_name`].
pub const BUILT_IN: [&str; 2] = ["tiny", "small"];

const TINY_MAZE: &str = "\
%%%%%%%
%    P%
% %%% %
%  %  %
%%   %%
%. %%%%
%%%%%%%
";

const SMALL_MAZE: &str = "\
%%%%%%%%%%
%P       %
% %%%%%% %
% %    % %
% % %% % %
%   %.   %
%%%%%%%%%%
";

/// Static maze geometry plus the initial placement of agents and food.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    start: Option<Position>,
    ghosts: Vec<Position>,
    food: BTreeSet<Position>,
    capsules: BTreeSet<Position>,
}

impl Maze {
    /// Parse a layout from its text form.
    ///
    /// Trailing whitespace on each line is ignored and rows shorter than the
    /// widest row are padded with open floor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] for an empty layout or more than one
    /// pac-man, and [`Error::InvalidLayoutCharacter`] for unknown characters.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(Error::InvalidLayout {
                message: "layout has no rows".to_string(),
            });
        }

        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut maze = Self {
            width,
            height,
            walls: vec![false; width * height],
            start: None,
            ghosts: Vec::new(),
            food: BTreeSet::new(),
            capsules: BTreeSet::new(),
        };

        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                match c {
                    '%' => maze.walls[y * width + x] = true,
                    '.' => {
                        maze.food.insert(position);
                    }
                    'o' => {
                        maze.capsules.insert(position);
                    }
                    'G' => maze.ghosts.push(position),
                    'P' => {
                        if maze.start.replace(position).is_some() {
                            return Err(Error::InvalidLayout {
                                message: "layout has more than one pac-man".to_string(),
                            });
                        }
                    }
                    ' ' => {}
                    other => {
                        return Err(Error::InvalidLayoutCharacter {
                            character: other,
                            row: y,
                            column: x,
                        });
                    }
                }
            }
        }

        Ok(maze)
    }

    /// One of the layouts listed in [`BUILT_IN`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntry`] for any other name.
    pub fn by_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tiny" => Self::parse(TINY_MAZE),
            "small" => Self::parse(SMALL_MAZE),
            _ => Err(Error::UnknownEntry {
                kind: "maze".to_string(),
                name: name.to_string(),
                available: BUILT_IN.join(", "),
            }),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pac-man's start cell, if the layout has one.
    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn ghost_starts(&self) -> &[Position] {
        &self.ghosts
    }

    pub fn food(&self) -> &BTreeSet<Position> {
        &self.food
    }

    pub fn capsules(&self) -> &BTreeSet<Position> {
        &self.capsules
    }

    /// Whether the cell is blocked. Cells outside the layout count as walls.
    pub fn is_wall(&self, position: Position) -> bool {
        if position.x < 0 || position.y < 0 {
            return true;
        }
        let (x, y) = (position.x as usize, position.y as usize);
        if x >= self.width || y >= self.height {
            return true;
        }
        self.walls[y * self.width + x]
    }

    /// Moving directions that do not run into a wall.
    pub fn open_directions(&self, position: Position) -> Vec<Direction> {
        Direction::CARDINALS
            .into_iter()
            .filter(|&direction| !self.is_wall(position.step(direction)))
            .collect()
    }

    /// Number of open (non-wall) cells.
    pub fn open_cells(&self) -> usize {
        self.walls.iter().filter(|&&wall| !wall).count()
    }

    /// Length of the shortest open path from `from` to any cell accepted by
    /// `is_target`, or `None` when no such cell is reachable.
    pub fn distance_to_nearest(
        &self,
        from: Position,
        is_target: impl Fn(Position) -> bool,
    ) -> Option<usize> {
        let mut frontier = VecDeque::from([(from, 0usize)]);
        let mut visited = HashSet::from([from]);

        while let Some((position, distance)) = frontier.pop_front() {
            if is_target(position) {
                return Some(distance);
            }
            for direction in self.open_directions(position) {
                let next = position.step(direction);
                if visited.insert(next) {
                    frontier.push_back((next, distance + 1));
                }
            }
        }

        None
    }
}
