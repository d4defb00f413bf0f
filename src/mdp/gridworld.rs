//! The noisy grid world
//!
//! Layouts are whitespace-separated tokens, one row per line, top row first:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `#` | wall |
//! | `_` | open cell |
//! | `S` | open start cell (exactly one) |
//! | number | exit cell paying that reward |
//!
//! From an exit cell the only action is [`GridAction::Exit`], which moves to
//! the absorbing [`GridState::Terminal`]. Moves succeed with probability
//! `1 - noise` and slip to either perpendicular direction with `noise / 2`
//! each; moving into a wall leaves the agent in place.

use std::fmt;

use rand::{Rng, rngs::StdRng};

use super::MarkovDecisionProcess;
use crate::{
    Error, Result,
    grid::{Direction, Position},
    pipeline::{Environment, Step},
    utils::build_rng,
};

/// Default slip probability.
pub const DEFAULT_NOISE: f64 = 0.2;

/// Names accepted by [`Gridworld::by_name`].
pub const PRESETS: [&str; 4] = ["bridge", "book", "cliff", "discount"];

const BRIDGE: &str = "
    #  -100 -100 -100 -100 -100  #
    1   S    _    _    _    _   10
    #  -100 -100 -100 -100 -100  #
";

const BOOK: &str = "
    _ _ _  1
    _ # _ -1
    S _ _  _
";

const CLIFF: &str = "
       _    _    _    _    _
       S    _    _    _   10
    -100 -100 -100 -100 -100
";

const DISCOUNT: &str = "
      _   _   _   _   _
      _   #   _   _   _
      _   #   1   #  10
      S   _   _   _   _
    -10 -10 -10 -10 -10
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GridState {
    Cell(Position),
    /// Absorbing state reached by exiting
    Terminal,
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridState::Cell(position) => write!(f, "{position}"),
            GridState::Terminal => write!(f, "terminal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridAction {
    Move(Direction),
    Exit,
}

impl fmt::Display for GridAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAction::Move(direction) => write!(f, "{direction}"),
            GridAction::Exit => write!(f, "exit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Wall,
    Open,
    Exit(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gridworld {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Position,
    noise: f64,
    living_reward: f64,
}

impl Gridworld {
    /// Parse a layout with the default noise and no living reward.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] for an empty or ragged layout, an
    /// unknown token, or a start cell that is missing or repeated.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<Vec<&str>> = text
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|tokens| !tokens.is_empty())
            .collect();

        let Some(width) = rows.first().map(Vec::len) else {
            return Err(Error::InvalidLayout {
                message: "gridworld has no rows".to_string(),
            });
        };

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut start = None;
        for (y, tokens) in rows.iter().enumerate() {
            if tokens.len() != width {
                return Err(Error::InvalidLayout {
                    message: format!("row {y} has {} cells, expected {width}", tokens.len()),
                });
            }
            for (x, &token) in tokens.iter().enumerate() {
                let cell = match token {
                    "#" => Cell::Wall,
                    "_" => Cell::Open,
                    "S" => {
                        if start.is_some() {
                            return Err(Error::InvalidLayout {
                                message: "gridworld has more than one start cell".to_string(),
                            });
                        }
                        start = Some(Position::new(x as i32, y as i32));
                        Cell::Open
                    }
                    other => other
                        .parse::<f64>()
                        .ok()
                        .filter(|reward| reward.is_finite())
                        .map(Cell::Exit)
                        .ok_or_else(|| Error::InvalidLayout {
                            message: format!("unknown token '{other}' at row {y}, column {x}"),
                        })?,
                };
                cells.push(cell);
            }
        }

        let start = start.ok_or_else(|| Error::InvalidLayout {
            message: "gridworld has no start cell".to_string(),
        })?;

        Ok(Self {
            width,
            height: rows.len(),
            cells,
            start,
            noise: DEFAULT_NOISE,
            living_reward: 0.0,
        })
    }

    /// One of the built-in layouts listed in [`PRESETS`].
    pub fn by_name(name: &str) -> Result<Self> {
        let layout = match name.trim().to_ascii_lowercase().as_str() {
            "bridge" => BRIDGE,
            "book" => BOOK,
            "cliff" => CLIFF,
            "discount" => DISCOUNT,
            _ => {
                return Err(Error::UnknownGridworld {
                    name: name.to_string(),
                    expected: PRESETS.join(", "),
                });
            }
        };
        Self::parse(layout)
    }

    /// A narrow bridge between a +1 exit and a +10 exit, flanked by -100 cliffs.
    pub fn bridge_grid() -> Self {
        Self::preset(BRIDGE)
    }

    /// The 4x3 grid from the textbook.
    pub fn book_grid() -> Self {
        Self::preset(BOOK)
    }

    /// A +10 exit along the edge of a -100 cliff.
    pub fn cliff_grid() -> Self {
        Self::preset(CLIFF)
    }

    /// A close +1 exit and a distant +10 exit above a row of -10 cliffs.
    pub fn discount_grid() -> Self {
        Self::preset(DISCOUNT)
    }

    fn preset(layout: &str) -> Self {
        Self::parse(layout).expect("built-in gridworld layouts are well formed")
    }

    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn with_living_reward(mut self, living_reward: f64) -> Self {
        self.living_reward = living_reward;
        self
    }

    pub fn noise(&self) -> f64 {
        self.noise
    }

    pub fn living_reward(&self) -> f64 {
        self.living_reward
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    fn cell(&self, position: Position) -> Cell {
        if position.x < 0 || position.y < 0 {
            return Cell::Wall;
        }
        let (x, y) = (position.x as usize, position.y as usize);
        if x >= self.width || y >= self.height {
            return Cell::Wall;
        }
        self.cells[y * self.width + x]
    }

    /// Whether `position` is a wall; everything off the grid is.
    pub fn is_wall(&self, position: Position) -> bool {
        self.cell(position) == Cell::Wall
    }

    /// Reward paid for exiting at `position`, if it is an exit cell.
    pub fn exit_reward(&self, position: Position) -> Option<f64> {
        match self.cell(position) {
            Cell::Exit(reward) => Some(reward),
            _ => None,
        }
    }

    /// Where a move in `direction` lands without any slip.
    pub fn intended_successor(&self, position: Position, direction: Direction) -> Position {
        let next = position.step(direction);
        if self.is_wall(next) { position } else { next }
    }
}

impl MarkovDecisionProcess for Gridworld {
    type State = GridState;
    type Action = GridAction;

    fn states(&self) -> Vec<GridState> {
        let mut states = vec![GridState::Terminal];
        for y in 0..self.height {
            for x in 0..self.width {
                let position = Position::new(x as i32, y as i32);
                if !self.is_wall(position) {
                    states.push(GridState::Cell(position));
                }
            }
        }
        states
    }

    fn start_state(&self) -> GridState {
        GridState::Cell(self.start)
    }

    fn possible_actions(&self, state: &GridState) -> Vec<GridAction> {
        match state {
            GridState::Terminal => Vec::new(),
            GridState::Cell(position) if self.exit_reward(*position).is_some() => {
                vec![GridAction::Exit]
            }
            GridState::Cell(_) => [
                Direction::North,
                Direction::West,
                Direction::South,
                Direction::East,
            ]
            .into_iter()
            .map(GridAction::Move)
            .collect(),
        }
    }

    fn transitions(&self, state: &GridState, action: &GridAction) -> Vec<(GridState, f64)> {
        let GridState::Cell(position) = *state else {
            return Vec::new();
        };
        let direction = match action {
            GridAction::Exit => return vec![(GridState::Terminal, 1.0)],
            GridAction::Move(direction) => *direction,
        };

        let outcomes = [
            (direction, 1.0 - self.noise),
            (direction.left(), self.noise / 2.0),
            (direction.right(), self.noise / 2.0),
        ];
        let mut merged: Vec<(GridState, f64)> = Vec::with_capacity(outcomes.len());
        for (heading, probability) in outcomes {
            if probability == 0.0 {
                continue;
            }
            let next = GridState::Cell(self.intended_successor(position, heading));
            match merged.iter_mut().find(|(state, _)| *state == next) {
                Some((_, total)) => *total += probability,
                None => merged.push((next, probability)),
            }
        }
        merged
    }

    fn reward(&self, state: &GridState, _action: &GridAction, _next_state: &GridState) -> f64 {
        match state {
            GridState::Terminal => 0.0,
            GridState::Cell(position) => self
                .exit_reward(*position)
                .unwrap_or(self.living_reward),
        }
    }

    fn is_terminal(&self, state: &GridState) -> bool {
        *state == GridState::Terminal
    }
}

/// Samples [`Gridworld`] transitions so online learners can train on it.
#[derive(Debug, Clone)]
pub struct GridworldEnvironment {
    grid: Gridworld,
    rng: StdRng,
}

impl GridworldEnvironment {
    pub fn new(grid: Gridworld) -> Self {
        Self {
            grid,
            rng: build_rng(None),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = build_rng(Some(seed));
        self
    }

    pub fn grid(&self) -> &Gridworld {
        &self.grid
    }
}

impl Environment for GridworldEnvironment {
    type State = GridState;
    type Action = GridAction;

    fn reset(&mut self) -> GridState {
        self.grid.start_state()
    }

    fn step(&mut self, state: &GridState, action: &GridAction) -> Step<GridState> {
        let transitions = self.grid.transitions(state, action);
        let mut roll = self.rng.random::<f64>();
        let mut next_state = *state;
        for (candidate, probability) in &transitions {
            next_state = *candidate;
            if roll < *probability {
                break;
            }
            roll -= probability;
        }
        Step {
            reward: self.grid.reward(state, action, &next_state),
            next_state,
        }
    }

    fn is_terminal(&self, state: &GridState) -> bool {
        self.grid.is_terminal(state)
    }
}
