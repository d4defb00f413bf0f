//! Common fixtures for the pacai test suite.
//!
//! This module provides small games, search problems and MDPs with known
//! answers, shared across the integration tests.

#![allow(dead_code)]

use std::{collections::BTreeSet, rc::Rc, sync::Arc};

use pacai::{
    grid::{Direction, Maze, Position},
    mdp::MarkovDecisionProcess,
    multiagent::{AgentIndex, GameState, Move, PACMAN, PacmanView},
    search::{SearchProblem, Successor},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

// =============================================================================
// Explicit game trees
// =============================================================================

/// A node of an explicit game tree.
#[derive(Debug)]
pub enum Node {
    Leaf(f64),
    /// Children reachable with `Choice::Go`; `stop` adds a stop action that
    /// leads to a leaf with that value.
    Branch {
        children: Vec<Rc<Node>>,
        stop: Option<f64>,
    },
}

pub fn leaf(value: f64) -> Rc<Node> {
    Rc::new(Node::Leaf(value))
}

pub fn branch(children: Vec<Rc<Node>>) -> Rc<Node> {
    Rc::new(Node::Branch {
        children,
        stop: None,
    })
}

/// A branch that also offers stop, leading to a leaf worth `stop`.
pub fn branch_with_stop(children: Vec<Rc<Node>>, stop: f64) -> Rc<Node> {
    Rc::new(Node::Branch {
        children,
        stop: Some(stop),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Go(usize),
    Stop,
}

impl Move for Choice {
    fn is_stop(&self) -> bool {
        *self == Choice::Stop
    }
}

/// A game whose moves walk down a fixed tree; leaves score their value and
/// inner nodes score zero.
#[derive(Debug, Clone)]
pub struct TreeGame {
    node: Rc<Node>,
    agents: usize,
}

impl TreeGame {
    pub fn new(root: Rc<Node>, agents: usize) -> Self {
        Self { node: root, agents }
    }

    /// A complete tree of `plies` levels with `branching` children per node
    /// and integer leaf values in `-5..=5`, so that ties are common.
    pub fn random(seed: u64, plies: usize, branching: usize, agents: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(random_node(&mut rng, plies, branching), agents)
    }
}

fn random_node(rng: &mut StdRng, plies: usize, branching: usize) -> Rc<Node> {
    if plies == 0 {
        return leaf(f64::from(rng.random_range(-5i32..=5)));
    }
    branch(
        (0..branching)
            .map(|_| random_node(rng, plies - 1, branching))
            .collect(),
    )
}

impl GameState for TreeGame {
    type Action = Choice;

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<Choice> {
        match self.node.as_ref() {
            Node::Leaf(_) => Vec::new(),
            Node::Branch { children, stop } => {
                let mut actions: Vec<Choice> = (0..children.len()).map(Choice::Go).collect();
                if stop.is_some() {
                    actions.push(Choice::Stop);
                }
                actions
            }
        }
    }

    fn generate_successor(&self, _agent: AgentIndex, action: Choice) -> Self {
        let Node::Branch { children, stop } = self.node.as_ref() else {
            panic!("leaf has no successors");
        };
        let node = match action {
            Choice::Go(index) => Rc::clone(&children[index]),
            Choice::Stop => leaf(stop.expect("stop offered")),
        };
        Self::new(node, self.agents)
    }

    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        false
    }

    fn score(&self) -> f64 {
        match self.node.as_ref() {
            Node::Leaf(value) => *value,
            Node::Branch { .. } => 0.0,
        }
    }
}

// =============================================================================
// A small Pac-Man game
// =============================================================================

pub const EAT_REWARD: f64 = 10.0;
pub const WIN_REWARD: f64 = 500.0;
pub const LOSE_PENALTY: f64 = 500.0;

/// Pac-Man on a maze: every move costs one point, food is worth ten, clearing
/// the board wins and touching a ghost loses.
#[derive(Debug, Clone)]
pub struct MiniPacman {
    maze: Arc<Maze>,
    pacman: Position,
    ghosts: Vec<Position>,
    food: BTreeSet<Position>,
    score: f64,
    outcome: Option<bool>,
}

impl MiniPacman {
    pub fn from_layout(layout: &str) -> Self {
        let maze = Maze::parse(layout).unwrap();
        Self {
            pacman: maze.start().unwrap(),
            ghosts: maze.ghost_starts().to_vec(),
            food: maze.food().clone(),
            maze: Arc::new(maze),
            score: 0.0,
            outcome: None,
        }
    }

    fn check_contact(&mut self) {
        if self.outcome.is_none() && self.ghosts.contains(&self.pacman) {
            self.score -= LOSE_PENALTY;
            self.outcome = Some(false);
        }
    }
}

impl GameState for MiniPacman {
    type Action = Direction;

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        if agent == PACMAN {
            let mut actions = self.maze.open_directions(self.pacman);
            actions.push(Direction::Stop);
            actions
        } else {
            let actions = self.maze.open_directions(self.ghosts[agent - 1]);
            if actions.is_empty() {
                vec![Direction::Stop]
            } else {
                actions
            }
        }
    }

    fn generate_successor(&self, agent: AgentIndex, action: Direction) -> Self {
        let mut next = self.clone();
        if agent == PACMAN {
            next.pacman = next.pacman.step(action);
            next.score -= 1.0;
            if next.food.remove(&next.pacman) {
                next.score += EAT_REWARD;
            }
            next.check_contact();
            if next.outcome.is_none() && next.food.is_empty() {
                next.score += WIN_REWARD;
                next.outcome = Some(true);
            }
        } else {
            next.ghosts[agent - 1] = next.ghosts[agent - 1].step(action);
            next.check_contact();
        }
        next
    }

    fn is_win(&self) -> bool {
        self.outcome == Some(true)
    }

    fn is_lose(&self) -> bool {
        self.outcome == Some(false)
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl PacmanView for MiniPacman {
    fn pacman_position(&self) -> Position {
        self.pacman
    }

    fn food(&self) -> Vec<Position> {
        self.food.iter().copied().collect()
    }

    fn ghost_positions(&self) -> Vec<Position> {
        self.ghosts.clone()
    }

    fn is_wall(&self, position: Position) -> bool {
        self.maze.is_wall(position)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.maze.width(), self.maze.height())
    }
}

/// Food one step west wins at once; east only wanders towards the ghost.
pub const FOOD_WEST: &str = "\
%%%%%%%%%
%.P    G%
%%%%%%%%%
";

/// East walks next to the ghost, which then catches pac-man.
pub const GHOST_EAST: &str = "\
%%%%%%%
%. P G%
%%%%%%%
";

// =============================================================================
// Search problems
// =============================================================================

/// Directed graph with weighted edges, searched from `start` to `goal`.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    pub start: char,
    pub goal: char,
    pub edges: Vec<(char, char, f64)>,
}

impl WeightedGraph {
    /// `S→G` directly costs 10; `S→A→B→G` costs 3 over three edges.
    pub fn detour() -> Self {
        Self {
            start: 'S',
            goal: 'G',
            edges: vec![
                ('S', 'G', 10.0),
                ('S', 'A', 1.0),
                ('A', 'B', 1.0),
                ('B', 'G', 1.0),
            ],
        }
    }
}

impl SearchProblem for WeightedGraph {
    type State = char;
    type Action = (char, char);

    fn start_state(&self) -> char {
        self.start
    }

    fn is_goal(&self, state: &char) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &char) -> Vec<Successor<char, (char, char)>> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(from, to, cost)| Successor::new(to, (from, to), cost))
            .collect()
    }
}

// =============================================================================
// Markov decision processes
// =============================================================================

/// Two states that hand control back and forth: `A→B` pays 1 and `B→A`
/// pays nothing.
///
/// With discount `γ` the fixed point is `V(A) = 1 / (1 − γ²)` and
/// `V(B) = γ V(A)`.
#[derive(Debug, Clone, Copy)]
pub struct PingPong;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl MarkovDecisionProcess for PingPong {
    type State = Side;
    type Action = ();

    fn states(&self) -> Vec<Side> {
        vec![Side::A, Side::B]
    }

    fn start_state(&self) -> Side {
        Side::A
    }

    fn possible_actions(&self, _state: &Side) -> Vec<()> {
        vec![()]
    }

    fn transitions(&self, state: &Side, _action: &()) -> Vec<(Side, f64)> {
        match state {
            Side::A => vec![(Side::B, 1.0)],
            Side::B => vec![(Side::A, 1.0)],
        }
    }

    fn reward(&self, state: &Side, _action: &(), _next_state: &Side) -> f64 {
        match state {
            Side::A => 1.0,
            Side::B => 0.0,
        }
    }

    fn is_terminal(&self, _state: &Side) -> bool {
        false
    }
}

/// Follow a plan of moves through `maze`, returning the final cell, or
/// `None` if a move hits a wall.
pub fn walk(maze: &Maze, from: Position, path: &[Direction]) -> Option<Position> {
    path.iter().try_fold(from, |position, &direction| {
        let next = position.step(direction);
        (!maze.is_wall(next)).then_some(next)
    })
}
