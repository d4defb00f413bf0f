//! Multi-agent game state port

use std::{fmt, hash::Hash};

use crate::grid::Position;

/// Index of an agent within a game; pac-man is always agent 0.
pub type AgentIndex = usize;

/// The maximising agent.
pub const PACMAN: AgentIndex = 0;

/// An action in a multi-agent game.
pub trait Move: Copy + Eq + Hash + fmt::Debug {
    /// Whether this is the stop-in-place action, which the game-tree agents
    /// never expand.
    fn is_stop(&self) -> bool {
        false
    }
}

/// An immutable snapshot of a turn-based game with one maximising agent
/// (index 0) and any number of adversaries.
pub trait GameState: Clone {
    type Action: Move;

    /// Total number of agents, pac-man included.
    fn num_agents(&self) -> usize;

    /// Actions `agent` may take. Empty once the game is over.
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// The state after `agent` takes `action`.
    fn generate_successor(&self, agent: AgentIndex, action: Self::Action) -> Self;

    fn is_win(&self) -> bool;

    fn is_lose(&self) -> bool;

    /// Current game score from pac-man's point of view.
    fn score(&self) -> f64;

    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// Board geometry exposed by Pac-Man states, used by the richer evaluation
/// functions and feature extractors.
pub trait PacmanView {
    fn pacman_position(&self) -> Position;

    /// Positions of the remaining food dots.
    fn food(&self) -> Vec<Position>;

    fn capsules(&self) -> Vec<Position> {
        Vec::new()
    }

    fn ghost_positions(&self) -> Vec<Position>;

    /// Remaining scared time for each ghost, aligned with
    /// [`PacmanView::ghost_positions`].
    fn scared_timers(&self) -> Vec<u32> {
        vec![0; self.ghost_positions().len()]
    }

    fn is_wall(&self, position: Position) -> bool;

    /// Board width and height in cells.
    fn dimensions(&self) -> (usize, usize);
}
