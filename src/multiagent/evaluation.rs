//! Evaluation functions and their registry

use std::sync::Arc;

use super::game::{GameState, PACMAN, PacmanView};
use crate::{
    grid::{Direction, Position, manhattan_distance},
    registry::Registry,
};

/// Scores a state from pac-man's point of view; higher is better.
pub type EvaluationFn<S> = Arc<dyn Fn(&S) -> f64 + Send + Sync>;

/// Scores taking `action` in a state; used by reflex agents.
pub type ActionEvaluationFn<S, A> = Arc<dyn Fn(&S, A) -> f64 + Send + Sync>;

/// Registry of state evaluation functions, resolved by name.
pub type EvaluationRegistry<S> = Registry<EvaluationFn<S>>;

const STOP_PENALTY: f64 = 50.0;
const FOOD_BONUS: f64 = 20.0;
const GHOST_CONTACT_PENALTY: f64 = 500.0;
const REMAINING_FOOD_PENALTY: f64 = 4.0;
const REMAINING_CAPSULE_PENALTY: f64 = 20.0;
const SCARED_GHOST_BONUS: f64 = 200.0;

/// The game score itself.
pub fn score_evaluation<S: GameState>(state: &S) -> f64 {
    state.score()
}

/// Evaluation functions available for any game: `"score"`.
pub fn default_evaluations<S: GameState + 'static>() -> EvaluationRegistry<S> {
    let score: EvaluationFn<S> = Arc::new(score_evaluation::<S>);
    Registry::new("evaluation function").with("score", score)
}

/// Evaluation functions for Pac-Man states: `"score"` and `"better"`.
pub fn pacman_evaluations<S: GameState + PacmanView + 'static>() -> EvaluationRegistry<S> {
    let better: EvaluationFn<S> = Arc::new(better_evaluation::<S>);
    default_evaluations().with("better", better)
}

/// Action evaluation for the reflex agent.
///
/// Looks one move ahead: the successor's score, a penalty for standing still
/// or touching an active ghost, and a bonus for eating or closing in on food.
pub fn reflex_evaluation<S>(state: &S, action: Direction) -> f64
where
    S: GameState<Action = Direction> + PacmanView,
{
    let successor = state.generate_successor(PACMAN, action);
    let position = successor.pacman_position();
    let mut value = successor.score();

    if action == Direction::Stop {
        value -= STOP_PENALTY;
    }

    let remaining = successor.food();
    if remaining.len() < state.food().len() {
        value += FOOD_BONUS;
    }
    if let Some(closest) = closest_distance(position, &remaining) {
        value += 10.0 / (closest + 1.0);
    }

    let ghosts = successor.ghost_positions();
    let timers = successor.scared_timers();
    for (ghost, timer) in ghosts.into_iter().zip(timers) {
        if timer == 0 && manhattan_distance(position, ghost) <= 1.0 {
            value -= GHOST_CONTACT_PENALTY;
        }
    }

    value
}

/// State evaluation for the search agents.
///
/// Starts from the score, rewards being near food and hunting scared ghosts,
/// and penalises leftover food and capsules and active ghosts within reach.
pub fn better_evaluation<S>(state: &S) -> f64
where
    S: GameState + PacmanView,
{
    let position = state.pacman_position();
    let food = state.food();
    let mut value = state.score();

    if let Some(closest) = closest_distance(position, &food) {
        value += 10.0 / closest.max(1.0);
    }
    value -= REMAINING_FOOD_PENALTY * food.len() as f64;
    value -= REMAINING_CAPSULE_PENALTY * state.capsules().len() as f64;

    let ghosts = state.ghost_positions();
    let timers = state.scared_timers();
    for (ghost, timer) in ghosts.into_iter().zip(timers) {
        let distance = manhattan_distance(position, ghost);
        if f64::from(timer) > distance {
            value += SCARED_GHOST_BONUS / (distance + 1.0);
        } else if distance <= 1.0 {
            value -= GHOST_CONTACT_PENALTY;
        }
    }

    value
}

fn closest_distance(from: Position, targets: &[Position]) -> Option<f64> {
    targets
        .iter()
        .map(|&target| manhattan_distance(from, target))
        .min_by(f64::total_cmp)
}
