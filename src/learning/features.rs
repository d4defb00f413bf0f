//! Hand-crafted Pac-Man features

use std::{
    collections::{HashMap, HashSet, VecDeque},
    sync::Arc,
};

use super::approximate::{
    FeatureExtractor, FeatureRegistry, FeatureVector, SharedExtractor, default_features,
};
use crate::{
    grid::{Direction, Position, manhattan_distance},
    multiagent::{GameState, PacmanView},
};

const SCALE: f64 = 10.0;

/// Bias, ghosts one step away, whether the move eats food, and the maze
/// distance to the closest food scaled by board area. All values are divided
/// by ten to keep weight updates stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleExtractor;

impl<S: PacmanView> FeatureExtractor<S, Direction> for SimpleExtractor {
    fn features(&self, state: &S, action: &Direction) -> FeatureVector {
        let next = state.pacman_position().step(*action);
        let food: HashSet<Position> = state.food().into_iter().collect();
        let mut features = HashMap::from([("bias".to_string(), 1.0)]);

        let nearby_ghosts = state
            .ghost_positions()
            .into_iter()
            .filter(|&ghost| manhattan_distance(next, ghost) <= 1.0)
            .count();
        features.insert("#-of-ghosts-1-step-away".to_string(), nearby_ghosts as f64);

        if nearby_ghosts == 0 && food.contains(&next) {
            features.insert("eats-food".to_string(), 1.0);
        }

        if let Some(distance) = maze_distance_to_food(state, next, &food) {
            let (width, height) = state.dimensions();
            features.insert(
                "closest-food".to_string(),
                distance as f64 / (width * height) as f64,
            );
        }

        features.values_mut().for_each(|value| *value /= SCALE);
        features
    }
}

/// Feature extractors for Pac-Man states: `"identity"` and `"simple"`.
pub fn pacman_features<S>() -> FeatureRegistry<S, Direction>
where
    S: GameState<Action = Direction> + PacmanView + std::fmt::Debug + 'static,
{
    let simple: SharedExtractor<S, Direction> = Arc::new(SimpleExtractor);
    default_features().with("simple", simple)
}

fn maze_distance_to_food<S: PacmanView>(
    state: &S,
    from: Position,
    food: &HashSet<Position>,
) -> Option<usize> {
    let mut visited = HashSet::from([from]);
    let mut queue = VecDeque::from([(from, 0)]);

    while let Some((position, distance)) = queue.pop_front() {
        if food.contains(&position) {
            return Some(distance);
        }
        for direction in Direction::CARDINALS {
            let next = position.step(direction);
            if !state.is_wall(next) && visited.insert(next) {
                queue.push_back((next, distance + 1));
            }
        }
    }
    None
}
