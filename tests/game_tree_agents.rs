//! Game-tree agents on explicit trees and on a small Pac-Man game

mod common;

use std::sync::Arc;

use common::{
    Choice, FOOD_WEST, GHOST_EAST, MiniPacman, TreeGame, branch, branch_with_stop, leaf,
};
use pacai::{
    Agent, AlphaBetaAgent, Error, ExpectimaxAgent, MinimaxAgent, SearchAgentConfig,
    grid::Direction,
    multiagent::{
        ActionEvaluationFn, EvaluationFn, GreedyAgent, ReflexAgent, default_evaluations,
        pacman_evaluations, reflex_evaluation, score_evaluation,
    },
};
use proptest::prelude::*;

fn score<S: pacai::GameState + 'static>() -> EvaluationFn<S> {
    Arc::new(score_evaluation::<S>)
}

#[test]
fn stop_is_never_chosen_even_when_it_scores_best() {
    let game = TreeGame::new(branch_with_stop(vec![leaf(1.0), leaf(2.0)], 1000.0), 1);

    assert_eq!(
        MinimaxAgent::new(1, score()).best_action(&game),
        Some((Choice::Go(1), 2.0))
    );
    assert_eq!(
        AlphaBetaAgent::new(1, score()).best_action(&game),
        Some((Choice::Go(1), 2.0))
    );
    assert_eq!(
        ExpectimaxAgent::new(1, score()).best_action(&game),
        Some((Choice::Go(1), 2.0))
    );
    let mut greedy = GreedyAgent::new(score()).with_seed(5);
    assert_eq!(greedy.select_action(&game), Some(Choice::Go(1)));
}

#[test]
fn ghosts_do_not_stop_either() {
    // The ghost could stop into a -1000 leaf; without stop it must pick 4.
    let game = TreeGame::new(
        branch(vec![branch_with_stop(vec![leaf(4.0)], -1000.0)]),
        2,
    );
    assert_eq!(
        MinimaxAgent::new(1, score()).best_action(&game),
        Some((Choice::Go(0), 4.0))
    );
    assert_eq!(
        ExpectimaxAgent::new(1, score()).best_action(&game),
        Some((Choice::Go(0), 4.0))
    );
}

#[test]
fn a_node_offering_only_stop_is_a_leaf() {
    let only_stop = TreeGame::new(branch_with_stop(vec![], 50.0), 1);
    assert_eq!(MinimaxAgent::new(2, score()).best_action(&only_stop), None);
    assert_eq!(AlphaBetaAgent::new(2, score()).best_action(&only_stop), None);

    // A ghost that can only stop is scored where it stands (inner nodes
    // score zero), so the 3.0 branch wins.
    let game = TreeGame::new(
        branch(vec![branch_with_stop(vec![], 50.0), branch(vec![leaf(3.0)])]),
        2,
    );
    assert_eq!(
        MinimaxAgent::new(1, score()).best_action(&game),
        Some((Choice::Go(1), 3.0))
    );
}

#[test]
fn depth_counts_full_rounds() {
    // Pac-man, ghost, pac-man, ghost: two rounds are needed to reach the
    // leaves, one round stops at the (zero scoring) inner nodes.
    let game = TreeGame::new(
        branch(vec![
            branch(vec![branch(vec![branch(vec![leaf(7.0)])])]),
            branch(vec![branch(vec![branch(vec![leaf(-2.0)])])]),
        ]),
        2,
    );
    assert_eq!(
        MinimaxAgent::new(2, score()).best_action(&game),
        Some((Choice::Go(0), 7.0))
    );
    assert_eq!(
        MinimaxAgent::new(1, score()).best_action(&game),
        Some((Choice::Go(0), 0.0))
    );
}

#[test]
fn agents_eat_the_last_food() {
    let game = MiniPacman::from_layout(FOOD_WEST);

    let mut minimax = MinimaxAgent::new(2, score());
    let mut alpha_beta = AlphaBetaAgent::new(2, score());
    let mut expectimax = ExpectimaxAgent::new(2, score());
    assert_eq!(minimax.select_action(&game), Some(Direction::West));
    assert_eq!(alpha_beta.select_action(&game), Some(Direction::West));
    assert_eq!(expectimax.select_action(&game), Some(Direction::West));

    let evaluation: ActionEvaluationFn<MiniPacman, Direction> =
        Arc::new(reflex_evaluation::<MiniPacman>);
    let mut reflex = ReflexAgent::new(evaluation).with_seed(1);
    assert_eq!(reflex.select_action(&game), Some(Direction::West));

    let mut greedy = GreedyAgent::new(score()).with_seed(1);
    assert_eq!(greedy.select_action(&game), Some(Direction::West));
}

#[test]
fn agents_keep_away_from_the_ghost() {
    let game = MiniPacman::from_layout(GHOST_EAST);
    let (action, value) = MinimaxAgent::new(1, score()).best_action(&game).unwrap();
    assert_eq!(action, Direction::West);
    assert_eq!(value, -1.0);
    assert_eq!(
        ExpectimaxAgent::new(1, score()).best_action(&game),
        Some((Direction::West, -1.0))
    );
}

#[test]
fn better_evaluation_is_registered_for_pacman_states() {
    let registry = pacman_evaluations::<MiniPacman>();
    let config = SearchAgentConfig {
        depth: 1,
        evaluation: "better".to_string(),
    };
    let mut agent = AlphaBetaAgent::from_config(&config, &registry).unwrap();
    assert_eq!(agent.depth(), 1);
    assert_eq!(
        agent.select_action(&MiniPacman::from_layout(FOOD_WEST)),
        Some(Direction::West)
    );

    let missing = MinimaxAgent::<TreeGame>::from_config(
        &SearchAgentConfig {
            depth: 1,
            evaluation: "better".to_string(),
        },
        &default_evaluations(),
    );
    assert!(matches!(missing, Err(Error::UnknownEntry { .. })));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn alpha_beta_agrees_with_minimax(
        seed in any::<u64>(),
        rounds in 1usize..=2,
        agents in 1usize..=3,
        branching in 1usize..=3,
    ) {
        let game = TreeGame::random(seed, rounds * agents, branching, agents);
        let minimax = MinimaxAgent::new(rounds, score()).best_action(&game);
        let alpha_beta = AlphaBetaAgent::new(rounds, score()).best_action(&game);
        prop_assert_eq!(minimax, alpha_beta);
    }

    #[test]
    fn expectimax_is_never_below_minimax(
        seed in any::<u64>(),
        agents in 1usize..=3,
        branching in 1usize..=3,
    ) {
        let game = TreeGame::random(seed, agents, branching, agents);
        let (_, minimax) = MinimaxAgent::new(1, score()).best_action(&game).unwrap();
        let (_, expectimax) = ExpectimaxAgent::new(1, score()).best_action(&game).unwrap();
        prop_assert!(expectimax >= minimax - 1e-9);
        if agents == 1 {
            prop_assert_eq!(expectimax, minimax);
        }
    }
}
