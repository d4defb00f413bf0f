//! Train command - Train a Q-learning agent on a gridworld

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use serde_json::to_writer_pretty;

use super::{GridArgs, load_config};
use crate::{
    cli::output::{print_kv, print_section, print_subsection, render_grid},
    config::LearningConfig,
    learning::{ApproximateQAgent, QFunction, QLearningAgent, default_features},
    mdp::{GridAction, GridState, GridworldEnvironment, MarkovDecisionProcess},
    pipeline::{
        MetricsObserver, MetricsSummary, ProgressObserver, TrainingConfig, TrainingPipeline,
    },
    ports::Agent,
};

/// Kind of Q-learner to train
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LearnerKind {
    /// Tabular Q-learning
    QLearning,
    /// Linear Q-function over a feature extractor
    Approximate,
}

#[derive(Parser, Debug)]
#[command(about = "Train a Q-learning agent on a gridworld")]
pub struct TrainArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Learner type
    #[arg(long, short = 'a', value_enum, default_value = "q-learning")]
    pub agent: LearnerKind,

    /// Feature extractor for the approximate learner
    #[arg(long, default_value = "identity")]
    pub extractor: String,

    /// Episodes to run, training and testing combined
    #[arg(long, short = 'e')]
    pub episodes: Option<usize>,

    /// Episodes after which learning stops
    #[arg(long, short = 'n')]
    pub num_training: Option<usize>,

    /// Learning rate
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Exploration probability
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Discount factor
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Write a JSON summary of the run to this file
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

#[derive(Debug, Serialize)]
struct TrainingReport {
    agent: String,
    learning: LearningConfig,
    training: TrainingConfig,
    metrics: MetricsSummary,
    start_value: f64,
}

impl TrainArgs {
    fn configs(&self) -> Result<(LearningConfig, TrainingConfig)> {
        let config = load_config(self.config.as_deref())?;
        let mut learning = config.learning;
        let mut training = config.training;

        if let Some(episodes) = self.episodes {
            training.episodes = episodes;
        }
        if let Some(num_training) = self.num_training {
            learning.num_training = num_training;
        }
        if let Some(alpha) = self.alpha {
            learning.alpha = alpha;
        }
        if let Some(epsilon) = self.epsilon {
            learning.epsilon = epsilon;
        }
        if let Some(gamma) = self.gamma {
            learning.gamma = gamma;
        }
        if let Some(seed) = self.seed {
            learning.seed = Some(seed);
            training.seed = Some(seed);
        }
        learning.validate()?;
        Ok((learning, training))
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let (learning, training) = args.configs()?;
    let grid = args.grid.build()?;

    let mut env = GridworldEnvironment::new(grid.clone());
    if let Some(seed) = training.seed {
        env = env.with_seed(seed);
    }
    let legal_actions = move |state: &GridState| grid.possible_actions(state);

    match args.agent {
        LearnerKind::QLearning => {
            let agent = QLearningAgent::<GridState, GridAction>::new(learning, legal_actions);
            run(agent, &mut env, training, &args)
        }
        LearnerKind::Approximate => {
            let agent = ApproximateQAgent::from_registry(
                &args.extractor,
                &default_features::<GridState, GridAction>(),
                learning,
                legal_actions,
            )?;
            run(agent, &mut env, training, &args)
        }
    }
}

fn run<Q>(
    mut agent: QLearningAgent<GridState, GridAction, Q>,
    env: &mut GridworldEnvironment,
    training: TrainingConfig,
    args: &TrainArgs,
) -> Result<()>
where
    Q: QFunction<GridState, GridAction>,
{
    let mut metrics = MetricsObserver::new();
    let mut progress = ProgressObserver::new();
    {
        let mut pipeline =
            TrainingPipeline::new(training.clone()).with_observer(Box::new(&mut metrics));
        if !args.no_progress {
            pipeline = pipeline.with_observer(Box::new(&mut progress));
        }
        pipeline.run(&mut agent, env)?;
    }

    let summary = metrics.summary();
    let grid = env.grid();
    let start_value = agent.value(&grid.start_state());

    print_section(&format!("Training {}", agent.name()));
    print_kv("Episodes", &summary.episodes.to_string());
    print_kv("Average reward", &format!("{:.4}", summary.average_reward));
    print_kv("Average length", &format!("{:.2}", summary.average_length));
    match summary.training_completed_at {
        Some(episode) => print_kv("Training stopped", &format!("after episode {episode}")),
        None => print_kv("Training stopped", "never"),
    }
    if let Some(reward) = summary.average_test_reward {
        print_kv("Average test reward", &format!("{reward:.4}"));
    }
    print_kv("Start value", &format!("{start_value:.4}"));

    print_subsection("Values");
    println!("{}", render_grid(grid, |state| format!("{:.2}", agent.value(state))));

    print_subsection("Greedy policy");
    println!(
        "{}",
        render_grid(grid, |state| match agent.policy(state) {
            Some(action) => action.to_string(),
            None => "-".to_string(),
        })
    );

    if let Some(path) = &args.output {
        let report = TrainingReport {
            agent: agent.name().to_string(),
            learning: agent.config().clone(),
            training,
            metrics: summary,
            start_value,
        };
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        to_writer_pretty(file, &report)?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}
