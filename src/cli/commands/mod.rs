//! Subcommands of the `pacai` binary
//!
//! Each command exposes a clap `Args` struct and an `execute` function.

pub mod analysis;
pub mod search;
pub mod train;
pub mod value_iteration;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use crate::{config::AgentsConfig, mdp::Gridworld};

/// Load the configuration file if one was given, otherwise the defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<AgentsConfig> {
    match path {
        Some(path) => AgentsConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(AgentsConfig::default()),
    }
}

/// Gridworld selection shared by the gridworld commands
#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Built-in gridworld (bridge, book, cliff, discount)
    #[arg(long, short = 'g', default_value = "book")]
    pub grid: String,

    /// Gridworld layout file; overrides --grid
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Probability of slipping to either side of the intended move
    #[arg(long)]
    pub noise: Option<f64>,

    /// Reward for every move that does not exit
    #[arg(long, allow_hyphen_values = true)]
    pub living_reward: Option<f64>,
}

impl GridArgs {
    pub fn build(&self) -> Result<Gridworld> {
        let mut grid = match &self.layout {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read layout {}", path.display()))?;
                Gridworld::parse(&text)?
            }
            None => Gridworld::by_name(&self.grid)?,
        };
        if let Some(noise) = self.noise {
            anyhow::ensure!(
                (0.0..=1.0).contains(&noise),
                "noise must be within [0, 1], got {noise}"
            );
            grid = grid.with_noise(noise);
        }
        if let Some(living_reward) = self.living_reward {
            grid = grid.with_living_reward(living_reward);
        }
        Ok(grid)
    }
}
