//! Value-iteration command - Plan on a gridworld and print values and policy

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{GridArgs, load_config};
use crate::{
    cli::output::{print_kv, print_section, print_subsection, render_grid},
    mdp::{MarkovDecisionProcess, ValueIterationAgent},
};

#[derive(Parser, Debug)]
#[command(about = "Run value iteration on a gridworld")]
pub struct ValueIterationArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Discount rate (overrides the configuration file)
    #[arg(long, short = 'd')]
    pub discount: Option<f64>,

    /// Number of sweeps (overrides the configuration file)
    #[arg(long, short = 'i')]
    pub iterations: Option<usize>,

    /// JSON configuration file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

pub fn execute(args: ValueIterationArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?.value_iteration;
    if let Some(discount) = args.discount {
        config.discount_rate = discount;
    }
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    config.validate()?;

    let grid = args.grid.build()?;
    let agent = ValueIterationAgent::new(grid, &config);
    let grid = agent.mdp();

    print_section("Value iteration");
    print_kv("Discount", &format!("{}", config.discount_rate));
    print_kv("Iterations", &config.iterations.to_string());
    print_kv("Noise", &format!("{}", grid.noise()));
    print_kv("Living reward", &format!("{}", grid.living_reward()));
    print_kv(
        "Start value",
        &format!("{:.4}", agent.value(&grid.start_state())),
    );

    print_subsection("Values");
    println!("{}", render_grid(grid, |state| format!("{:.2}", agent.value(state))));

    print_subsection("Policy");
    println!(
        "{}",
        render_grid(grid, |state| match agent.policy(state) {
            Some(action) => action.to_string(),
            None => "-".to_string(),
        })
    );

    Ok(())
}
