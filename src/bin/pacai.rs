//! pacai CLI - Search, planning and reinforcement learning on Pac-Man worlds
//!
//! This CLI provides a unified interface for:
//! - Path-finding on text mazes with DFS, BFS, UCS and A*
//! - Value iteration on gridworlds
//! - Training Q-learning agents on gridworlds
//! - Checking the gridworld parameter analysis

use anyhow::Result;
use clap::{Parser, Subcommand};
use pacai::{cli::commands, logging::init_logging};

#[derive(Parser)]
#[command(name = "pacai")]
#[command(version, about = "Search and learning agents for Pac-Man worlds", long_about = None)]
struct Cli {
    /// Show debug events from the agents
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path to the food in a maze
    Search(commands::search::SearchArgs),

    /// Plan on a gridworld with value iteration
    ValueIteration(commands::value_iteration::ValueIterationArgs),

    /// Train a Q-learning agent on a gridworld
    Train(Box<commands::train::TrainArgs>),

    /// Report and verify the gridworld parameter answers
    Analysis(commands::analysis::AnalysisArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Search(args) => commands::search::execute(args),
        Commands::ValueIteration(args) => commands::value_iteration::execute(args),
        Commands::Train(args) => commands::train::execute(*args),
        Commands::Analysis(args) => commands::analysis::execute(args),
    }
}
