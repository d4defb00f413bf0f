//! Search command - Find a path to the food in a maze

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{format_number, print_kv, print_section},
    grid::{GridHeuristic, Maze, Position, PositionSearchProblem},
    search::{SearchStrategy, search},
};

#[derive(Parser, Debug)]
#[command(about = "Find a path from pac-man to the food")]
pub struct SearchArgs {
    /// Built-in maze (tiny, small)
    #[arg(long, short = 'm', default_value = "tiny")]
    pub maze: String,

    /// Maze layout file; overrides --maze
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Search strategy (dfs, bfs, ucs, astar)
    #[arg(long, short = 's', default_value = "bfs")]
    pub strategy: SearchStrategy,

    /// Heuristic for A* (null, manhattan, euclidean)
    #[arg(long, default_value = "manhattan")]
    pub heuristic: GridHeuristic,
}

pub fn execute(args: SearchArgs) -> Result<()> {
    let maze = match &args.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read layout {}", path.display()))?;
            Maze::parse(&text)?
        }
        None => Maze::by_name(&args.maze)?,
    };
    let problem = PositionSearchProblem::from_layout(maze)?;
    let goal = problem.goal();
    let heuristic = args.heuristic;

    let outcome = search(&problem, args.strategy, |position: &Position| {
        heuristic.estimate(*position, goal)
    });

    print_section("Search");
    print_kv("Strategy", &args.strategy.to_string());
    if args.strategy.is_informed() {
        print_kv("Heuristic", &heuristic.to_string());
    }
    print_kv("Nodes expanded", &format_number(outcome.expanded));

    match outcome.cost {
        Some(cost) => {
            print_kv("Path length", &outcome.path.len().to_string());
            print_kv("Path cost", &format!("{cost}"));
            let path = outcome
                .path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            print_kv("Path", &path);
        }
        None => println!("  No path reaches the food"),
    }

    Ok(())
}
