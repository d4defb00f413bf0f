//! End-to-end runs of the command-line subcommands

use std::fs;

use clap::Parser;
use pacai::cli::commands::{analysis, search, train, value_iteration};
use tempfile::tempdir;

#[test]
fn train_writes_a_json_summary() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("summary.json");

    let args = train::TrainArgs::parse_from([
        "pacai-train",
        "--grid",
        "bridge",
        "--episodes",
        "12",
        "--num-training",
        "10",
        "--seed",
        "5",
        "--no-progress",
        "--output",
        output.to_str().unwrap(),
    ]);
    train::execute(args).expect("training should succeed");

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(summary["agent"], "q_learning");
    assert_eq!(summary["metrics"]["episodes"], 12);
    assert_eq!(summary["metrics"]["training_completed_at"], 10);
    assert_eq!(summary["learning"]["seed"], 5);
}

#[test]
fn approximate_training_resolves_its_extractor() {
    let args = train::TrainArgs::parse_from([
        "pacai-train",
        "--agent",
        "approximate",
        "--episodes",
        "3",
        "--no-progress",
    ]);
    train::execute(args).expect("identity extractor is registered");

    let args = train::TrainArgs::parse_from([
        "pacai-train",
        "--agent",
        "approximate",
        "--extractor",
        "simple",
        "--no-progress",
    ]);
    assert!(train::execute(args).is_err());
}

#[test]
fn train_reads_a_config_file() {
    let tmp = tempdir().unwrap();
    let config = tmp.path().join("agents.json");
    let output = tmp.path().join("summary.json");
    fs::write(
        &config,
        r#"{ "learning": { "alpha": 0.25, "num_training": 2 }, "training": { "episodes": 4 } }"#,
    )
    .unwrap();

    let args = train::TrainArgs::parse_from([
        "pacai-train",
        "--config",
        config.to_str().unwrap(),
        "--no-progress",
        "--output",
        output.to_str().unwrap(),
    ]);
    train::execute(args).unwrap();

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(summary["learning"]["alpha"], 0.25);
    assert_eq!(summary["training"]["episodes"], 4);
}

#[test]
fn value_iteration_accepts_overrides() {
    let args = value_iteration::ValueIterationArgs::parse_from([
        "pacai-vi",
        "--grid",
        "discount",
        "--discount",
        "0.9",
        "--noise",
        "0.2",
        "--living-reward",
        "-2",
        "--iterations",
        "50",
    ]);
    value_iteration::execute(args).unwrap();

    let args = value_iteration::ValueIterationArgs::parse_from(["pacai-vi", "--discount", "2"]);
    assert!(value_iteration::execute(args).is_err());
}

#[test]
fn search_runs_on_built_in_and_file_layouts() {
    for strategy in ["dfs", "bfs", "ucs", "astar"] {
        let args = search::SearchArgs::parse_from(["pacai-search", "--strategy", strategy]);
        search::execute(args).unwrap();
    }

    let tmp = tempdir().unwrap();
    let layout = tmp.path().join("maze.lay");
    fs::write(&layout, "%%%%%\n%P .%\n%%%%%\n").unwrap();
    let args = search::SearchArgs::parse_from([
        "pacai-search",
        "--layout",
        layout.to_str().unwrap(),
        "--strategy",
        "astar",
        "--heuristic",
        "euclidean",
    ]);
    search::execute(args).unwrap();

    assert!(search::SearchArgs::try_parse_from(["pacai-search", "--strategy", "greedy"]).is_err());
    let args = search::SearchArgs::parse_from(["pacai-search", "--maze", "huge"]);
    assert!(search::execute(args).is_err());
}

#[test]
fn analysis_answers_all_verify() {
    let args = analysis::AnalysisArgs::parse_from(["pacai-analysis", "--strict"]);
    analysis::execute(args).unwrap();

    let args =
        analysis::AnalysisArgs::parse_from(["pacai-analysis", "--question", "bridge-crossing"]);
    analysis::execute(args).unwrap();

    let args = analysis::AnalysisArgs::parse_from(["pacai-analysis", "--question", "q9"]);
    assert!(analysis::execute(args).is_err());
}
