//! Command-line interface for the pacai toolkit
//!
//! This module provides the commands behind the `pacai` binary: path-finding
//! on text mazes, value iteration and Q-learning on gridworlds, and the
//! gridworld parameter analysis.

pub mod commands;
pub mod output;
