//! Output formatting for CLI

use crate::{
    grid::Position,
    mdp::{GridState, Gridworld},
};

/// Width of one rendered gridworld cell
const CELL_WIDTH: usize = 8;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{key}:"), value);
}

/// Format a number with thousands separators
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Render one line per grid row, top row first, with `cell` labelling every
/// non-wall cell. Walls are drawn as a solid block.
pub fn render_grid(grid: &Gridworld, mut cell: impl FnMut(&GridState) -> String) -> String {
    let mut lines = Vec::with_capacity(grid.height());
    for y in 0..grid.height() {
        let mut line = String::new();
        for x in 0..grid.width() {
            let position = Position::new(x as i32, y as i32);
            let label = if grid.is_wall(position) {
                "#".repeat(CELL_WIDTH - 1)
            } else {
                cell(&GridState::Cell(position))
            };
            line.push_str(&format!("{label:>width$} ", width = CELL_WIDTH - 1));
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
