//! Output formatting for CLI

use crate::board::Cell;

/// Render the board as a bordered 3x3 grid.
///
/// Empty cells show their index so the player knows what to type.
/// Cells on `highlight` (the winning line, when there is one) are
/// wrapped in brackets.
pub fn render_board(cells: &[Cell; 9], highlight: Option<[usize; 3]>) -> String {
    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        for col in 0..3 {
            let index = row * 3 + col;
            if col > 0 {
                out.push('|');
            }
            let symbol = match cells[index] {
                Cell::Empty => char::from_digit(index as u32, 10).unwrap_or('.'),
                occupied => occupied.to_char(),
            };
            if highlight.is_some_and(|line| line.contains(&index)) {
                out.push('[');
                out.push(symbol);
                out.push(']');
            } else {
                out.push(' ');
                out.push(symbol);
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}
