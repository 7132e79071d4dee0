//! Evaluate command - Classify a board position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::board::{cells_from_str, Cell};
use crate::cli::output::{print_kv, print_section, render_board};
use crate::evaluator::evaluate;

#[derive(Parser, Debug)]
#[command(about = "Classify a board position")]
pub struct EvaluateArgs {
    /// Board text, 9 cells in row-major order (X, O and . with optional whitespace)
    pub board: String,

    /// Emit the report as JSON instead of the human-readable layout
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct EvaluationReport {
    board: String,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    winner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    winning_line: Option<[usize; 3]>,
    game_over: bool,
}

fn build_report(cells: &[Cell; 9]) -> EvaluationReport {
    let outcome = evaluate(cells);
    EvaluationReport {
        board: cells.iter().map(|cell| cell.to_char()).collect(),
        status: outcome.to_string(),
        winner: outcome.winner().map(|mark| mark.to_string()),
        winning_line: outcome.winning_line(),
        game_over: outcome.is_over(),
    }
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let cells = cells_from_str(&args.board)?;
    let report = build_report(&cells);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Position");
    println!("{}", render_board(&cells, report.winning_line));
    print_kv("Status", &report.status);
    if let Some(winner) = &report.winner {
        print_kv("Winner", winner);
    }
    if let Some(line) = report.winning_line {
        print_kv("Line", &format!("{} {} {}", line[0], line[1], line[2]));
    }
    print_kv("Game over", if report.game_over { "yes" } else { "no" });

    Ok(())
}
