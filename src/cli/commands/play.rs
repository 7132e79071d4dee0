//! Play command - Interactive game at the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::board::Board;
use crate::cli::output::render_board;
use crate::game::Game;

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game at the terminal")]
pub struct PlayArgs {
    /// Start from this position instead of an empty board
    /// (9 cells in row-major order, e.g. "XO. .X. ...")
    #[arg(long)]
    pub board: Option<String>,
}

enum Input {
    Cell(usize),
    Quit,
    Invalid,
}

fn parse_input(line: &str) -> Input {
    let token = line.trim();
    if token.eq_ignore_ascii_case("q") || token.eq_ignore_ascii_case("quit") {
        return Input::Quit;
    }
    match token.parse::<usize>() {
        Ok(index) if index < 9 => Input::Cell(index),
        _ => Input::Invalid,
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut game = match &args.board {
        Some(text) => Game::from_board(text.parse::<Board>()?),
        None => Game::new(),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!(
            "{}",
            render_board(game.board().cells(), game.outcome().winning_line())
        );

        if game.is_over() {
            match game.outcome().winner() {
                Some(mark) => println!("{mark} wins!"),
                None => println!("It's a draw."),
            }
            print!("Play again? [y/N] ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else { break };
            if line?.trim().eq_ignore_ascii_case("y") {
                game.reset();
                continue;
            }
            break;
        }

        print!("{} to move (0-8, q to quit): ", game.board().turn());
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };

        match parse_input(&line?) {
            Input::Cell(index) => {
                if !game.board().is_empty(index) {
                    println!("Cell {index} is already taken.");
                    continue;
                }
                game.play(index)?;
            }
            Input::Quit => break,
            Input::Invalid => println!("Enter a cell index from 0 to 8."),
        }
    }

    Ok(())
}
