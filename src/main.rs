use anyhow::{anyhow, Context, Result};

use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    board::Side,
    config::{Config, DEFAULT_DEPTH},
    game::Game,
    terminal::GameState,
};

mod display;
use display::*;

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // optional `--verbose` flag and search depth
    let mut verbose = false;
    let mut depth_arg = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--verbose" | "-v" => verbose = true,
            _ => depth_arg = Some(arg),
        }
    }
    let depth = match depth_arg {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("could not parse '{}' as a search depth", arg))?,
        None => DEFAULT_DEPTH,
    };

    // choose who moves first
    let machine_first = loop {
        let mut buffer = String::new();
        print!("Does the machine play first? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        if stdin.read_line(&mut buffer)? == 0 {
            return Err(anyhow!("input closed"));
        }
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => break true,
            Some(_letter @ 'n') => break false,
            _ => println!("Unknown answer given"),
        }
    };

    let config = Config::default()
        .with_depth(depth)
        .with_machine_first(machine_first)
        .with_verbose(verbose);
    let mut game = Game::new(config)?;

    let mut renderer = TerminalRenderer::new(config);
    let mut prompt = StdinPrompt::new();

    match game.play(&mut renderer, &mut prompt)? {
        GameState::Won(Side::Machine) => println!("The machine wins!"),
        GameState::Won(Side::Human) => println!("You win!"),
        GameState::Draw => println!("It's a tie!"),
        GameState::Playing => unreachable!("game loop returned before the end of the game"),
    }
    Ok(())
}
