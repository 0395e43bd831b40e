//! The outer play loop and the collaborators it drives

use anyhow::{anyhow, Result};

use crate::{
    board::{Board, Side},
    config::Config,
    error::{ConfigError, MoveError},
    search::{SearchResult, Searcher},
    terminal::{state, GameState},
    COLS,
};

/// Draws the board after every change
pub trait Renderer {
    fn render(&mut self, board: &Board, labels: &[String]) -> Result<()>;

    /// Called after the machine has picked and played a column
    fn machine_moved(&mut self, _result: &SearchResult, _nodes: usize) -> Result<()> {
        Ok(())
    }
}

/// A source of human moves
pub trait MovePrompt {
    /// Returns the 0-indexed column the human wants to play
    fn next_move(&mut self, board: &Board) -> Result<usize>;

    /// Called when the last column returned could not be played
    fn rejected(&mut self, _error: &MoveError) -> Result<()> {
        Ok(())
    }
}

/// The 1-indexed labels shown under each column
pub fn column_labels() -> Vec<String> {
    (1..=COLS).map(|x| x.to_string()).collect()
}

/// A game between the machine and a human, holding the authoritative board
pub struct Game {
    board: Board,
    searcher: Searcher,
    to_move: Side,
}

impl Game {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Ok(Self {
            board: Board::empty(),
            to_move: config.first_side(),
            searcher: Searcher::new(config)?,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        state(&self.board)
    }

    /// Searches for and plays the machine's move
    pub fn machine_move(&mut self) -> Result<SearchResult> {
        if self.to_move != Side::Machine {
            return Err(anyhow!("it is not the machine's turn"));
        }
        let result = if self.searcher.config().verbose {
            self.searcher.search_verbose(&self.board)
        } else {
            self.searcher.search(&self.board)
        }
        .ok_or_else(|| anyhow!("no legal column left for the machine"))?;
        self.board = self.board.drop(result.column, Side::Machine)?;
        self.to_move = Side::Human;
        Ok(result)
    }

    /// Plays the human's move, leaving the game untouched if it is rejected
    pub fn human_move(&mut self, column: usize) -> Result<(), MoveError> {
        self.board = self.board.drop(column, Side::Human)?;
        self.to_move = Side::Machine;
        Ok(())
    }

    /// Plays the game to its end, returning the final state
    pub fn play<R: Renderer, P: MovePrompt>(
        &mut self,
        renderer: &mut R,
        prompt: &mut P,
    ) -> Result<GameState> {
        let labels = column_labels();
        renderer.render(&self.board, &labels)?;

        loop {
            let current = self.state();
            if current != GameState::Playing {
                return Ok(current);
            }

            match self.to_move {
                Side::Machine => {
                    let nodes_before = self.searcher.node_count;
                    let result = self.machine_move()?;
                    renderer.render(&self.board, &labels)?;
                    renderer.machine_moved(&result, self.searcher.node_count - nodes_before)?;
                }
                Side::Human => {
                    let column = prompt.next_move(&self.board)?;
                    if let Err(err) = self.human_move(column) {
                        prompt.rejected(&err)?;
                        // try the move again
                        continue;
                    }
                    renderer.render(&self.board, &labels)?;
                }
            }
        }
    }
}
