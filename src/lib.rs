//! A fixed-depth minimax agent for playing the board game 'Connect 4'
//!
//! The machine side searches a few plies ahead with alpha-beta pruning and
//! scores the leaves with a window-counting heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Board, Side}, search::Searcher, config::Config};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_moves("4444", Side::Machine)?;
//! let mut searcher = Searcher::new(Config::default())?;
//! let column = searcher.choose_move(&board);
//!
//! assert!(column.map_or(false, |c| board.can_drop(c)));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod terminal;

pub mod evaluation;

pub mod config;

pub mod search;

pub mod game;


/// The number of rows on the game board
pub const ROWS: usize = 6;

/// The number of columns on the game board
pub const COLS: usize = 7;

/// The number of aligned pieces needed to win
pub const CONNECT: usize = 4;

/// The column that scores the center-control bonus
pub const CENTER: usize = COLS / 2;

// a window must fit in every orientation
const_assert!(ROWS >= CONNECT && COLS >= CONNECT);
const_assert!(CENTER < COLS);
