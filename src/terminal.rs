//! Win and draw detection

use crate::board::{windows, Board, Cell, Side};
use crate::COLS;

/// The progression of a game, derived entirely from the board
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Side),
    Draw,
}

/// Returns the side owning a four-in-a-row, if any
///
/// Windows are scanned horizontal, vertical, diagonal down-right then
/// diagonal down-left, and the first complete one found is reported.
pub fn winner(board: &Board) -> Option<Side> {
    windows().find_map(|window| {
        let cells = board.window_cells(&window);
        match cells[0] {
            Cell::Occupied(side) if cells.iter().all(|&cell| cell == cells[0]) => Some(side),
            _ => None,
        }
    })
}

/// Whether the board has no empty cell left
///
/// Only the top row needs checking, since columns fill from the bottom.
pub fn is_full(board: &Board) -> bool {
    (0..COLS).all(|col| !board.cell(0, col).is_empty())
}

pub fn state(board: &Board) -> GameState {
    match winner(board) {
        Some(side) => GameState::Won(side),
        None if is_full(board) => GameState::Draw,
        None => GameState::Playing,
    }
}
