//! The 6x7 game grid with gravity-drop insertion

use crate::{error::MoveError, COLS, CONNECT, ROWS};

/// One of the two competing players
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Side {
    Machine,
    Human,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Machine => Side::Human,
            Side::Human => Side::Machine,
        }
    }
}

/// A single grid position
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Occupied(Side),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(*side),
        }
    }
}

/// The four directions a line of pieces can run in
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Orientation {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

/// Every orientation, in scan order
pub static ORIENTATIONS: [Orientation; 4] = [
    Orientation::Horizontal,
    Orientation::Vertical,
    Orientation::DiagonalDownRight,
    Orientation::DiagonalDownLeft,
];

/// The `(row, column)` coordinates of `CONNECT` consecutive cells
pub type Window = [(usize, usize); CONNECT];

impl Orientation {
    /// The number of valid window start rows and start columns
    fn starts(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (ROWS, COLS - CONNECT + 1),
            Orientation::Vertical => (ROWS - CONNECT + 1, COLS),
            Orientation::DiagonalDownRight | Orientation::DiagonalDownLeft => {
                (ROWS - CONNECT + 1, COLS - CONNECT + 1)
            }
        }
    }

    fn window(self, row: usize, col: usize) -> Window {
        let mut window = [(0, 0); CONNECT];
        for (i, cell) in window.iter_mut().enumerate() {
            *cell = match self {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
                Orientation::DiagonalDownRight => (row + i, col + i),
                // anchored at the top-right end of the line
                Orientation::DiagonalDownLeft => (row + i, col + CONNECT - 1 - i),
            };
        }
        window
    }

    /// Every window in this orientation, each start position exactly once
    pub fn windows(self) -> impl Iterator<Item = Window> {
        let (rows, cols) = self.starts();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| self.window(row, col)))
    }
}

/// Every window on the board across all four orientations
pub fn windows() -> impl Iterator<Item = Window> {
    ORIENTATIONS.iter().flat_map(|orientation| orientation.windows())
}

/// A Connect 4 position
///
/// Row 0 is the top of the board and row `ROWS - 1` the bottom. Pieces only
/// enter the grid through [`Board::play`] or [`Board::drop`], so every column
/// is filled contiguously from the bottom up.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Builds a board from a string of 1-indexed columns played alternately,
    /// starting with `first`
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Side) -> Result<Self, MoveError> {
        let mut board = Self::empty();
        let mut side = first;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=9) => {
                    board.play(column - 1, side)?;
                    side = side.opponent();
                }
                _ => return Err(MoveError::Parse { symbol: column_char }),
            }
        }
        Ok(board)
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn window_cells(&self, window: &Window) -> [Cell; CONNECT] {
        let mut cells = [Cell::Empty; CONNECT];
        for (cell, &(row, col)) in cells.iter_mut().zip(window.iter()) {
            *cell = self.cells[row][col];
        }
        cells
    }

    /// Whether a piece can be dropped into `col`
    pub fn can_drop(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col].is_empty()
    }

    /// Columns that can still take a piece, in ascending order
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| self.can_drop(col))
    }

    /// Every board reachable by `side` dropping one piece, paired with the
    /// column played, in ascending column order
    pub fn successors(&self, side: Side) -> impl Iterator<Item = (usize, Board)> + '_ {
        self.legal_columns()
            .filter_map(move |col| self.drop(col, side).ok().map(|next| (col, next)))
    }

    pub fn num_pieces(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Returns a copy of this board with `side`'s piece dropped into `col`,
    /// leaving `self` untouched
    pub fn drop(&self, col: usize, side: Side) -> Result<Board, MoveError> {
        let mut next = *self;
        next.play(col, side)?;
        Ok(next)
    }

    /// Drops `side`'s piece into `col` in place, returning the row it landed in
    pub fn play(&mut self, col: usize, side: Side) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidMove { column: col });
        }
        if !self.can_drop(col) {
            return Err(MoveError::ColumnFull { column: col });
        }

        // lowest empty cell wins
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col].is_empty())
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row][col] = Cell::Occupied(side);
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_counts() {
        let count = |o: Orientation| o.windows().count();
        assert_eq!(count(Orientation::Horizontal), 24);
        assert_eq!(count(Orientation::Vertical), 21);
        assert_eq!(count(Orientation::DiagonalDownRight), 12);
        assert_eq!(count(Orientation::DiagonalDownLeft), 12);
        assert_eq!(windows().count(), 69);
    }

    #[test]
    fn anti_diagonal_windows_run_down_left() {
        let first = Orientation::DiagonalDownLeft.windows().next();
        assert_eq!(first, Some([(0, 3), (1, 2), (2, 1), (3, 0)]));
    }

    #[test]
    fn drop_leaves_input_untouched() -> Result<(), MoveError> {
        let board = Board::empty();
        let next = board.drop(2, Side::Human)?;

        assert_eq!(board, Board::empty());
        assert_eq!(next.cell(ROWS - 1, 2), Cell::Occupied(Side::Human));
        assert_eq!(next.num_pieces(), 1);
        Ok(())
    }

    #[test]
    fn full_column_rejected() -> Result<(), MoveError> {
        let mut board = Board::empty();
        for i in 0..ROWS {
            let side = if i % 2 == 0 { Side::Machine } else { Side::Human };
            assert_eq!(board.play(0, side)?, ROWS - 1 - i);
        }

        assert!(!board.can_drop(0));
        assert_eq!(
            board.drop(0, Side::Machine),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board.legal_columns().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
        Ok(())
    }

    #[test]
    fn out_of_range_rejected() {
        let board = Board::empty();
        assert!(!board.can_drop(COLS));
        assert_eq!(
            board.drop(COLS, Side::Human),
            Err(MoveError::InvalidMove { column: COLS })
        );
    }

    #[test]
    fn from_moves_alternates_sides() -> Result<(), MoveError> {
        let board = Board::from_moves("412", Side::Human)?;
        assert_eq!(board.cell(ROWS - 1, 3), Cell::Occupied(Side::Human));
        assert_eq!(board.cell(ROWS - 1, 0), Cell::Occupied(Side::Machine));
        assert_eq!(board.cell(ROWS - 1, 1), Cell::Occupied(Side::Human));

        assert_eq!(
            Board::from_moves("40", Side::Human),
            Err(MoveError::Parse { symbol: '0' })
        );
        assert_eq!(
            Board::from_moves("8", Side::Human),
            Err(MoveError::InvalidMove { column: 7 })
        );
        assert_eq!(
            Board::from_moves("1111111", Side::Human),
            Err(MoveError::ColumnFull { column: 0 })
        );
        Ok(())
    }
}
