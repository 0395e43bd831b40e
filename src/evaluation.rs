//! Heuristic scoring of non-terminal positions

use crate::board::{windows, Board, Cell, Side};
use crate::{CENTER, CONNECT, ROWS};

/// Bonus per piece held in the center column
pub const CENTER_WEIGHT: i32 = 3;
/// A complete line, only reachable if called on a terminal position
pub const FOUR_WEIGHT: i32 = 100;
/// Three pieces and one gap
pub const THREE_WEIGHT: i32 = 5;
/// Two pieces and two gaps
pub const TWO_WEIGHT: i32 = 2;
/// Penalty for an opponent three with one gap
pub const THREAT_WEIGHT: i32 = 4;

/// Scores a single window of cells for `side`
///
/// The opponent-threat penalty is checked on its own, after the own-pieces
/// bonus.
pub fn score_window(cells: &[Cell; CONNECT], side: Side) -> i32 {
    let own = cells.iter().filter(|&&c| c == Cell::Occupied(side)).count();
    let opp = cells
        .iter()
        .filter(|&&c| c == Cell::Occupied(side.opponent()))
        .count();
    let empty = cells.iter().filter(|c| c.is_empty()).count();

    let mut score = match (own, empty) {
        (4, _) => FOUR_WEIGHT,
        (3, 1) => THREE_WEIGHT,
        (2, 2) => TWO_WEIGHT,
        _ => 0,
    };
    if opp == 3 && empty == 1 {
        score -= THREAT_WEIGHT;
    }
    score
}

/// Sums [`score_window`] for `side` over every window on the board
pub fn score_lines(board: &Board, side: Side) -> i32 {
    windows()
        .map(|window| score_window(&board.window_cells(&window), side))
        .sum()
}

/// Center column control from `side`'s perspective
pub fn score_center(board: &Board, side: Side) -> i32 {
    (0..ROWS)
        .map(|row| match board.cell(row, CENTER) {
            Cell::Occupied(s) if s == side => CENTER_WEIGHT,
            Cell::Occupied(_) => -CENTER_WEIGHT,
            Cell::Empty => 0,
        })
        .sum()
}

/// Scores `board` from `side`'s perspective, positive favouring `side`
pub fn evaluate(board: &Board, side: Side) -> i32 {
    score_center(board, side) + score_lines(board, side) - score_lines(board, side.opponent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;

    const M: Cell = Cell::Occupied(Side::Machine);
    const H: Cell = Cell::Occupied(Side::Human);
    const E: Cell = Cell::Empty;

    #[test]
    fn window_patterns() {
        assert_eq!(score_window(&[M, M, M, M], Side::Machine), 100);
        assert_eq!(score_window(&[M, M, E, M], Side::Machine), 5);
        assert_eq!(score_window(&[E, M, E, M], Side::Machine), 2);
        assert_eq!(score_window(&[M, E, E, E], Side::Machine), 0);
        assert_eq!(score_window(&[H, H, E, H], Side::Machine), -4);
        assert_eq!(score_window(&[H, M, M, E], Side::Machine), 0);
        assert_eq!(score_window(&[H, H, H, M], Side::Machine), 0);
    }

    #[test]
    fn empty_board_is_balanced() {
        let board = Board::empty();
        assert_eq!(evaluate(&board, Side::Machine), 0);
        assert_eq!(evaluate(&board, Side::Human), 0);
    }

    #[test]
    fn single_center_piece() -> Result<(), MoveError> {
        let board = Board::from_moves("4", Side::Machine)?;
        // no window holds two pieces, only the center bonus counts
        assert_eq!(evaluate(&board, Side::Machine), 3);
        assert_eq!(evaluate(&board, Side::Human), -3);
        Ok(())
    }

    #[test]
    fn open_three_counts_for_both_sides() -> Result<(), MoveError> {
        let mut board = Board::empty();
        for col in 0..3 {
            board.play(col, Side::Machine)?;
        }
        let score = evaluate(&board, Side::Machine);

        // open three (+5) and open pair (+2), plus the human's threat
        // penalty (-4) subtracted from the human's lines
        assert_eq!(score, 11);
        assert_eq!(evaluate(&board, Side::Human), -score);
        Ok(())
    }
}
