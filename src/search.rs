//! A fixed-depth minimax agent with alpha-beta pruning

use rayon::prelude::*;

use crate::{
    board::{Board, Side},
    config::Config,
    error::ConfigError,
    evaluation::evaluate,
    terminal::{is_full, winner},
};

/// Score of a position the machine has won
pub const WIN_SCORE: i32 = 1000;
/// Score of a position the human has won
pub const LOSS_SCORE: i32 = -1000;
/// Score of a drawn position
pub const DRAW_SCORE: i32 = 0;

/// The score of the best root move and the column that achieves it
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub score: i32,
    pub column: usize,
}

impl SearchResult {
    /// Keeps the first result seen among equal scores
    fn better(best: Option<Self>, candidate: Self) -> Option<Self> {
        match best {
            Some(best) if candidate.score <= best.score => Some(best),
            _ => Some(candidate),
        }
    }
}

/// Chooses moves for [`Side::Machine`], which is always the maximizing side
///
/// # Position Scoring
/// A position won by the machine scores `WIN_SCORE`, one won by the human
/// `LOSS_SCORE` and a full board `DRAW_SCORE`, however deep in the tree it is
/// found. Positions at the depth limit are scored with
/// [`evaluate`] from the machine's perspective, whichever side is to move.
#[derive(Clone, Debug)]
pub struct Searcher {
    config: Config,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher`, rejecting an invalid search depth
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            node_count: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Performs game tree search
    ///
    /// Returns the score of `board` with `depth` plies left to explore, where
    /// `maximizing` tells whether the machine is to move.
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.node_count += 1;

        // terminal positions are scored before the depth limit applies
        match winner(board) {
            Some(Side::Machine) => return WIN_SCORE,
            Some(Side::Human) => return LOSS_SCORE,
            None => {}
        }
        if is_full(board) {
            return DRAW_SCORE;
        }

        if depth == 0 {
            return evaluate(board, Side::Machine);
        }

        let (side, mut best) = if maximizing {
            (Side::Machine, i32::MIN)
        } else {
            (Side::Human, i32::MAX)
        };

        for (_column, next) in board.successors(side) {
            let score = self.minimax(&next, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            // the opponent will never allow this line to be reached
            if beta <= alpha {
                break;
            }
        }
        best
    }

    /// Finds the best machine move on `board`, or `None` if the board is full
    pub fn search(&mut self, board: &Board) -> Option<SearchResult> {
        self._search(board, true)
    }

    /// Like [`Searcher::search`], logging the score of each root move to stdout
    pub fn search_verbose(&mut self, board: &Board) -> Option<SearchResult> {
        self._search(board, false)
    }

    fn _search(&mut self, board: &Board, silent: bool) -> Option<SearchResult> {
        let mut best = None;

        for (column, next) in board.successors(Side::Machine) {
            let nodes_before = self.node_count;
            let score = self.minimax(&next, self.config.depth, i32::MIN, i32::MAX, false);

            if !silent {
                println!(
                    "Column {}: score {}, positions searched: {}",
                    column + 1,
                    score,
                    self.node_count - nodes_before
                );
            }
            best = SearchResult::better(best, SearchResult { score, column });
        }
        best
    }

    /// Searches each root move on its own thread
    ///
    /// Root subtrees are independent, and results are reduced in column order
    /// so the outcome always matches [`Searcher::search`].
    pub fn search_parallel(&mut self, board: &Board) -> Option<SearchResult> {
        let candidates: Vec<(usize, Board)> = board.successors(Side::Machine).collect();
        let config = self.config;

        let scored: Vec<(SearchResult, usize)> = candidates
            .par_iter()
            .map(|(column, next)| {
                let mut searcher = Searcher {
                    config,
                    node_count: 0,
                };
                let score = searcher.minimax(next, config.depth, i32::MIN, i32::MAX, false);
                (
                    SearchResult {
                        score,
                        column: *column,
                    },
                    searcher.node_count,
                )
            })
            .collect();

        let mut best = None;
        for (result, nodes) in scored {
            self.node_count += nodes;
            best = SearchResult::better(best, result);
        }
        best
    }

    /// Returns the column the machine should play, or `None` if the board is full
    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        self.search(board).map(|result| result.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;
    use crate::COLS;

    #[test]
    fn rejects_zero_depth() {
        assert!(Searcher::new(Config::default().with_depth(0)).is_err());
    }

    #[test]
    fn takes_immediate_win() -> Result<(), MoveError> {
        // machine holds columns 1-3 on the bottom row
        let board = Board::from_moves("172737", Side::Machine)?;
        let mut searcher = Searcher::new(Config::default()).unwrap();

        let result = searcher.search(&board).unwrap();
        assert_eq!(result, SearchResult { score: WIN_SCORE, column: 3 });
        Ok(())
    }

    #[test]
    fn blocks_immediate_loss() -> Result<(), MoveError> {
        // human holds columns 1-3 on the bottom row, machine stacked on top
        let board = Board::from_moves("112233", Side::Human)?;
        let mut searcher = Searcher::new(Config::default()).unwrap();

        assert_eq!(searcher.choose_move(&board), Some(3));
        Ok(())
    }

    #[test]
    fn full_board_has_no_move() -> Result<(), MoveError> {
        let mut board = Board::empty();
        // columns alternate pairs of sides so no line of four forms
        for col in 0..COLS {
            for row in 0..crate::ROWS {
                let side = if (row / 2 + col) % 2 == 0 {
                    Side::Machine
                } else {
                    Side::Human
                };
                board.play(col, side)?;
            }
        }
        let mut searcher = Searcher::new(Config::default()).unwrap();
        assert_eq!(searcher.search(&board), None);
        assert_eq!(searcher.search_parallel(&board), None);
        Ok(())
    }

    #[test]
    fn verbose_search_agrees() -> Result<(), MoveError> {
        let board = Board::from_moves("4453", Side::Machine)?;
        let mut silent = Searcher::new(Config::default()).unwrap();
        let mut verbose = Searcher::new(Config::default().with_verbose(true)).unwrap();

        assert_eq!(verbose.search_verbose(&board), silent.search(&board));
        assert_eq!(verbose.node_count, silent.node_count);
        Ok(())
    }

    #[test]
    fn counts_nodes() {
        let mut searcher = Searcher::new(Config::default().with_depth(1)).unwrap();
        searcher.search(&Board::empty());
        // 7 root children, each with 7 replies
        assert_eq!(searcher.node_count, 7 + 7 * 7);
    }
}
