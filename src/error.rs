//! Recoverable faults raised by the core

use crate::COLS;

/// Errors raised when applying a move to a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column {} out of range. Columns must be between 1 and {}", .column + 1, COLS)]
    InvalidMove { column: usize },

    #[error("Invalid move, column {} full", .column + 1)]
    ColumnFull { column: usize },

    #[error("could not parse '{symbol}' as a valid move")]
    Parse { symbol: char },
}

/// Errors raised when validating a [`Config`](crate::config::Config)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("search depth {depth} out of range, must be between 1 and {max}")]
    Depth { depth: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_error_display() {
        assert_eq!(
            MoveError::ColumnFull { column: 3 }.to_string(),
            "Invalid move, column 4 full"
        );
        assert_eq!(
            MoveError::InvalidMove { column: 7 }.to_string(),
            "Invalid move, column 8 out of range. Columns must be between 1 and 7"
        );
        assert_eq!(
            MoveError::Parse { symbol: 'x' }.to_string(),
            "could not parse 'x' as a valid move"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Depth { depth: 0, max: 42 };
        assert_eq!(
            err.to_string(),
            "search depth 0 out of range, must be between 1 and 42"
        );
    }
}
