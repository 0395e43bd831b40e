use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use std::io::{stdin, stdout, Stdin, Write};

use connect4_minimax::{
    board::Board,
    config::{Config, Tint},
    error::MoveError,
    game::{MovePrompt, Renderer},
    search::SearchResult,
    COLS, ROWS,
};

fn color(tint: Tint) -> Color {
    match tint {
        Tint::Red => Color::Red,
        Tint::Yellow => Color::Yellow,
    }
}

/// Draws the board to the terminal, one glyph per cell
pub struct TerminalRenderer {
    config: Config,
}

impl TerminalRenderer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, board: &Board, labels: &[String]) -> Result<()> {
        let mut stdout = stdout();

        // keep the per-column search log on screen in verbose mode
        if !self.config.verbose {
            stdout.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        } else {
            stdout.queue(PrintStyledContent(style("\n".to_string())))?;
        }
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell_style = self.config.style(board.cell(row, col).side());
                let mut glyph = style(format!("{} ", cell_style.glyph));
                if let Some(tint) = cell_style.color {
                    glyph = glyph.with(color(tint)).attribute(Attribute::Bold);
                }
                stdout.queue(PrintStyledContent(glyph))?;
            }
            stdout.queue(PrintStyledContent(style("\n".to_string())))?;
        }
        stdout.queue(PrintStyledContent(style(labels.join(" ") + "\n")))?;
        stdout.flush()?;
        Ok(())
    }

    fn machine_moved(&mut self, result: &SearchResult, nodes: usize) -> Result<()> {
        println!(
            "Machine plays column {} (score {}, {} positions searched)",
            result.column + 1,
            result.score,
            nodes
        );
        Ok(())
    }
}

/// Reads 1-indexed columns from stdin
pub struct StdinPrompt {
    stdin: Stdin,
}

impl StdinPrompt {
    pub fn new() -> Self {
        Self { stdin: stdin() }
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePrompt for StdinPrompt {
    fn next_move(&mut self, board: &Board) -> Result<usize> {
        let choices: Vec<String> = board
            .legal_columns()
            .map(|col| (col + 1).to_string())
            .collect();

        loop {
            print!("Select a column ({}) > ", choices.join(", "));
            stdout().flush()?;

            let mut input_str = String::new();
            if self.stdin.read_line(&mut input_str)? == 0 {
                return Err(anyhow::anyhow!("input closed"));
            }

            match input_str.trim().parse::<usize>() {
                Ok(column) if column >= 1 => return Ok(column - 1),
                _ => println!("Invalid number: {}", input_str.trim()),
            }
        }
    }

    fn rejected(&mut self, error: &MoveError) -> Result<()> {
        println!("{}", error);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect4_minimax::board::Side;

    #[test]
    fn default_tints_map_to_terminal_colors() {
        let config = Config::default();
        assert_eq!(config.style(Some(Side::Machine)).color.map(color), Some(Color::Yellow));
        assert_eq!(config.style(Some(Side::Human)).color.map(color), Some(Color::Red));
        assert_eq!(config.style(None).color.map(color), None);
    }
}
