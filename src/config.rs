//! Immutable game and search settings

use crate::{board::Side, error::ConfigError, COLS, ROWS};

/// The default number of plies searched below each root move
pub const DEFAULT_DEPTH: usize = 3;

/// The deepest search that can make sense on this board
pub const MAX_DEPTH: usize = ROWS * COLS;

/// The colours a renderer may tint a glyph with
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Tint {
    Red,
    Yellow,
}

/// How a cell is drawn by a renderer
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SideStyle {
    pub glyph: char,
    pub color: Option<Tint>,
}

impl SideStyle {
    pub const fn new(glyph: char, color: Option<Tint>) -> Self {
        Self { glyph, color }
    }
}

/// Settings handed to the search engine and the renderer at construction
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Config {
    /// Plies searched below each candidate root move
    pub depth: usize,
    /// Whether the machine moves first
    pub machine_first: bool,
    /// Whether machine searches log each root move to stdout
    pub verbose: bool,
    pub machine_style: SideStyle,
    pub human_style: SideStyle,
    pub empty_style: SideStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            machine_first: true,
            verbose: false,
            machine_style: SideStyle::new('O', Some(Tint::Yellow)),
            human_style: SideStyle::new('X', Some(Tint::Red)),
            empty_style: SideStyle::new('_', None),
        }
    }
}

impl Config {
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_machine_first(mut self, machine_first: bool) -> Self {
        self.machine_first = machine_first;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::Depth {
                depth: self.depth,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }

    /// The side that makes the first move of the game
    pub fn first_side(&self) -> Side {
        if self.machine_first {
            Side::Machine
        } else {
            Side::Human
        }
    }

    pub fn style(&self, side: Option<Side>) -> SideStyle {
        match side {
            Some(Side::Machine) => self.machine_style,
            Some(Side::Human) => self.human_style,
            None => self.empty_style,
        }
    }
}
