//! Reading puzzles from plain text grids

use anyhow::{Context, Result};

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::{board::Island, error::HashiError};

/// The islands of a puzzle and the size of the square grid holding them
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub islands: Vec<Island>,
    pub size: usize,
}

impl Puzzle {
    /// Reads a puzzle from a text file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read puzzle file {}", path.display()))?;
        text.parse::<Self>()
            .with_context(|| format!("invalid puzzle in {}", path.display()))
    }
}

impl FromStr for Puzzle {
    type Err = HashiError;

    /// Parses a grid with one row per line
    ///
    /// Digits are islands, any other visible character is an empty cell.
    /// Spaces are ignored, so `3 . 4` and `3.4` describe the same row.
    fn from_str(grid: &str) -> Result<Self, Self::Err> {
        let mut islands = Vec::new();
        let mut rows = 0;
        let mut columns = 0;

        for (row, line) in grid.lines().enumerate() {
            let mut column = 0;
            for c in line.trim().chars().filter(|&c| c != ' ') {
                if let Some(label) = c.to_digit(10) {
                    islands.push(Island::new(row, column, label as u8));
                }
                column += 1;
            }
            rows = row + 1;
            columns = columns.max(column);
        }

        if islands.is_empty() {
            return Err(HashiError::EmptyPuzzle);
        }
        Ok(Self {
            islands,
            size: rows.max(columns),
        })
    }
}
