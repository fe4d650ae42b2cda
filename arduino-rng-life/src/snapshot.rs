use serde::{Deserialize, Serialize};

use crate::{Board, Symmetry};

/// Serializable record of a board, for comparing host runs against captures from the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Seed passed to `randomSeed()`, if any.
    pub seed: Option<i64>,
    pub symmetry: Symmetry,
    /// Generations evolved since randomization.
    pub generation: u32,
    pub alive: usize,
    /// One string per row, `#` for live cells.
    pub rows: Vec<String>,
}

impl BoardSnapshot {
    pub fn capture<const COLS: usize, const ROWS: usize>(
        board: &Board<COLS, ROWS>,
        seed: Option<i64>,
        symmetry: Symmetry,
        generation: u32,
    ) -> Self {
        Self {
            seed,
            symmetry,
            generation,
            alive: board.count_alive(),
            rows: (0..ROWS).map(|y| board.row_chars(y).collect()).collect(),
        }
    }

    /// Rebuilds the board. `None` if the rows do not fit `COLS` x `ROWS`.
    pub fn to_board<const COLS: usize, const ROWS: usize>(&self) -> Option<Board<COLS, ROWS>> {
        if self.rows.len() != ROWS {
            return None;
        }

        let mut board = Board::empty();
        for (y, row) in self.rows.iter().enumerate() {
            if row.chars().count() != COLS {
                return None;
            }
            for (x, c) in row.chars().enumerate() {
                board.set(x, y, c == '#');
            }
        }
        Some(board)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
