#![cfg_attr(not(feature = "std"), no_std)]

//! Game-of-life board for an LED matrix, initialised from the platform generator so
//! that a host run reproduces the pattern the device lights up for the same seed.

use serde::{Deserialize, Serialize};

mod board;
#[cfg(feature = "std")]
mod snapshot;

pub use board::Board;
#[cfg(feature = "std")]
pub use snapshot::BoardSnapshot;

pub const LED_COLS: usize = 8;
pub const LED_ROWS: usize = 8;

/// Board matching the physical LED matrix.
pub type LedBoard = Board<LED_COLS, LED_ROWS>;

/// Boards with at most this many live cells are considered trivial.
pub const TRIVIAL_ALIVE_LIMIT: usize = 4;

/// How cells beyond the edge of the board are treated when counting neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Boundary {
    /// Everything outside the board is dead.
    #[default]
    Open,
    /// Opposite edges are adjacent.
    Periodic,
}

/// Pseudo-symmetry applied after random placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Symmetry {
    #[default]
    None,
    /// Left half copied onto the right half.
    MirrorX,
    /// Top half copied onto the bottom half.
    MirrorY,
    MirrorXY,
    /// Cells with `y < x` copied from their transpose, square boards only.
    Diagonal,
    /// Cells with `y >= x` copied from their transpose, square boards only.
    AntiDiagonal,
}

impl Symmetry {
    /// Number of outcomes of the symmetry draw, `random(64)`.
    pub const DRAW_SPAN: i32 = 64;

    /// Maps a symmetry draw to the symmetry it selects. Only 6 of the 64 outcomes
    /// symmetrize; the diagonal ones need a square board.
    pub fn from_draw(draw: i64, square: bool) -> Self {
        match draw {
            0 => Symmetry::MirrorX,
            1 => Symmetry::MirrorY,
            2 | 3 => Symmetry::MirrorXY,
            4 if square => Symmetry::Diagonal,
            5 if square => Symmetry::AntiDiagonal,
            _ => Symmetry::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetry_from_draw() {
        assert_eq!(Symmetry::from_draw(0, true), Symmetry::MirrorX);
        assert_eq!(Symmetry::from_draw(1, true), Symmetry::MirrorY);
        assert_eq!(Symmetry::from_draw(2, true), Symmetry::MirrorXY);
        assert_eq!(Symmetry::from_draw(3, false), Symmetry::MirrorXY);
        assert_eq!(Symmetry::from_draw(4, true), Symmetry::Diagonal);
        assert_eq!(Symmetry::from_draw(5, true), Symmetry::AntiDiagonal);
        assert_eq!(Symmetry::from_draw(4, false), Symmetry::None);
        assert_eq!(Symmetry::from_draw(5, false), Symmetry::None);
        assert_eq!(Symmetry::from_draw(37, true), Symmetry::None);
    }
}
