use core::fmt;

use arduino_rng_core::Generator;

use crate::{Boundary, Symmetry, TRIVIAL_ALIVE_LIMIT};

/// A `COLS` x `ROWS` grid of cells, indexed `[x][y]` like the firmware's frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const COLS: usize, const ROWS: usize> {
    cells: [[bool; ROWS]; COLS],
}

impl<const COLS: usize, const ROWS: usize> Board<COLS, ROWS> {
    pub const fn empty() -> Self {
        Self {
            cells: [[false; ROWS]; COLS],
        }
    }

    /// Builds a randomized board, see [`Board::randomize`].
    pub fn random(rng: &mut Generator) -> (Self, Symmetry) {
        let mut board = Self::empty();
        let symmetry = board.randomize(rng);
        (board, symmetry)
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    /// Out-of-bounds coordinates read as dead.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells
            .get(x)
            .and_then(|column| column.get(y))
            .copied()
            .unwrap_or(false)
    }

    /// Returns `false` and leaves the board untouched if `(x, y)` is outside it.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        match self.cells.get_mut(x).and_then(|column| column.get_mut(y)) {
            Some(cell) => {
                *cell = alive;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells = [[false; ROWS]; COLS];
    }

    pub fn copy_from(&mut self, other: &Self) {
        self.cells = other.cells;
    }

    pub fn swap_with(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.cells, &mut other.cells);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|alive| !alive)
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().flatten().filter(|alive| **alive).count()
    }

    /// More than [`TRIVIAL_ALIVE_LIMIT`] live cells. Stops counting early.
    pub fn is_nontrivial(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .filter(|alive| **alive)
            .nth(TRIVIAL_ALIVE_LIMIT)
            .is_some()
    }

    /// Copies the left half onto the right half.
    pub fn mirror_x(&mut self) {
        for x in 0..COLS / 2 {
            self.cells[COLS - x - 1] = self.cells[x];
        }
    }

    /// Copies the top half onto the bottom half.
    pub fn mirror_y(&mut self) {
        for column in self.cells.iter_mut() {
            for y in 0..ROWS / 2 {
                column[ROWS - y - 1] = column[y];
            }
        }
    }

    /// Sets every cell with `y < x` from its transpose.
    pub fn mirror_diag1(&mut self) {
        for x in 0..COLS.min(ROWS) {
            for y in 0..x {
                self.cells[x][y] = self.cells[y][x];
            }
        }
    }

    /// Sets every cell with `y >= x` from its transpose.
    pub fn mirror_diag2(&mut self) {
        let n = COLS.min(ROWS);
        for x in 0..n {
            for y in x..n {
                self.cells[x][y] = self.cells[y][x];
            }
        }
    }

    pub fn apply(&mut self, symmetry: Symmetry) {
        match symmetry {
            Symmetry::None => {}
            Symmetry::MirrorX => self.mirror_x(),
            Symmetry::MirrorY => self.mirror_y(),
            Symmetry::MirrorXY => {
                self.mirror_x();
                self.mirror_y();
            }
            Symmetry::Diagonal => self.mirror_diag1(),
            Symmetry::AntiDiagonal => self.mirror_diag2(),
        }
    }

    /// Clears the board and scatters live cells, then maybe symmetrizes.
    ///
    /// Draw order: the cell count from `[3/16, 1/2)` of the area, one `x` then one `y` per
    /// cell (repeats allowed), then the symmetry draw. Identical to the device for the
    /// same generator state.
    pub fn randomize(&mut self, rng: &mut Generator) -> Symmetry {
        self.clear();

        let area = (COLS * ROWS) as i32;
        // the firmware keeps the count in a byte
        let count = rng.random_range(3 * area / 16, area / 2) as u8;
        for _ in 0..count {
            let x = rng.random_range(0, COLS as i32) as usize;
            let y = rng.random_range(0, ROWS as i32) as usize;
            self.set(x, y, true);
        }

        let symmetry = Symmetry::from_draw(rng.random_below(Symmetry::DRAW_SPAN), COLS == ROWS);
        self.apply(symmetry);

        log::debug!(
            "randomized {}x{} board: {} placements, {} alive, {:?}",
            COLS,
            ROWS,
            count,
            self.count_alive(),
            symmetry
        );
        symmetry
    }

    /// One generation of B3/S23.
    pub fn step(&self, boundary: Boundary) -> Self {
        let mut next = Self::empty();
        for x in 0..COLS {
            for y in 0..ROWS {
                let neighbours = self.neighbours(x, y, boundary);
                next.cells[x][y] = matches!((self.cells[x][y], neighbours), (true, 2) | (_, 3));
            }
        }
        next
    }

    fn neighbours(&self, x: usize, y: usize, boundary: Boundary) -> u8 {
        let mut count = 0;
        for dx in -1isize..=1 {
            for dy in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                let alive = match boundary {
                    Boundary::Open => {
                        nx >= 0 && ny >= 0 && self.get(nx as usize, ny as usize)
                    }
                    Boundary::Periodic => self.cells[nx.rem_euclid(COLS as isize) as usize]
                        [ny.rem_euclid(ROWS as isize) as usize],
                };
                if alive {
                    count += 1;
                }
            }
        }
        count
    }

    /// Cells of row `y` left to right, `#` for live and `.` for dead.
    pub fn row_chars(&self, y: usize) -> impl Iterator<Item = char> + '_ {
        (0..COLS).map(move |x| if self.get(x, y) { '#' } else { '.' })
    }
}

impl<const COLS: usize, const ROWS: usize> Default for Board<COLS, ROWS> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const COLS: usize, const ROWS: usize> fmt::Display for Board<COLS, ROWS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..ROWS {
            if y > 0 {
                writeln!(f)?;
            }
            for c in self.row_chars(y) {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
