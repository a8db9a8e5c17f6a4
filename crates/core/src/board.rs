//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or tagged with the piece
//! kind that filled it. Uses a flat array so that copies (one per simulated
//! placement) are a plain memcpy.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows with `y < 0` sit above the grid: they are in bounds for collision
//! purposes (pieces spawn partly up there) but have no storage.

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Upper bound on rows removed by a single clear
pub const MAX_CLEARED_ROWS: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if the position has no storage
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if the position has no storage
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Horizontal range and floor check; there is no ceiling
    pub fn in_bounds(&self, x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y < BOARD_HEIGHT as i8
    }

    /// Check if position holds a filled cell (positions above the grid never do)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a single mino may sit at (x, y)
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        self.in_bounds(x, y) && !self.is_occupied(x, y)
    }

    /// Every mino of `piece` is in bounds and on an empty cell.
    ///
    /// This is the only collision check in the workspace: live movement,
    /// spawning and the move search all go through it.
    pub fn is_valid_placement(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|&(x, y)| self.is_free(x, y))
    }

    /// Would `piece` be valid after `rot` quarter turns and a `(dx, dy)` shift?
    pub fn can_place(&self, piece: &Piece, dx: i8, dy: i8, rot: u8) -> bool {
        self.is_valid_placement(&piece.moved(dx, dy, rot))
    }

    /// Write the piece into the grid.
    ///
    /// The caller must have validated the placement. Minos above the grid are dropped.
    pub fn commit(&mut self, piece: &Piece) {
        debug_assert!(
            self.is_valid_placement(piece),
            "commit on invalid placement: {:?}",
            piece
        );
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Single bottom-up pass: full rows are skipped, every other row is copied
    /// down to the next write position, and the rows left over at the top are
    /// emptied. Surviving rows keep their order.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Clear all full rows, returning how many were removed
    pub fn clear_lines(&mut self) -> u32 {
        self.clear_full_rows().len() as u32
    }

    /// Stack height of a column, measured from the floor (0 when empty or
    /// when `x` is past the right wall)
    pub fn column_height(&self, x: usize) -> u32 {
        let width = BOARD_WIDTH as usize;
        if x >= width {
            return 0;
        }
        (0..BOARD_HEIGHT as usize)
            .find(|&y| self.cells[y * width + x].is_some())
            .map_or(0, |top| BOARD_HEIGHT as u32 - top as u32)
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row as a slice
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, aligned to the bottom of the grid.
    ///
    /// `.` and ` ` are empty; a piece letter fills with that kind; any other
    /// character fills with [`PieceKind::I`]. Rows may be shorter than the
    /// board; missing cells are empty. Returns None if there are too many rows
    /// or a row is too wide.
    ///
    /// ```
    /// use tetris_hint_core::Board;
    ///
    /// let board = Board::from_rows(&["#.########"]).unwrap();
    /// assert!(board.is_occupied(0, 19));
    /// assert!(!board.is_occupied(1, 19));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() > BOARD_HEIGHT as usize {
            return None;
        }
        let mut board = Self::new();
        let top = BOARD_HEIGHT as usize - rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.chars().count() > BOARD_WIDTH as usize {
                return None;
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' | ' ' => None,
                    other => Some(
                        PieceKind::from_str(&other.to_string()).unwrap_or(PieceKind::I),
                    ),
                };
                board.set(x as i8, (top + i) as i8, cell);
            }
        }
        Some(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
