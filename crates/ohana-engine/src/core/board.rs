use super::{piece::Piece, shape::PieceKind, shape::Shape};

/// A single board cell: empty, or the kind of the piece that settled there.
pub type Cell = Option<PieceKind>;

type Row = [Cell; Board::WIDTH];

const EMPTY_ROW: Row = [None; Board::WIDTH];

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) const COLS: i32 = Board::WIDTH as i32;
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) const ROWS: i32 = Board::HEIGHT as i32;

/// Fixed-size grid of settled piece material.
///
/// The board is always [`Board::HEIGHT`] rows of [`Board::WIDTH`] cells. Row 0 is the
/// top of the visible area; rows above it (negative `y`) exist only for the falling
/// piece and are never stored.
///
/// The board is mutated only by [`Board::merge`] (adds cells) and
/// [`Board::clear_lines`] (removes full rows).
///
/// # Example
///
/// ```
/// use ohana_engine::{Board, Piece, PieceKind};
///
/// let board = Board::EMPTY;
/// let piece = Piece::at(PieceKind::O, 4, -1);
/// assert!(!board.collides(&piece, 0, 0, None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; Board::HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    /// Number of columns.
    pub const WIDTH: usize = 10;
    /// Number of rows.
    pub const HEIGHT: usize = 20;

    /// A board with every cell empty.
    pub const EMPTY: Self = Self {
        rows: [EMPTY_ROW; Self::HEIGHT],
    };

    /// Returns the cell at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the board.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// Sets the cell at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the board.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; Board::WIDTH]> {
        self.rows.iter()
    }

    /// Returns whether every cell of row `y` is occupied.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a board row.
    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows[y].iter().all(Option::is_some)
    }

    /// Fills every cell of row `y` with `kind`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not a board row.
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) {
        self.rows[y] = [Some(kind); Self::WIDTH];
    }

    /// Number of occupied cells on the board.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Tests whether `piece`, offset by `(dx, dy)` and optionally using `shape` instead
    /// of its own orientation, overlaps a wall, the floor or a settled cell.
    ///
    /// Cells above the top of the board (row < 0) are exempt from the occupancy check
    /// but not from the horizontal bounds.
    #[must_use]
    pub fn collides(&self, piece: &Piece, dx: i32, dy: i32, shape: Option<&Shape>) -> bool {
        let shape = shape.unwrap_or(piece.shape());
        shape.occupied().any(|(sx, sy)| {
            let x = piece.x() + sx + dx;
            let y = piece.y() + sy + dy;
            if !(0..COLS).contains(&x) || y >= ROWS {
                return true;
            }
            match (usize::try_from(x), usize::try_from(y)) {
                (Ok(x), Ok(y)) => self.rows[y][x].is_some(),
                _ => false,
            }
        })
    }

    /// Writes the piece's kind into every board cell it occupies.
    ///
    /// Cells above the top of the board are dropped. Called once the piece can no
    /// longer descend.
    pub fn merge(&mut self, piece: &Piece) {
        debug_assert!(
            !self.collides(piece, 0, 0, None),
            "merging a colliding piece: {piece:?}"
        );
        for (x, y) in piece.cells() {
            if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y))
                && x < Self::WIDTH
                && y < Self::HEIGHT
            {
                self.rows[y][x] = Some(piece.kind());
            }
        }
    }

    /// Clears full rows and returns the number of rows cleared.
    ///
    /// Rows are scanned bottom to top. A full row is removed and an empty row is
    /// inserted at the top; the same row index is then examined again, since the row
    /// above has shifted into it.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = Self::HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.rows.copy_within(..row, 1);
                self.rows[0] = EMPTY_ROW;
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Creates a `Board` from ASCII art, for tests and diagnostics.
    ///
    /// Each non-blank line is a row of 10 cells: `.` is empty, a piece letter
    /// (`IJLOSTZ`) is a settled block of that kind, and `#` is shorthand for an `I`
    /// block. The art is bottom-aligned, so fewer than 20 lines describe the lowest
    /// rows and the rows above stay empty.
    ///
    /// # Panics
    ///
    /// Panics on malformed art.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut board = Self::EMPTY;
        let lines: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert!(
            lines.len() <= Self::HEIGHT,
            "board art has {} rows, at most {} allowed",
            lines.len(),
            Self::HEIGHT
        );

        let top = Self::HEIGHT - lines.len();
        for (i, line) in lines.iter().enumerate() {
            let cells: Vec<Cell> = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    '.' => None,
                    '#' => Some(PieceKind::I),
                    c => Some(
                        PieceKind::from_char(c)
                            .unwrap_or_else(|| panic!("invalid board cell {c:?} in {line:?}")),
                    ),
                })
                .collect();
            assert_eq!(
                cells.len(),
                Self::WIDTH,
                "Each row must have exactly {} cells, got {} at row {}",
                Self::WIDTH,
                cells.len(),
                i
            );
            board.rows[top + i].copy_from_slice(&cells);
        }
        board
    }
}
