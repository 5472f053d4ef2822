use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// J-piece.
    J = 1,
    /// L-piece.
    L = 2,
    /// O-piece.
    O = 3,
    /// S-piece.
    S = 4,
    /// T-piece.
    T = 5,
    /// Z-piece.
    Z = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// Every piece kind, in table order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Returns the canonical (spawn) orientation of this piece kind.
    #[must_use]
    pub const fn shape(self) -> Shape {
        SHAPES[self as usize]
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohana_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }

    /// Parses a piece kind from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohana_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('O'), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            'O' => Some(PieceKind::O),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            'Z' => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Orientation matrix of a piece.
///
/// A square boolean grid of side 2, 3 or 4 marking the occupied cells of a piece in
/// its current rotation. Row `y` runs downward, column `x` runs rightward, matching
/// board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: u8,
    cells: [[bool; Shape::MAX_SIZE]; Shape::MAX_SIZE],
}

impl Shape {
    /// Largest supported matrix side.
    pub const MAX_SIZE: usize = 4;

    const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N >= 2 && N <= Self::MAX_SIZE);
        let mut cells = [[false; Self::MAX_SIZE]; Self::MAX_SIZE];
        let mut y = 0;
        while y < N {
            let mut x = 0;
            while x < N {
                cells[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        #[expect(clippy::cast_possible_truncation)]
        let size = N as u8;
        Self { size, cells }
    }

    /// Side length of the square matrix.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns whether the matrix cell at column `x`, row `y` is occupied.
    ///
    /// Cells outside the matrix are reported as empty.
    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        let size = usize::from(self.size);
        x < size && y < size && self.cells[y][x]
    }

    /// Returns an iterator of occupied `(x, y)` offsets within the matrix.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.size).flat_map(move |y| {
            (0..self.size)
                .filter(move |&x| self.cells[usize::from(y)][usize::from(x)])
                .map(move |x| (i32::from(x), i32::from(y)))
        })
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.occupied().count()
    }

    /// Returns the matrix rotated 90° clockwise.
    ///
    /// Cell `(x, y)` moves to `(size - 1 - y, x)`; the number of occupied cells is
    /// preserved.
    ///
    /// # Example
    ///
    /// ```
    /// use ohana_engine::PieceKind;
    ///
    /// let shape = PieceKind::T.shape();
    /// let rotated = shape.rotated();
    /// assert_eq!(shape.count(), rotated.count());
    /// assert_eq!(rotated.rotated().rotated().rotated(), shape);
    /// ```
    #[must_use]
    pub fn rotated(&self) -> Self {
        let size = usize::from(self.size);
        let mut cells = [[false; Self::MAX_SIZE]; Self::MAX_SIZE];
        for (y, row) in self.cells.iter().enumerate().take(size) {
            for (x, &cell) in row.iter().enumerate().take(size) {
                cells[x][size - 1 - y] = cell;
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Returns the rows of the matrix, each `size` cells wide.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let size = usize::from(self.size);
        self.cells[..size].iter().map(move |row| &row[..size])
    }

    /// Number of rows spanned by occupied cells.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows().filter(|row| row.iter().any(|&c| c)).count()
    }
}

const SHAPES: [Shape; PieceKind::LEN] = [
    // I-piece
    Shape::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
    // J-piece
    Shape::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
    // L-piece
    Shape::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
    // O-piece
    Shape::from_rows([[1, 1], [1, 1]]),
    // S-piece
    Shape::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
    // T-piece
    Shape::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
    // Z-piece
    Shape::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(kind.shape().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn test_matrix_sizes() {
        assert_eq!(PieceKind::I.shape().size(), 4);
        assert_eq!(PieceKind::O.shape().size(), 2);
        for kind in [
            PieceKind::J,
            PieceKind::L,
            PieceKind::S,
            PieceKind::T,
            PieceKind::Z,
        ] {
            assert_eq!(kind.shape().size(), 3, "{kind:?}");
        }
    }

    #[test]
    fn test_rotation_preserves_cell_count() {
        for kind in PieceKind::ALL {
            let mut shape = kind.shape();
            for _ in 0..4 {
                let rotated = shape.rotated();
                assert_eq!(shape.count(), rotated.count(), "{kind:?}");
                shape = rotated;
            }
            assert_eq!(shape, kind.shape(), "four rotations must be identity");
        }
    }

    #[test]
    fn test_rotation_is_clockwise() {
        // .T.      .T.
        // TTT  ->  .TT
        // ...      .T.
        let rotated = PieceKind::T.shape().rotated();
        let rows: Vec<Vec<bool>> = rotated.rows().map(<[bool]>::to_vec).collect();
        assert_eq!(
            rows,
            vec![
                vec![false, true, false],
                vec![false, true, true],
                vec![false, true, false],
            ]
        );
    }

    #[test]
    fn test_i_piece_rotates_into_column() {
        let rotated = PieceKind::I.shape().rotated();
        let occupied: Vec<_> = rotated.occupied().collect();
        assert_eq!(occupied, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
        assert_eq!(rotated.height(), 4);
    }

    #[test]
    fn test_o_piece_rotation_is_identity() {
        let shape = PieceKind::O.shape();
        assert_eq!(shape.rotated(), shape);
    }

    #[test]
    fn test_is_occupied_outside_matrix() {
        let shape = PieceKind::O.shape();
        assert!(shape.is_occupied(1, 1));
        assert!(!shape.is_occupied(2, 0));
        assert!(!shape.is_occupied(0, 3));
    }

    #[test]
    fn test_piece_kind_char_conversion() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('x'), None);
        assert_eq!(PieceKind::from_char('i'), None);
    }
}
