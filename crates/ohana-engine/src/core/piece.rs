use super::{
    board::{Board, COLS},
    shape::{PieceKind, Shape},
};

/// Horizontal offsets tried, in order, when rotating: in place, kick left, kick right.
const WALL_KICKS: [i32; 3] = [0, -1, 1];

/// A piece with its current orientation matrix and anchor position.
///
/// The anchor `(x, y)` is the board position of the matrix's top-left cell. `y` may
/// be negative while the piece is entering from above the board.
///
/// # Example
///
/// ```
/// use ohana_engine::{Board, Piece, PieceKind};
///
/// let board = Board::EMPTY;
/// let mut piece = Piece::new(PieceKind::T);
/// assert!(piece.try_shift(&board, -1, 0));
/// assert!(piece.try_rotate(&board));
/// assert_eq!(piece.ghost_row(&board), 17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    x: i32,
    y: i32,
}

impl Piece {
    /// Creates a piece at its spawn position: horizontally centered, one row above
    /// the top of the board.
    #[must_use]
    pub fn new(kind: PieceKind) -> Self {
        let shape = kind.shape();
        let x = (COLS - i32::from(shape.size())) / 2;
        Self::with_shape(kind, shape, x, -1)
    }

    /// Creates a piece in its canonical orientation at `(x, y)`.
    #[must_use]
    pub fn at(kind: PieceKind, x: i32, y: i32) -> Self {
        Self::with_shape(kind, kind.shape(), x, y)
    }

    #[must_use]
    pub(crate) fn with_shape(kind: PieceKind, shape: Shape, x: i32, y: i32) -> Self {
        Self { kind, shape, x, y }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns an iterator of the board positions occupied by this piece.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Moves the piece by `(dx, dy)` if the destination does not collide.
    ///
    /// Returns whether the move was committed.
    pub fn try_shift(&mut self, board: &Board, dx: i32, dy: i32) -> bool {
        if board.collides(self, dx, dy, None) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotates the piece 90° clockwise, kicking one column left or right if the
    /// in-place rotation is blocked.
    ///
    /// If none of the three candidate positions is free the piece is left unchanged
    /// and `false` is returned.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotated = self.shape.rotated();
        let Some(dx) = WALL_KICKS
            .into_iter()
            .find(|&dx| !board.collides(self, dx, 0, Some(&rotated)))
        else {
            return false;
        };
        self.shape = rotated;
        self.x += dx;
        true
    }

    /// Number of rows the piece can descend before it lands.
    #[must_use]
    pub fn drop_distance(&self, board: &Board) -> i32 {
        let mut dy = 0;
        while !board.collides(self, 0, dy + 1, None) {
            dy += 1;
        }
        dy
    }

    /// Anchor row the piece would occupy if hard-dropped now.
    #[must_use]
    pub fn ghost_row(&self, board: &Board) -> i32 {
        self.y + self.drop_distance(board)
    }

    /// Returns a copy of the piece moved to its landing row.
    #[must_use]
    pub fn landed(&self, board: &Board) -> Self {
        Self {
            y: self.ghost_row(board),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position() {
        let o = Piece::new(PieceKind::O);
        assert_eq!((o.x(), o.y()), (4, -1));
        let i = Piece::new(PieceKind::I);
        assert_eq!((i.x(), i.y()), (3, -1));
        let t = Piece::new(PieceKind::T);
        assert_eq!((t.x(), t.y()), (3, -1));
    }

    #[test]
    fn test_spawn_does_not_collide_on_empty_board() {
        let board = Board::EMPTY;
        for kind in PieceKind::ALL {
            assert!(!board.collides(&Piece::new(kind), 0, 0, None), "{kind:?}");
        }
    }

    #[test]
    fn test_try_shift_rejects_walls() {
        let board = Board::EMPTY;
        let mut piece = Piece::at(PieceKind::O, 0, 5);
        assert!(!piece.try_shift(&board, -1, 0));
        assert_eq!(piece.x(), 0);
        assert!(piece.try_shift(&board, 1, 0));
        assert_eq!(piece.x(), 1);
    }

    #[test]
    fn test_rotate_in_place() {
        let board = Board::EMPTY;
        let mut piece = Piece::at(PieceKind::T, 3, 5);
        assert!(piece.try_rotate(&board));
        assert_eq!(piece.x(), 3);
        assert_eq!(*piece.shape(), PieceKind::T.shape().rotated());
    }

    #[test]
    fn test_rotate_kicks_left_off_right_wall() {
        let board = Board::EMPTY;
        // Vertical I (matrix column 2) in the rightmost column.
        let shape = PieceKind::I.shape().rotated();
        let mut piece = Piece::with_shape(PieceKind::I, shape, 7, 5);
        assert!(!board.collides(&piece, 0, 0, None));
        // Horizontal in place would need columns 7..=10.
        assert!(piece.try_rotate(&board));
        assert_eq!(piece.x(), 6);
        assert_eq!(*piece.shape(), shape.rotated());
    }

    #[test]
    fn test_rotate_fails_against_right_wall() {
        let board = Board::EMPTY;
        // Vertical I in matrix column 1 (three rotations) in the rightmost column.
        let shape = PieceKind::I.shape().rotated().rotated().rotated();
        let mut piece = Piece::with_shape(PieceKind::I, shape, 8, 5);
        assert!(!board.collides(&piece, 0, 0, None));
        // Horizontal needs columns 8..=11; a single left kick is not enough.
        assert!(!piece.try_rotate(&board));
        assert_eq!(piece.x(), 8);
        assert_eq!(*piece.shape(), shape);
    }

    #[test]
    fn test_rotate_kicks_right_off_left_wall() {
        let board = Board::EMPTY;
        // .T. / .TT / .T. with the empty matrix column outside the left wall.
        let shape = PieceKind::T.shape().rotated();
        let mut piece = Piece::with_shape(PieceKind::T, shape, -1, 5);
        assert!(!board.collides(&piece, 0, 0, None));
        // In place the flat side would occupy column -1; left kick is worse.
        assert!(piece.try_rotate(&board));
        assert_eq!(piece.x(), 0);
        assert_eq!(*piece.shape(), shape.rotated());
    }

    #[test]
    fn test_rotate_fails_when_boxed_in() {
        let board = Board::from_ascii(
            "
            ###...####
            ###...####
            ###...####
            ###...####
            ",
        );
        // Vertical I in the 3-wide well cannot become horizontal.
        let shape = PieceKind::I.shape().rotated();
        let mut piece = Piece::with_shape(PieceKind::I, shape, 2, 16);
        assert!(!board.collides(&piece, 0, 0, None));
        let before = piece;
        assert!(!piece.try_rotate(&board));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_ghost_row_on_empty_board() {
        let board = Board::EMPTY;
        let piece = Piece::at(PieceKind::O, 4, 0);
        assert_eq!(piece.drop_distance(&board), 18);
        assert_eq!(piece.ghost_row(&board), 18);
        let landed = piece.landed(&board);
        assert_eq!(landed.y(), 18);
        assert!(board.collides(&landed, 0, 1, None));
    }

    #[test]
    fn test_ghost_row_over_stack() {
        let board = Board::from_ascii(
            "
            ....##....
            ....##....
            ",
        );
        let piece = Piece::new(PieceKind::O);
        assert_eq!(piece.ghost_row(&board), 16);
        let piece = Piece::at(PieceKind::O, 0, -1);
        assert_eq!(piece.ghost_row(&board), 18);
    }
}
