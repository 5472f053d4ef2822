use crate::{Board, Piece, PieceKind, SessionState, Shape};

/// Visible cells of a piece, in board coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceView {
    pub kind: PieceKind,
    /// Anchor row of the piece's matrix. May be negative.
    pub row: i32,
    /// `(x, y)` cells inside the board. Cells above the top are left out.
    pub cells: Vec<(usize, usize)>,
}

impl PieceView {
    pub(crate) fn new(piece: &Piece) -> Self {
        let cells = piece
            .cells()
            .filter_map(|(x, y)| Some((usize::try_from(x).ok()?, usize::try_from(y).ok()?)))
            .filter(|&(x, y)| x < Board::WIDTH && y < Board::HEIGHT)
            .collect();
        Self {
            kind: piece.kind(),
            row: piece.y(),
            cells,
        }
    }

    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells.contains(&(x, y))
    }
}

/// Read-only view of a session, sufficient to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub state: SessionState,
    pub board: Board,
    /// Falling piece. `None` before the first game starts.
    pub active: Option<PieceView>,
    /// Landing preview of the falling piece. Only present while a game is live.
    pub ghost: Option<PieceView>,
    pub next_kind: PieceKind,
    pub next_shape: Shape,
    pub score: u64,
    pub level: u32,
    pub lines: u32,
    pub best_score: u64,
    pub last_quote: Option<String>,
}

impl Snapshot {
    /// Anchor row of the landing preview, if any.
    #[must_use]
    pub fn ghost_row(&self) -> Option<i32> {
        self.ghost.as_ref().map(|ghost| ghost.row)
    }
}
