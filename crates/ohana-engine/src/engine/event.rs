use crate::PieceKind;

/// Notification emitted by a [`GameSession`](super::GameSession).
///
/// Events are fire-and-forget: the host drains them with
/// [`GameSession::drain_events`](super::GameSession::drain_events) and shows, logs or
/// ignores them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameEvent {
    /// The game left the idle state.
    Started,
    Paused,
    Resumed,
    /// A fresh game replaced the previous one.
    Restarted,
    /// A piece was merged into the board.
    PieceLocked { kind: PieceKind },
    /// Rows were cleared by the last lock. `quote` is the flavor text picked for it.
    LinesCleared { count: u32, quote: Option<String> },
    LevelUp { level: u32 },
    /// The score passed the stored best score.
    NewBestScore { score: u64 },
    /// A freshly spawned piece collided; the game is over.
    GameOver { score: u64 },
}
