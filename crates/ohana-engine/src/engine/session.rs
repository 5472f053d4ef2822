use std::{mem, time::Duration};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{
    BestScore, Board, Clock, GameConfig, GameEvent, Piece, PieceBag, PieceSeed, Progression,
    PieceView, QuoteBank, Snapshot, SystemClock,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// Waiting for the first start command.
    Idle,
    Running,
    Paused,
    /// A spawned piece collided. Board and stats are kept for inspection.
    GameOver,
}

/// Discrete player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    TogglePause,
    Start,
    Restart,
}

/// A game of falling blocks: board, pieces, progression and the play state machine.
///
/// ```text
/// Idle --start--> Running <--toggle_pause--> Paused
///                    |
///                    +--spawn collides--> GameOver
/// (any state) --restart--> Running (fresh game)
/// ```
///
/// Gravity is driven by [`GameSession::tick`], which the host calls as often as it
/// likes; a step happens once the current fall interval has elapsed on the injected
/// [`Clock`]. Missed intervals are not caught up.
///
/// Rejected moves are not errors: the command methods return `false` and leave the
/// session untouched.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use ohana_engine::{GameSession, ManualClock, SessionState};
///
/// let clock = ManualClock::new();
/// let mut session = GameSession::with_clock(clock.clone());
/// session.start();
///
/// let row = session.falling_piece().y();
/// clock.advance(Duration::from_millis(800));
/// session.tick();
/// assert_eq!(session.falling_piece().y(), row + 1);
///
/// session.toggle_pause();
/// assert_eq!(session.session_state(), SessionState::Paused);
/// ```
#[derive(Debug)]
pub struct GameSession<C = SystemClock> {
    clock: C,
    config: GameConfig,
    rng: Pcg32,
    bag: PieceBag,
    board: Board,
    falling_piece: Piece,
    next_piece: Piece,
    progression: Progression,
    best_score: BestScore,
    new_best_announced: bool,
    quotes: QuoteBank,
    last_quote: Option<String>,
    session_state: SessionState,
    last_drop: Duration,
    events: Vec<GameEvent>,
}

impl Default for GameSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession<SystemClock> {
    /// Creates an idle session on the wall clock with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl<C> GameSession<C>
where
    C: Clock,
{
    /// Creates an idle session driven by `clock`, with a random seed.
    pub fn with_clock(clock: C) -> Self {
        let config = GameConfig::default();
        let mut rng = Pcg32::from_seed(rand::rng().random::<PieceSeed>().to_bytes());
        let mut bag = PieceBag::with_seed(rng.random());
        let falling_piece = Piece::new(bag.next_kind());
        let next_piece = Piece::new(bag.next_kind());
        let last_drop = clock.now();
        Self {
            clock,
            config,
            rng,
            bag,
            board: Board::EMPTY,
            falling_piece,
            next_piece,
            progression: Progression::new(config),
            best_score: BestScore::in_memory(),
            new_best_announced: false,
            quotes: QuoteBank::default(),
            last_quote: None,
            session_state: SessionState::Idle,
            last_drop,
            events: vec![],
        }
    }

    /// Reseeds the session so the piece sequence of every game is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: PieceSeed) -> Self {
        self.rng = Pcg32::from_seed(seed.to_bytes());
        self.reset_game();
        self
    }

    /// Replaces the tuning constants and resets the progression to match them.
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use ohana_engine::{GameConfig, GameSession, ManualClock};
    ///
    /// let config = GameConfig {
    ///     initial_fall_interval: Duration::from_millis(300),
    ///     ..GameConfig::default()
    /// };
    /// let session = GameSession::with_clock(ManualClock::new()).with_config(config);
    /// assert_eq!(session.progression().fall_interval(), Duration::from_millis(300));
    /// ```
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self.progression = Progression::new(config);
        self
    }

    #[must_use]
    pub fn with_best_score(mut self, best_score: BestScore) -> Self {
        self.best_score = best_score;
        self
    }

    #[must_use]
    pub fn with_quotes(mut self, quotes: QuoteBank) -> Self {
        self.quotes = quotes;
        self
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn falling_piece(&self) -> &Piece {
        &self.falling_piece
    }

    #[must_use]
    pub fn next_piece(&self) -> &Piece {
        &self.next_piece
    }

    #[must_use]
    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    #[must_use]
    pub fn best_score(&self) -> u64 {
        self.best_score.value()
    }

    /// Quote picked for the most recent line clear.
    #[must_use]
    pub fn last_quote(&self) -> Option<&str> {
        self.last_quote.as_deref()
    }

    /// Takes the notifications emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Dispatches a command and returns whether it changed anything.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_move_left(),
            Command::MoveRight => self.try_move_right(),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::Rotate => self.try_rotate(),
            Command::TogglePause => self.toggle_pause(),
            Command::Start => self.start(),
            Command::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Starts the first game. Only valid while idle.
    pub fn start(&mut self) -> bool {
        if !self.session_state.is_idle() {
            return false;
        }
        log::info!("game started");
        self.session_state = SessionState::Running;
        self.last_drop = self.clock.now();
        self.events.push(GameEvent::Started);
        true
    }

    /// Pauses a running game or resumes a paused one.
    ///
    /// Resuming re-anchors gravity, so the time spent paused is not caught up.
    pub fn toggle_pause(&mut self) -> bool {
        match self.session_state {
            SessionState::Running => {
                log::info!("game paused");
                self.session_state = SessionState::Paused;
                self.events.push(GameEvent::Paused);
            }
            SessionState::Paused => {
                log::info!("game resumed");
                self.session_state = SessionState::Running;
                self.last_drop = self.clock.now();
                self.events.push(GameEvent::Resumed);
            }
            SessionState::Idle | SessionState::GameOver => return false,
        }
        true
    }

    /// Throws the current game away and starts a fresh one, from any state.
    pub fn restart(&mut self) {
        log::info!("game restarted");
        self.reset_game();
        self.session_state = SessionState::Running;
        self.last_drop = self.clock.now();
        self.events.push(GameEvent::Restarted);
    }

    pub fn try_move_left(&mut self) -> bool {
        self.is_running() && self.falling_piece.try_shift(&self.board, -1, 0)
    }

    pub fn try_move_right(&mut self) -> bool {
        self.is_running() && self.falling_piece.try_shift(&self.board, 1, 0)
    }

    /// Rotates clockwise with wall kicks.
    pub fn try_rotate(&mut self) -> bool {
        self.is_running() && self.falling_piece.try_rotate(&self.board)
    }

    /// Moves the piece down one row, locking it if it is blocked.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.auto_drop_and_complete();
        true
    }

    /// Drops the piece to its landing row, awards the drop bonus and locks it.
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let rows = self.falling_piece.drop_distance(&self.board);
        self.falling_piece = self.falling_piece.landed(&self.board);
        let points = self.progression.award_hard_drop(rows.unsigned_abs());
        if points > 0 {
            self.offer_best_score();
        }
        self.complete_piece_drop();
        true
    }

    /// Applies gravity if the fall interval has elapsed since the last step.
    ///
    /// Returns whether a gravity step happened. No-op unless running.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let now = self.clock.now();
        if now.saturating_sub(self.last_drop) < self.progression.fall_interval() {
            return false;
        }
        self.last_drop = now;
        self.auto_drop_and_complete();
        true
    }

    /// Returns a read-only view of the current frame.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let live = matches!(
            self.session_state,
            SessionState::Running | SessionState::Paused
        );
        let active = (!self.session_state.is_idle()).then(|| PieceView::new(&self.falling_piece));
        let ghost = live.then(|| PieceView::new(&self.falling_piece.landed(&self.board)));
        Snapshot {
            state: self.session_state,
            board: self.board.clone(),
            active,
            ghost,
            next_kind: self.next_piece.kind(),
            next_shape: *self.next_piece.shape(),
            score: self.progression.score(),
            level: self.progression.level(),
            lines: self.progression.lines(),
            best_score: self.best_score.value(),
            last_quote: self.last_quote.clone(),
        }
    }

    fn is_running(&self) -> bool {
        self.session_state.is_running()
    }

    fn reset_game(&mut self) {
        self.bag = PieceBag::with_seed(self.rng.random());
        self.board = Board::EMPTY;
        self.falling_piece = Piece::new(self.bag.next_kind());
        self.next_piece = Piece::new(self.bag.next_kind());
        self.progression = Progression::new(self.config);
        self.new_best_announced = false;
        self.last_quote = None;
    }

    fn auto_drop_and_complete(&mut self) {
        if self.falling_piece.try_shift(&self.board, 0, 1) {
            return;
        }
        self.complete_piece_drop();
    }

    fn complete_piece_drop(&mut self) {
        let kind = self.falling_piece.kind();
        self.board.merge(&self.falling_piece);
        log::debug!(
            "{kind:?} locked at ({}, {})",
            self.falling_piece.x(),
            self.falling_piece.y()
        );
        self.events.push(GameEvent::PieceLocked { kind });

        #[expect(clippy::cast_possible_truncation)]
        let cleared = self.board.clear_lines() as u32;
        if cleared > 0 {
            let outcome = self.progression.record_clear(cleared);
            log::debug!("{cleared} lines cleared for {} points", outcome.points);
            let quote = self.quotes.pick(&mut self.rng).map(str::to_owned);
            if quote.is_some() {
                self.last_quote.clone_from(&quote);
            }
            self.events.push(GameEvent::LinesCleared {
                count: cleared,
                quote,
            });
            if outcome.leveled_up() {
                log::info!("level up: {}", outcome.level);
                self.events.push(GameEvent::LevelUp {
                    level: outcome.level,
                });
            }
            self.offer_best_score();
        }

        self.spawn_next_piece();
    }

    fn spawn_next_piece(&mut self) {
        self.falling_piece = self.next_piece;
        self.next_piece = Piece::new(self.bag.next_kind());
        if self.board.collides(&self.falling_piece, 0, 0, None) {
            let score = self.progression.score();
            log::info!("game over with {score} points");
            self.session_state = SessionState::GameOver;
            self.events.push(GameEvent::GameOver { score });
        }
    }

    /// Compare-and-set against the score just computed.
    fn offer_best_score(&mut self) {
        let score = self.progression.score();
        if self.best_score.offer(score) && !self.new_best_announced {
            self.new_best_announced = true;
            self.events.push(GameEvent::NewBestScore { score });
        }
    }

    #[cfg(test)]
    fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    #[cfg(test)]
    fn set_falling_piece(&mut self, piece: Piece) {
        assert!(!self.board.collides(&piece, 0, 0, None));
        self.falling_piece = piece;
    }
}
