//! Game engine logic and state management.
//!
//! This module drives the core data structures through a game:
//!
//! - [`GameSession`] - Play state machine owning the board, pieces and progression
//! - [`PieceBag`] - 7-bag piece generation
//! - [`PieceSeed`] - Seed for deterministic piece generation
//! - [`Progression`] - Score, level, lines and fall speed
//! - [`BestScore`] - Best score behind a [`ScoreStore`]
//! - [`Clock`] - Injected time source for gravity
//! - [`GameEvent`] - Notifications for the host
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] and start it
//! 2. The host forwards player [`Command`]s and calls [`GameSession::tick`] every frame
//! 3. A piece that can no longer descend is merged, full rows are cleared and the
//!    next piece spawns
//! 4. Repeat until a spawned piece collides
//!
//! After each tick or command the host drains events and draws a [`Snapshot`].
//!
//! # Example
//!
//! ```
//! use ohana_engine::{Command, GameEvent, GameSession, ManualClock};
//!
//! let mut session = GameSession::with_clock(ManualClock::new());
//! session.handle(Command::Start);
//! session.handle(Command::HardDrop);
//!
//! let events = session.drain_events();
//! assert_eq!(events[0], GameEvent::Started);
//! assert!(events[1].is_piece_locked());
//! assert!(session.snapshot().score > 0);
//! ```

pub use self::{
    bag::*, best_score::*, clock::*, event::*, progression::*, quote::*, session::*,
    snapshot::*,
};

mod bag;
mod best_score;
mod clock;
mod event;
mod progression;
mod quote;
mod session;
mod snapshot;
