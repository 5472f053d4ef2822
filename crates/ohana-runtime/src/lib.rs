//! Terminal host for the game screens.
//!
//! [`Runtime`] owns the terminal and an event loop that interleaves three kinds of
//! events on one thread: game ticks, renders and key presses. Key repeats are
//! filtered out before they reach the application, so a held key fires once.

pub use self::{
    app::App,
    event_loop::RenderMode,
    input::KeyEdgeFilter,
    runtime::Runtime,
    screen::{Screen, ScreenStack, ScreenTransition},
};

mod app;
mod event;
mod event_loop;
mod input;
mod runtime;
mod screen;
