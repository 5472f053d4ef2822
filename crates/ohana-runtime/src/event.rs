use crossterm::event::KeyEvent;

/// Events dispatched by the event loop.
#[derive(Debug, Clone, derive_more::IsVariant)]
pub(super) enum HostEvent {
    /// Application update timing (based on the tick interval).
    Tick,
    /// Screen render timing (based on the render mode).
    Render,
    /// A key press edge that passed the repeat filter.
    Key(KeyEvent),
}
