use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::Runtime;

/// Trait for applications run by [`Runtime::run`].
pub trait App {
    /// Called once before the first event. Use this to configure tick and render rates.
    fn init(&mut self, runtime: &mut Runtime);

    fn should_exit(&self) -> bool;

    /// Handles a key press edge. Repeats and releases never get here.
    fn handle_key(&mut self, runtime: &mut Runtime, key: KeyEvent);

    /// Draws the screen (called on each render event).
    fn draw(&self, frame: &mut Frame);

    /// Advances application state (called on each tick event).
    fn update(&mut self, runtime: &mut Runtime);
}
