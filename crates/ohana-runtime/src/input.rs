use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Passes only the first press of a held key.
///
/// Terminals report a held key in one of two ways: as `Repeat` events, when the
/// keyboard enhancement protocol is active, or as a stream of `Press` events followed
/// by a single `Release`. Repeats are always dropped. Repeated presses can only be
/// told apart once the terminal is known to report releases, either because the
/// runtime enabled release reporting or because a release has been seen.
///
/// # Example
///
/// ```
/// use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
/// use ohana_runtime::KeyEdgeFilter;
///
/// let key = |kind| KeyEvent {
///     code: KeyCode::Left,
///     modifiers: KeyModifiers::NONE,
///     kind,
///     state: KeyEventState::NONE,
/// };
///
/// let mut filter = KeyEdgeFilter::with_release_events();
/// assert!(filter.accept(&key(KeyEventKind::Press)));
/// assert!(!filter.accept(&key(KeyEventKind::Repeat)));
/// assert!(!filter.accept(&key(KeyEventKind::Press)));
/// assert!(!filter.accept(&key(KeyEventKind::Release)));
/// assert!(filter.accept(&key(KeyEventKind::Press)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyEdgeFilter {
    reports_release: bool,
    held: HashSet<KeyCode>,
}

impl KeyEdgeFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter for a terminal known to report key releases.
    #[must_use]
    pub fn with_release_events() -> Self {
        Self {
            reports_release: true,
            held: HashSet::new(),
        }
    }

    #[must_use]
    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    /// Returns whether `key` is a press edge that should be dispatched.
    pub fn accept(&mut self, key: &KeyEvent) -> bool {
        match key.kind {
            KeyEventKind::Press => !self.reports_release || self.held.insert(key.code),
            KeyEventKind::Repeat => false,
            KeyEventKind::Release => {
                self.reports_release = true;
                self.held.remove(&key.code);
                false
            }
        }
    }

    /// Forgets every held key, e.g. after the terminal lost focus.
    pub fn reset(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};

    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_presses_pass_without_release_reporting() {
        let mut filter = KeyEdgeFilter::new();
        assert!(filter.accept(&key(KeyCode::Left, KeyEventKind::Press)));
        assert!(filter.accept(&key(KeyCode::Left, KeyEventKind::Press)));
        assert!(!filter.accept(&key(KeyCode::Left, KeyEventKind::Repeat)));
    }

    #[test]
    fn test_first_release_enables_tracking() {
        let mut filter = KeyEdgeFilter::new();
        assert!(filter.accept(&key(KeyCode::Up, KeyEventKind::Press)));
        assert!(!filter.accept(&key(KeyCode::Up, KeyEventKind::Release)));
        assert!(filter.reports_release());

        assert!(filter.accept(&key(KeyCode::Up, KeyEventKind::Press)));
        assert!(!filter.accept(&key(KeyCode::Up, KeyEventKind::Press)));
    }

    #[test]
    fn test_keys_are_tracked_independently() {
        let mut filter = KeyEdgeFilter::with_release_events();
        assert!(filter.accept(&key(KeyCode::Left, KeyEventKind::Press)));
        assert!(filter.accept(&key(KeyCode::Char(' '), KeyEventKind::Press)));
        assert!(!filter.accept(&key(KeyCode::Left, KeyEventKind::Press)));
        assert!(!filter.accept(&key(KeyCode::Char(' '), KeyEventKind::Release)));
        assert!(filter.accept(&key(KeyCode::Char(' '), KeyEventKind::Press)));
    }

    #[test]
    fn test_reset_forgets_held_keys() {
        let mut filter = KeyEdgeFilter::with_release_events();
        assert!(filter.accept(&key(KeyCode::Down, KeyEventKind::Press)));
        filter.reset();
        assert!(filter.accept(&key(KeyCode::Down, KeyEventKind::Press)));
    }
}
