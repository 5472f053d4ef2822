use std::fmt;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::{App, Runtime};

/// Individual screen in the application.
///
/// # Lifecycle
///
/// ```text
/// Create
///   ↓
/// on_active() ←──────────┐
///   ↓                     │
/// (Foreground)            │ Child screen pops
///   ↓                     │
/// on_inactive()           │
///   ↓                     │
/// (Background) ──────────┘
///   ↓
/// on_close()  ← Only on Pop/Exit
///   ↓
/// Drop
/// ```
///
/// Screens should configure [`Runtime`] settings (tick interval, render mode) in
/// [`on_active`], so returning from a child screen restores them.
///
/// ```rust
/// use crossterm::event::KeyEvent;
/// use ohana_runtime::{RenderMode, Runtime, Screen, ScreenTransition};
/// use ratatui::Frame;
///
/// #[derive(Debug)]
/// struct Splash;
///
/// impl Screen for Splash {
///     fn on_active(&mut self, runtime: &mut Runtime) {
///         runtime.set_tick_rate(None);
///         runtime.set_render_mode(RenderMode::OnDirty);
///     }
///
///     fn handle_key(&mut self, _runtime: &mut Runtime, _key: KeyEvent) -> ScreenTransition {
///         ScreenTransition::Pop
///     }
///
///     fn draw(&self, _frame: &mut Frame) {}
/// }
/// ```
///
/// [`on_active`]: Self::on_active
pub trait Screen: fmt::Debug {
    /// Called when this screen becomes the foreground screen: at startup, when pushed,
    /// and when a child screen pops.
    fn on_active(&mut self, runtime: &mut Runtime);

    /// Called when this screen leaves the foreground, either because a screen was
    /// pushed on top or because it is about to be closed.
    fn on_inactive(&mut self, _runtime: &mut Runtime) {}

    /// Called once when this screen is removed from the stack (Pop/Exit),
    /// after [`on_inactive`](Self::on_inactive).
    fn on_close(&mut self, _runtime: &mut Runtime) {}

    /// Handles a key press edge and returns the transition to apply.
    fn handle_key(&mut self, runtime: &mut Runtime, key: KeyEvent) -> ScreenTransition;

    /// Updates screen state (called on each tick).
    fn update(&mut self, _runtime: &mut Runtime) {}

    fn draw(&self, frame: &mut Frame);
}

/// Screen transition result from key handling.
#[derive(Debug, derive_more::IsVariant)]
pub enum ScreenTransition {
    Stay,
    /// Push a new screen on top of the current one, which goes to the background.
    Push(Box<dyn Screen>),
    /// Close the current screen and return to the previous one.
    Pop,
    /// Close every screen and exit.
    Exit,
}

/// Screen stack manager that implements App.
#[derive(Debug)]
pub struct ScreenStack<'a> {
    screens: Vec<Box<dyn Screen + 'a>>,
    should_exit: bool,
}

impl<'a> ScreenStack<'a> {
    #[must_use]
    pub fn new(initial: Box<dyn Screen + 'a>) -> Self {
        Self {
            screens: vec![initial],
            should_exit: false,
        }
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.screens.len()
    }

    fn close_top(&mut self, runtime: &mut Runtime) {
        if let Some(mut screen) = self.screens.pop() {
            screen.on_inactive(runtime);
            screen.on_close(runtime);
        }
    }

    fn apply_transition(&mut self, runtime: &mut Runtime, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::Push(mut screen) => {
                if let Some(current) = self.screens.last_mut() {
                    current.on_inactive(runtime);
                }
                screen.on_active(runtime);
                self.screens.push(screen);
            }
            ScreenTransition::Pop => {
                self.close_top(runtime);
                if let Some(previous) = self.screens.last_mut() {
                    previous.on_active(runtime);
                }
            }
            ScreenTransition::Exit => {
                while !self.screens.is_empty() {
                    self.close_top(runtime);
                }
                self.should_exit = true;
            }
        }
    }
}

impl App for ScreenStack<'_> {
    fn init(&mut self, runtime: &mut Runtime) {
        if let Some(screen) = self.screens.last_mut() {
            screen.on_active(runtime);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit || self.screens.is_empty()
    }

    fn handle_key(&mut self, runtime: &mut Runtime, key: KeyEvent) {
        if let Some(current) = self.screens.last_mut() {
            let transition = current.handle_key(runtime, key);
            self.apply_transition(runtime, transition);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        if let Some(current) = self.screens.last() {
            current.draw(frame);
        }
    }

    fn update(&mut self, runtime: &mut Runtime) {
        if let Some(current) = self.screens.last_mut() {
            current.update(runtime);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, mem, rc::Rc};

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    /// Shared record of lifecycle calls.
    #[derive(Debug, Clone, Default)]
    struct CallLog(Rc<RefCell<Vec<String>>>);

    impl CallLog {
        fn push(&self, name: &str, call: &str) {
            self.0.borrow_mut().push(format!("{name}: {call}"));
        }

        fn take(&self) -> Vec<String> {
            mem::take(&mut *self.0.borrow_mut())
        }
    }

    #[derive(Debug)]
    struct LoggingScreen {
        name: &'static str,
        log: CallLog,
        on_key: Option<ScreenTransition>,
    }

    impl LoggingScreen {
        fn boxed(name: &'static str, log: &CallLog) -> Box<Self> {
            Box::new(Self {
                name,
                log: log.clone(),
                on_key: None,
            })
        }

        fn boxed_with(name: &'static str, log: &CallLog, on_key: ScreenTransition) -> Box<Self> {
            Box::new(Self {
                name,
                log: log.clone(),
                on_key: Some(on_key),
            })
        }
    }

    impl Screen for LoggingScreen {
        fn on_active(&mut self, _runtime: &mut Runtime) {
            self.log.push(self.name, "on_active");
        }

        fn on_inactive(&mut self, _runtime: &mut Runtime) {
            self.log.push(self.name, "on_inactive");
        }

        fn on_close(&mut self, _runtime: &mut Runtime) {
            self.log.push(self.name, "on_close");
        }

        fn handle_key(&mut self, _runtime: &mut Runtime, _key: KeyEvent) -> ScreenTransition {
            self.log.push(self.name, "handle_key");
            self.on_key.take().unwrap_or(ScreenTransition::Stay)
        }

        fn update(&mut self, _runtime: &mut Runtime) {
            self.log.push(self.name, "update");
        }

        fn draw(&self, _frame: &mut Frame) {}
    }

    fn key() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE)
    }

    #[test]
    fn test_init_activates_initial_screen() {
        let log = CallLog::default();
        let mut stack = ScreenStack::new(LoggingScreen::boxed("play", &log));
        stack.init(&mut Runtime::new());
        assert_eq!(log.take(), vec!["play: on_active"]);
    }

    #[test]
    fn test_push_then_pop_by_key() {
        let log = CallLog::default();
        let mut runtime = Runtime::new();
        let report = LoggingScreen::boxed_with("report", &log, ScreenTransition::Pop);
        let mut stack = ScreenStack::new(LoggingScreen::boxed_with(
            "play",
            &log,
            ScreenTransition::Push(report),
        ));
        stack.init(&mut runtime);
        log.take();

        stack.handle_key(&mut runtime, key());
        assert_eq!(stack.depth(), 2);
        assert_eq!(
            log.take(),
            vec!["play: handle_key", "play: on_inactive", "report: on_active"]
        );

        stack.update(&mut runtime);
        assert_eq!(log.take(), vec!["report: update"]);

        stack.handle_key(&mut runtime, key());
        assert_eq!(stack.depth(), 1);
        assert_eq!(
            log.take(),
            vec![
                "report: handle_key",
                "report: on_inactive",
                "report: on_close",
                "play: on_active",
            ]
        );
        assert!(!stack.should_exit());
    }

    #[test]
    fn test_exit_closes_every_screen_top_down() {
        let log = CallLog::default();
        let mut runtime = Runtime::new();
        let mut stack = ScreenStack::new(LoggingScreen::boxed("a", &log));
        stack.init(&mut runtime);
        stack.apply_transition(
            &mut runtime,
            ScreenTransition::Push(LoggingScreen::boxed("b", &log)),
        );
        log.take();

        stack.apply_transition(&mut runtime, ScreenTransition::Exit);
        assert_eq!(
            log.take(),
            vec![
                "b: on_inactive",
                "b: on_close",
                "a: on_inactive",
                "a: on_close",
            ]
        );
        assert!(stack.should_exit());
    }

    #[test]
    fn test_popping_last_screen_exits() {
        let log = CallLog::default();
        let mut runtime = Runtime::new();
        let mut stack =
            ScreenStack::new(LoggingScreen::boxed_with("a", &log, ScreenTransition::Pop));
        stack.init(&mut runtime);
        assert!(!stack.should_exit());
        stack.handle_key(&mut runtime, key());
        assert!(stack.should_exit());
    }
}
