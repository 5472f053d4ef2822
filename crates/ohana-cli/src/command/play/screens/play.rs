use crossterm::event::{KeyCode, KeyEvent};
use ohana_engine::{Clock as _, Command, GameSession, SessionState, SystemClock};
use ohana_runtime::{RenderMode, Runtime, Screen, ScreenTransition};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Span},
};

use super::SelfTestScreen;
use crate::{
    model::theme::Theme,
    ui::{
        star_field::StarField,
        toast::ToastQueue,
        widgets::{KeyHint, KeyHintDisplay, SessionDisplay, ToastDisplay, style},
    },
};

const STAR_COUNT: usize = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Game(Command),
    SelfTest,
    Quit,
}

impl Action {
    fn from_key_event(event: &KeyEvent) -> Option<Self> {
        let action = match event.code {
            KeyCode::Left => Self::Game(Command::MoveLeft),
            KeyCode::Right => Self::Game(Command::MoveRight),
            KeyCode::Down => Self::Game(Command::SoftDrop),
            KeyCode::Up => Self::Game(Command::Rotate),
            KeyCode::Char(' ') => Self::Game(Command::HardDrop),
            KeyCode::Char('p' | 'P') => Self::Game(Command::TogglePause),
            KeyCode::Char('r' | 'R') => Self::Game(Command::Restart),
            KeyCode::Enter | KeyCode::Char('s' | 'S') => Self::Game(Command::Start),
            KeyCode::Char('t' | 'T') => Self::SelfTest,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
            _ => return None,
        };
        Some(action)
    }

    fn hints(state: SessionState) -> &'static [KeyHint<'static>] {
        match state {
            SessionState::Idle => &[
                (&["Enter", "S"], "Start"),
                (&["T"], "Self-test"),
                (&["Q"], "Quit"),
            ],
            SessionState::Running => &[
                (&["←", "→"], "Move"),
                (&["↑"], "Rotate"),
                (&["↓"], "Soft drop"),
                (&["Space"], "Hard drop"),
                (&["P"], "Pause"),
                (&["R"], "Restart"),
                (&["T"], "Self-test"),
                (&["Q"], "Quit"),
            ],
            SessionState::Paused => &[
                (&["P"], "Resume"),
                (&["R"], "Restart"),
                (&["T"], "Self-test"),
                (&["Q"], "Quit"),
            ],
            SessionState::GameOver => &[
                (&["R"], "Restart"),
                (&["T"], "Self-test"),
                (&["Q"], "Quit"),
            ],
        }
    }
}

/// The game itself: board, panels, notifications and the sky behind them.
#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession<SystemClock>,
    clock: SystemClock,
    theme: Theme,
    toasts: ToastQueue,
    stars: StarField,
    show_ghost: bool,
    fps: u32,
}

impl PlayScreen {
    pub fn new(
        session: GameSession<SystemClock>,
        clock: SystemClock,
        theme: Theme,
        show_ghost: bool,
        fps: u32,
    ) -> Self {
        let toasts = ToastQueue::new(theme.toast_duration());
        Self {
            session,
            clock,
            theme,
            toasts,
            stars: StarField::new(STAR_COUNT),
            show_ghost,
            fps,
        }
    }

    /// Turns pending game notifications into toasts.
    fn pump_events(&mut self) {
        let now = self.clock.now();
        for event in self.session.drain_events() {
            log::debug!("game event: {event:?}");
            self.toasts.notify(now, &event);
        }
    }
}

impl Screen for PlayScreen {
    fn on_active(&mut self, runtime: &mut Runtime) {
        let rate = f64::from(self.fps);
        runtime.set_tick_rate(Some(rate));
        runtime.set_render_mode(RenderMode::throttled_from_rate(rate));
    }

    fn on_inactive(&mut self, _runtime: &mut Runtime) {
        if self.session.session_state().is_running() {
            self.session.toggle_pause();
            self.pump_events();
        }
    }

    fn handle_key(&mut self, _runtime: &mut Runtime, key: KeyEvent) -> ScreenTransition {
        let Some(action) = Action::from_key_event(&key) else {
            return ScreenTransition::Stay;
        };
        match action {
            Action::Game(command) => {
                self.session.handle(command);
                self.pump_events();
                ScreenTransition::Stay
            }
            Action::SelfTest => {
                let report = ohana_engine::run_self_test();
                log::info!(
                    "self-test: {} of {} checks failed",
                    report.failed_count(),
                    report.checks().len()
                );
                ScreenTransition::Push(Box::new(SelfTestScreen::new(report)))
            }
            Action::Quit => ScreenTransition::Exit,
        }
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        self.session.tick();
        self.pump_events();
        self.toasts.expire(self.clock.now());
        self.stars.step();
    }

    fn draw(&self, frame: &mut Frame) {
        let snapshot = self.session.snapshot();

        frame.render_widget(&self.stars, frame.area());

        let [title_area, main_area, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(SessionDisplay::height()),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = Line::from(vec![
            Span::styled(self.theme.title.as_str(), style::TITLE),
            Span::styled("  ", style::TAGLINE),
            Span::styled(self.theme.tagline.as_str(), style::TAGLINE),
        ])
        .centered();
        let hints = KeyHintDisplay::new(Action::hints(snapshot.state));

        frame.render_widget(title, title_area);
        frame.render_widget(SessionDisplay::new(&snapshot, self.show_ghost), main_area);
        frame.render_widget(hints, hint_area);
        if let Some(toast) = self.toasts.current() {
            frame.render_widget(ToastDisplay::new(toast), main_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> PlayScreen {
        let clock = SystemClock::new();
        let session = GameSession::with_clock(clock).with_quotes(Theme::default().quote_bank());
        PlayScreen::new(session, clock, Theme::default(), true, 60)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            Action::from_key_event(&key(KeyCode::Up)),
            Some(Action::Game(Command::Rotate))
        );
        assert_eq!(
            Action::from_key_event(&key(KeyCode::Char(' '))),
            Some(Action::Game(Command::HardDrop))
        );
        assert_eq!(
            Action::from_key_event(&key(KeyCode::Enter)),
            Some(Action::Game(Command::Start))
        );
        assert_eq!(
            Action::from_key_event(&key(KeyCode::Esc)),
            Some(Action::Quit)
        );
        assert_eq!(Action::from_key_event(&key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_start_shows_toast() {
        let mut screen = screen();
        let mut runtime = Runtime::new();
        let transition = screen.handle_key(&mut runtime, key(KeyCode::Enter));
        assert!(transition.is_stay());
        assert!(screen.session.session_state().is_running());
        assert_eq!(screen.toasts.current().unwrap().text, "Game Start!");
    }

    #[test]
    fn test_self_test_pushes_and_pauses() {
        let mut screen = screen();
        let mut runtime = Runtime::new();
        screen.handle_key(&mut runtime, key(KeyCode::Enter));

        let transition = screen.handle_key(&mut runtime, key(KeyCode::Char('t')));
        assert!(transition.is_push());
        screen.on_inactive(&mut runtime);
        assert!(screen.session.session_state().is_paused());
    }

    #[test]
    fn test_every_hinted_state_lists_self_test() {
        for state in [
            SessionState::Idle,
            SessionState::Running,
            SessionState::Paused,
            SessionState::GameOver,
        ] {
            let hints = Action::hints(state);
            assert!(
                hints.iter().any(|(keys, _)| keys.contains(&"T")),
                "{state:?} hints omit the self-test key"
            );
        }
    }

    #[test]
    fn test_quit_exits() {
        let mut screen = screen();
        let transition = screen.handle_key(&mut Runtime::new(), key(KeyCode::Char('q')));
        assert!(transition.is_exit());
    }
}
