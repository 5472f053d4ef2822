use std::time::Duration;

use ohana_engine::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Celebrate,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    expires_at: Duration,
}

/// Transient one-line notification. A new toast replaces the one on screen.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    current: Option<Toast>,
    duration: Duration,
}

const GAME_OVER_DURATION: Duration = Duration::from_millis(2000);

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn show(&mut self, now: Duration, text: impl Into<String>, kind: ToastKind) {
        self.show_for(now, self.duration, text, kind);
    }

    pub fn show_for(
        &mut self,
        now: Duration,
        duration: Duration,
        text: impl Into<String>,
        kind: ToastKind,
    ) {
        self.current = Some(Toast {
            text: text.into(),
            kind,
            expires_at: now + duration,
        });
    }

    /// Drops the current toast once its time is up.
    pub fn expire(&mut self, now: Duration) {
        if self.current.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.current = None;
        }
    }

    /// Shows the toast for a game notification, if it has one.
    pub fn notify(&mut self, now: Duration, event: &GameEvent) {
        match event {
            GameEvent::Started => self.show(now, "Game Start!", ToastKind::Info),
            GameEvent::Paused => self.show(now, "Paused", ToastKind::Info),
            GameEvent::Resumed => self.show(now, "Resumed", ToastKind::Info),
            GameEvent::Restarted => self.show(now, "New Game - Good luck!", ToastKind::Info),
            GameEvent::LinesCleared { quote: Some(_), .. } => {
                self.show(now, "★ Ohana Quote Unlocked!", ToastKind::Celebrate);
            }
            GameEvent::LevelUp { level } => {
                self.show(now, format!("Level Up! {level}"), ToastKind::Celebrate);
            }
            GameEvent::NewBestScore { score } => {
                self.show(now, format!("New Best! {score}"), ToastKind::Celebrate);
            }
            GameEvent::GameOver { .. } => self.show_for(
                now,
                GAME_OVER_DURATION,
                "Game Over - Press R to restart",
                ToastKind::Alert,
            ),
            GameEvent::PieceLocked { .. } | GameEvent::LinesCleared { quote: None, .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_toast_expires() {
        let mut toasts = ToastQueue::new(1200 * MS);
        toasts.show(100 * MS, "hello", ToastKind::Info);
        toasts.expire(1299 * MS);
        assert_eq!(toasts.current().unwrap().text, "hello");
        toasts.expire(1300 * MS);
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_new_toast_replaces_current() {
        let mut toasts = ToastQueue::new(1200 * MS);
        toasts.show(Duration::ZERO, "first", ToastKind::Info);
        toasts.show(1000 * MS, "second", ToastKind::Info);
        toasts.expire(1500 * MS);
        assert_eq!(toasts.current().unwrap().text, "second");
    }

    #[test]
    fn test_game_over_stays_longer() {
        let mut toasts = ToastQueue::new(1200 * MS);
        toasts.notify(Duration::ZERO, &GameEvent::GameOver { score: 10 });
        toasts.expire(1500 * MS);
        let toast = toasts.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Alert);
        toasts.expire(2000 * MS);
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_quiet_events() {
        let mut toasts = ToastQueue::new(1200 * MS);
        toasts.notify(
            Duration::ZERO,
            &GameEvent::PieceLocked {
                kind: ohana_engine::PieceKind::T,
            },
        );
        toasts.notify(
            Duration::ZERO,
            &GameEvent::LinesCleared {
                count: 1,
                quote: None,
            },
        );
        assert!(toasts.current().is_none());

        toasts.notify(Duration::ZERO, &GameEvent::LevelUp { level: 3 });
        assert_eq!(toasts.current().unwrap().text, "Level Up! 3");
    }
}
