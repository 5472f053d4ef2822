use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event};

use crate::{KeyEdgeFilter, event::HostEvent};

/// Rendering trigger mode.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum RenderMode {
    /// Render at fixed intervals.
    Interval(Duration),
    /// Render after state changes (tick or key press).
    #[default]
    OnDirty,
    /// Render after state changes, but with minimum interval between renders.
    ///
    /// If events occur faster than the interval, they are batched into one render.
    Throttled(Duration),
}

impl RenderMode {
    /// Creates `Interval` mode from frame rate (FPS).
    #[must_use]
    pub fn interval_from_rate(rate: f64) -> Self {
        Self::Interval(Duration::from_secs_f64(1.0 / rate))
    }

    /// Creates `Throttled` mode from frame rate (FPS).
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }
}

/// Schedules ticks and renders between terminal events.
///
/// If an interval is not set, that event type is not generated.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    render_mode: RenderMode,
    last_tick: Instant,
    last_render: Instant,
    dirty: bool,
    keys: KeyEdgeFilter,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Tick interval is unset, and render mode defaults to `OnDirty`.
    pub(super) fn new() -> Self {
        let now = Instant::now();
        let past_time = now.checked_sub(Duration::from_secs(86400)).unwrap_or(now);
        Self {
            tick_interval: None,
            render_mode: RenderMode::default(),
            last_tick: past_time,
            last_render: past_time,
            dirty: true,
            keys: KeyEdgeFilter::new(),
        }
    }

    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    pub(super) fn set_key_filter(&mut self, keys: KeyEdgeFilter) {
        self.keys = keys;
    }

    /// Returns the next event.
    ///
    /// Blocks until a tick/render time is reached or a key press edge arrives.
    /// Terminal events other than keys only mark the screen dirty.
    pub(super) fn next(&mut self) -> io::Result<HostEvent> {
        loop {
            let now = Instant::now();
            if let Some(tick_interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= tick_interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(HostEvent::Tick);
            }

            if self.render_due(now) {
                self.last_render = now;
                self.dirty = false;
                return Ok(HostEvent::Render);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    if self.keys.accept(&key) {
                        self.dirty = true;
                        return Ok(HostEvent::Key(key));
                    }
                }
                Event::FocusLost => self.keys.reset(),
                _ => self.dirty = true,
            }
        }
    }

    fn render_due(&self, now: Instant) -> bool {
        match self.render_mode {
            RenderMode::Interval(interval) => now.duration_since(self.last_render) >= interval,
            RenderMode::OnDirty => self.dirty,
            RenderMode::Throttled(interval) => {
                self.dirty && now.duration_since(self.last_render) >= interval
            }
        }
    }

    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval);
        let next_render_at = match self.render_mode {
            RenderMode::Interval(interval) => Some(self.last_render + interval),
            RenderMode::OnDirty => self.dirty.then_some(now),
            RenderMode::Throttled(interval) => self.dirty.then(|| self.last_render + interval),
        };
        let next_timeout_at = [next_tick_at, next_render_at].into_iter().flatten().min()?;
        Some(next_timeout_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mode_from_rate() {
        assert_eq!(
            RenderMode::interval_from_rate(2.0),
            RenderMode::Interval(Duration::from_millis(500))
        );
        assert_eq!(
            RenderMode::throttled_from_rate(4.0),
            RenderMode::Throttled(Duration::from_millis(250))
        );
    }

    #[test]
    fn test_no_timeout_without_schedule() {
        let mut events = EventLoop::new();
        events.dirty = false;
        assert_eq!(events.compute_timeout(Instant::now()), None);
    }

    #[test]
    fn test_timeout_waits_for_next_tick() {
        let mut events = EventLoop::new();
        let now = Instant::now();
        events.set_tick_interval(Some(Duration::from_millis(100)));
        events.last_tick = now;
        events.dirty = false;
        assert_eq!(
            events.compute_timeout(now),
            Some(Duration::from_millis(100))
        );
    }

    #[test]
    fn test_dirty_screen_renders_immediately() {
        let mut events = EventLoop::new();
        let now = Instant::now();
        events.set_tick_interval(Some(Duration::from_millis(100)));
        events.last_tick = now;
        assert!(events.render_due(now));
        assert_eq!(events.compute_timeout(now), Some(Duration::ZERO));
    }

    #[test]
    fn test_throttled_render_waits_for_interval() {
        let mut events = EventLoop::new();
        let now = Instant::now();
        events.set_render_mode(RenderMode::Throttled(Duration::from_millis(40)));
        events.last_render = now;
        assert!(!events.render_due(now));
        assert!(events.render_due(now + Duration::from_millis(40)));
        assert_eq!(events.compute_timeout(now), Some(Duration::from_millis(40)));
    }
}
