use std::{
    io::{self, Stdout},
    time::Duration,
};

use crossterm::{
    event::{
        DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, terminal,
};
use ratatui::DefaultTerminal;

use crate::{
    App, KeyEdgeFilter,
    event::HostEvent,
    event_loop::{EventLoop, RenderMode},
};

/// Terminal application runtime.
///
/// Manages the event loop and executes applications that implement the `App` trait.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tick rate (Hz, ticks per second).
    pub fn set_tick_rate(&mut self, rate: Option<f64>) {
        self.set_tick_interval(rate.map(|rate| Duration::from_secs_f64(1.0 / rate)));
    }

    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.events.set_render_mode(mode);
    }

    /// Runs the application until `app.should_exit()` returns true.
    ///
    /// 1. Calls `app.init()` for initialization
    /// 2. Asks the terminal to report key releases, so held keys can be told apart
    ///    from fresh presses
    /// 3. Runs the event loop
    ///    - tick: calls `app.update()`
    ///    - render: calls `app.draw()`
    ///    - key press edge: calls `app.handle_key()`
    /// 4. Restores the terminal, even if the loop failed
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            let mut stdout = io::stdout();
            let enhanced = push_key_release_reporting(&mut stdout);
            if enhanced {
                self.events.set_key_filter(KeyEdgeFilter::with_release_events());
            }

            let result = self.run_loop(terminal, app);
            pop_key_release_reporting(&mut stdout, enhanced);
            result
        })
    }

    fn run_loop<A>(&mut self, terminal: &mut DefaultTerminal, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        while !app.should_exit() {
            match self.events.next()? {
                HostEvent::Tick => app.update(self),
                HostEvent::Render => {
                    terminal.draw(|f| app.draw(f))?;
                }
                HostEvent::Key(key) => app.handle_key(self, key),
            }
        }
        Ok(())
    }
}

fn push_key_release_reporting(stdout: &mut Stdout) -> bool {
    if let Err(e) = execute!(stdout, EnableFocusChange) {
        log::debug!("focus change reporting unavailable: {e}");
    }
    match terminal::supports_keyboard_enhancement() {
        Ok(true) => {}
        Ok(false) => {
            log::info!("terminal does not report key releases; held keys may repeat");
            return false;
        }
        Err(e) => {
            log::warn!("failed to query keyboard enhancement support: {e}");
            return false;
        }
    }
    let flags = KeyboardEnhancementFlags::REPORT_EVENT_TYPES;
    match execute!(stdout, PushKeyboardEnhancementFlags(flags)) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("failed to enable key release reporting: {e}");
            false
        }
    }
}

fn pop_key_release_reporting(stdout: &mut Stdout, enhanced: bool) {
    if enhanced && let Err(e) = execute!(stdout, PopKeyboardEnhancementFlags) {
        log::warn!("failed to restore keyboard mode: {e}");
    }
    if let Err(e) = execute!(stdout, DisableFocusChange) {
        log::debug!("failed to disable focus change reporting: {e}");
    }
}
