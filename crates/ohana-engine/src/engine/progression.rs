use std::{num::NonZeroU32, time::Duration};

/// Tuning constants for gravity, levelling and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Gravity interval at level 1.
    pub initial_fall_interval: Duration,
    /// Amount the gravity interval shrinks on each level-up.
    pub fall_interval_step: Duration,
    /// Floor for the gravity interval.
    pub min_fall_interval: Duration,
    /// Lines needed per level: level `n` ends at `n * lines_per_level` lines.
    pub lines_per_level: NonZeroU32,
    /// Points per row descended by a hard drop.
    pub hard_drop_points_per_row: u64,
}

const DEFAULT_LINES_PER_LEVEL: NonZeroU32 = NonZeroU32::new(10).expect("non-zero");

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_fall_interval: Duration::from_millis(800),
            fall_interval_step: Duration::from_millis(90),
            min_fall_interval: Duration::from_millis(120),
            lines_per_level: DEFAULT_LINES_PER_LEVEL,
            hard_drop_points_per_row: 2,
        }
    }
}

/// Base points for a simultaneous clear of `lines` rows, before the level multiplier.
///
/// | lines | points      |
/// |-------|-------------|
/// | 0     | 0           |
/// | 1     | 100         |
/// | 2     | 300         |
/// | 3     | 500         |
/// | 4     | 800         |
/// | n > 4 | n × 300     |
#[must_use]
pub fn line_clear_points(lines: u32) -> u64 {
    match lines {
        0 => 0,
        1 => 100,
        2 => 300,
        3 => 500,
        4 => 800,
        n => u64::from(n) * 300,
    }
}

/// Result of recording a line clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearOutcome {
    /// Points added to the score.
    pub points: u64,
    /// Level before the clear.
    pub previous_level: u32,
    /// Level after the clear.
    pub level: u32,
}

impl ClearOutcome {
    #[must_use]
    pub fn leveled_up(&self) -> bool {
        self.level > self.previous_level
    }
}

/// Score, level, cleared lines and gravity speed of a game.
///
/// - Score never decreases.
/// - Level starts at 1 and never decreases.
/// - The fall interval never increases and never drops below
///   [`GameConfig::min_fall_interval`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use ohana_engine::{GameConfig, Progression};
///
/// let mut progression = Progression::new(GameConfig::default());
/// progression.record_clear(4);
/// progression.record_clear(4);
/// let outcome = progression.record_clear(2);
///
/// assert!(outcome.leveled_up());
/// assert_eq!(progression.level(), 2);
/// assert_eq!(progression.fall_interval(), Duration::from_millis(710));
/// ```
#[derive(Debug, Clone)]
pub struct Progression {
    config: GameConfig,
    score: u64,
    level: u32,
    lines: u32,
    fall_interval: Duration,
}

impl Progression {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval: config.initial_fall_interval,
        }
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total lines cleared in this game.
    #[must_use]
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval.
    #[must_use]
    pub fn fall_interval(&self) -> Duration {
        self.fall_interval
    }

    /// Awards the hard-drop bonus for `rows` rows descended and returns the points.
    pub fn award_hard_drop(&mut self, rows: u32) -> u64 {
        let points = u64::from(rows) * self.config.hard_drop_points_per_row;
        self.score += points;
        points
    }

    /// Records a simultaneous clear of `lines` rows.
    ///
    /// The table value from [`line_clear_points`] is multiplied by the level in effect
    /// before the clear. Each time the line total reaches `level * lines_per_level` the
    /// level goes up by one and the fall interval shrinks by one step. Once that
    /// threshold no longer fits in a `u32` the level stops rising.
    pub fn record_clear(&mut self, lines: u32) -> ClearOutcome {
        let previous_level = self.level;
        let points = line_clear_points(lines).saturating_mul(u64::from(self.level));
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines);

        while let Some(threshold) = self.level.checked_mul(self.config.lines_per_level.get())
            && self.lines >= threshold
            && self.level < u32::MAX
        {
            self.level += 1;
            self.fall_interval = self
                .fall_interval
                .saturating_sub(self.config.fall_interval_step)
                .max(self.config.min_fall_interval);
        }

        ClearOutcome {
            points,
            previous_level,
            level: self.level,
        }
    }
}
