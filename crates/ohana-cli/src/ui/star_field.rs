use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

#[derive(Debug, Clone, Copy)]
struct Star {
    /// Position as a fraction of the area, so the field survives resizes.
    x: f32,
    y: f32,
    /// Twinkle period in ticks.
    period: u32,
    phase: u32,
}

/// Slowly twinkling background stars.
#[derive(Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
    ticks: u32,
}

const SYMBOLS: [&str; 3] = ["·", "+", "✦"];
const STYLES: [Style; 3] = [
    Style::new().fg(Color::DarkGray),
    Style::new().fg(Color::Gray),
    Style::new().fg(Color::LightYellow),
];

impl StarField {
    pub fn new(count: usize) -> Self {
        let mut rng = Pcg32::from_rng(&mut rand::rng());
        Self::with_rng(count, &mut rng)
    }

    fn with_rng<R>(count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let stars = (0..count)
            .map(|_| Star {
                x: rng.random(),
                y: rng.random(),
                period: rng.random_range(30..120),
                phase: rng.random_range(0..120),
            })
            .collect();
        Self { stars, ticks: 0 }
    }

    pub fn step(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Brightness 0..=2 of a star at the current tick.
    fn brightness(&self, star: &Star) -> usize {
        let t = self.ticks.wrapping_add(star.phase) % star.period;
        let half = star.period / 2;
        let level = if t < half { t } else { star.period - t };
        if level * 3 < half {
            0
        } else if level * 3 < half * 2 {
            1
        } else {
            2
        }
    }
}

impl Widget for &StarField {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for star in &self.stars {
            let x = area.x + (star.x * f32::from(area.width)) as u16;
            let y = area.y + (star.y * f32::from(area.height)) as u16;
            let x = x.min(area.right() - 1);
            let y = y.min(area.bottom() - 1);
            let level = self.brightness(star);
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(SYMBOLS[level]).set_style(STYLES[level]);
            }
        }
    }
}
