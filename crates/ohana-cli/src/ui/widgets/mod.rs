use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    block_display::*, board_display::*, key_hint_display::*, piece_display::*,
    quote_display::*, session_display::*, stats_display::*, toast_display::*,
};

mod block_display;
mod board_display;
mod key_hint_display;
mod piece_display;
mod quote_display;
mod session_display;
mod stats_display;
mod toast_display;

pub mod color {
    use ratatui::style::Color;

    pub const TEAL: Color = Color::Rgb(126, 247, 215);
    pub const YELLOW: Color = Color::Rgb(255, 221, 87);
    pub const PINK: Color = Color::Rgb(255, 121, 198);
    pub const CORAL: Color = Color::Rgb(255, 107, 107);
    pub const BLUE: Color = Color::Rgb(77, 150, 255);
    pub const ORANGE: Color = Color::Rgb(255, 159, 67);
    pub const PURPLE: Color = Color::Rgb(170, 120, 255);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const NIGHT: Color = Color::Rgb(8, 14, 34);
    pub const DIM: Color = Color::Rgb(70, 80, 110);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::NIGHT);
    pub const TITLE: Style = fg_bg(color::TEAL, color::NIGHT).add_modifier(Modifier::BOLD);
    pub const TAGLINE: Style = fg_bg(color::DIM, color::NIGHT);
    pub const EMPTY: Style = bg_only(color::NIGHT);
    pub const EMPTY_DOT: Style = fg_bg(color::DIM, color::NIGHT);
    pub const GHOST: Style = fg_bg(color::DIM, color::NIGHT);
    pub const QUOTE: Style = fg_bg(color::YELLOW, color::NIGHT).add_modifier(Modifier::BOLD);

    pub const I_BLOCK: Style = bg_only(color::TEAL);
    pub const O_BLOCK: Style = bg_only(color::YELLOW);
    pub const S_BLOCK: Style = bg_only(color::GREEN);
    pub const Z_BLOCK: Style = bg_only(color::CORAL);
    pub const J_BLOCK: Style = bg_only(color::BLUE);
    pub const L_BLOCK: Style = bg_only(color::ORANGE);
    pub const T_BLOCK: Style = bg_only(color::PURPLE);

    pub const TOAST_INFO: Style = fg_bg(color::WHITE, color::BLACK);
    pub const TOAST_CELEBRATE: Style = fg_bg(color::BLACK, color::PINK);
    pub const TOAST_ALERT: Style = fg_bg(color::WHITE, color::CORAL);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
