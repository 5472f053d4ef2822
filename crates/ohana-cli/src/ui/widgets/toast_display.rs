use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, Clear, Padding, Widget},
};

use crate::ui::{
    toast::{Toast, ToastKind},
    widgets::style,
};

/// Pop-up for the current toast, drawn over the bottom of the area.
#[derive(Debug)]
pub struct ToastDisplay<'a> {
    toast: &'a Toast,
}

impl<'a> ToastDisplay<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }
}

impl Widget for ToastDisplay<'_> {
    #[expect(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = match self.toast.kind {
            ToastKind::Info => style::TOAST_INFO,
            ToastKind::Celebrate => style::TOAST_CELEBRATE,
            ToastKind::Alert => style::TOAST_ALERT,
        };
        let block = BlockWidget::new()
            .padding(Padding::horizontal(2))
            .style(style);
        let text_width = self.toast.text.chars().count() as u16;
        let [row] = area.layout(&Layout::vertical([Constraint::Length(1)]).flex(Flex::End));
        let popup = row.centered_horizontally(Constraint::Length(text_width.saturating_add(4)));

        let inner = block.inner(popup);
        Clear.render(popup, buf);
        block.render(popup, buf);
        Line::styled(self.toast.text.as_str(), style)
            .centered()
            .render(inner, buf);
    }
}
