use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, Paragraph, Widget, Wrap},
};

use crate::ui::widgets::style;

const PLACEHOLDER: &str = "Fill a line to unlock a quote";

/// The quote picked for the most recent line clear, word-wrapped.
#[derive(Debug)]
pub struct QuoteDisplay<'a> {
    quote: Option<&'a str>,
    block: Option<BlockWidget<'a>>,
    width: u16,
}

impl<'a> QuoteDisplay<'a> {
    pub fn new(quote: Option<&'a str>) -> Self {
        Self {
            quote,
            block: None,
            width: 20,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        self.width + super::block_horizontal_margin(self.block.as_ref())
    }

    /// Height needed to show the longest quote this widget will see.
    pub fn height(&self) -> u16 {
        6 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for QuoteDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (text, style) = match self.quote {
            Some(quote) => (quote, style::QUOTE),
            None => (PLACEHOLDER, style::TAGLINE),
        };
        let mut paragraph = Paragraph::new(text)
            .style(style)
            .centered()
            .wrap(Wrap { trim: true });
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}
