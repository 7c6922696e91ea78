use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Widget},
};

/// Titled frame around a search form.
pub struct Form<'a> {
    pub title: &'a str,
}

impl<'a> Form<'a> {
    fn block(&self) -> Block<'a> {
        Block::default()
            .title(Span::styled(format!(" {} ", self.title), theme::label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::SEPARATOR))
    }

    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }
}

impl<'a> Widget for Form<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        self.block().render(area, buf);
    }
}
