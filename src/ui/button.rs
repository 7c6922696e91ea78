use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct Button<'a> {
    pub label: &'a str,
    pub focused: bool,
    pub disabled: bool,
}

impl<'a> Widget for Button<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let style = if self.disabled {
            theme::dim()
        } else if self.focused {
            Style::default()
                .fg(theme::FOCUS_COLOR)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::ACCENT)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border(self.focused && !self.disabled));

        Paragraph::new(Line::styled(self.label, style))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
