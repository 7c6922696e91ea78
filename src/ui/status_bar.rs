use crate::ui::theme;
use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub kind_label: &'a str,
    pub is_loading: bool,
    pub settled_at: Option<DateTime<Local>>,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let sep = || {
            Span::styled(
                "\u{2502}",
                Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG),
            )
        };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.kind_label),
                Style::default()
                    .fg(theme::FOCUS_COLOR)
                    .bg(theme::STATUS_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            sep(),
        ];

        let state = if self.is_loading {
            "загрузка\u{2026}".to_string()
        } else {
            match self.settled_at {
                Some(at) => format!("последний запрос: {}", at.format("%H:%M:%S")),
                None => "ожидание".to_string(),
            }
        };
        spans.push(Span::styled(format!(" {state} "), bg));
        spans.push(sep());
        spans.push(Span::styled(
            " F1 справка ",
            Style::default().fg(theme::DIM_TEXT).bg(theme::STATUS_BG),
        ));

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
