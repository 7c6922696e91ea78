use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("Tab / S-Tab", "Сменить фокус"),
    ("\u{2190}/\u{2192}", "Тип поиска"),
    ("Enter", "Найти"),
    ("Ctrl-L", "Очистить результат"),
    ("F1", "Эта справка"),
    ("Esc", "Закрыть / Выход"),
    ("Ctrl-C", "Выход"),
];

pub struct HelpPanel;

impl Widget for HelpPanel {
    fn render(self, area: Rect, buf: &mut Buf) {
        let popup = super::centered_rect(50, 50, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Клавиши ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let key_style = Style::default()
            .fg(theme::FOCUS_COLOR)
            .add_modifier(Modifier::BOLD);
        for (i, (key, desc)) in BINDINGS.iter().enumerate() {
            if i >= inner.height as usize {
                break;
            }
            let line = Line::from(vec![
                Span::styled(format!(" {key:<14}"), key_style),
                Span::raw(*desc),
            ]);
            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }
    }
}
