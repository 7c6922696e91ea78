use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBar<'a> {
    pub api_base: &'a str,
    pub authenticated: bool,
}

impl<'a> Widget for HeaderBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::HEADER_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let left = Line::from(vec![
            Span::styled(
                " ghlookup",
                Style::default()
                    .fg(theme::ACCENT)
                    .bg(theme::HEADER_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " \u{2503} ",
                Style::default().fg(theme::SEPARATOR).bg(theme::HEADER_BG),
            ),
            Span::styled("поиск пользователей и репозиториев GitHub", bg),
        ]);
        buf.set_line(area.x, area.y, &left, area.width);

        let auth = if self.authenticated { "токен" } else { "анонимно" };
        let right = format!("{}  {auth} ", self.api_base);
        let right_w = UnicodeWidthStr::width(right.as_str());
        let left_w = left.width();
        let area_w = area.width as usize;
        if area_w > left_w + right_w {
            let x = area.x + (area_w - right_w) as u16;
            buf.set_line(
                x,
                area.y,
                &Line::from(Span::styled(
                    right,
                    Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
                )),
                right_w as u16,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, render_to_buffer};

    fn header(authenticated: bool) -> String {
        buffer_text(&render_to_buffer(110, 1, |f| {
            f.render_widget(
                HeaderBar {
                    api_base: "https://api.github.com",
                    authenticated,
                },
                f.area(),
            )
        }))
    }

    #[test]
    fn shows_localized_title_and_auth_mode() {
        let text = header(false);
        assert!(text.contains("поиск пользователей и репозиториев GitHub"), "{text}");
        assert!(text.contains("анонимно"), "{text}");
        assert!(header(true).contains("токен"));
    }
}
