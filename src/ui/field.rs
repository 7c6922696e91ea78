use crate::form::FieldBinding;
use crate::ui::{theme, truncate_with_ellipsis};
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Single-line text input. The error line, when present, is drawn directly
/// below the box, so give it one spare row.
pub struct Input<'a> {
    pub label: &'a str,
    pub binding: FieldBinding<'a>,
    pub placeholder: &'a str,
    pub focused: bool,
}

impl<'a> Widget for Input<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let box_area = Rect {
            height: area.height.min(3),
            ..area
        };
        let border_style = if self.binding.error.is_some() {
            theme::error()
        } else {
            theme::border(self.focused)
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", self.label), theme::label()))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(box_area);
        block.render(box_area, buf);

        if inner.width > 0 && inner.height > 0 {
            let max = inner.width.saturating_sub(1) as usize;
            let line = if self.binding.value.is_empty() && !self.focused {
                Line::from(Span::styled(self.placeholder, theme::dim()))
            } else {
                // keep the tail visible while typing
                let value = tail_within(self.binding.value, max);
                let mut spans = vec![Span::styled(
                    value,
                    Style::default().fg(theme::RESULT_FG).bg(theme::FIELD_BG),
                )];
                if self.focused {
                    spans.push(Span::styled(
                        "\u{258c}",
                        Style::default().fg(theme::FOCUS_COLOR),
                    ));
                }
                Line::from(spans)
            };
            buf.set_line(inner.x, inner.y, &line, inner.width);
        }

        if let Some(err) = self.binding.error {
            let y = box_area.bottom();
            if y < area.bottom() {
                let text = truncate_with_ellipsis(err, area.width.saturating_sub(1) as usize);
                buf.set_line(
                    area.x + 1,
                    y,
                    &Line::from(Span::styled(text, theme::error())),
                    area.width.saturating_sub(1),
                );
            }
        }
    }
}

fn tail_within(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let mut out: Vec<char> = Vec::new();
    let mut w = 0;
    for ch in s.chars().rev() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if w + cw > max {
            break;
        }
        out.push(ch);
        w += cw;
    }
    out.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_text, render_to_buffer};

    #[test]
    fn tail_within_keeps_end() {
        assert_eq!(tail_within("octocat", 3), "cat");
        assert_eq!(tail_within("oct", 10), "oct");
    }

    #[test]
    fn renders_error_below_box() {
        let buf = render_to_buffer(30, 4, |f| {
            let input = Input {
                label: "name",
                binding: FieldBinding {
                    value: "",
                    error: Some("required"),
                },
                placeholder: "octocat",
                focused: false,
            };
            f.render_widget(input, f.area());
        });
        let text = buffer_text(&buf);
        let rows: Vec<&str> = text.lines().collect();
        assert!(rows[1].contains("octocat"));
        assert!(rows[3].contains("required"));
    }
}
