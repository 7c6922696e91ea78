use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OPTION_KEY: AtomicU64 = AtomicU64::new(0);

/// Process-wide, strictly increasing key for select options.
pub fn next_option_key() -> u64 {
    NEXT_OPTION_KEY.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone)]
pub struct SelectOption<T> {
    #[allow(dead_code)]
    pub key: u64,
    pub label: String,
    pub value: T,
}

#[derive(Debug, Clone)]
pub struct SelectState<T> {
    options: Vec<SelectOption<T>>,
    selected: usize,
}

impl<T: Clone + PartialEq> SelectState<T> {
    pub fn new(options: impl IntoIterator<Item = (T, String)>) -> Self {
        let options = options
            .into_iter()
            .map(|(value, label)| SelectOption {
                key: next_option_key(),
                label,
                value,
            })
            .collect();
        Self {
            options,
            selected: 0,
        }
    }

    #[allow(dead_code)]
    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    pub fn selected(&self) -> Option<&T> {
        self.options.get(self.selected).map(|o| &o.value)
    }

    pub fn select_value(&mut self, value: &T) -> bool {
        match self.options.iter().position(|o| &o.value == value) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }
}

pub struct Select<'a, T> {
    pub label: &'a str,
    pub state: &'a SelectState<T>,
    pub focused: bool,
}

impl<'a, T> Widget for Select<'a, T> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .title(Span::styled(format!(" {} ", self.label), theme::label()))
            .borders(Borders::ALL)
            .border_style(theme::border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        if self.focused {
            spans.push(Span::styled("\u{25c2} ", Style::default().fg(theme::FOCUS_COLOR)));
        }
        for (i, opt) in self.state.options.iter().enumerate() {
            let style = if i == self.state.selected {
                Style::default()
                    .fg(theme::ACCENT)
                    .bg(theme::FIELD_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                theme::dim()
            };
            spans.push(Span::styled(format!(" {} ", opt.label), style));
            spans.push(Span::raw(" "));
        }
        if self.focused {
            spans.push(Span::styled("\u{25b8}", Style::default().fg(theme::FOCUS_COLOR)));
        }
        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}
