//! Row/column helpers shared by the screens.

use ratatui::layout::{Constraint, Flex, Layout as RatatuiLayout, Rect};

/// Splits `area` left to right.
pub fn row<const N: usize>(area: Rect, constraints: [Constraint; N]) -> [Rect; N] {
    RatatuiLayout::horizontal(constraints).spacing(1).areas(area)
}

/// Splits `area` top to bottom.
pub fn column<const N: usize>(area: Rect, constraints: [Constraint; N]) -> [Rect; N] {
    RatatuiLayout::vertical(constraints).areas(area)
}

/// Page frame: header, centered body of at most `max_width` columns, status line.
pub fn layout(area: Rect, max_width: u16) -> [Rect; 3] {
    let [header, body, status] = column(
        area,
        [Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)],
    );
    let [body] = RatatuiLayout::horizontal([Constraint::Max(max_width)])
        .flex(Flex::Center)
        .areas(body);
    [header, body.inner(ratatui::layout::Margin::new(1, 1)), status]
}
