use ratatui::style::{Color, Modifier, Style};

pub const APP_BG: Color = Color::Rgb(25, 25, 38);
pub const HEADER_BG: Color = Color::Rgb(25, 25, 38);
pub const STATUS_BG: Color = Color::Rgb(30, 30, 40);
pub const FIELD_BG: Color = Color::Rgb(35, 35, 52);
pub const ACCENT: Color = Color::Rgb(140, 115, 200);
pub const SEPARATOR: Color = Color::Rgb(55, 55, 75);
pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
pub const ACTIVE_BORDER: Color = Color::Rgb(120, 120, 180);
pub const BORDER_COLOR: Color = Color::Rgb(60, 60, 80);
pub const FOCUS_COLOR: Color = Color::Cyan;
pub const ERROR_FG: Color = Color::LightRed;
pub const RESULT_FG: Color = Color::Rgb(220, 220, 230);

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACTIVE_BORDER)
    } else {
        Style::default().fg(BORDER_COLOR)
    }
}

pub fn label() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(ERROR_FG)
}

pub fn dim() -> Style {
    Style::default().fg(DIM_TEXT)
}

pub fn result() -> Style {
    Style::default().fg(RESULT_FG)
}
