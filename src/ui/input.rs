use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FocusNext,
    FocusPrev,
    OptionNext,
    OptionPrev,
    TypeChar(char),
    Backspace,
    Submit,
    ClearResult,
    Help,
    ClosePopup,
    Quit,
    None,
}

/// What currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Select,
    Input,
    Button,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Select => Focus::Input,
            Focus::Input => Focus::Button,
            Focus::Button => Focus::Select,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Select => Focus::Button,
            Focus::Input => Focus::Select,
            Focus::Button => Focus::Input,
        }
    }
}

pub fn map_key(key: KeyEvent, focus: Focus) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return Action::Quit,
        KeyCode::Char('l') if ctrl => return Action::ClearResult,
        KeyCode::Tab => return Action::FocusNext,
        KeyCode::BackTab => return Action::FocusPrev,
        KeyCode::F(1) => return Action::Help,
        KeyCode::Esc => return Action::ClosePopup,
        _ => {}
    }

    match focus {
        Focus::Input => match key.code {
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) if !ctrl => Action::TypeChar(c),
            _ => Action::None,
        },
        Focus::Button => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::Submit,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        },
        Focus::Select => match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                Action::OptionNext
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                Action::OptionPrev
            }
            KeyCode::Enter => Action::FocusNext,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        },
    }
}
