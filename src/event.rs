use crate::search::LookupOutcome;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    LookupFinished(LookupOutcome),
}
