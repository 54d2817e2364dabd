use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::machine::{Direction, Event};
use crate::session::{Adjust, Phase};

/// Translate a key press into a session event for the given phase.
///
/// Keys with no meaning in the phase map to `None` and never reach the
/// state machine.
pub fn map_key(phase: Phase, key: KeyEvent) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(Event::Cancel);
    }

    match phase {
        Phase::Welcome => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Event::StartSession),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Event::OpenSettings),
            _ => None,
        },
        Phase::Settings => match key.code {
            KeyCode::Up => Some(Event::AdjustTimeLimit(Adjust::Increase)),
            KeyCode::Down => Some(Event::AdjustTimeLimit(Adjust::Decrease)),
            KeyCode::Esc => Some(Event::ExitToWelcome),
            _ => None,
        },
        Phase::Active => match key.code {
            KeyCode::Esc => Some(Event::ExitToWelcome),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Left => Some(Event::NavigateWord(Direction::Prev)),
            KeyCode::Right => Some(Event::NavigateWord(Direction::Next)),
            KeyCode::Char(' ') => Some(Event::SubmitWord),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Event::CharacterTyped(c))
            }
            _ => None,
        },
        Phase::Finished => match key.code {
            KeyCode::Enter => Some(Event::StartSession),
            _ => None,
        },
    }
}
