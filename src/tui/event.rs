use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// TUI input events, one per navigator command plus housekeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    ShowLogin,
    ShowOnboarding,
    SwitchToMain,
    SwitchToLogout,
    SetDeeplink,
    ClearDeeplink,
    Quit,
    Resize,
}

impl TuiEvent {
    pub fn label(&self) -> &'static str {
        match self {
            TuiEvent::ShowLogin => "show login",
            TuiEvent::ShowOnboarding => "show onboarding",
            TuiEvent::SwitchToMain => "switch to main",
            TuiEvent::SwitchToLogout => "switch to logout",
            TuiEvent::SetDeeplink => "set deep link",
            TuiEvent::ClearDeeplink => "clear deep link",
            TuiEvent::Quit => "quit",
            TuiEvent::Resize => "resize",
        }
    }
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read()? {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(event)
}

/// Translate a key press. Releases and repeats are ignored.
pub fn map_key(key: KeyEvent) -> Option<TuiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('l')) => Some(TuiEvent::ShowLogin),
        (_, KeyCode::Char('o')) => Some(TuiEvent::ShowOnboarding),
        (_, KeyCode::Char('m')) => Some(TuiEvent::SwitchToMain),
        (_, KeyCode::Char('x')) => Some(TuiEvent::SwitchToLogout),
        (_, KeyCode::Char('d')) => Some(TuiEvent::SetDeeplink),
        (_, KeyCode::Char('c')) => Some(TuiEvent::ClearDeeplink),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn press(c: char) -> KeyEvent {
        key(KeyCode::Char(c), KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(press('l')), Some(TuiEvent::ShowLogin));
        assert_eq!(map_key(press('o')), Some(TuiEvent::ShowOnboarding));
        assert_eq!(map_key(press('m')), Some(TuiEvent::SwitchToMain));
        assert_eq!(map_key(press('x')), Some(TuiEvent::SwitchToLogout));
    }

    #[test]
    fn test_ctrl_c_quits_but_c_clears() {
        assert_eq!(map_key(press('c')), Some(TuiEvent::ClearDeeplink));
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press)),
            Some(TuiEvent::Quit)
        );
    }

    #[test]
    fn test_release_ignored() {
        assert_eq!(
            map_key(key(KeyCode::Char('m'), KeyModifiers::NONE, KeyEventKind::Release)),
            None
        );
        assert_eq!(map_key(press('z')), None);
    }
}
