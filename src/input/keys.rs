/// Action requested through the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    None,
}

const KEY_ESC: i32 = 27;

/// Interpret a key code polled from the UI event queue
///
/// `highgui::wait_key` returns -1 when no key was pressed, which maps to
/// `KeyAction::None` like any other unbound key.
pub fn key_action(code: i32) -> KeyAction {
    if code == i32::from(b'q') || code == i32::from(b'Q') || code == KEY_ESC {
        KeyAction::Quit
    } else {
        KeyAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_action(i32::from(b'q')), KeyAction::Quit);
        assert_eq!(key_action(i32::from(b'Q')), KeyAction::Quit);
        assert_eq!(key_action(KEY_ESC), KeyAction::Quit);
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(key_action(i32::from(b'x')), KeyAction::None);
        assert_eq!(key_action(i32::from(b' ')), KeyAction::None);
    }

    #[test]
    fn test_no_key_pressed() {
        assert_eq!(key_action(-1), KeyAction::None);
    }
}
