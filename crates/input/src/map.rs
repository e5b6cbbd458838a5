//! Key bindings.
//!
//! | keys                     | command     |
//! |--------------------------|-------------|
//! | Left, h, a               | MoveLeft    |
//! | Right, l, d              | MoveRight   |
//! | Down, j, s               | SoftDrop    |
//! | Up, k, w, x              | Rotate      |
//! | Space                    | HardDrop    |
//! | p                        | Pause       |
//! | r                        | Restart     |
//!
//! Letters match in either case. Chords with Ctrl never map to a command;
//! `q` and Ctrl-C are handled by [`should_quit`].

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Up => Some(Command::Rotate),
        KeyCode::Char(ch) => command_for_char(ch.to_ascii_lowercase()),
        _ => None,
    }
}

fn command_for_char(ch: char) -> Option<Command> {
    let command = match ch {
        'h' | 'a' => Command::MoveLeft,
        'l' | 'd' => Command::MoveRight,
        'j' | 's' => Command::SoftDrop,
        'k' | 'w' | 'x' => Command::Rotate,
        ' ' => Command::HardDrop,
        'p' => Command::Pause,
        'r' => Command::Restart,
        _ => return None,
    };
    Some(command)
}

/// `q` in either case, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q' | 'Q') => true,
        KeyCode::Char('c' | 'C') => ctrl,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn every_binding_maps() {
        let cases = [
            (KeyCode::Left, Command::MoveLeft),
            (KeyCode::Char('H'), Command::MoveLeft),
            (KeyCode::Char('a'), Command::MoveLeft),
            (KeyCode::Right, Command::MoveRight),
            (KeyCode::Char('l'), Command::MoveRight),
            (KeyCode::Char('D'), Command::MoveRight),
            (KeyCode::Down, Command::SoftDrop),
            (KeyCode::Char('j'), Command::SoftDrop),
            (KeyCode::Char('S'), Command::SoftDrop),
            (KeyCode::Up, Command::Rotate),
            (KeyCode::Char('k'), Command::Rotate),
            (KeyCode::Char('W'), Command::Rotate),
            (KeyCode::Char('x'), Command::Rotate),
            (KeyCode::Char(' '), Command::HardDrop),
            (KeyCode::Char('P'), Command::Pause),
            (KeyCode::Char('r'), Command::Restart),
        ];
        for (code, command) in cases {
            assert_eq!(command_for_key(press(code)), Some(command), "{:?}", code);
        }
    }

    #[test]
    fn unbound_keys_and_ctrl_chords_map_to_nothing() {
        assert_eq!(command_for_key(press(KeyCode::Char('c'))), None);
        assert_eq!(command_for_key(press(KeyCode::Char('q'))), None);
        assert_eq!(command_for_key(press(KeyCode::Tab)), None);
        assert_eq!(command_for_key(press(KeyCode::Enter)), None);
        assert_eq!(command_for_key(ctrl('r')), None);
        assert_eq!(command_for_key(ctrl('h')), None);
    }

    #[test]
    fn quit_on_q_or_ctrl_c() {
        assert!(should_quit(press(KeyCode::Char('q'))));
        assert!(should_quit(press(KeyCode::Char('Q'))));
        assert!(should_quit(ctrl('c')));
        assert!(!should_quit(press(KeyCode::Char('c'))));
        assert!(!should_quit(press(KeyCode::Esc)));
        assert!(!should_quit(press(KeyCode::Char('x'))));
    }
}
