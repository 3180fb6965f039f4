use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A player command decoded from a key press
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Up,
    Down,
    Left,
    Right,
    Quit,
    Restart,
}

impl Command {
    /// Map a key event to a command.  Arrow keys and the vi keys `h`, `j`,
    /// `k`, & `l` steer; `q` and Ctrl-C quit; `r` restarts.  Presses and
    /// auto-repeats both count.  Anything else, including key releases, is
    /// `None`.
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        if ev.kind == KeyEventKind::Release {
            return None;
        }
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (m, code) if normal_modifiers.contains(m) => match code {
                KeyCode::Char('k') | KeyCode::Up => Some(Command::Up),
                KeyCode::Char('j') | KeyCode::Down => Some(Command::Down),
                KeyCode::Char('h') | KeyCode::Left => Some(Command::Left),
                KeyCode::Char('l') | KeyCode::Right => Some(Command::Right),
                KeyCode::Char('q') => Some(Command::Quit),
                KeyCode::Char('r') => Some(Command::Restart),
                _ => None,
            },
            _ => None,
        }
    }

    /// Return the direction this command steers in, if any
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            Command::Quit | Command::Restart => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, Some(Command::Up))]
    #[case(KeyCode::Char('k'), Some(Command::Up))]
    #[case(KeyCode::Down, Some(Command::Down))]
    #[case(KeyCode::Char('j'), Some(Command::Down))]
    #[case(KeyCode::Left, Some(Command::Left))]
    #[case(KeyCode::Char('h'), Some(Command::Left))]
    #[case(KeyCode::Right, Some(Command::Right))]
    #[case(KeyCode::Char('l'), Some(Command::Right))]
    #[case(KeyCode::Char('q'), Some(Command::Quit))]
    #[case(KeyCode::Char('r'), Some(Command::Restart))]
    #[case(KeyCode::Char('w'), None)]
    #[case(KeyCode::Char('x'), None)]
    #[case(KeyCode::Enter, None)]
    #[case(KeyCode::Esc, None)]
    #[case(KeyCode::F(1), None)]
    fn plain_keys(#[case] code: KeyCode, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(KeyEvent::from(code)), cmd);
    }

    #[test]
    fn ctrl_c() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key_event(ev), Some(Command::Quit));
    }

    #[test]
    fn ctrl_letter_ignored() {
        let ev = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key_event(ev), None);
    }

    #[test]
    fn release_ignored() {
        let ev = KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(Command::from_key_event(ev), None);
    }

    #[test]
    fn repeat_steers() {
        let ev = KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(Command::from_key_event(ev), Some(Command::Left));
    }

    #[rstest]
    #[case(Command::Up, Some(Direction::Up))]
    #[case(Command::Down, Some(Direction::Down))]
    #[case(Command::Left, Some(Direction::Left))]
    #[case(Command::Right, Some(Direction::Right))]
    #[case(Command::Quit, None)]
    #[case(Command::Restart, None)]
    fn test_direction(#[case] cmd: Command, #[case] d: Option<Direction>) {
        assert_eq!(cmd.direction(), d);
    }
}
