//! Keyboard input for the game screen.
//!
//! Key events are first mapped to a [`TyperInput`], then applied to the
//! session. While no round runs, typing is ignored and only start/quit work.

use crate::core::{ClockEvent, GameSession, Scheduler};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

/// Input actions for the typing game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TyperInput {
    /// A printable character for the input line.
    Char(char),
    /// Erase the last character (Backspace).
    Backspace,
    /// Clear the whole line (Ctrl+U).
    ClearLine,
    /// Start a round (Enter).
    Start,
    /// Leave the game (Esc or Ctrl+C).
    Quit,
    /// Any other key.
    Other,
}

/// Result of handling one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Exit the program.
    Quit,
}

/// Map a crossterm key event to a game input.
pub fn map_key(key: KeyEvent) -> TyperInput {
    // Windows reports releases too; only presses type
    if key.kind == KeyEventKind::Release {
        return TyperInput::Other;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => TyperInput::Quit,
        KeyCode::Char('u') if ctrl => TyperInput::ClearLine,
        KeyCode::Char(_) if ctrl => TyperInput::Other,
        KeyCode::Char(c) => TyperInput::Char(c),
        KeyCode::Backspace => TyperInput::Backspace,
        KeyCode::Enter => TyperInput::Start,
        KeyCode::Esc => TyperInput::Quit,
        _ => TyperInput::Other,
    }
}

/// Apply one input to the session.
pub fn process_input<R: Rng, S: Scheduler<ClockEvent>>(
    session: &mut GameSession<R, S>,
    input: TyperInput,
) -> InputResult {
    match input {
        TyperInput::Quit => return InputResult::Quit,
        TyperInput::Start => {
            // Enter mid-round is just a key press on the input line
            if !session.is_active() {
                session.start();
            }
        }
        TyperInput::Char(c) => {
            session.type_char(c);
        }
        TyperInput::Backspace => session.backspace(),
        TyperInput::ClearLine => session.clear_input(),
        TyperInput::Other => {}
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FrameClock, GameConfig};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session() -> GameSession<ChaCha8Rng, FrameClock<ClockEvent>> {
        GameSession::with_parts(
            GameConfig::default(),
            ChaCha8Rng::seed_from_u64(1),
            FrameClock::new(),
        )
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(key(KeyCode::Char('a'))), TyperInput::Char('a'));
        assert_eq!(map_key(key(KeyCode::Backspace)), TyperInput::Backspace);
        assert_eq!(map_key(key(KeyCode::Enter)), TyperInput::Start);
        assert_eq!(map_key(key(KeyCode::Esc)), TyperInput::Quit);
        assert_eq!(map_key(key(KeyCode::Tab)), TyperInput::Other);
    }

    #[test]
    fn test_map_ctrl_keys() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl('c')), TyperInput::Quit);
        assert_eq!(map_key(ctrl('u')), TyperInput::ClearLine);
        assert_eq!(map_key(ctrl('x')), TyperInput::Other);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut event = key(KeyCode::Char('a'));
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event), TyperInput::Other);
    }

    #[test]
    fn test_enter_starts_only_when_idle() {
        let mut s = session();
        assert_eq!(process_input(&mut s, TyperInput::Start), InputResult::Continue);
        assert!(s.is_active());

        process_input(&mut s, TyperInput::Char('x'));
        process_input(&mut s, TyperInput::Start);
        assert_eq!(s.input(), "X", "Enter mid-round leaves the line alone");
    }

    #[test]
    fn test_typing_ignored_when_idle() {
        let mut s = session();
        process_input(&mut s, TyperInput::Char('h'));
        assert_eq!(s.input(), "");
    }

    #[test]
    fn test_quit() {
        let mut s = session();
        assert_eq!(process_input(&mut s, TyperInput::Quit), InputResult::Quit);
    }

    #[test]
    fn test_clear_line() {
        let mut s = session();
        s.start();
        process_input(&mut s, TyperInput::Char('a'));
        process_input(&mut s, TyperInput::Char('b'));
        process_input(&mut s, TyperInput::ClearLine);
        assert_eq!(s.input(), "");
    }
}
