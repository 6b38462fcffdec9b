use midnight_core::{Command, Heading};
use midnight_world::{CORLETH, LUXOR, MORKIN, RORTHRON};

/// What a single key press asks the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Command(Command),
    Quit,
    Ignored,
}

const ESCAPE: char = '\u{1b}';

/// Translates a key into a session action.
///
/// Digits `1` to `8` face the compass points clockwise from north.
pub(crate) fn action_for_key(key: char) -> KeyAction {
    let command = match key.to_ascii_lowercase() {
        'c' => Command::SelectActor { actor: LUXOR },
        'v' => Command::SelectActor { actor: MORKIN },
        'b' => Command::SelectActor { actor: CORLETH },
        'n' => Command::SelectActor { actor: RORTHRON },
        digit @ '1'..='8' => Command::SetHeading {
            heading: Heading::from_index(digit as usize - '1' as usize),
        },
        '-' => Command::RotateCounterClockwise,
        '=' => Command::RotateClockwise,
        'q' => Command::MoveForward,
        'x' | ESCAPE => return KeyAction::Quit,
        _ => return KeyAction::Ignored,
    };
    KeyAction::Command(command)
}
