use thiserror::Error;

use crate::glyph::canonical_char;
use crate::session::{Screen, Session};
use crate::validator::is_operator;

/// A single keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Parentheses,
    Backspace,
    Clear,
    Equals,
}

impl Key {
    pub fn from_char(c: char) -> Option<Self> {
        let c = canonical_char(c);
        match c {
            '0'..='9' | '.' | '(' | ')' => Some(Key::Char(c)),
            _ if is_operator(c) => Some(Key::Char(c)),
            'p' | 'P' => Some(Key::Parentheses),
            '<' => Some(Key::Backspace),
            'c' | 'C' => Some(Key::Clear),
            '=' => Some(Key::Equals),
            _ => None,
        }
    }

    pub fn apply(self, session: &mut Session) -> Screen {
        match self {
            Key::Char(c) => session.submit_char(c),
            Key::Parentheses => session.parentheses(),
            Key::Backspace => session.backspace(),
            Key::Clear => session.clear(),
            Key::Equals => session.finalize(),
        }
    }
}

/// Parses a line of keystrokes, skipping whitespace.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, KeyError> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Key::from_char(c).ok_or(KeyError::UnknownKey(c)))
        .collect()
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyError {
    #[error("Unknown key: {0:?}")]
    UnknownKey(char),
}
