//! Property-based tests for the keypad engine.
//!
//! Keystroke sequences are generated from the keypad alphabet and driven
//! through a session so that every buffer under test is one a user could
//! actually type.

use keypad::keys::Key;
use keypad::tokenizer::{tokenize, TokenizeError};
use keypad::{compute, format_number, ResultText, Session};
use proptest::prelude::*;

const KEYPAD: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '%', '(', ')',
];

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        8 => prop::sample::select(KEYPAD).prop_map(Key::Char),
        1 => Just(Key::Parentheses),
        1 => Just(Key::Backspace),
    ]
}

fn typed_buffer(keys: &[Key]) -> Session {
    let mut session = Session::default();
    for key in keys {
        key.apply(&mut session);
    }
    session
}

/// Every `-` leads into a literal or group and every `.` touches a digit.
fn literals_complete(buffer: &str) -> bool {
    let chars: Vec<char> = buffer.chars().collect();
    chars.iter().enumerate().all(|(i, &c)| {
        let prev = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();
        match c {
            '-' => matches!(next, Some('0'..='9' | '.')),
            '.' => {
                matches!(prev, Some('0'..='9')) || matches!(next, Some('0'..='9'))
            }
            _ => true,
        }
    })
}

fn fixed_range() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 1e-5..1e11f64, -1e11..-1e-5f64]
}

fn scientific_range() -> impl Strategy<Value = f64> {
    prop_oneof![1e13..1e300f64, -1e300..-1e13f64, 1e-300..1e-7f64, -1e-7..-1e-300f64]
}

proptest! {
    #[test]
    fn typed_buffers_never_hold_invalid_characters(keys in prop::collection::vec(key_strategy(), 0..30)) {
        let session = typed_buffer(&keys);
        match tokenize(session.buffer()) {
            Err(TokenizeError::InvalidCharacter(c)) => {
                prop_assert!(false, "invalid character {c:?} in {:?}", session.buffer());
            }
            Err(TokenizeError::InvalidNumber(literal)) => {
                prop_assert!(matches!(literal.as_str(), "-" | "." | "-."));
                prop_assert!(!literals_complete(session.buffer()), "{:?}", session.buffer());
            }
            Ok(_) => {}
        }
    }

    #[test]
    fn pipeline_is_deterministic(keys in prop::collection::vec(key_strategy(), 0..30)) {
        let session = typed_buffer(&keys);
        let first = compute(session.buffer()).map_err(|e| e.kind());
        let second = compute(session.buffer()).map_err(|e| e.kind());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn raw_text_is_deterministic(text in "[0-9.+*/%()-]{0,24}") {
        prop_assert_eq!(
            compute(&text).map_err(|e| e.kind()),
            compute(&text).map_err(|e| e.kind())
        );
    }

    #[test]
    fn finalize_requires_balanced_parentheses(keys in prop::collection::vec(key_strategy(), 0..30)) {
        let mut session = typed_buffer(&keys);
        let buffer = session.buffer().to_owned();
        session.finalize();
        if let ResultText::Value(_) = session.preview() {
            prop_assert_eq!(buffer.matches('(').count(), buffer.matches(')').count());
        }
    }

    #[test]
    fn fixed_format_round_trips(value in fixed_range()) {
        let text = format_number(value, 12);
        let parsed = compute(&text).expect("formatted value evaluates");
        prop_assert!((parsed - value).abs() <= 1e-12 + value.abs() * 1e-15, "{value} -> {text} -> {parsed}");
    }

    #[test]
    fn format_is_idempotent(value in prop_oneof![fixed_range(), scientific_range()]) {
        let text = format_number(value, 12);
        let reparsed: f64 = text.parse().expect("formatted value parses");
        prop_assert_eq!(format_number(reparsed, 12), text);
    }
}

#[test]
fn threshold_values_switch_notation_on_reformat() {
    // Values just past a threshold round onto it and then render fixed.
    let text = format_number(1000000000000.5, 12);
    assert_eq!(text, "1e+12");
    let reparsed: f64 = text.parse().unwrap();
    assert_eq!(format_number(reparsed, 12), "1000000000000");
}
