use std::time::Instant;

use compact_str::{CompactString, ToCompactString};

use crate::calculator::compute;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::error::ErrorKind;
use crate::format::format_number;
use crate::glyph::{canonical_char, prettify};
use crate::validator::{can_append, is_operator, Trailing};

const EMPTY: &str = "0";

/// What the result line currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultText {
    NoValue,
    Value(CompactString),
    Error(ErrorKind),
}

/// Display-ready expression and result text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub expression: CompactString,
    pub result: CompactString,
}

#[derive(Debug)]
pub struct Session {
    buffer: CompactString,
    result: ResultText,
    config: Config,
    debouncer: Debouncer,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            buffer: EMPTY.into(),
            result: ResultText::NoValue,
            debouncer: Debouncer::new(config.debounce),
            config,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn preview(&self) -> &ResultText {
        &self.result
    }

    pub fn screen(&self) -> Screen {
        let result = match &self.result {
            ResultText::NoValue => self.config.no_value.clone(),
            ResultText::Value(v) => v.clone(),
            ResultText::Error(_) => self.config.error.clone(),
        };
        Screen {
            expression: prettify(&self.buffer),
            result,
        }
    }

    /// Appends one keypad character if the edit is admissible; otherwise does nothing.
    pub fn submit_char(&mut self, c: char) -> Screen {
        let c = canonical_char(c);
        if !is_key(c) || !can_append(&self.buffer, c) {
            log::debug!("rejected {:?} after {:?}", c, self.buffer);
            return self.screen();
        }

        if self.buffer == EMPTY && (c.is_ascii_digit() || c == '.') {
            self.buffer = c.to_compact_string();
        } else {
            self.buffer.push(c);
        }
        self.schedule();
        self.screen()
    }

    pub fn backspace(&mut self) -> Screen {
        if self.buffer.chars().count() <= 1 {
            self.buffer = EMPTY.into();
        } else {
            self.buffer.pop();
        }
        self.schedule();
        self.screen()
    }

    pub fn clear(&mut self) -> Screen {
        self.debouncer.cancel();
        self.buffer = EMPTY.into();
        self.result = ResultText::NoValue;
        self.screen()
    }

    /// Evaluates the buffer. A successful result replaces the buffer so it can
    /// be extended; a failure leaves the buffer untouched.
    pub fn finalize(&mut self) -> Screen {
        self.debouncer.cancel();
        match compute(&self.buffer) {
            Ok(value) => {
                let out = format_number(value, self.config.precision);
                self.buffer = out.clone();
                self.result = ResultText::Value(out);
            }
            Err(e) => {
                log::debug!("finalize {:?} failed: {}", self.buffer, e);
                self.result = ResultText::Error(e.kind());
            }
        }
        self.screen()
    }

    /// Single parenthesis key: closes an open group when possible, otherwise
    /// opens one, inserting `*` after a value.
    pub fn parentheses(&mut self) -> Screen {
        let last = Trailing::of(&self.buffer);
        let open = self.buffer.matches('(').count();
        let close = self.buffer.matches(')').count();

        if open > close && !matches!(last, Trailing::Operator | Trailing::Open) {
            self.buffer.push(')');
        } else if matches!(last, Trailing::Digit | Trailing::Dot | Trailing::Close) {
            self.buffer.push_str("*(");
        } else if self.buffer == EMPTY {
            self.buffer = "(".into();
        } else {
            self.buffer.push('(');
        }
        self.schedule();
        self.screen()
    }

    /// Runs a due live evaluation, returning the refreshed screen if one ran.
    pub fn tick(&mut self, now: Instant) -> Option<Screen> {
        self.debouncer.poll(now)?;
        self.live_evaluate();
        Some(self.screen())
    }

    /// Runs any pending live evaluation immediately.
    pub fn settle(&mut self) -> Screen {
        if self.debouncer.flush().is_some() {
            self.live_evaluate();
        }
        self.screen()
    }

    fn schedule(&mut self) {
        self.debouncer.request(Instant::now());
    }

    fn live_evaluate(&mut self) {
        let open = self.buffer.matches('(').count();
        let close = self.buffer.matches(')').count();
        if open != close {
            self.result = ResultText::NoValue;
            return;
        }

        self.result = match compute(&self.buffer) {
            Ok(value) => ResultText::Value(format_number(value, self.config.precision)),
            Err(e) => {
                log::debug!("no preview for {:?}: {}", self.buffer, e);
                ResultText::NoValue
            }
        };
    }
}

/// Characters the keypad can submit.
fn is_key(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '(' || c == ')' || is_operator(c)
}
