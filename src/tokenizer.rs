use compact_str::{CompactString, ToCompactString};
use thiserror::Error;

use crate::glyph;

#[derive(Debug, Default)]
enum TokenizerState {
    #[default]
    Clean,
    InNumber {
        literal: CompactString,
        has_dot: bool,
    },
    InSymbol(Token),
}

/// Character-fed tokenizer. Feed characters with [`Tokenizer::update`] and
/// drain the last pending token with [`Tokenizer::finalize`].
#[derive(Debug, Default)]
pub struct Tokenizer {
    state: TokenizerState,
    prev: Option<char>,
}

impl Tokenizer {
    pub fn update(&mut self, c: char) -> Result<Option<Token>, TokenizeError> {
        // Ignore whitespace
        if c.is_whitespace() {
            return Ok(None);
        }
        let token = self.step(c);
        self.prev = Some(c);
        token
    }

    fn step(&mut self, c: char) -> Result<Option<Token>, TokenizeError> {
        use TokenizerState::*;

        match self.state {
            Clean => {
                match c {
                    '0'..='9' => {
                        self.state = InNumber {
                            literal: c.to_compact_string(),
                            has_dot: false,
                        }
                    }
                    '.' => {
                        self.state = InNumber {
                            literal: c.to_compact_string(),
                            has_dot: true,
                        }
                    }
                    // Unary minus starts a literal
                    '-' if self.expects_operand() => {
                        self.state = InNumber {
                            literal: c.to_compact_string(),
                            has_dot: false,
                        }
                    }
                    _ => match Operation::from_char(c) {
                        Some(op) => self.state = InSymbol(Token::Op(op)),
                        None => match c {
                            '(' => self.state = InSymbol(Token::Paren(Paren::Open)),
                            ')' => self.state = InSymbol(Token::Paren(Paren::Close)),
                            _ => return Err(TokenizeError::InvalidCharacter(c)),
                        },
                    },
                }
                Ok(None)
            }
            InNumber {
                ref mut literal,
                ref mut has_dot,
            } => match c {
                '0'..='9' => {
                    literal.push(c);
                    Ok(None)
                }
                '.' if !*has_dot => {
                    *has_dot = true;
                    literal.push(c);
                    Ok(None)
                }
                c => {
                    let token = self.finalize()?;
                    self.step(c)?;
                    Ok(token)
                }
            },
            InSymbol(_) => {
                let token = self.finalize()?;
                self.step(c)?;
                Ok(token)
            }
        }
    }

    /// Whether a `-` at the current position negates a literal rather than subtracting.
    fn expects_operand(&self) -> bool {
        match self.prev {
            None => true,
            Some(p) => p == '(' || Operation::from_char(p).is_some(),
        }
    }

    pub fn finalize(&mut self) -> Result<Option<Token>, TokenizeError> {
        use TokenizerState::*;
        let token = match std::mem::take(&mut self.state) {
            Clean => None,
            InNumber { literal, .. } => {
                // A sign or dot without digits
                if !literal.chars().any(|c| c.is_ascii_digit()) {
                    return Err(TokenizeError::InvalidNumber(literal));
                }
                let Ok(value) = literal.parse::<Value>() else {
                    return Err(TokenizeError::InvalidNumber(literal));
                };
                Some(Token::Val(value))
            }
            InSymbol(token) => Some(token),
        };
        Ok(token)
    }
}

/// Tokenizes a whole expression. Display glyphs are accepted and mapped back
/// to their canonical operators first.
pub fn tokenize(text: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokens = vec![];
    let mut tokenizer = Tokenizer::default();
    for c in glyph::sanitize(text).chars() {
        if let Some(token) = tokenizer.update(c)? {
            tokens.push(token)
        }
    }
    if let Some(token) = tokenizer.finalize()? {
        tokens.push(token)
    }
    log::trace!("tokenized {:?} into {:?}", text, tokens);
    Ok(tokens)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("Invalid character: {0:?}")]
    InvalidCharacter(char),
    #[error("Invalid number: {0:?}")]
    InvalidNumber(CompactString),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Val(Value),
    Op(Operation),
    Paren(Paren),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Operation {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Sub),
            '*' => Some(Operation::Mul),
            '/' => Some(Operation::Div),
            '%' => Some(Operation::Rem),
            _ => None,
        }
    }

    pub fn priority(self) -> u8 {
        match self {
            Operation::Add | Operation::Sub => 10,
            Operation::Mul | Operation::Div | Operation::Rem => 20,
        }
    }

    /// All operators are left-associative.
    pub fn is_left_associative(self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

pub type Value = f64;
