#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing {
    Empty,
    Digit,
    Dot,
    Operator,
    Open,
    Close,
    Other,
}

impl Trailing {
    pub fn of(buffer: &str) -> Self {
        match buffer.trim().chars().next_back() {
            None => Trailing::Empty,
            Some(c) => Self::classify(c),
        }
    }

    fn classify(c: char) -> Self {
        match c {
            '0'..='9' => Trailing::Digit,
            '.' => Trailing::Dot,
            c if is_operator(c) => Trailing::Operator,
            '(' => Trailing::Open,
            ')' => Trailing::Close,
            _ => Trailing::Other,
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, Trailing::Digit | Trailing::Dot)
    }
}

pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%')
}

/// Suffix after the last operator or parenthesis; `%` does not split segments.
fn numeric_segment(buffer: &str) -> &str {
    match buffer.rfind(['+', '-', '*', '/', '(', ')']) {
        Some(i) => &buffer[i + 1..],
        None => buffer,
    }
}

/// Whether `candidate` may be appended to `buffer`.
///
/// Only the trailing character and the numeric segment it ends are consulted.
/// Two operator characters in a row are never accepted, even though the
/// tokenizer reads `2*-3` as a unary minus.
pub fn can_append(buffer: &str, candidate: char) -> bool {
    let last = Trailing::of(buffer);

    // Cannot start with a binary operator
    if buffer == "0" && is_operator(candidate) && candidate != '-' {
        return false;
    }
    if last == Trailing::Operator && is_operator(candidate) {
        return false;
    }
    if candidate == '.' && numeric_segment(buffer).contains('.') {
        return false;
    }
    if candidate == '%' && last == Trailing::Operator {
        return false;
    }
    if candidate == '(' && last.is_numeric() {
        return false;
    }
    if candidate == ')' && matches!(last, Trailing::Operator | Trailing::Open) {
        return false;
    }
    true
}
