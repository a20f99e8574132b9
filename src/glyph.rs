use compact_str::CompactString;

/// Maps a display glyph back to its canonical character. Other characters pass through.
pub fn canonical_char(c: char) -> char {
    match c {
        '×' => '*',
        '÷' => '/',
        '−' => '-',
        c => c,
    }
}

fn display_char(c: char) -> char {
    match c {
        '*' => '×',
        '/' => '÷',
        '-' => '−',
        c => c,
    }
}

/// Canonicalizes display glyphs and strips whitespace.
pub fn sanitize(text: &str) -> CompactString {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(canonical_char)
        .collect()
}

/// Renders a canonical expression for display.
pub fn prettify(text: &str) -> CompactString {
    text.chars().map(display_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettify_swaps_operators() {
        assert_eq!(prettify("3*(2-1)/4%2+1"), "3×(2−1)÷4%2+1");
        assert_eq!(prettify("1e-7"), "1e−7");
    }

    #[test]
    fn test_sanitize_reverses_prettify() {
        let canonical = "-3*(2-1)/4";
        assert_eq!(sanitize(&prettify(canonical)), canonical);
        assert_eq!(sanitize(" 1 ×\t2 "), "1*2");
    }
}
