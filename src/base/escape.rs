use super::Symbol;
use super::constants::ESCAPE_CHAR;

/// Double every escape character in `raw`.
pub fn escape(raw: &str) -> Symbol {
    if !raw.contains(ESCAPE_CHAR) {
        return Symbol::new(raw);
    }
    let mut out = String::with_capacity(raw.len() + 2);
    for c in raw.chars() {
        if c == ESCAPE_CHAR {
            out.push(ESCAPE_CHAR);
        }
        out.push(c);
    }
    Symbol::from(out)
}

/// Inverse of [`escape`]: collapse doubled escape characters.
pub fn unescape(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == ESCAPE_CHAR && chars.peek() == Some(&ESCAPE_CHAR) {
            chars.next();
        }
    }
    out
}
