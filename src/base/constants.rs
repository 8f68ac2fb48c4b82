//! Reserved spellings.

/// Opening parenthesis.
pub const L_PAREN: &str = "(";
/// Closing parenthesis.
pub const R_PAREN: &str = ")";
/// Argument separator.
pub const COMMA: &str = ",";

/// Structural punctuation; never a legal alphabet member.
pub const PUNCTUATION: [&str; 3] = [L_PAREN, R_PAREN, COMMA];

/// End-of-stream marker implicitly appended to every token sequence.
pub const SENTINEL: &str = "$";

/// Character doubled by the loader so it survives later display.
pub const ESCAPE_CHAR: char = '\\';

/// Required number of equality symbols.
pub const EQUALITY_COUNT: usize = 1;
/// Required number of connectives (AND, OR, IMPLIES, IFF, NOT).
pub const CONNECTIVE_COUNT: usize = 5;
/// Required number of quantifiers (UNIVERSAL, EXISTENTIAL).
pub const QUANTIFIER_COUNT: usize = 2;

/// Extension accepted for definition files.
pub const DEFINITION_EXT: &str = "txt";
