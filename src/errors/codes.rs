//! Error code definitions for pipeline diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Alphabet errors (cardinality, arity, duplicates, forbidden symbols)
//! - E02xx: Formula structure errors (parentheses, predicate arity, sentinel)
//! - E03xx: Parse errors (unexpected token, premature end, trailing input)
//! - E09xx: Input/output errors

use std::fmt;

/// Error codes for pipeline diagnostics
///
/// Each error code represents one rule of the pipeline, so a failure
/// can be traced back to the check that rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Alphabet errors
    // =========================================================================
    /// Wrong number of equality symbols, connectives or quantifiers
    E0101,
    /// Predicate arity is not a non-negative integer
    E0102,
    /// Symbol declared twice within one class
    E0103,
    /// Symbol declared in two different classes
    E0104,
    /// Symbol is one of `(`, `)` or `,`
    E0105,

    // =========================================================================
    // E02xx: Formula structure errors
    // =========================================================================
    /// Opening and closing parentheses do not match up
    E0201,
    /// Predicate applied with the wrong number of arguments
    E0202,
    /// Formula contains the end-of-input marker
    E0203,

    // =========================================================================
    // E03xx: Parse errors
    // =========================================================================
    /// Token not in the expected set
    E0301,
    /// Input ended inside a production
    E0302,
    /// Tokens left over after a complete formula
    E0303,
    /// Formula nesting exceeds the configured limit
    E0304,
    /// Nothing was parsed
    E0305,

    // =========================================================================
    // E09xx: Input/output errors
    // =========================================================================
    /// Input file could not be read
    E0901,
    /// Input file has an unsupported extension
    E0902,
    /// Output file could not be written
    E0903,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
            Self::E0903 => "E0903",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 | Self::E0105 => "alphabet error",
            Self::E0201 | Self::E0202 | Self::E0203 => "formula error",
            Self::E0301 | Self::E0302 | Self::E0303 | Self::E0304 | Self::E0305 => "parse error",
            Self::E0901 | Self::E0902 | Self::E0903 => "input/output error",
        }
    }

    /// Get the default message for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "incorrect cardinality",
            Self::E0102 => "predicate arity is not an integer",
            Self::E0103 => "duplicate symbol",
            Self::E0104 => "symbol declared in two classes",
            Self::E0105 => "forbidden symbol",
            Self::E0201 => "unbalanced parentheses",
            Self::E0202 => "incorrect predicate arity",
            Self::E0203 => "reserved end-of-input symbol",
            Self::E0301 => "unexpected token",
            Self::E0302 => "unexpected end of input",
            Self::E0303 => "trailing input",
            Self::E0304 => "formula nested too deeply",
            Self::E0305 => "empty formula",
            Self::E0901 => "unreadable input",
            Self::E0902 => "unsupported file extension",
            Self::E0903 => "unwritable output",
        }
    }

    /// Check if this error was raised before the parser ran
    pub fn is_pre_parse(&self) -> bool {
        !matches!(
            self,
            Self::E0301 | Self::E0302 | Self::E0303 | Self::E0304 | Self::E0305
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::E0201.as_str(), "E0201");
        assert_eq!(ErrorCode::E0901.as_str(), "E0901");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::E0104), "E0104");
    }

    #[test]
    fn test_error_code_default_message() {
        assert_eq!(ErrorCode::E0201.default_message(), "unbalanced parentheses");
        assert_eq!(ErrorCode::E0101.default_message(), "incorrect cardinality");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::E0103.category_description(), "alphabet error");
        assert_eq!(ErrorCode::E0202.category_description(), "formula error");
        assert_eq!(ErrorCode::E0301.category_description(), "parse error");
    }

    #[test]
    fn test_is_pre_parse() {
        assert!(ErrorCode::E0105.is_pre_parse());
        assert!(ErrorCode::E0203.is_pre_parse());
        assert!(!ErrorCode::E0302.is_pre_parse());
    }
}
