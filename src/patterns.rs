//! @ai:module:intent Compiled line-shape patterns shared by the notation sub-parsers
//! @ai:module:layer domain
//! @ai:module:public_api Patterns
//! @ai:module:stateless true

use regex::Regex;

/// @ai:intent Holds every regex the parser needs, compiled once per parser
#[derive(Debug, Clone)]
pub struct Patterns {
    /// `NAME:` at the start of a line
    pub constant_prefix: Regex,
    /// `NAME: type [= value]`
    pub constant: Regex,
    /// `Name[(Base)][:]`
    pub class_header: Regex,
    /// `[async ]def name(params)[ -> type][:]`
    pub function: Regex,
    /// `[async ]name(params)[ -> type]`
    pub member: Regex,
    /// Start of a function definition, used for span boundaries
    pub function_start: Regex,
    /// Bare identifier with optional parenthesized text, used for span boundaries
    pub bare_identifier: Regex,
}

impl Patterns {
    /// @ai:intent Compile all line-shape patterns
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            constant_prefix: Regex::new(r"^[A-Z][A-Z0-9_]*:").unwrap(),
            constant: Regex::new(r"^([A-Z][A-Z0-9_]*):\s*([^=]+)(?:\s*=\s*(.+))?$").unwrap(),
            class_header: Regex::new(r"^(\w+)(?:\(([^)]+)\))?:?\s*$").unwrap(),
            function: Regex::new(r"^(?:async\s+)?def\s+(\w+)\((.*?)\)(?:\s*->\s*(.+?))?:?\s*$")
                .unwrap(),
            member: Regex::new(r"^(?:async\s+)?(\w+)\((.*?)\)(?:\s*->\s*(.+))?$").unwrap(),
            function_start: Regex::new(r"^(?:async\s+)?def\s+\w+\(").unwrap(),
            bare_identifier: Regex::new(r"^\w+(?:\([^)]*\))?:?\s*$").unwrap(),
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_pattern_captures_type_and_value() {
        let p = Patterns::new();
        let caps = p.constant.captures("MAX_SIZE: int = 100").unwrap();
        assert_eq!(&caps[1], "MAX_SIZE");
        assert_eq!(caps[2].trim(), "int");
        assert_eq!(&caps[3], "100");
    }

    #[test]
    fn test_function_pattern_return_type_excludes_colon() {
        let p = Patterns::new();
        let caps = p.function.captures("def run(x: int) -> str:").unwrap();
        assert_eq!(&caps[1], "run");
        assert_eq!(&caps[2], "x: int");
        assert_eq!(&caps[3], "str");
    }

    #[test]
    fn test_bare_identifier_rejects_prose() {
        let p = Patterns::new();
        assert!(p.bare_identifier.is_match("Widget(Base):"));
        assert!(!p.bare_identifier.is_match("some prose here"));
    }
}
