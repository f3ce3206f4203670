//! @ai:module:intent Find the last line that belongs to a component
//! @ai:module:layer application
//! @ai:module:public_api span_end
//! @ai:module:depends_on patterns
//! @ai:module:stateless true

use crate::patterns::Patterns;

/// @ai:intent Return the index of the last line belonging to the component starting at `start`
/// @ai:pre start < lines.len()
/// @ai:post start <= result < lines.len()
/// @ai:complexity O(n) in the remaining lines
/// @ai:effects pure
pub fn span_end(patterns: &Patterns, lines: &[&str], start: usize) -> usize {
    let mut i = start + 1;

    while i < lines.len() {
        let line = lines[i].trim();

        if line.is_empty() || line.starts_with("\"\"\"") {
            i += 1;
            continue;
        }

        if is_directive(line) || starts_new_component(patterns, line) {
            return i - 1;
        }

        i += 1;
    }

    lines.len().saturating_sub(1).max(start)
}

/// @ai:intent Check for `deps:`, `notes:` or a comment/header line
/// @ai:effects pure
fn is_directive(line: &str) -> bool {
    line.starts_with("deps:") || line.starts_with("notes:") || line.starts_with('#')
}

/// @ai:intent Check whether a non-continuation line looks like the start of another component
/// @ai:effects pure
fn starts_new_component(patterns: &Patterns, line: &str) -> bool {
    // `-` members and `@` decorators continue a class body
    if line.starts_with('-') || line.starts_with('@') {
        return false;
    }

    patterns.function_start.is_match(line)
        || patterns.bare_identifier.is_match(line)
        || patterns.constant_prefix.is_match(line)
        || line.contains('=')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end(text: &str, start: usize) -> usize {
        let lines: Vec<&str> = text.split('\n').collect();
        span_end(&Patterns::new(), &lines, start)
    }

    #[test]
    fn test_class_body_runs_until_next_component() {
        let text = "User(Base):\n  - name: str\n\n  @property\n  - age() -> int\nMAX: int = 3";
        assert_eq!(end(text, 0), 4);
    }

    #[test]
    fn test_directive_ends_span() {
        let text = "def run():\n  \"\"\"Run it\"\"\"\nnotes: fast";
        assert_eq!(end(text, 0), 1);
    }

    #[test]
    fn test_comment_line_ends_span() {
        let text = "def run():\n  # implementation notes\n- stray()";
        assert_eq!(end(text, 0), 0);
    }

    #[test]
    fn test_span_reaches_end_of_input() {
        let text = "Widget:\n- a()\n- b()\n\n";
        assert_eq!(end(text, 0), 4);
    }

    #[test]
    fn test_prose_line_does_not_end_span() {
        let text = "Widget:\n- a()\nsome prose here\n- b()\nOther = int";
        assert_eq!(end(text, 0), 3);
    }

    #[test]
    fn test_last_line_component() {
        assert_eq!(end("UserId = str", 0), 0);
    }
}
