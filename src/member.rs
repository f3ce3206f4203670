//! @ai:module:intent Parse one class member or signature line into a Method
//! @ai:module:layer application
//! @ai:module:public_api parse_member
//! @ai:module:depends_on model, patterns
//! @ai:module:stateless true

use crate::model::Method;
use crate::patterns::Patterns;

/// @ai:intent Parse a member line (leading `-` already removed) into a method or property
/// @ai:pre line is trimmed
/// @ai:post None when the text is neither a property nor a call signature
/// @ai:example ("name: str") -> property name with return_type "str"
/// @ai:example ("async fetch(id: int) -> User  # remote") -> async method with comment
/// @ai:effects pure
pub fn parse_member(patterns: &Patterns, line: &str) -> Option<Method> {
    let (line, comment) = split_comment(line);

    if line.contains(':') && !line.contains('(') {
        let (name, declared_type) = line.split_once(':')?;
        return Some(Method {
            name: name.trim().to_string(),
            parameters: String::new(),
            return_type: Some(declared_type.trim().to_string()),
            comment,
            ..Default::default()
        });
    }

    let captures = patterns.member.captures(line)?;
    Some(Method {
        name: captures[1].to_string(),
        parameters: captures[2].to_string(),
        return_type: captures.get(3).map(|m| m.as_str().trim().to_string()),
        comment,
        decorators: Vec::new(),
        is_async: line.trim_start().starts_with("async "),
    })
}

/// @ai:intent Separate an inline `#` comment from the member text
/// @ai:effects pure
fn split_comment(line: &str) -> (&str, Option<String>) {
    match line.split_once('#') {
        Some((code, comment)) => {
            let comment = comment.trim();
            let comment = (!comment.is_empty()).then(|| comment.to_string());
            (code.trim(), comment)
        }
        None => (line, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<Method> {
        parse_member(&Patterns::new(), line)
    }

    #[test]
    fn test_method_with_return_and_comment() {
        let method = parse("bar(x: int) -> str  # greeting").unwrap();

        assert_eq!(method.name, "bar");
        assert_eq!(method.parameters, "x: int");
        assert_eq!(method.return_type.as_deref(), Some("str"));
        assert_eq!(method.comment.as_deref(), Some("greeting"));
        assert!(!method.is_async);
    }

    #[test]
    fn test_property_uses_return_type_for_declared_type() {
        let method = parse("email: str  # unique").unwrap();

        assert_eq!(method.name, "email");
        assert_eq!(method.parameters, "");
        assert_eq!(method.return_type.as_deref(), Some("str"));
        assert_eq!(method.comment.as_deref(), Some("unique"));
    }

    #[test]
    fn test_async_method() {
        let method = parse("async fetch(id: int) -> User").unwrap();

        assert_eq!(method.name, "fetch");
        assert!(method.is_async);
        assert_eq!(method.return_type.as_deref(), Some("User"));
    }

    #[test]
    fn test_method_without_return_type() {
        let method = parse("__init__(name: str, age: int)").unwrap();

        assert_eq!(method.name, "__init__");
        assert_eq!(method.parameters, "name: str, age: int");
        assert_eq!(method.return_type, None);
        assert_eq!(method.comment, None);
    }

    #[test]
    fn test_empty_comment_is_dropped() {
        let method = parse("close() #").unwrap();
        assert_eq!(method.comment, None);
    }

    #[test]
    fn test_unrecognized_member() {
        assert!(parse("just some words").is_none());
    }
}
