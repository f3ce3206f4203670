//! @ai:module:intent Decide which component kind a line starts and build it
//! @ai:module:layer application
//! @ai:module:public_api classify
//! @ai:module:depends_on model, member, patterns
//! @ai:module:stateless true

use crate::member::parse_member;
use crate::model::{Component, Method};
use crate::patterns::Patterns;
use tracing::trace;

/// @ai:intent The line being classified together with its neighbours
struct LineContext<'a> {
    lines: &'a [&'a str],
    index: usize,
    line: &'a str,
}

type Matcher = fn(&Patterns, &LineContext<'_>) -> Option<Component>;

/// Rules in priority order. The first one producing a component wins.
const MATCHERS: [(&str, Matcher); 4] = [
    ("assignment", match_assignment),
    ("constant", match_constant),
    ("class", match_class),
    ("function", match_function),
];

/// @ai:intent Classify the line at `index` and build the component it starts
/// @ai:pre lines are the raw (untrimmed) lines of the whole document
/// @ai:post None when no rule matches; the caller skips the line
/// @ai:effects pure
pub fn classify(patterns: &Patterns, lines: &[&str], index: usize) -> Option<Component> {
    let ctx = LineContext {
        lines,
        index,
        line: lines.get(index)?.trim(),
    };

    MATCHERS.iter().find_map(|(rule, matcher)| {
        let component = matcher(patterns, &ctx)?;
        trace!(rule, line = index + 1, name = component.name(), "classified");
        Some(component)
    })
}

/// @ai:intent `Name = value` forms: type aliases and auto-typed constants
/// @ai:edge_cases a name containing `:` or matching neither naming rule falls through to later rules
/// @ai:effects pure
fn match_assignment(_: &Patterns, ctx: &LineContext<'_>) -> Option<Component> {
    if ctx.line.starts_with('-') {
        return None;
    }

    let (name, value) = ctx.line.split_once('=')?;
    let (name, value) = (name.trim(), value.trim());

    if name.contains(':') {
        return None;
    }

    if is_type_name(name) {
        Some(Component::TypeAlias {
            name: name.to_string(),
            value: value.to_string(),
        })
    } else if is_constant_name(name) {
        Some(Component::Constant {
            name: name.to_string(),
            declared_type: "auto".to_string(),
            value: Some(value.to_string()),
        })
    } else {
        None
    }
}

/// PascalCase, or mentions "type" anywhere.
fn is_type_name(name: &str) -> bool {
    let starts_upper = name.chars().next().is_some_and(char::is_uppercase);
    (starts_upper && name.chars().any(char::is_lowercase)) || name.to_lowercase().contains("type")
}

/// All cased characters uppercase, with an underscore.
fn is_constant_name(name: &str) -> bool {
    name.chars().any(char::is_uppercase)
        && !name.chars().any(char::is_lowercase)
        && name.contains('_')
}

/// @ai:intent `NAME: type [= value]`
/// @ai:effects pure
fn match_constant(patterns: &Patterns, ctx: &LineContext<'_>) -> Option<Component> {
    let captures = patterns.constant.captures(ctx.line)?;

    Some(Component::Constant {
        name: captures[1].to_string(),
        declared_type: captures[2].trim().to_string(),
        value: captures.get(3).map(|m| m.as_str().trim().to_string()),
    })
}

/// @ai:intent `Name[(Base)]:` followed by `- member` lines
/// @ai:effects pure
fn match_class(patterns: &Patterns, ctx: &LineContext<'_>) -> Option<Component> {
    let captures = patterns.class_header.captures(ctx.line)?;
    let next = ctx.lines.get(ctx.index + 1)?;
    if !next.trim().starts_with('-') {
        return None;
    }

    let mut methods = Vec::new();
    let mut pending_decorators = Vec::new();

    for raw in &ctx.lines[ctx.index + 1..] {
        let member = raw.trim();

        if let Some(rest) = member.strip_prefix('-') {
            if let Some(mut method) = parse_member(patterns, rest.trim()) {
                method.decorators.append(&mut pending_decorators);
                methods.push(method);
            }
        } else if member.starts_with('@') {
            pending_decorators.push(member.to_string());
        } else if !member.is_empty() {
            break;
        }
    }

    Some(Component::Class {
        name: captures[1].to_string(),
        base_class: captures.get(2).map(|m| m.as_str().to_string()),
        methods,
    })
}

/// @ai:intent `[async ]def name(params)[ -> type]:` with decorators above and a docstring below
/// @ai:effects pure
fn match_function(patterns: &Patterns, ctx: &LineContext<'_>) -> Option<Component> {
    let captures = patterns.function.captures(ctx.line)?;
    let name = captures[1].to_string();

    let method = Method {
        name: name.clone(),
        parameters: captures[2].to_string(),
        return_type: captures.get(3).map(|m| m.as_str().trim().to_string()),
        comment: None,
        decorators: preceding_decorators(ctx.lines, ctx.index),
        is_async: ctx.line.starts_with("async "),
    };

    Some(Component::Function {
        name,
        method,
        docstring: adjacent_docstring(ctx.lines, ctx.index),
    })
}

/// @ai:intent Collect the run of `@` lines directly above `index`, in source order
/// @ai:effects pure
fn preceding_decorators(lines: &[&str], index: usize) -> Vec<String> {
    let mut decorators = Vec::new();
    let mut i = index;

    while i > 0 {
        let above = lines[i - 1].trim();
        if !above.starts_with('@') {
            break;
        }
        decorators.push(above.to_string());
        i -= 1;
    }

    decorators.reverse();
    decorators
}

/// @ai:intent Single-line docstring on the line right after the signature
/// @ai:effects pure
fn adjacent_docstring(lines: &[&str], index: usize) -> Option<String> {
    let next = lines.get(index + 1)?.trim();
    next.starts_with("\"\"\"")
        .then(|| next.trim_matches('"').to_string())
}
