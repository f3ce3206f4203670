//! @ai:module:intent Extract blueprint references from a `deps:` directive
//! @ai:module:layer application
//! @ai:module:public_api parse_dependencies
//! @ai:module:depends_on model
//! @ai:module:stateless true

use crate::model::Dependency;

/// @ai:intent Parse the text after `deps:` into blueprint references
/// @ai:post only entries starting with `.` or `@` produce a Dependency
/// @ai:post bracket items are kept as split, so `[]` yields one empty item
/// @ai:example (".models[User, Post]; requests") -> [Dependency { ".models", ["User", "Post"] }]
/// @ai:example ("@core.database") -> [Dependency { "core.database", [] }]
/// @ai:effects pure
pub fn parse_dependencies(deps: &str) -> Vec<Dependency> {
    deps.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter(|entry| is_blueprint_reference(entry))
        .map(parse_reference)
        .collect()
}

/// @ai:intent Library dependencies are declared without a reference prefix
/// @ai:effects pure
fn is_blueprint_reference(entry: &str) -> bool {
    entry.starts_with('.') || entry.starts_with('@')
}

/// @ai:intent Parse one `.path[items]` or `@path` reference
/// @ai:effects pure
fn parse_reference(entry: &str) -> Dependency {
    match (entry.find('['), entry.find(']')) {
        (Some(open), Some(close)) => {
            let module_path = entry[..open].trim();
            // a `]` before the `[` reads as an empty body
            let body = if close > open { &entry[open + 1..close] } else { "" };

            Dependency {
                module_path: strip_at(module_path).to_string(),
                items: body
                    .split(',')
                    .map(str::trim)
                    .map(str::to_string)
                    .collect(),
            }
        }
        _ => Dependency {
            module_path: strip_at(entry).to_string(),
            items: Vec::new(),
        },
    }
}

fn strip_at(path: &str) -> &str {
    path.strip_prefix('@').unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dep(path: &str, items: &[&str]) -> Dependency {
        Dependency {
            module_path: path.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_dot_reference_keeps_leading_dot() {
        assert_eq!(
            parse_dependencies(".models[User, Post]; requests"),
            vec![dep(".models", &["User", "Post"])]
        );
    }

    #[test]
    fn test_at_reference_strips_prefix() {
        assert_eq!(
            parse_dependencies("@core.database[get_db]; @api.users"),
            vec![dep("core.database", &["get_db"]), dep("api.users", &[])]
        );
    }

    #[test]
    fn test_library_dependencies_are_dropped() {
        assert!(parse_dependencies("fastapi[FastAPI]; pydantic; ;").is_empty());
    }

    #[test]
    fn test_unclosed_bracket_is_whole_module() {
        assert_eq!(
            parse_dependencies(".models[User"),
            vec![dep(".models[User", &[])]
        );
    }

    #[test]
    fn test_empty_bracket_entries_are_kept() {
        assert_eq!(
            parse_dependencies("@models[]; .a[User, ]"),
            vec![dep("models", &[""]), dep(".a", &["User", ""])]
        );
    }

    #[test]
    fn test_reversed_brackets() {
        assert_eq!(parse_dependencies(".a]b[c"), vec![dep(".a]b", &[""])]);
    }
}
