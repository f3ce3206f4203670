//! @ai:module:intent Format output for different formats (JSON, text)
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_document, format_validation_result, describe_component, to_json
//! @ai:module:depends_on model, validate
//! @ai:module:stateless true

use crate::model::{Component, Document, Method};
use crate::validate::{Severity, ValidationResult};
use colored::Colorize;
use serde::Serialize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format any serializable value as JSON
/// @ai:effects pure
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(value).unwrap_or_default()
    } else {
        serde_json::to_string(value).unwrap_or_default()
    }
}

/// @ai:intent Format a parsed document as a string
/// @ai:effects pure
pub fn format_document(document: &Document, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(document, false),
        OutputFormat::JsonPretty => to_json(document, true),
        OutputFormat::Text => format_document_text(document),
    }
}

/// @ai:intent Format a parsed document as human-readable text
/// @ai:effects pure
fn format_document_text(document: &Document) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}", document.module_name.bold()));
    if let Some(path) = &document.origin_path {
        output.push_str(&format!(" ({})", path.display().to_string().dimmed()));
    }
    output.push('\n');

    if !document.description.is_empty() {
        output.push_str(&format!("  {}\n", document.description));
    }

    if !document.dependencies.is_empty() {
        output.push_str(&format!("\n  Dependencies ({}):\n", document.dependencies.len()));
        for dep in &document.dependencies {
            if dep.items.is_empty() {
                output.push_str(&format!("    {}\n", dep.module_path.cyan()));
            } else {
                output.push_str(&format!(
                    "    {} [{}]\n",
                    dep.module_path.cyan(),
                    dep.items.join(", ")
                ));
            }
        }
    }

    output.push_str(&format!("\n  Components ({}):\n", document.components.len()));
    for component in &document.components {
        for line in describe_component(component) {
            output.push_str(&format!("    {}\n", line));
        }
    }

    if !document.notes.is_empty() {
        output.push_str(&format!("\n  Notes: {}\n", document.notes.join(", ")));
    }

    output
}

/// @ai:intent Render a component as plain outline lines, the first being its header
/// @ai:example (Constant MAX: int = 3) -> ["Constant MAX: int = 3"]
/// @ai:effects pure
pub fn describe_component(component: &Component) -> Vec<String> {
    match component {
        Component::Class {
            name,
            base_class,
            methods,
        } => {
            let mut lines = vec![match base_class {
                Some(base) => format!("Class {}({}):", name, base),
                None => format!("Class {}:", name),
            }];
            for method in methods {
                lines.extend(method.decorators.iter().map(|d| format!("  {}", d)));
                lines.push(format!("  - {}", describe_method(method)));
            }
            lines
        }
        Component::Function {
            method, docstring, ..
        } => {
            let mut lines: Vec<String> = method.decorators.clone();
            lines.push(format!("Function {}", describe_method(method)));
            if let Some(doc) = docstring {
                lines.push(format!("  \"\"\"{}\"\"\"", doc));
            }
            lines
        }
        Component::Constant {
            name,
            declared_type,
            value,
        } => match value {
            Some(value) => vec![format!("Constant {}: {} = {}", name, declared_type, value)],
            None => vec![format!("Constant {}: {}", name, declared_type)],
        },
        Component::TypeAlias { name, value } => vec![format!("Type alias: {} = {}", name, value)],
    }
}

fn describe_method(method: &Method) -> String {
    let mut text = String::new();

    if method.is_async {
        text.push_str("async ");
    }
    text.push_str(&format!("{}({})", method.name, method.parameters));

    if let Some(return_type) = &method.return_type {
        text.push_str(&format!(" -> {}", return_type));
    }

    if let Some(comment) = &method.comment {
        text.push_str(&format!("  # {}", comment));
    }
    text
}

/// @ai:intent Format validation results as a string
/// @ai:effects pure
pub fn format_validation_result(result: &ValidationResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(result, false),
        OutputFormat::JsonPretty => to_json(result, true),
        OutputFormat::Text => format_validation_result_text(result),
    }
}

/// @ai:intent Format validation results as human-readable text
/// @ai:effects pure
fn format_validation_result_text(result: &ValidationResult) -> String {
    let mut output = String::new();

    for issue in &result.issues {
        let severity_str = match issue.severity {
            Severity::Error => "ERROR".red().bold(),
            Severity::Warning => "WARN".yellow().bold(),
            Severity::Info => "INFO".blue(),
        };

        let location = match (&issue.file, &issue.component) {
            (Some(file), Some(component)) => format!("{}:{}", file.display(), component),
            (Some(file), None) => file.display().to_string(),
            (None, Some(component)) => component.clone(),
            (None, None) => "<input>".to_string(),
        };

        output.push_str(&format!(
            "{} {} - {} ({})\n",
            severity_str,
            location.dimmed(),
            issue.message,
            issue.code.dimmed()
        ));

        if let Some(suggestion) = &issue.suggestion {
            output.push_str(&format!("  {} {}\n", "hint:".cyan(), suggestion));
        }
    }

    output.push('\n');
    output.push_str(&format!(
        "Checked {} files, {} components\n",
        result.files_checked, result.components_checked
    ));

    if result.errors > 0 {
        output.push_str(&format!(
            "{} errors, {} warnings\n",
            result.errors.to_string().red().bold(),
            result.warnings.to_string().yellow()
        ));
    } else if result.warnings > 0 {
        output.push_str(&format!(
            "{} {} warnings\n",
            "OK".green().bold(),
            result.warnings.to_string().yellow()
        ));
    } else {
        output.push_str(&format!("{} No issues found\n", "OK".green().bold()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_content;

    const BLUEPRINT: &str = "# api.users\nUser endpoints\ndeps: .models.user[User]\nUsers(Resource):\n  - count: int\n  @cached\n  - async get(id: int) -> User  # by id\n@app.get\ndef health() -> bool:\n  \"\"\"Liveness\"\"\"\nLIMIT: int = 50\nUserId = int\nnotes: paginated";

    #[test]
    fn test_describe_components() {
        colored::control::set_override(false);
        let doc = parse_content(BLUEPRINT).unwrap();

        let described: Vec<Vec<String>> = doc.components.iter().map(describe_component).collect();

        assert_eq!(
            described[0],
            vec![
                "Class Users(Resource):",
                "  - count() -> int",
                "  @cached",
                "  - async get(id: int) -> User  # by id",
            ]
        );
        assert_eq!(
            described[1],
            vec!["@app.get", "Function health() -> bool", "  \"\"\"Liveness\"\"\""]
        );
        assert_eq!(described[2], vec!["Constant LIMIT: int = 50"]);
        assert_eq!(described[3], vec!["Type alias: UserId = int"]);
    }

    #[test]
    fn test_json_output_round_trips() {
        let doc = parse_content(BLUEPRINT).unwrap();
        let json = format_document(&doc, OutputFormat::Json);

        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_text_output_lists_sections() {
        colored::control::set_override(false);
        let doc = parse_content(BLUEPRINT).unwrap();
        let text = format_document(&doc, OutputFormat::Text);

        assert!(text.starts_with("api.users\n"));
        assert!(text.contains("Dependencies (1):"));
        assert!(text.contains(".models.user [User]"));
        assert!(text.contains("Components (4):"));
        assert!(text.contains("Notes: paginated"));
    }

    #[test]
    fn test_validation_summary() {
        colored::control::set_override(false);
        let text = format_validation_result(&ValidationResult::default(), OutputFormat::Text);
        assert!(text.contains("Checked 0 files, 0 components"));
        assert!(text.contains("No issues found"));
    }
}
