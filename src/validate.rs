//! @ai:module:intent Check parsed blueprints for structural problems
//! @ai:module:layer application
//! @ai:module:public_api validate_document, validate_file, validate_directory, ValidationConfig, ValidationResult, ValidationIssue, Severity
//! @ai:module:depends_on parser, discover, model, error
//! @ai:module:stateless true

use crate::discover::discover_blueprints;
use crate::error::Result;
use crate::model::{Component, Document};
use crate::parser::NotationParser;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// @ai:intent Severity level for validation issues
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[default]
    Warning,
    Info,
}

/// @ai:intent A single problem found in a blueprint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    pub file: Option<PathBuf>,
    pub component: Option<String>,
    pub suggestion: Option<String>,
}

/// @ai:intent Configuration for the validator
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub require_description: bool,
    pub warn_empty: bool,
    pub extensions: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_description: false,
            warn_empty: true,
            extensions: vec![".md".to_string()],
        }
    }
}

impl ValidationConfig {
    /// @ai:intent Create a strict validation configuration
    pub fn strict() -> Self {
        Self {
            require_description: true,
            ..Default::default()
        }
    }
}

/// @ai:intent Result of validating one or more blueprints
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidationResult {
    pub files_checked: usize,
    pub components_checked: usize,
    pub issues: Vec<ValidationIssue>,
    pub errors: usize,
    pub warnings: usize,
}

impl ValidationResult {
    /// @ai:intent Check if validation passed (no errors)
    pub fn passed(&self) -> bool {
        self.errors == 0
    }

    /// @ai:intent Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.files_checked += other.files_checked;
        self.components_checked += other.components_checked;
        self.issues.extend(other.issues);
        self.errors += other.errors;
        self.warnings += other.warnings;
    }

    fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info => {}
        }
        self.issues.push(issue);
    }
}

/// @ai:intent Validate a single blueprint file
/// @ai:post a file that fails to parse is reported as an E001 issue, not an Err
/// @ai:effects fs:read
pub fn validate_file(path: &Path, config: &ValidationConfig) -> ValidationResult {
    validate_path(&NotationParser::new(), path, config)
}

/// @ai:intent Validate every blueprint under a directory
/// @ai:effects fs:read
pub fn validate_directory(dir: &Path, config: &ValidationConfig) -> Result<ValidationResult> {
    if !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a directory", dir.display()),
        )
        .into());
    }

    let parser = NotationParser::new();
    let mut result = ValidationResult::default();

    for path in discover_blueprints(dir, &config.extensions) {
        result.merge(validate_path(&parser, &path, config));
    }

    Ok(result)
}

fn validate_path(parser: &NotationParser, path: &Path, config: &ValidationConfig) -> ValidationResult {
    match parser.parse_file(path) {
        Ok(document) => validate_document(&document, config),
        Err(e) => {
            let mut result = ValidationResult {
                files_checked: 1,
                ..Default::default()
            };
            result.push(ValidationIssue {
                severity: Severity::Error,
                code: "E001".to_string(),
                message: format!("Failed to parse blueprint: {}", e),
                file: Some(path.to_path_buf()),
                component: None,
                suggestion: Some("Start the file with `# module.name`".to_string()),
            });
            result
        }
    }
}

/// @ai:intent Validate an already parsed document
/// @ai:effects pure
pub fn validate_document(document: &Document, config: &ValidationConfig) -> ValidationResult {
    let mut result = ValidationResult {
        files_checked: 1,
        components_checked: document.components.len(),
        ..Default::default()
    };
    let file = document.origin_path.clone();

    let issue = |severity, code: &str, message: String, component: Option<&str>| ValidationIssue {
        severity,
        code: code.to_string(),
        message,
        file: file.clone(),
        component: component.map(str::to_string),
        suggestion: None,
    };

    if config.require_description && document.description.is_empty() {
        result.push(ValidationIssue {
            suggestion: Some("Put a one-line description on the second line".to_string()),
            ..issue(
                Severity::Warning,
                "W001",
                format!("Module `{}` has no description", document.module_name),
                None,
            )
        });
    }

    if config.warn_empty && document.components.is_empty() {
        result.push(issue(
            Severity::Warning,
            "W002",
            format!("Module `{}` declares no components", document.module_name),
            None,
        ));
    }

    let mut seen = HashSet::new();
    for component in &document.components {
        let name = component.name();

        if !seen.insert(name) {
            result.push(issue(
                Severity::Warning,
                "W003",
                format!("Component `{}` is declared more than once", name),
                Some(name),
            ));
        }

        if let Component::Class { methods, .. } = component {
            if methods.is_empty() {
                result.push(issue(
                    Severity::Warning,
                    "W004",
                    format!("Class `{}` has no parseable members", name),
                    Some(name),
                ));
            }
        }
    }

    for dependency in &document.dependencies {
        if dependency.module_path.trim_start_matches('.').is_empty() {
            result.push(issue(
                Severity::Info,
                "I001",
                "Dependency names no module".to_string(),
                None,
            ));
        }
    }

    result
}
