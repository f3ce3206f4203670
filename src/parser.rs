//! @ai:module:intent Drive a single forward pass over blueprint text and assemble the Document
//! @ai:module:layer application
//! @ai:module:public_api NotationParser, parse_content, parse_file
//! @ai:module:depends_on classifier, deps, span, patterns, model, error
//! @ai:module:stateless true
//! @ai:module:thread_safe true

use crate::classifier::classify;
use crate::deps::parse_dependencies;
use crate::error::{Error, Result};
use crate::model::Document;
use crate::patterns::Patterns;
use crate::span::span_end;
use std::path::Path;
use tracing::{debug, trace};

const HEADER_MARKER: char = '#';
const DEPS_DIRECTIVE: &str = "deps:";
const NOTES_DIRECTIVE: &str = "notes:";

/// @ai:intent Parses compact blueprint notation into Documents
/// @ai:context holds only compiled patterns, so one instance can be shared across threads
#[derive(Debug, Clone, Default)]
pub struct NotationParser {
    patterns: Patterns,
}

impl NotationParser {
    /// @ai:intent Create a parser with freshly compiled patterns
    pub fn new() -> Self {
        Self {
            patterns: Patterns::new(),
        }
    }

    /// @ai:intent Parse a blueprint file and record where it came from
    /// @ai:pre path exists and is readable
    /// @ai:post result.origin_path == Some(path)
    /// @ai:effects fs:read
    pub fn parse_file(&self, path: &Path) -> Result<Document> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut document = self.parse_content(&content)?;
        document.origin_path = Some(path.to_path_buf());
        Ok(document)
    }

    /// @ai:intent Parse blueprint text into a Document
    /// @ai:pre content starts with a `#` header line naming the module
    /// @ai:post components appear in source order and no line is classified twice
    /// @ai:idempotent true
    /// @ai:complexity O(n^2) worst case in line count
    /// @ai:effects pure
    pub fn parse_content(&self, content: &str) -> Result<Document> {
        let lines: Vec<&str> = content.trim().split('\n').collect();

        let mut document = Document {
            module_name: parse_header(lines[0])?,
            description: lines.get(1).map(|l| l.trim().to_string()).unwrap_or_default(),
            raw_text: content.to_string(),
            ..Default::default()
        };

        let mut i = 2;
        while i < lines.len() {
            let line = lines[i].trim();

            if let Some(rest) = line.strip_prefix(DEPS_DIRECTIVE) {
                let refs = parse_dependencies(rest.trim());
                debug!(line = i + 1, count = refs.len(), "parsed dependency line");
                document.dependencies.extend(refs);
                i += 1;
            } else if let Some(rest) = line.strip_prefix(NOTES_DIRECTIVE) {
                document.notes.extend(parse_notes(rest));
                i += 1;
            } else if !line.is_empty() && !line.starts_with(HEADER_MARKER) {
                match classify(&self.patterns, &lines, i) {
                    Some(component) => {
                        let end = span_end(&self.patterns, &lines, i);
                        debug!(
                            kind = %component.kind(),
                            name = component.name(),
                            start = i + 1,
                            end = end + 1,
                            "parsed component"
                        );
                        document.components.push(component);
                        i = end + 1;
                    }
                    None => {
                        trace!(line = i + 1, text = line, "skipping unrecognized line");
                        i += 1;
                    }
                }
            } else {
                i += 1;
            }
        }

        Ok(document)
    }
}

/// @ai:intent Parse content with a throwaway parser
/// @ai:effects pure
pub fn parse_content(content: &str) -> Result<Document> {
    NotationParser::new().parse_content(content)
}

/// @ai:intent Parse a file with a throwaway parser
/// @ai:effects fs:read
pub fn parse_file(path: &Path) -> Result<Document> {
    NotationParser::new().parse_file(path)
}

/// @ai:intent Extract the module name from the `#` header line
/// @ai:edge_cases a header of only `#` characters is malformed
/// @ai:effects pure
fn parse_header(first_line: &str) -> Result<String> {
    if !first_line.starts_with(HEADER_MARKER) {
        return Err(Error::MissingHeader {
            reason: "first line is not a # header".to_string(),
        });
    }

    let module_name = first_line.trim_matches(HEADER_MARKER).trim();
    if module_name.is_empty() {
        return Err(Error::MissingHeader {
            reason: "header names no module".to_string(),
        });
    }

    Ok(module_name.to_string())
}

fn parse_notes(notes: &str) -> impl Iterator<Item = String> + '_ {
    notes
        .split(',')
        .map(str::trim)
        .map(str::to_string)
}
