//! @ai:module:intent Define the target languages code can be generated in
//! @ai:module:layer domain
//! @ai:module:public_api TargetLanguage, output_path_for
//! @ai:module:stateless true

use crate::model::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// @ai:intent A language a synthesizer can be asked to produce
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Go,
    Rust,
}

const ALL_LANGUAGES: [TargetLanguage; 6] = [
    TargetLanguage::Python,
    TargetLanguage::JavaScript,
    TargetLanguage::TypeScript,
    TargetLanguage::Java,
    TargetLanguage::Go,
    TargetLanguage::Rust,
];

impl TargetLanguage {
    /// @ai:intent Get language name as string
    /// @ai:effects pure
    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::Python => "python",
            TargetLanguage::JavaScript => "javascript",
            TargetLanguage::TypeScript => "typescript",
            TargetLanguage::Java => "java",
            TargetLanguage::Go => "go",
            TargetLanguage::Rust => "rust",
        }
    }

    /// @ai:intent Get the file extension for generated sources, including the dot
    /// @ai:effects pure
    pub fn extension(&self) -> &'static str {
        match self {
            TargetLanguage::Python => ".py",
            TargetLanguage::JavaScript => ".js",
            TargetLanguage::TypeScript => ".ts",
            TargetLanguage::Java => ".java",
            TargetLanguage::Go => ".go",
            TargetLanguage::Rust => ".rs",
        }
    }

    fn aliases(&self) -> &[&'static str] {
        match self {
            TargetLanguage::Python => &["py"],
            TargetLanguage::JavaScript => &["js"],
            TargetLanguage::TypeScript => &["ts"],
            TargetLanguage::Java => &[],
            TargetLanguage::Go => &["golang"],
            TargetLanguage::Rust => &["rs"],
        }
    }

    /// @ai:intent Look up a language by name or short alias, ignoring case
    /// @ai:example ("Python") -> Some(Python)
    /// @ai:example ("ts") -> Some(TypeScript)
    /// @ai:example ("cobol") -> None
    /// @ai:effects pure
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        ALL_LANGUAGES
            .into_iter()
            .find(|lang| lang.name() == name || lang.aliases().contains(&name.as_str()))
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// @ai:intent Decide where generated code for a document should be written
/// @ai:post next to the blueprint file when its origin is known, else under fallback_dir by module path
/// @ai:example (doc from "models/user.md", Python, _) -> "models/user.py"
/// @ai:example (doc "app.models.user" without origin, Go, "out") -> "out/app/models/user.go"
/// @ai:effects pure
pub fn output_path_for(document: &Document, language: TargetLanguage, fallback_dir: &Path) -> PathBuf {
    if let Some(origin) = &document.origin_path {
        if let Some(stem) = origin.file_stem() {
            let file_name = format!("{}{}", stem.to_string_lossy(), language.extension());
            return origin.with_file_name(file_name);
        }
    }

    let mut parts: Vec<&str> = document.module_name.split('.').collect();
    let last = parts.pop().unwrap_or_default();

    let mut path = fallback_dir.to_path_buf();
    path.extend(parts);
    path.push(format!("{}{}", last, language.extension()));
    path
}
