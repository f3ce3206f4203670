//! @ai:module:intent Blueprint notation parser library and tooling
//! @ai:module:layer infrastructure
//! @ai:module:public_api model, parser, classifier, deps, member, span, config, language, interfaces, discover, template, validate, output, error
//! @ai:module:stateless true
//!
//! # Blueprints
//!
//! Parses compact, markdown-flavored blueprint files describing a module's
//! classes, functions, constants, type aliases, dependencies and notes into a
//! structured [`Document`].
//!
//! ## Example
//!
//! ```rust
//! use blueprints::{parse_content, Component};
//!
//! let doc = parse_content("# models.user\nUser model\n\nMAX_NAME: int = 64\nUserId = str").unwrap();
//! assert_eq!(doc.module_name, "models.user");
//! assert_eq!(doc.components.len(), 2);
//! assert!(matches!(doc.components[1], Component::TypeAlias { .. }));
//! ```

pub mod classifier;
pub mod config;
pub mod deps;
pub mod discover;
pub mod error;
pub mod interfaces;
pub mod language;
pub mod member;
pub mod model;
pub mod output;
pub mod parser;
pub mod patterns;
pub mod span;
pub mod template;
pub mod validate;

pub use config::{Config, GenerationSettings};
pub use discover::discover_blueprints;
pub use error::{Error, Result};
pub use interfaces::{
    CodeSynthesizer, DocumentIndex, GenerationRequest, ModuleLookup, ReferenceResolver,
    ResolvedDocument, Verdict, Verifier,
};
pub use language::{output_path_for, TargetLanguage};
pub use model::{Component, ComponentKind, Dependency, Document, Method};
pub use output::{format_document, format_validation_result, OutputFormat};
pub use parser::{parse_content, parse_file, NotationParser};
pub use template::{blueprint_template, init_blueprint};
pub use validate::{
    validate_directory, validate_document, validate_file, Severity, ValidationConfig,
    ValidationIssue, ValidationResult,
};
