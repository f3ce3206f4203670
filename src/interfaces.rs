//! @ai:module:intent Boundary contracts for the collaborators that consume parsed Documents
//! @ai:module:layer domain
//! @ai:module:public_api ModuleLookup, DocumentIndex, ReferenceResolver, ResolvedDocument, CodeSynthesizer, GenerationRequest, Verifier, Verdict
//! @ai:module:depends_on model, config, language, error
//! @ai:module:stateless true

use crate::config::GenerationSettings;
use crate::error::Result;
use crate::language::TargetLanguage;
use crate::model::Document;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// @ai:intent Find a parsed document by the module path a Dependency names
pub trait ModuleLookup {
    fn lookup(&self, module_path: &str) -> Option<&Document>;
}

/// @ai:intent In-memory lookup over documents keyed by module name
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    documents: HashMap<String, Document>,
}

impl DocumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Add a document, replacing any earlier one with the same module name
    pub fn insert(&mut self, document: Document) {
        self.documents.insert(document.module_name.clone(), document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<Document> for DocumentIndex {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut index = Self::new();
        for document in iter {
            index.insert(document);
        }
        index
    }
}

impl ModuleLookup for DocumentIndex {
    /// @ai:intent Match exactly, then with leading `.` characters removed
    /// @ai:example (".models.user") -> document named "models.user"
    /// @ai:effects pure
    fn lookup(&self, module_path: &str) -> Option<&Document> {
        self.documents
            .get(module_path)
            .or_else(|| self.documents.get(module_path.trim_start_matches('.')))
    }
}

/// @ai:intent A document together with the documents its dependencies point at
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedDocument {
    pub main: Document,
    /// Generation order: every document appears after the ones it depends on.
    pub dependencies: Vec<Document>,
}

/// @ai:intent Links a document's dependencies to other parsed documents
pub trait ReferenceResolver {
    fn resolve(&self, document: &Document, lookup: &dyn ModuleLookup) -> Result<ResolvedDocument>;
}

/// @ai:intent Everything a synthesizer needs to produce source for one document
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub document: &'a Document,
    pub language: TargetLanguage,
    pub settings: GenerationSettings,
}

/// @ai:intent Produces source text from a document, typically through a generative service
pub trait CodeSynthesizer {
    fn synthesize(&self, request: &GenerationRequest<'_>) -> Result<String>;
}

/// @ai:intent Outcome of checking generated source against its document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub diagnostics: Vec<String>,
}

/// @ai:intent Compares generated source with the document it came from
pub trait Verifier {
    fn verify(&self, source: &str, document: &Document) -> Result<Verdict>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::Component;
    use crate::parser::parse_content;

    /// Resolves direct dependencies only.
    struct DirectResolver;

    impl ReferenceResolver for DirectResolver {
        fn resolve(&self, document: &Document, lookup: &dyn ModuleLookup) -> Result<ResolvedDocument> {
            let dependencies = document
                .dependencies
                .iter()
                .filter_map(|dep| lookup.lookup(&dep.module_path))
                .cloned()
                .collect();
            Ok(ResolvedDocument {
                main: document.clone(),
                dependencies,
            })
        }
    }

    /// Emits one stub line per component.
    struct StubSynthesizer;

    impl CodeSynthesizer for StubSynthesizer {
        fn synthesize(&self, request: &GenerationRequest<'_>) -> Result<String> {
            Ok(request
                .document
                .components
                .iter()
                .map(|c| format!("# {} {}", c.kind(), c.name()))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }

    /// Passes when every component name occurs in the source.
    struct NameVerifier;

    impl Verifier for NameVerifier {
        fn verify(&self, source: &str, document: &Document) -> Result<Verdict> {
            let diagnostics: Vec<String> = document
                .components
                .iter()
                .map(Component::name)
                .filter(|name| !source.contains(name))
                .map(|name| format!("missing {}", name))
                .collect();
            Ok(Verdict {
                passed: diagnostics.is_empty(),
                diagnostics,
            })
        }
    }

    #[test]
    fn test_lookup_accepts_dot_prefixed_paths() {
        let index: DocumentIndex = vec![parse_content("# models.user\nUsers").unwrap()]
            .into_iter()
            .collect();

        assert_eq!(index.len(), 1);
        assert!(index.lookup("models.user").is_some());
        assert!(index.lookup(".models.user").is_some());
        assert!(index.lookup("models.task").is_none());
    }

    #[test]
    fn test_resolver_sees_parsed_dependencies() {
        let user = parse_content("# models.user\nUsers\nUser:\n- name: str").unwrap();
        let task = parse_content("# models.task\nTasks\ndeps: .models.user[User]; @missing").unwrap();
        let index: DocumentIndex = [user.clone()].into_iter().collect();

        let resolved = DirectResolver.resolve(&task, &index).unwrap();

        assert_eq!(resolved.main, task);
        assert_eq!(resolved.dependencies, vec![user]);
    }

    #[test]
    fn test_synthesize_then_verify() {
        let doc = parse_content("# app\nApp\nMAX_USERS: int = 10\ndef main() -> None:").unwrap();
        let config = Config::default();
        let request = GenerationRequest {
            document: &doc,
            language: config.target_language().unwrap(),
            settings: config.generation_settings(),
        };

        let source = StubSynthesizer.synthesize(&request).unwrap();
        let verdict = NameVerifier.verify(&source, &doc).unwrap();

        assert!(verdict.passed, "{:?}", verdict.diagnostics);
        assert!(!NameVerifier.verify("", &doc).unwrap().passed);
    }
}
