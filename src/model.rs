//! @ai:module:intent Define the structured document produced by the notation parser
//! @ai:module:layer domain
//! @ai:module:public_api Document, Dependency, Component, ComponentKind, Method
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// @ai:intent A callable signature or property declaration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    /// Raw parameter text, never split or typed.
    pub parameters: String,
    /// Return type of a callable, or the declared type of a property.
    pub return_type: Option<String>,
    pub comment: Option<String>,
    pub decorators: Vec<String>,
    pub is_async: bool,
}

/// @ai:intent Categorizes components by kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    TypeAlias,
    Constant,
    Class,
    Function,
}

/// @ai:intent One named structural element of a blueprint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    TypeAlias {
        name: String,
        value: String,
    },
    Constant {
        name: String,
        declared_type: String,
        value: Option<String>,
    },
    Class {
        name: String,
        base_class: Option<String>,
        methods: Vec<Method>,
    },
    Function {
        name: String,
        method: Method,
        docstring: Option<String>,
    },
}

/// @ai:intent A reference from one blueprint to another
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dependency {
    pub module_path: String,
    /// Empty means the whole module is imported.
    pub items: Vec<String>,
}

/// @ai:intent Complete parsed result for one blueprint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub module_name: String,
    pub description: String,
    pub dependencies: Vec<Dependency>,
    pub components: Vec<Component>,
    pub notes: Vec<String>,
    pub raw_text: String,
    pub origin_path: Option<PathBuf>,
}

impl ComponentKind {
    /// @ai:intent Get the kind name as a string
    /// @ai:effects pure
    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::TypeAlias => "type_alias",
            ComponentKind::Constant => "constant",
            ComponentKind::Class => "class",
            ComponentKind::Function => "function",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Component {
    /// @ai:intent Get the component's declared name
    /// @ai:effects pure
    pub fn name(&self) -> &str {
        match self {
            Component::TypeAlias { name, .. }
            | Component::Constant { name, .. }
            | Component::Class { name, .. }
            | Component::Function { name, .. } => name,
        }
    }

    /// @ai:intent Get the kind tag of this component
    /// @ai:effects pure
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::TypeAlias { .. } => ComponentKind::TypeAlias,
            Component::Constant { .. } => ComponentKind::Constant,
            Component::Class { .. } => ComponentKind::Class,
            Component::Function { .. } => ComponentKind::Function,
        }
    }

    /// @ai:intent All method signatures carried by this component
    /// @ai:post empty for constants and type aliases
    /// @ai:effects pure
    pub fn methods(&self) -> &[Method] {
        match self {
            Component::Class { methods, .. } => methods,
            Component::Function { method, .. } => std::slice::from_ref(method),
            _ => &[],
        }
    }
}

impl Method {
    /// @ai:intent Create a method with just a name and raw parameters
    pub fn new(name: impl Into<String>, parameters: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.into(),
            ..Default::default()
        }
    }
}

impl Document {
    /// @ai:intent Find a component by name
    /// @ai:effects pure
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }

    /// @ai:intent Iterate over components of one kind in source order
    /// @ai:effects pure
    pub fn components_of(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.kind() == kind)
    }
}
