//! Read-only descriptors of the annotated program elements being documented.
//!
//! These types mirror what a source-introspection facility reports about a
//! compiled API: classes with their annotations, methods and fields, and the
//! type references that connect them. They are loaded from snapshot documents
//! (see [`crate::parser`]) and never mutated afterwards.
//!
//! Both JSON and YAML snapshots deserialize into the same shapes. Type
//! references and annotations accept a shorthand string form:
//!
//! ```json
//! {
//!   "qualifiedName": "com.example.WidgetResource",
//!   "annotations": [{ "type": "javax.ws.rs.Path", "elements": { "value": "/widgets" } }],
//!   "methods": [{
//!     "name": "get",
//!     "annotations": ["javax.ws.rs.GET"],
//!     "returnType": "com.example.Widget"
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The qualified name used for methods that return no value.
pub const VOID: &str = "void";

/// Top-level shape of one snapshot document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub classes: Vec<ClassDoc>,
}

/// A class (resource or data model) as seen by the introspection facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDoc {
    /// Fully-qualified name, e.g. `com.example.Widget`
    pub qualified_name: String,
    /// Simple name; derived from `qualified_name` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub annotations: Vec<AnnotationDesc>,
    #[serde(default)]
    pub methods: Vec<MethodDoc>,
    #[serde(default)]
    pub fields: Vec<FieldDoc>,
}

impl ClassDoc {
    /// The class's simple name.
    pub fn simple_name(&self) -> &str {
        match &self.name {
            Some(name) => name,
            None => simple_name_of(&self.qualified_name),
        }
    }
}

/// A method declared on a class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDoc {
    pub name: String,
    #[serde(default)]
    pub annotations: Vec<AnnotationDesc>,
    #[serde(default)]
    pub parameters: Vec<ParameterDoc>,
    #[serde(default = "TypeRef::void")]
    pub return_type: TypeRef,
    /// Full documentation text, without block tags
    #[serde(default)]
    pub comment_text: String,
    /// Inline fragments forming the first sentence of `comment_text`
    #[serde(default)]
    pub first_sentence: Vec<String>,
    #[serde(default)]
    pub param_tags: Vec<ParamTag>,
}

/// A declared method parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub annotations: Vec<AnnotationDesc>,
}

/// A field declared on a data class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

/// An `@param` documentation tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamTag {
    pub parameter_name: String,
    #[serde(default)]
    pub comment: String,
}

/// A reference to a type, possibly parameterized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TypeRefRepr")]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<TypeRef>,
}

impl TypeRef {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            type_arguments: Vec::new(),
        }
    }

    /// Create a parameterized reference such as `java.util.List<Widget>`
    pub fn generic(qualified_name: impl Into<String>, type_arguments: Vec<TypeRef>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            type_arguments,
        }
    }

    pub fn void() -> Self {
        Self::new(VOID)
    }

    /// Whether this reference denotes "no value".
    pub fn is_void(&self) -> bool {
        simple_name_of(&self.qualified_name).eq_ignore_ascii_case(VOID)
    }

    /// The element type of a single-argument generic container.
    pub fn container_element(&self) -> Option<&TypeRef> {
        match self.type_arguments.as_slice() {
            [element] => Some(element),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TypeRefRepr {
    Name(String),
    #[serde(rename_all = "camelCase")]
    Full {
        qualified_name: String,
        #[serde(default)]
        type_arguments: Vec<TypeRef>,
    },
}

impl From<TypeRefRepr> for TypeRef {
    fn from(repr: TypeRefRepr) -> Self {
        match repr {
            TypeRefRepr::Name(name) => TypeRef::new(name),
            TypeRefRepr::Full {
                qualified_name,
                type_arguments,
            } => TypeRef::generic(qualified_name, type_arguments),
        }
    }
}

/// An annotation instance: its type and its explicitly given elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AnnotationRepr")]
pub struct AnnotationDesc {
    /// Qualified name of the annotation type, e.g. `javax.ws.rs.Path`
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub elements: BTreeMap<String, serde_json::Value>,
}

impl AnnotationDesc {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            elements: BTreeMap::new(),
        }
    }

    /// Builder-style helper for attaching an element value.
    pub fn with_element(mut self, name: &str, value: impl Into<serde_json::Value>) -> Self {
        self.elements.insert(name.to_string(), value.into());
        self
    }

    /// The textual form of an element's value, if the element was given.
    pub fn element(&self, name: &str) -> Option<String> {
        self.elements.get(name).map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnnotationRepr {
    Name(String),
    Full {
        #[serde(rename = "type")]
        type_name: String,
        #[serde(default)]
        elements: BTreeMap<String, serde_json::Value>,
    },
}

impl From<AnnotationRepr> for AnnotationDesc {
    fn from(repr: AnnotationRepr) -> Self {
        match repr {
            AnnotationRepr::Name(type_name) => AnnotationDesc::new(type_name),
            AnnotationRepr::Full {
                type_name,
                elements,
            } => AnnotationDesc { type_name, elements },
        }
    }
}

/// Trailing segment of a dotted name.
pub fn simple_name_of(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(i) => &qualified[i + 1..],
        None => qualified,
    }
}
