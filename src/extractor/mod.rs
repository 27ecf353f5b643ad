//! Operation extraction from annotated resource methods.
//!
//! A resource method becomes an [`Operation`] when it carries one of the four
//! verb annotations. Its parameters are classified by their binding
//! annotations into path, query, or body [`Parameter`]s.
//!
//! # Example
//!
//! ```no_run
//! use service_doclet::extractor::{operation::OperationExtractor, parameter::InclusionPolicy};
//! use service_doclet::parser::SnapshotParser;
//! use service_doclet::type_resolver::TypeResolver;
//! use std::path::Path;
//!
//! let parsed = SnapshotParser::parse_file(Path::new("api.json")).unwrap();
//! let resolver = TypeResolver::new(parsed.snapshot.classes);
//! let extractor = OperationExtractor::new(&resolver, InclusionPolicy::default());
//! for class in resolver.classes() {
//!     for method in &class.methods {
//!         if let Some(op) = extractor.extract("/widgets", method) {
//!             println!("{} {}", op.method, op.path);
//!         }
//!     }
//! }
//! ```

pub mod operation;
pub mod parameter;

use crate::annotation::HttpMethod;
use crate::descriptor::TypeRef;
use serde::{Deserialize, Serialize};

/// One verb-bound resource method.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub method: HttpMethod,
    /// Name of the Java method
    pub nickname: String,
    /// Method-level path relative to the resource; empty when absent
    pub sub_path: String,
    /// Resource path followed by `sub_path`
    pub path: String,
    pub parameters: Vec<Parameter>,
    /// First sentence of the documentation
    pub summary: String,
    /// Documentation with the summary removed
    pub notes: String,
    /// Canonical return type; `None` for void methods
    pub response_class: Option<String>,
    /// Non-primitive types whose models this operation references:
    /// the return type, body parameter types, and their container elements
    pub model_roots: Vec<TypeRef>,
}

/// A documented method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub kind: ParamKind,
    /// Binding name, or the declared identifier
    pub name: String,
    /// Comment from the matching `@param` tag
    pub description: Option<String>,
    /// Canonical type name
    pub data_type: String,
}

/// Where a parameter's value is bound from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// A path template segment (`@PathParam`)
    Path,
    /// The query string (`@QueryParam`)
    Query,
    /// The request entity
    Body,
}

impl Parameter {
    pub fn new(kind: ParamKind, name: String, description: Option<String>, data_type: String) -> Self {
        Self {
            kind,
            name,
            description,
            data_type,
        }
    }
}
