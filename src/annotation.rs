//! Classification of annotations into the fixed JAX-RS binding vocabulary.
//!
//! Every annotation is mapped once, through [`ANNOTATION_TABLE`], onto a closed
//! [`AnnotationKind`]. Downstream code matches on the kind instead of comparing
//! qualified names.

use crate::descriptor::AnnotationDesc;
use log::debug;
use serde::{Deserialize, Serialize};

/// Package prefix shared by every route-binding annotation.
pub const JAX_RS_PACKAGE: &str = "javax.ws.rs";

/// HTTP verbs recognized on resource methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
}

impl HttpMethod {
    /// The verb's short name, as written on the annotation
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an annotation means to the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    /// `@Path` on a class or method
    Path,
    /// `@PathParam` on a parameter
    PathParam,
    /// `@QueryParam` on a parameter
    QueryParam,
    /// One of the four verb annotations
    Verb(HttpMethod),
    /// `@XmlRootElement` on a data class
    RootElement,
    /// Any other member of the route-binding package (`@Context`, `@Produces`, ...)
    OtherBinding,
    /// Outside the recognized vocabulary
    Foreign,
}

/// Exact-name matchers, checked before the package-prefix fallback.
pub const ANNOTATION_TABLE: &[(&str, AnnotationKind)] = &[
    ("javax.ws.rs.Path", AnnotationKind::Path),
    ("javax.ws.rs.PathParam", AnnotationKind::PathParam),
    ("javax.ws.rs.QueryParam", AnnotationKind::QueryParam),
    ("javax.ws.rs.GET", AnnotationKind::Verb(HttpMethod::Get)),
    ("javax.ws.rs.PUT", AnnotationKind::Verb(HttpMethod::Put)),
    ("javax.ws.rs.POST", AnnotationKind::Verb(HttpMethod::Post)),
    ("javax.ws.rs.DELETE", AnnotationKind::Verb(HttpMethod::Delete)),
    (
        "javax.xml.bind.annotation.XmlRootElement",
        AnnotationKind::RootElement,
    ),
];

impl AnnotationKind {
    /// Classify a qualified annotation type name.
    pub fn of_name(qualified_name: &str) -> Self {
        if let Some((_, kind)) = ANNOTATION_TABLE
            .iter()
            .find(|(name, _)| *name == qualified_name)
        {
            return *kind;
        }

        if qualified_name.starts_with(JAX_RS_PACKAGE) {
            AnnotationKind::OtherBinding
        } else {
            AnnotationKind::Foreign
        }
    }

    pub fn of(annotation: &AnnotationDesc) -> Self {
        Self::of_name(&annotation.type_name)
    }

    /// Whether the annotation belongs to the route-binding family.
    pub fn is_binding(&self) -> bool {
        !matches!(self, AnnotationKind::Foreign | AnnotationKind::RootElement)
    }
}

/// The first verb annotation in declaration order, if any.
pub fn verb_of(annotations: &[AnnotationDesc]) -> Option<HttpMethod> {
    annotations.iter().find_map(|a| match AnnotationKind::of(a) {
        AnnotationKind::Verb(method) => Some(method),
        _ => None,
    })
}

/// The `value` of the first annotation of the given kind that carries one.
pub fn element_value(annotations: &[AnnotationDesc], kind: AnnotationKind, element: &str) -> Option<String> {
    annotations
        .iter()
        .filter(|a| AnnotationKind::of(a) == kind)
        .find_map(|a| a.element(element))
}

/// The `@Path` value, with a leading `/` guaranteed.
///
/// A `@Path` without a `value` element counts as no path at all.
pub fn path_of(annotations: &[AnnotationDesc]) -> Option<String> {
    let path = element_value(annotations, AnnotationKind::Path, "value");
    if path.is_none() && annotations.iter().any(|a| AnnotationKind::of(a) == AnnotationKind::Path) {
        debug!("Ignoring @Path annotation without a value");
    }

    path.map(|p| if p.starts_with('/') { p } else { format!("/{}", p) })
}
