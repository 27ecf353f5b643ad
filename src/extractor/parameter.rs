use crate::annotation::AnnotationKind;
use crate::descriptor::{MethodDoc, ParameterDoc};
use crate::extractor::{ParamKind, Parameter};
use crate::type_resolver::TypeResolver;
use log::debug;
use serde::{Deserialize, Serialize};

/// Which annotated parameters are documented.
///
/// Unannotated parameters are always documented (they are the request body).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InclusionPolicy {
    /// Only parameters carrying at least one route-binding annotation;
    /// injected parameters such as `@Auth User user` are left out
    #[default]
    RecognizedOnly,
    /// Every parameter, whatever its annotations
    AnyAnnotation,
}

/// Classifies method parameters by their binding annotations
pub struct ParameterClassifier<'a> {
    resolver: &'a TypeResolver,
    policy: InclusionPolicy,
}

impl<'a> ParameterClassifier<'a> {
    pub fn new(resolver: &'a TypeResolver, policy: InclusionPolicy) -> Self {
        Self { resolver, policy }
    }

    /// Whether the parameter belongs in the documented operation
    pub fn should_include(&self, parameter: &ParameterDoc) -> bool {
        if parameter.annotations.is_empty() {
            return true;
        }

        let include = match self.policy {
            InclusionPolicy::AnyAnnotation => true,
            InclusionPolicy::RecognizedOnly => parameter
                .annotations
                .iter()
                .any(|a| AnnotationKind::of(a).is_binding()),
        };

        if !include {
            debug!("Excluding parameter {}: no route-binding annotation", parameter.name);
        }
        include
    }

    /// Build the documented form of a parameter of `method`.
    pub fn classify(&self, method: &MethodDoc, parameter: &ParameterDoc) -> Parameter {
        let description = method
            .param_tags
            .iter()
            .find(|tag| tag.parameter_name == parameter.name)
            .map(|tag| tag.comment.clone());

        Parameter::new(
            Self::kind_of(parameter),
            Self::name_of(parameter),
            description,
            self.resolver.type_name(&parameter.type_ref),
        )
    }

    fn kind_of(parameter: &ParameterDoc) -> ParamKind {
        parameter
            .annotations
            .iter()
            .find_map(|a| match AnnotationKind::of(a) {
                AnnotationKind::PathParam => Some(ParamKind::Path),
                AnnotationKind::QueryParam => Some(ParamKind::Query),
                _ => None,
            })
            .unwrap_or(ParamKind::Body)
    }

    fn name_of(parameter: &ParameterDoc) -> String {
        parameter
            .annotations
            .iter()
            .filter(|a| {
                matches!(
                    AnnotationKind::of(a),
                    AnnotationKind::PathParam | AnnotationKind::QueryParam
                )
            })
            .find_map(|a| a.element("value"))
            .unwrap_or_else(|| parameter.name.clone())
    }
}
