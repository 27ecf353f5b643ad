use crate::annotation::{path_of, verb_of};
use crate::descriptor::{MethodDoc, ParameterDoc, TypeRef};
use crate::extractor::parameter::{InclusionPolicy, ParameterClassifier};
use crate::extractor::{Operation, ParamKind, Parameter};
use crate::type_resolver::{is_primitive, TypeResolver};
use log::debug;

/// Turns verb-annotated methods into [`Operation`]s
pub struct OperationExtractor<'a> {
    resolver: &'a TypeResolver,
    classifier: ParameterClassifier<'a>,
}

impl<'a> OperationExtractor<'a> {
    pub fn new(resolver: &'a TypeResolver, policy: InclusionPolicy) -> Self {
        Self {
            resolver,
            classifier: ParameterClassifier::new(resolver, policy),
        }
    }

    /// Extract the operation a method exposes under `base_path`.
    ///
    /// Returns `None` when the method carries none of the verb annotations.
    pub fn extract(&self, base_path: &str, method: &MethodDoc) -> Option<Operation> {
        let verb = verb_of(&method.annotations)?;
        let sub_path = path_of(&method.annotations).unwrap_or_default();

        let included: Vec<&ParameterDoc> = method
            .parameters
            .iter()
            .filter(|p| self.classifier.should_include(p))
            .collect();
        let parameters: Vec<Parameter> = included
            .iter()
            .map(|p| self.classifier.classify(method, p))
            .collect();

        let summary = summary_of(method);
        let notes = method.comment_text.replacen(&summary, "", 1);

        let response_class = if method.return_type.is_void() {
            None
        } else {
            Some(self.resolver.type_name(&method.return_type))
        };

        let mut model_roots = Vec::new();
        if !method.return_type.is_void() {
            self.push_root(&mut model_roots, &method.return_type);
        }
        for (doc, param) in included.iter().zip(&parameters) {
            if param.kind == ParamKind::Body {
                self.push_root(&mut model_roots, &doc.type_ref);
            }
        }

        debug!("Extracted {} {}{} -> {}", verb, base_path, sub_path, method.name);

        Some(Operation {
            method: verb,
            nickname: method.name.clone(),
            path: format!("{}{}", base_path, sub_path),
            sub_path,
            parameters,
            summary,
            notes,
            response_class,
            model_roots,
        })
    }

    /// Record a referenced type, and its container element, unless primitive.
    fn push_root(&self, roots: &mut Vec<TypeRef>, type_ref: &TypeRef) {
        if !is_primitive(&self.resolver.type_name(type_ref)) {
            roots.push(type_ref.clone());
        }
        if let Some(element) = type_ref.container_element() {
            if !is_primitive(&self.resolver.type_name(element)) {
                roots.push(element.clone());
            }
        }
    }
}

/// Concatenated first-sentence fragments, or the first sentence of the
/// comment text when the descriptor supplies no fragments.
fn summary_of(method: &MethodDoc) -> String {
    if method.first_sentence.is_empty() {
        first_sentence(&method.comment_text).to_string()
    } else {
        method.first_sentence.concat()
    }
}

/// Text up to and including the first period followed by whitespace or
/// the end of the text.
fn first_sentence(text: &str) -> &str {
    let text = text.trim_start();
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '.' {
            match chars.peek() {
                None => return text,
                Some((_, next)) if next.is_whitespace() => return &text[..=i],
                _ => {}
            }
        }
    }
    text.trim_end()
}
