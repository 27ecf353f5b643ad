use crate::annotation::{element_value, AnnotationKind};
use crate::descriptor::{simple_name_of, ClassDoc, TypeRef};
use log::{debug, warn};
use std::collections::HashMap;

/// Type names treated as leaves: never expanded, never registered as models.
pub const PRIMITIVES: &[&str] = &[
    "byte", "boolean", "int", "long", "float", "double", "string", "Date",
];

const LANG_PACKAGE: &str = "java.lang.";
const DATE_TYPE: &str = "java.util.Date";

/// Type resolver - indexes every known class by qualified name and
/// turns type references into canonical display names
pub struct TypeResolver {
    /// All known classes, in load order
    classes: Vec<ClassDoc>,
    /// Qualified name -> position in `classes`
    index: HashMap<String, usize>,
}

impl TypeResolver {
    /// Create a new TypeResolver over the classes of every loaded snapshot
    pub fn new(classes: impl IntoIterator<Item = ClassDoc>) -> Self {
        let mut kept = Vec::new();
        let mut index = HashMap::new();

        for class in classes {
            if index.contains_key(&class.qualified_name) {
                warn!(
                    "Duplicate class {}, keeping the first definition",
                    class.qualified_name
                );
                continue;
            }
            index.insert(class.qualified_name.clone(), kept.len());
            kept.push(class);
        }

        debug!("Initializing TypeResolver with {} classes", kept.len());
        Self {
            classes: kept,
            index,
        }
    }

    /// All known classes, in load order
    pub fn classes(&self) -> &[ClassDoc] {
        &self.classes
    }

    /// The class a reference resolves to; `None` for primitives and opaque types
    pub fn find_class(&self, type_ref: &TypeRef) -> Option<&ClassDoc> {
        self.index
            .get(&type_ref.qualified_name)
            .map(|&i| &self.classes[i])
    }

    /// Canonical display name of a type reference.
    ///
    /// A known class annotated `@XmlRootElement(name = ...)` is named by that
    /// value verbatim; other known classes by their normalized simple name;
    /// everything else by [`normalize_type_name`] on the qualified name.
    pub fn type_name(&self, type_ref: &TypeRef) -> String {
        match self.find_class(type_ref) {
            Some(class) => Self::class_name(class),
            None => normalize_type_name(&type_ref.qualified_name),
        }
    }

    fn class_name(class: &ClassDoc) -> String {
        if let Some(root_name) = element_value(&class.annotations, AnnotationKind::RootElement, "name") {
            debug!("Using root element name {} for {}", root_name, class.qualified_name);
            return root_name;
        }
        normalize_type_name(class.simple_name())
    }
}

/// Map a raw type name onto its canonical spelling.
///
/// Idempotent: a canonical name normalizes to itself.
pub fn normalize_type_name(raw: &str) -> String {
    let name = if let Some(rest) = raw.strip_prefix(LANG_PACKAGE) {
        simple_name_of(rest).to_lowercase()
    } else if let Some(primitive) = PRIMITIVES.iter().find(|p| p.eq_ignore_ascii_case(raw)) {
        primitive.to_string()
    } else if raw == DATE_TYPE {
        "Date".to_string()
    } else {
        simple_name_of(raw).to_string()
    };

    if name.eq_ignore_ascii_case("integer") {
        "int".to_string()
    } else {
        name
    }
}

/// Whether a canonical name is one of the leaf [`PRIMITIVES`].
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.contains(&name)
}
