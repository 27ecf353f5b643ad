use crate::descriptor::TypeRef;
use crate::error::{Error, Result};
use crate::type_resolver::{is_primitive, TypeResolver};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default ceiling on how many composite types may nest below a root.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Canonical type name -> model, for one resource
pub type ModelMap = BTreeMap<String, Model>;

/// Field-level schema of a composite data type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Canonical type name
    pub id: String,
    /// Field name -> property
    pub properties: BTreeMap<String, Property>,
}

/// One field of a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Canonical name of the field's declared type
    #[serde(rename = "type")]
    pub property_type: String,
    /// Format hint; never populated
    pub format: Option<String>,
    /// Element type when the field is a single-argument container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
}

/// Element type of a container property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Items {
    #[serde(rename = "type")]
    pub item_type: String,
}

impl Property {
    pub fn new(property_type: String, container_of: Option<String>) -> Self {
        Self {
            property_type,
            format: None,
            items: container_of.map(|item_type| Items { item_type }),
        }
    }

    /// Canonical name of the container's element type, if any
    pub fn container_of(&self) -> Option<&str> {
        self.items.as_ref().map(|items| items.item_type.as_str())
    }
}

/// Model graph builder - discovers every composite type reachable from a
/// root type and records its fields in a resource's [`ModelMap`].
///
/// A model is registered under its canonical name *before* its fields are
/// walked, so self-referencing and mutually referencing types stop at the
/// first re-encounter. The entry is completed once all fields are processed.
pub struct ModelGraphBuilder<'a> {
    resolver: &'a TypeResolver,
    max_depth: usize,
}

impl<'a> ModelGraphBuilder<'a> {
    pub fn new(resolver: &'a TypeResolver) -> Self {
        Self {
            resolver,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Override the nesting ceiling.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Expand the model graph rooted at `type_ref` into `models`.
    ///
    /// Existing entries are never recomputed or overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ModelDepthExceeded`] if more than `max_depth`
    /// distinct composite types nest below the root.
    pub fn expand(&self, type_ref: &TypeRef, models: &mut ModelMap) -> Result<()> {
        self.expand_at(type_ref, models, 0)
    }

    fn expand_at(&self, type_ref: &TypeRef, models: &mut ModelMap, depth: usize) -> Result<()> {
        let name = self.resolver.type_name(type_ref);

        let class = match self.resolver.find_class(type_ref) {
            Some(class) => class,
            None => return Ok(()),
        };

        if models.contains_key(&name) {
            debug!("Model {} already registered", name);
            return Ok(());
        }

        if is_primitive(&name) {
            return Ok(());
        }

        // Nothing to recurse into, so no placeholder is needed either.
        if class.fields.is_empty() {
            debug!("Skipping {}: no fields", name);
            return Ok(());
        }

        if depth >= self.max_depth {
            return Err(Error::ModelDepthExceeded {
                type_name: name,
                limit: self.max_depth,
            });
        }

        debug!("Expanding model {} ({} fields)", name, class.fields.len());
        models.insert(
            name.clone(),
            Model {
                id: name.clone(),
                properties: BTreeMap::new(),
            },
        );

        let mut properties = BTreeMap::new();
        for field in &class.fields {
            let container_of = match field.type_ref.container_element() {
                Some(element) => {
                    let element_name = self.resolver.type_name(element);
                    if !is_primitive(&element_name) {
                        self.expand_at(element, models, depth + 1)?;
                    }
                    Some(element_name)
                }
                None => None,
            };

            let field_type = self.resolver.type_name(&field.type_ref);
            if !is_primitive(&field_type) {
                self.expand_at(&field.type_ref, models, depth + 1)?;
            }

            properties.insert(field.name.clone(), Property::new(field_type, container_of));
        }

        if let Some(model) = models.get_mut(&name) {
            model.properties = properties;
        }

        Ok(())
    }
}
