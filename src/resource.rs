use crate::annotation::path_of;
use crate::descriptor::ClassDoc;
use crate::error::Result;
use crate::extractor::operation::OperationExtractor;
use crate::extractor::Operation;
use crate::model_graph::{ModelGraphBuilder, ModelMap};
use crate::options::DocletOptions;
use crate::type_resolver::TypeResolver;
use log::debug;
use std::collections::BTreeMap;

/// Operations and models sharing one class-level `@Path`
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    /// Normalized base path, always starting with `/`
    pub path: String,
    /// Sub-path -> operations in discovery order
    pub operations: BTreeMap<String, Vec<Operation>>,
    /// Every model reachable from this resource's operations
    pub models: ModelMap,
}

impl Resource {
    fn new(path: String) -> Self {
        Self {
            path,
            operations: BTreeMap::new(),
            models: ModelMap::new(),
        }
    }

    /// Identifier of the file this resource is written to
    pub fn file_id(&self) -> String {
        resource_file_id(&self.path)
    }
}

/// Resource assembler - groups resource classes by path and their
/// operations by sub-path, expanding each resource's model graph
pub struct ResourceAssembler<'a> {
    extractor: OperationExtractor<'a>,
    graph: ModelGraphBuilder<'a>,
    resources: BTreeMap<String, Resource>,
}

impl<'a> ResourceAssembler<'a> {
    pub fn new(resolver: &'a TypeResolver, options: &DocletOptions) -> Self {
        debug!("Initializing ResourceAssembler");
        Self {
            extractor: OperationExtractor::new(resolver, options.parameter_inclusion),
            graph: ModelGraphBuilder::new(resolver).with_max_depth(options.max_model_depth),
            resources: BTreeMap::new(),
        }
    }

    /// Add a class's operations to its resource.
    ///
    /// Returns `false` for classes without a `@Path`, which are not resources.
    ///
    /// # Errors
    ///
    /// Fails when an operation's model graph exceeds the depth limit.
    pub fn add_class(&mut self, class: &ClassDoc) -> Result<bool> {
        let base_path = match path_of(&class.annotations) {
            Some(path) => path,
            None => return Ok(false),
        };
        debug!("Adding resource class {} at {}", class.qualified_name, base_path);

        let resource = self
            .resources
            .entry(base_path.clone())
            .or_insert_with(|| Resource::new(base_path.clone()));

        for method in &class.methods {
            let Some(operation) = self.extractor.extract(&base_path, method) else {
                continue;
            };

            for root in &operation.model_roots {
                self.graph.expand(root, &mut resource.models)?;
            }

            resource
                .operations
                .entry(operation.sub_path.clone())
                .or_default()
                .push(operation);
        }

        Ok(true)
    }

    /// Add every class known to the resolver, in load order.
    pub fn add_all(&mut self, resolver: &TypeResolver) -> Result<()> {
        for class in resolver.classes() {
            self.add_class(class)?;
        }
        Ok(())
    }

    /// The assembled resources, sorted by path
    pub fn finish(self) -> Vec<Resource> {
        self.resources.into_values().collect()
    }
}

/// Derive a resource's file identifier from its path.
///
/// `/widgets/{id}/parts` becomes `widgets_id_parts`.
pub fn resource_file_id(path: &str) -> String {
    path.strip_prefix('/')
        .unwrap_or(path)
        .replace('/', "_")
        .replace(|c: char| c == '{' || c == '}', "")
}
