//! Swagger 1.x documents assembled from resources.
//!
//! One [`ApiDeclaration`] is produced per resource and a single
//! [`ResourceListing`] indexes them all.

use crate::annotation::HttpMethod;
use crate::extractor::{Operation, ParamKind, Parameter};
use crate::model_graph::ModelMap;
use crate::options::DocletOptions;
use crate::resource::Resource;
use log::debug;
use serde::{Deserialize, Serialize};

/// File name of the resource listing
pub const LISTING_FILE: &str = "service.json";

/// Declaration of one resource's APIs and models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDeclaration {
    pub api_version: String,
    pub base_path: String,
    pub apis: Vec<Api>,
    pub models: ModelMap,
}

/// All operations under one full path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Api {
    pub path: String,
    pub description: String,
    pub operations: Vec<ApiOperation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOperation {
    pub http_method: HttpMethod,
    pub nickname: String,
    pub response_class: Option<String>,
    pub parameters: Vec<ApiParameter>,
    pub summary: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParameter {
    pub param_type: ParamKind,
    pub name: String,
    pub description: Option<String>,
    pub data_type: String,
}

/// Index of every resource declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceListing {
    pub api_version: String,
    pub base_path: String,
    pub apis: Vec<ResourceListingApi>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceListingApi {
    pub path: String,
    pub description: String,
}

/// A declaration paired with the identifier of the file it belongs in
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceDocument {
    pub file_id: String,
    pub declaration: ApiDeclaration,
}

/// Everything one run emits
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSet {
    pub declarations: Vec<ResourceDocument>,
    pub listing: ResourceListing,
}

impl From<&Parameter> for ApiParameter {
    fn from(param: &Parameter) -> Self {
        Self {
            param_type: param.kind,
            name: param.name.clone(),
            description: param.description.clone(),
            data_type: param.data_type.clone(),
        }
    }
}

impl From<&Operation> for ApiOperation {
    fn from(op: &Operation) -> Self {
        Self {
            http_method: op.method,
            nickname: op.nickname.clone(),
            response_class: op.response_class.clone(),
            parameters: op.parameters.iter().map(ApiParameter::from).collect(),
            summary: op.summary.clone(),
            notes: op.notes.clone(),
        }
    }
}

/// Pair each resource with its declaration and build the listing.
///
/// Resources are expected in path order, as [`crate::resource::ResourceAssembler::finish`]
/// returns them.
pub fn assemble(resources: Vec<Resource>, options: &DocletOptions) -> DocumentSet {
    let mut declarations = Vec::with_capacity(resources.len());
    let mut listing_apis = Vec::with_capacity(resources.len());

    for resource in resources {
        let file_id = resource.file_id();
        debug!("Assembling declaration {} for {}", file_id, resource.path);

        let apis = resource
            .operations
            .iter()
            .map(|(sub_path, operations)| Api {
                path: format!("{}{}", resource.path, sub_path),
                description: String::new(),
                operations: operations.iter().map(ApiOperation::from).collect(),
            })
            .collect();

        listing_apis.push(ResourceListingApi {
            path: format!("/{}.{{format}}", file_id),
            description: String::new(),
        });

        declarations.push(ResourceDocument {
            file_id,
            declaration: ApiDeclaration {
                api_version: options.api_version.clone(),
                base_path: options.api_base_path.clone(),
                apis,
                models: resource.models,
            },
        });
    }

    DocumentSet {
        declarations,
        listing: ResourceListing {
            api_version: options.api_version.clone(),
            base_path: options.doc_base_path.clone(),
            apis: listing_apis,
        },
    }
}
