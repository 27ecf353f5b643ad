use crate::extractor::parameter::InclusionPolicy;
use crate::model_graph::DEFAULT_MAX_DEPTH;
use std::path::PathBuf;

pub const DEFAULT_DOC_BASE_PATH: &str = "http://localhost:8080";
pub const DEFAULT_API_BASE_PATH: &str = "http://localhost:8080";
pub const DEFAULT_API_VERSION: &str = "0";

/// Values the generator is configured with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocletOptions {
    /// Directory the documents are written to
    pub output_dir: PathBuf,
    /// Where the resource declarations are served from (listing `basePath`)
    pub doc_base_path: String,
    /// Where the API itself is served from (declaration `basePath`)
    pub api_base_path: String,
    pub api_version: String,
    /// Nesting ceiling for model graphs
    pub max_model_depth: usize,
    pub parameter_inclusion: InclusionPolicy,
}

impl Default for DocletOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            doc_base_path: DEFAULT_DOC_BASE_PATH.to_string(),
            api_base_path: DEFAULT_API_BASE_PATH.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            max_model_depth: DEFAULT_MAX_DEPTH,
            parameter_inclusion: InclusionPolicy::default(),
        }
    }
}
