//! Service Doclet - Swagger documentation from annotated JAX-RS resources.
//!
//! This library reads descriptors of annotated API classes (route handlers
//! with path, verb and parameter metadata, and the data types they exchange)
//! and emits a versioned Swagger 1.x documentation model: one declaration per
//! resource and a global resource listing.
//!
//! # Architecture
//!
//! 1. [`scanner`] - Locates descriptor snapshot files
//! 2. [`parser`] - Loads snapshots into [`descriptor`] types
//! 3. [`annotation`] - Classifies annotations into the binding vocabulary
//! 4. [`type_resolver`] - Indexes classes and normalizes type names
//! 5. [`extractor`] - Turns annotated methods into operations and parameters
//! 6. [`model_graph`] - Discovers the data models reachable from an operation
//! 7. [`resource`] - Groups operations and models by resource path
//! 8. [`document`] - Builds the declarations and the listing
//! 9. [`serializer`] - Writes the documents as JSON
//!
//! # Example Usage
//!
//! ```no_run
//! use service_doclet::{
//!     document,
//!     options::DocletOptions,
//!     parser::SnapshotParser,
//!     resource::ResourceAssembler,
//!     scanner::FileScanner,
//!     serializer::write_documents,
//!     type_resolver::TypeResolver,
//! };
//! use std::path::PathBuf;
//!
//! let options = DocletOptions::default();
//!
//! let scan = FileScanner::new(PathBuf::from("./descriptors")).scan().unwrap();
//! let parsed = SnapshotParser::parse_files(&scan.snapshot_files).unwrap();
//! let resolver = TypeResolver::new(parsed.into_iter().flat_map(|p| p.snapshot.classes));
//!
//! let mut assembler = ResourceAssembler::new(&resolver, &options);
//! assembler.add_all(&resolver).unwrap();
//!
//! let documents = document::assemble(assembler.finish(), &options);
//! write_documents(&documents, &options.output_dir).unwrap();
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod cli;
pub mod scanner;
pub mod parser;
pub mod descriptor;
pub mod annotation;
pub mod extractor;
pub mod type_resolver;
pub mod model_graph;
pub mod resource;
pub mod document;
pub mod serializer;
pub mod options;
pub mod error;
