use crate::error::Error;
use crate::extractor::parameter::InclusionPolicy;
use crate::model_graph::DEFAULT_MAX_DEPTH;
use crate::options::{DocletOptions, DEFAULT_API_BASE_PATH, DEFAULT_API_VERSION, DEFAULT_DOC_BASE_PATH};
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// Service Doclet - generate Swagger resource declarations from annotated JAX-RS class descriptors
#[derive(Parser, Debug)]
#[command(name = "service-doclet")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Descriptor snapshot file, or a directory of snapshots
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory the JSON documents are written to
    #[arg(short = 'd', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Base location of the generated documentation
    #[arg(long = "doc-base-path", value_name = "URL", default_value = DEFAULT_DOC_BASE_PATH)]
    pub doc_base_path: String,

    /// Base location of the documented API
    #[arg(long = "api-base-path", value_name = "URL", default_value = DEFAULT_API_BASE_PATH)]
    pub api_base_path: String,

    /// Version string stamped on every document
    #[arg(long = "api-version", value_name = "VERSION", default_value = DEFAULT_API_VERSION)]
    pub api_version: String,

    /// Maximum nesting of model types below an operation
    #[arg(long = "max-model-depth", value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_model_depth: usize,

    /// Document every annotated parameter, not only route-bound ones
    #[arg(long = "include-all-annotated-params")]
    pub include_all_annotated_params: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CliArgs {
    /// The generator configuration these arguments describe
    pub fn options(&self) -> DocletOptions {
        DocletOptions {
            output_dir: self.output_dir.clone(),
            doc_base_path: self.doc_base_path.clone(),
            api_base_path: self.api_base_path.clone(),
            api_version: self.api_version.clone(),
            max_model_depth: self.max_model_depth,
            parameter_inclusion: if self.include_all_annotated_params {
                InclusionPolicy::AnyAnnotation
            } else {
                InclusionPolicy::RecognizedOnly
            },
        }
    }
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.input.exists() {
        return Err(Error::InvalidArgument(format!(
            "input path does not exist: {}",
            args.input.display()
        ))
        .into());
    }

    if args.max_model_depth == 0 {
        return Err(Error::InvalidArgument("--max-model-depth must be at least 1".to_string()).into());
    }

    if args.output_dir.is_file() {
        return Err(Error::InvalidArgument(format!(
            "output path is not a directory: {}",
            args.output_dir.display()
        ))
        .into());
    }

    info!("Input: {}", args.input.display());
    info!("Output directory: {}", args.output_dir.display());
    info!("API version: {}", args.api_version);
    info!("API base path: {}", args.api_base_path);
    info!("Doc base path: {}", args.doc_base_path);

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::document;
    use crate::parser::SnapshotParser;
    use crate::resource::ResourceAssembler;
    use crate::scanner::FileScanner;
    use crate::serializer::write_documents;
    use crate::type_resolver::TypeResolver;

    let options = args.options();

    info!("Starting API documentation generation...");

    // Step 1: Locate snapshot files
    info!("Scanning for descriptor snapshots...");
    let scan_result = FileScanner::new(args.input.clone()).scan()?;

    info!("Found {} snapshot files", scan_result.snapshot_files.len());
    for warning in &scan_result.warnings {
        log::warn!("{}", warning);
    }

    if scan_result.snapshot_files.is_empty() {
        anyhow::bail!("No descriptor snapshots found in {}", args.input.display());
    }

    // Step 2: Load every snapshot; any failure aborts the run
    info!("Loading snapshots...");
    let parsed = SnapshotParser::parse_files(&scan_result.snapshot_files)?;

    // Step 3: Index classes
    let resolver = TypeResolver::new(parsed.into_iter().flat_map(|p| p.snapshot.classes));
    info!("Indexed {} classes", resolver.classes().len());

    // Step 4: Assemble resources and their model graphs
    info!("Assembling resources...");
    let mut assembler = ResourceAssembler::new(&resolver, &options);
    assembler
        .add_all(&resolver)
        .context("Failed to extract API model")?;
    let resources = assembler.finish();

    if resources.is_empty() {
        log::warn!("No resource classes found");
    }

    let operation_count: usize = resources
        .iter()
        .flat_map(|r| r.operations.values())
        .map(Vec::len)
        .sum();
    let model_count: usize = resources.iter().map(|r| r.models.len()).sum();

    // Step 5: Build documents
    let documents = document::assemble(resources, &options);

    // Step 6: Write them out
    info!("Writing documents to {}", options.output_dir.display());
    let written = write_documents(&documents, &options.output_dir)
        .with_context(|| format!("Failed to write documents to {}", options.output_dir.display()))?;

    info!("Generation complete!");
    info!("Summary:");
    info!("  - Snapshots loaded: {}", scan_result.snapshot_files.len());
    info!("  - Resources: {}", documents.declarations.len());
    info!("  - Operations: {}", operation_count);
    info!("  - Models: {}", model_count);
    info!("  - Files written: {}", written.len());

    Ok(())
}
