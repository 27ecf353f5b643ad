//! Service Doclet - command-line tool for generating Swagger API documentation.
//!
//! Reads descriptor snapshots of annotated JAX-RS resource classes and writes
//! one JSON declaration per resource plus a `service.json` resource listing.
//!
//! # Usage
//!
//! ```bash
//! service-doclet [OPTIONS] <INPUT>
//! ```
//!
//! # Examples
//!
//! Generate documentation into `docs/`:
//! ```bash
//! service-doclet ./build/descriptors -d docs
//! ```
//!
//! Stamp a version and the public API location:
//! ```bash
//! service-doclet api.json --api-version 1.4 --api-base-path https://api.example.com
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! service-doclet api.json -v
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use service_doclet::cli;

fn main() -> Result<()> {
    // Parse once to read the verbose flag, then validate after the logger is up
    let args_for_verbose = cli::CliArgs::parse();

    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Service Doclet starting...");

    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    cli::run(args)?;

    info!("API documentation generation completed successfully");

    Ok(())
}
