//! `sbol-define-module` — Defines a Module over an SBOL3 document whose
//! top-level objects all share one namespace, and writes the result.
//!
//! **Exit status:**
//! - `0` — module defined and written
//! - `2` — input valid but not a module; nothing written
//! - `1` — input unreadable or malformed, or any other failure
//!
//! **Usage:**
//! ```text
//! sbol-define-module <SBOL_FILE> [-o <output>] [-t <file-type>] [-v...]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use sbol_document::FileType;
use sbol_module::{run, Config, ModuleError, Outcome, Verbosity, DEFAULT_OUTPUT};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Check whether an SBOL document is a module and, if so, define it.
#[derive(Parser)]
#[command(
    name = "sbol-define-module",
    about = "Define a Module for an SBOL3 document whose top-level objects share one namespace"
)]
struct Args {
    /// SBOL file used as input (.nt, .ttl, .xml or .rdf).
    sbol_file: PathBuf,

    /// Name of the SBOL file to be written; the extension is added if missing.
    #[arg(short, long = "output", default_value = DEFAULT_OUTPUT)]
    output_file: PathBuf,

    /// Serialization of the output file.
    #[arg(short = 't', long, value_enum, default_value_t = FileTypeArg::SortedNt)]
    file_type: FileTypeArg,

    /// Print a running explanation; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum FileTypeArg {
    /// Sorted N-Triples.
    #[value(name = "sorted-nt", alias = "sorted nt")]
    SortedNt,
    /// N-Triples.
    Nt,
    /// Turtle.
    Ttl,
    /// RDF/XML.
    #[value(alias = "rdf-xml")]
    Xml,
    /// JSON-LD.
    #[value(name = "json-ld", alias = "jsonld")]
    JsonLd,
}

impl From<FileTypeArg> for FileType {
    fn from(arg: FileTypeArg) -> Self {
        match arg {
            FileTypeArg::SortedNt => FileType::SortedNTriples,
            FileTypeArg::Nt => FileType::NTriples,
            FileTypeArg::Ttl => FileType::Turtle,
            FileTypeArg::Xml => FileType::RdfXml,
            FileTypeArg::JsonLd => FileType::JsonLd,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            input: args.sbol_file,
            output: args.output_file,
            file_type: args.file_type.into(),
            verbosity: Verbosity::from_occurrences(args.verbose),
        }
    }
}

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn define(config: &Config) -> Result<Outcome> {
    run(config).with_context(|| {
        format!("Failed to define a module from {}", config.input.display())
    })
}

fn main() -> ExitCode {
    let config = Config::from(Args::parse());
    init_logging(config.verbosity);

    match define(&config) {
        Ok(Outcome::Module(module)) => {
            println!(
                "{} is a module: {} with {} member(s)",
                config.input.display(),
                module.identity,
                module.members.len()
            );
            println!("  Written: {}", config.output_path().display());
            ExitCode::SUCCESS
        }
        Ok(Outcome::NotAModule { namespaces }) => {
            println!(
                "{} is not a module: top-level objects span {} namespaces",
                config.input.display(),
                namespaces.len()
            );
            for ns in &namespaces {
                println!("  {} ({} object(s))", ns.namespace, ns.objects);
            }
            println!("No output written.");
            ExitCode::from(2)
        }
        Err(err) => {
            let input_error = err
                .downcast_ref::<ModuleError>()
                .is_some_and(ModuleError::is_input_error);
            if input_error {
                eprintln!("Input unreadable or malformed: {err:#}");
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
