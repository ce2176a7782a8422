//! Namespace classification and module definition for SBOL3 documents.
//!
//! A document is a module when every top-level object carries the same
//! `sbol:hasNamespace`. [`classify`] decides that, [`build_module`] records
//! it as a new `Module` object listing every member, and [`define_module`]
//! composes the two. [`run`] adds file input and output around them.
//!
//! # Entry Point
//!
//! ```
//! use sbol_document::{parser, FileType};
//! use sbol_module::{define_module, Outcome};
//!
//! let text = concat!(
//!     "<https://ex.org/a/1> <http://sbols.org/v3#hasNamespace> <https://ex.org/a> .\n",
//!     "<https://ex.org/a/2> <http://sbols.org/v3#hasNamespace> <https://ex.org/a> .\n",
//! );
//! let mut doc = parser::parse_str(text, FileType::NTriples)?;
//! match define_module(&mut doc)? {
//!     Outcome::Module(module) => assert_eq!(module.identity, "https://ex.org/a/module"),
//!     Outcome::NotAModule { .. } => unreachable!(),
//! }
//! # Ok::<(), sbol_module::ModuleError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod pipeline;

pub use builder::build_module;
pub use classify::{classify, distinct_namespaces, Classification, NamespaceCount, UniformNamespace};
pub use config::{Config, Verbosity, DEFAULT_OUTPUT};
pub use error::ModuleError;
pub use pipeline::{define_module, run, Outcome};
