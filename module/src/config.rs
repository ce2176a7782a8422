//! Run configuration for the define-module pipeline.

use std::path::{Path, PathBuf};

use sbol_document::FileType;

/// Base name of the output file when none is given.
pub const DEFAULT_OUTPUT: &str = "out";

/// Log verbosity, chosen by how many times `-v` was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Warnings and errors only.
    #[default]
    Warn,
    /// Progress messages.
    Info,
    /// Everything.
    Debug,
}

impl Verbosity {
    /// Maps a flag count to a verbosity: 0 → warn, 1 → info, 2+ → debug.
    #[must_use]
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Verbosity::Warn,
            1 => Verbosity::Info,
            _ => Verbosity::Debug,
        }
    }

    /// Filter directive for this verbosity (e.g. `"info"`).
    #[must_use]
    pub fn directive(self) -> &'static str {
        match self {
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct Config {
    /// SBOL file to read; the serialization is inferred from its extension.
    pub input: PathBuf,
    /// Output base name; the file type's extension is appended if missing.
    pub output: PathBuf,
    /// Serialization of the output file.
    pub file_type: FileType,
    /// Log verbosity.
    pub verbosity: Verbosity,
}

impl Config {
    /// Creates a configuration with the default output name, file type, and verbosity.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            file_type: FileType::default(),
            verbosity: Verbosity::default(),
        }
    }

    /// The path the output will be written to.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.file_type.output_path(Path::new(&self.output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flag_count() {
        assert_eq!(Verbosity::from_occurrences(0), Verbosity::Warn);
        assert_eq!(Verbosity::from_occurrences(1), Verbosity::Info);
        assert_eq!(Verbosity::from_occurrences(2), Verbosity::Debug);
        assert_eq!(Verbosity::from_occurrences(7), Verbosity::Debug);
    }

    #[test]
    fn verbosity_directives() {
        assert_eq!(Verbosity::Warn.directive(), "warn");
        assert_eq!(Verbosity::Info.directive(), "info");
        assert_eq!(Verbosity::Debug.directive(), "debug");
    }

    #[test]
    fn defaults_write_sorted_ntriples_to_out() {
        let config = Config::new("design.ttl");
        assert_eq!(config.file_type, FileType::SortedNTriples);
        assert_eq!(config.verbosity, Verbosity::Warn);
        assert_eq!(config.output_path(), PathBuf::from("out.nt"));
    }

    #[test]
    fn output_path_follows_file_type() {
        let config = Config {
            output: PathBuf::from("result.xml"),
            file_type: FileType::RdfXml,
            ..Config::new("design.nt")
        };
        assert_eq!(config.output_path(), PathBuf::from("result.xml"));
    }
}
