//! Error types for bundle loading and about-file parsing.

use std::io;

use crate::locator::Locator;

/// Failure to load a properties-style bundle from a locator.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// Opening or reading the stream failed.
    #[error("I/O error")]
    Io(#[from] io::Error),
    /// The text could not be parsed (e.g. a bad `\uXXXX` escape).
    #[error("malformed entry on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Failures raised while populating an [`AboutInfo`](crate::AboutInfo).
///
/// Only the first three variants abort population; the bundle variants are
/// reported and parsing continues without the bundle.
#[derive(Debug, thiserror::Error)]
pub enum AboutError {
    #[error("cannot find plugin for feature {feature_id}")]
    MissingDescriptor { feature_id: String },

    #[error("cannot find about info file {name}")]
    PrimaryNotFound { name: String },

    #[error("cannot read about info file {locator}")]
    PrimaryUnreadable {
        locator: Locator,
        #[source]
        source: BundleError,
    },

    #[error("cannot read about properties file {locator}")]
    BundleUnreadable {
        locator: Locator,
        #[source]
        source: BundleError,
    },

    #[error("cannot read about mappings file {locator}")]
    MappingsUnreadable {
        locator: Locator,
        #[source]
        source: BundleError,
    },
}
