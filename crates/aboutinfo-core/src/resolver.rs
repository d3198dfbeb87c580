//! Resolver interface for turning logical file names into locale-aware locators.
//!
//! The about parser only depends on this trait and does not know how a
//! feature is installed or where its national-language fragments live.

use std::io::{self, Read};

use crate::locator::Locator;

/// Virtual path prefix expanded by descriptors to the national-language search order.
pub const NL_PREFIX: &str = "$nl$";

/// The plugin/feature descriptor that owns the about files.
///
/// Implemented by the installation registry (see [`crate::install`]); tests
/// use in-memory stubs.
pub trait PluginDescriptor: Send + Sync {
    /// Human-readable label, used as product name and feature label.
    fn label(&self) -> Option<&str>;

    fn provider_name(&self) -> Option<&str>;

    /// Find a resource by relative path, which may start with `$nl$/`.
    /// Returns `None` when nothing exists at any searched variant.
    fn find(&self, path: &str) -> Option<Locator>;

    /// Open a byte stream for a locator this descriptor returned.
    fn open(&self, locator: &Locator) -> io::Result<Box<dyn Read>> {
        locator.open()
    }
}

/// Resolve a logical file name under `$nl$`, as written.
/// Absent, empty or all-whitespace names resolve to `None`.
pub fn resolve(descriptor: &dyn PluginDescriptor, name: Option<&str>) -> Option<Locator> {
    let name = name.filter(|n| !n.trim().is_empty())?;
    let found = descriptor.find(&format!("{NL_PREFIX}/{name}"));
    if let Some(loc) = &found {
        tracing::debug!(name, locator = %loc, "resolved resource");
    }
    found
}
