//! Key/value resource bundles read from properties-style text.
//!
//! Used for the primary about file, the localization bundle and the mappings
//! bundle alike.

mod load;
mod parse;

use std::collections::HashMap;

use crate::error::BundleError;

pub use load::load_bundle;
pub use parse::decode;

/// Key → string map. Later duplicates of a key replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: HashMap<String, String>,
}

impl Bundle {
    /// Parse properties text.
    pub fn parse(text: &str) -> Result<Self, BundleError> {
        Ok(parse::parse_entries(text)?.into_iter().collect())
    }

    /// Parse raw bytes (UTF-8, or ISO-8859-1 when not valid UTF-8).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BundleError> {
        Self::parse(&decode(bytes))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Bundle {
            entries: iter.into_iter().collect(),
        }
    }
}
