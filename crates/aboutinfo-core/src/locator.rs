//! Absolute, openable resource locators.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use url::Url;

/// Absolute reference to a resource. Only `file:` locators can be opened
/// directly; other schemes need a descriptor that knows how to fetch them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator(Url);

impl Locator {
    /// Locator for an absolute filesystem path. Returns `None` for relative paths.
    pub fn from_path(path: &Path) -> Option<Self> {
        Url::from_file_path(path).ok().map(Locator)
    }

    pub fn parse(s: &str) -> Result<Self, url::ParseError> {
        Url::parse(s).map(Locator)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Filesystem path for `file:` locators.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if self.0.scheme() != "file" {
            return None;
        }
        self.0.to_file_path().ok()
    }

    /// Open a byte stream. The stream is closed when the returned value is dropped.
    pub fn open(&self) -> io::Result<Box<dyn Read>> {
        match self.to_file_path() {
            Some(path) => Ok(Box::new(File::open(path)?)),
            None => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("cannot open locator with scheme {}", self.0.scheme()),
            )),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<Url> for Locator {
    fn from(url: Url) -> Self {
        Locator(url)
    }
}
