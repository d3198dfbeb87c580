//! Load a bundle through a plugin descriptor's opener.

use std::io::Read;

use super::Bundle;
use crate::error::BundleError;
use crate::locator::Locator;
use crate::resolver::PluginDescriptor;

/// Open `locator`, read it fully and parse it.
///
/// The stream lives only for the duration of this call. Failures are
/// returned to the caller, which decides whether to report them.
pub fn load_bundle(
    descriptor: &dyn PluginDescriptor,
    locator: &Locator,
) -> Result<Bundle, BundleError> {
    let mut bytes = Vec::new();
    {
        let mut stream = descriptor.open(locator)?;
        stream.read_to_end(&mut bytes)?;
    }
    let bundle = Bundle::from_bytes(&bytes)?;
    tracing::debug!(locator = %locator, entries = bundle.len(), "loaded bundle");
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};

    struct FileOnly;

    impl PluginDescriptor for FileOnly {
        fn label(&self) -> Option<&str> {
            None
        }
        fn provider_name(&self) -> Option<&str> {
            None
        }
        fn find(&self, _path: &str) -> Option<Locator> {
            None
        }
    }

    #[test]
    fn loads_file_locator() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"greeting=Hello {0}\n").unwrap();
        f.flush().unwrap();
        let loc = Locator::from_path(f.path()).unwrap();
        let b = load_bundle(&FileOnly, &loc).unwrap();
        assert_eq!(b.get("greeting"), Some("Hello {0}"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let loc = Locator::from_path(&dir.path().join("about.properties")).unwrap();
        match load_bundle(&FileOnly, &loc) {
            Err(BundleError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn malformed_text_is_parse_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"k=\\uZZZZ\n").unwrap();
        f.flush().unwrap();
        let loc = Locator::from_path(f.path()).unwrap();
        assert!(matches!(
            load_bundle(&FileOnly, &loc),
            Err(BundleError::Malformed { line: 1, .. })
        ));
    }
}
