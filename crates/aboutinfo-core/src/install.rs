//! Filesystem-backed plugin descriptor for an installed feature directory.
//!
//! Layout:
//!
//! ```text
//! <root>/feature.toml          optional manifest (id, version, label, provider_name)
//! <root>/about.ini
//! <root>/nl/fr/about.properties
//! <root>/nl/fr/CA/splash.png
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::locale::Locale;
use crate::locator::Locator;
use crate::resolver::{PluginDescriptor, NL_PREFIX};

/// Contents of the optional `feature.toml` manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureManifest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub provider_name: Option<String>,
}

/// Descriptor rooted at an install directory, searching `nl/` fragments for `$nl$`.
#[derive(Debug, Clone)]
pub struct InstallDescriptor {
    root: PathBuf,
    locale: Option<Locale>,
    manifest: FeatureManifest,
}

impl InstallDescriptor {
    pub fn new(root: &Path, locale: Option<Locale>, manifest: FeatureManifest) -> Self {
        InstallDescriptor {
            root: root.to_path_buf(),
            locale,
            manifest,
        }
    }

    /// Open an install directory, reading `manifest_name` if present.
    /// A missing manifest is fine; a malformed one is an error.
    pub fn open_dir(root: &Path, manifest_name: &str, locale: Option<Locale>) -> Result<Self> {
        let root = fs::canonicalize(root)
            .with_context(|| format!("install directory: {}", root.display()))?;
        let manifest_path = root.join(manifest_name);
        let manifest = if manifest_path.is_file() {
            let data = fs::read_to_string(&manifest_path)
                .with_context(|| format!("read manifest: {}", manifest_path.display()))?;
            toml::from_str(&data)
                .with_context(|| format!("parse manifest: {}", manifest_path.display()))?
        } else {
            FeatureManifest::default()
        };
        Ok(Self::new(&root, locale, manifest))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    pub fn manifest(&self) -> &FeatureManifest {
        &self.manifest
    }

    /// Feature id from the manifest, else the install directory name.
    pub fn feature_id(&self) -> String {
        self.manifest.id.clone().unwrap_or_else(|| {
            self.root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }

    fn existing(&self, candidate: PathBuf) -> Option<Locator> {
        if candidate.is_file() {
            Locator::from_path(&candidate)
        } else {
            None
        }
    }
}

/// Relative path made only of normal components, or `None`.
fn safe_relative(path: &str) -> Option<&Path> {
    let p = Path::new(path);
    let ok = !path.is_empty() && p.components().all(|c| matches!(c, Component::Normal(_)));
    ok.then_some(p)
}

impl PluginDescriptor for InstallDescriptor {
    fn label(&self) -> Option<&str> {
        self.manifest.label.as_deref()
    }

    fn provider_name(&self) -> Option<&str> {
        self.manifest.provider_name.as_deref()
    }

    fn find(&self, path: &str) -> Option<Locator> {
        match path.strip_prefix(NL_PREFIX) {
            Some(rest) => {
                let rel = safe_relative(rest.strip_prefix('/')?)?;
                Locale::nl_prefixes(self.locale.as_ref())
                    .iter()
                    .find_map(|prefix| self.existing(self.root.join(prefix).join(rel)))
            }
            None => self.existing(self.root.join(safe_relative(path)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, body: &str) {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(p, body).unwrap();
    }

    #[test]
    fn nl_prefers_country_then_language_then_root() {
        let dir = tempdir().unwrap();
        write(dir.path(), "about.properties", "root");
        write(dir.path(), "nl/fr/about.properties", "fr");
        write(dir.path(), "nl/fr/CA/about.properties", "fr_CA");

        let fr_ca = InstallDescriptor::open_dir(dir.path(), "feature.toml", Locale::parse("fr_CA"))
            .unwrap();
        let loc = fr_ca.find("$nl$/about.properties").unwrap();
        assert!(loc.as_str().ends_with("/nl/fr/CA/about.properties"));

        let fr_be = InstallDescriptor::open_dir(dir.path(), "feature.toml", Locale::parse("fr_BE"))
            .unwrap();
        let loc = fr_be.find("$nl$/about.properties").unwrap();
        assert!(loc.as_str().ends_with("/nl/fr/about.properties"));

        let de = InstallDescriptor::open_dir(dir.path(), "feature.toml", Locale::parse("de"))
            .unwrap();
        let loc = de.find("$nl$/about.properties").unwrap();
        assert_eq!(loc.to_file_path().unwrap(), de.root().join("about.properties"));
    }

    #[test]
    fn missing_file_and_traversal_are_none() {
        let dir = tempdir().unwrap();
        write(dir.path(), "about.ini", "");
        let d = InstallDescriptor::open_dir(dir.path(), "feature.toml", None).unwrap();
        assert!(d.find("$nl$/nope.gif").is_none());
        assert!(d.find("$nl$/../about.ini").is_none());
        assert!(d.find("/etc/passwd").is_none());
        assert!(d.find("$nl$/").is_none());
        assert!(d.find("about.ini").is_some());
    }

    #[test]
    fn nl_prefix_requires_separator() {
        let dir = tempdir().unwrap();
        write(dir.path(), "about.ini", "");
        let d = InstallDescriptor::open_dir(dir.path(), "feature.toml", None).unwrap();
        assert!(d.find("$nl$/about.ini").is_some());
        assert!(d.find("$nl$about.ini").is_none());
        assert!(d.find("$nl$//about.ini").is_none());
    }

    #[test]
    fn directories_are_not_resources() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        let d = InstallDescriptor::open_dir(dir.path(), "feature.toml", None).unwrap();
        assert!(d.find("$nl$/images").is_none());
    }

    #[test]
    fn manifest_supplies_delegated_fields() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "feature.toml",
            r#"
                id = "org.example.tools"
                version = "2.1.0"
                label = "Example Tools"
                provider_name = "Example Corp"
            "#,
        );
        let d = InstallDescriptor::open_dir(dir.path(), "feature.toml", None).unwrap();
        assert_eq!(d.label(), Some("Example Tools"));
        assert_eq!(d.provider_name(), Some("Example Corp"));
        assert_eq!(d.feature_id(), "org.example.tools");
        assert_eq!(d.manifest().version.as_deref(), Some("2.1.0"));
    }

    #[test]
    fn no_manifest_falls_back_to_dir_name() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("org.example.base");
        fs::create_dir_all(&root).unwrap();
        let d = InstallDescriptor::open_dir(&root, "feature.toml", None).unwrap();
        assert_eq!(d.feature_id(), "org.example.base");
        assert!(d.label().is_none());
        assert!(d.provider_name().is_none());
    }

    #[test]
    fn malformed_manifest_is_err() {
        let dir = tempdir().unwrap();
        write(dir.path(), "feature.toml", "label = [");
        assert!(InstallDescriptor::open_dir(dir.path(), "feature.toml", None).is_err());
    }
}
