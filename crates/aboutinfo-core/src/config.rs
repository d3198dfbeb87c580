use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::locale::Locale;

/// Names of the three about files looked up under `$nl$`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutFiles {
    /// Primary key/value file.
    pub ini: String,
    /// Localization bundle; values of the primary file are looked up here.
    pub properties: String,
    /// Positional `{i}` values.
    pub mappings: String,
}

impl Default for AboutFiles {
    fn default() -> Self {
        Self {
            ini: "about.ini".to_string(),
            properties: "about.properties".to_string(),
            mappings: "about.mappings".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/aboutinfo/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutConfig {
    #[serde(default)]
    pub files: AboutFiles,
    /// Feature manifest file name inside an install directory.
    #[serde(default = "default_manifest")]
    pub manifest: String,
    /// Locale override (e.g. "fr_CA"); if missing, taken from the environment.
    #[serde(default)]
    pub locale: Option<String>,
}

fn default_manifest() -> String {
    "feature.toml".to_string()
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            files: AboutFiles::default(),
            manifest: default_manifest(),
            locale: None,
        }
    }
}

impl AboutConfig {
    /// Configured locale, else the environment's.
    pub fn effective_locale(&self) -> Option<Locale> {
        match &self.locale {
            Some(name) => Locale::parse(name),
            None => Locale::from_env(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("aboutinfo")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AboutConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AboutConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<AboutConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: AboutConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = AboutConfig::default();
        assert_eq!(cfg.files.ini, "about.ini");
        assert_eq!(cfg.files.properties, "about.properties");
        assert_eq!(cfg.files.mappings, "about.mappings");
        assert_eq!(cfg.manifest, "feature.toml");
        assert!(cfg.locale.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = AboutConfig {
            locale: Some("de_AT".to_string()),
            ..AboutConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AboutConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: AboutConfig = toml::from_str(r#"locale = "fr_CA""#).unwrap();
        assert_eq!(cfg.files, AboutFiles::default());
        assert_eq!(cfg.manifest, "feature.toml");
        assert_eq!(
            cfg.effective_locale(),
            Some(Locale {
                language: "fr".to_string(),
                country: Some("CA".to_string())
            })
        );
    }

    #[test]
    fn config_toml_custom_files() {
        let toml = r#"
            manifest = "plugin.toml"

            [files]
            ini = "product.ini"
            properties = "product.properties"
            mappings = "product.mappings"
        "#;
        let cfg: AboutConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.manifest, "plugin.toml");
        assert_eq!(cfg.files.ini, "product.ini");
        assert_eq!(cfg.files.mappings, "product.mappings");
    }

    #[test]
    fn load_from_reports_path_on_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut f, b"files = 3").unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }
}
