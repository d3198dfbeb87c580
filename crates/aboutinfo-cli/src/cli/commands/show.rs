//! `aboutinfo show <dir>` – print the resolved about information.

use aboutinfo_core::config::AboutConfig;
use aboutinfo_core::install::InstallDescriptor;
use aboutinfo_core::locale::Locale;
use aboutinfo_core::{AboutInfo, AboutSummary, PluginDescriptor, TracingSink};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Open the install directory and read its about files.
pub fn load_about(cfg: &AboutConfig, dir: &Path, locale: Option<&str>) -> Result<AboutInfo> {
    let locale = match locale {
        Some(name) => Locale::parse(name),
        None => cfg.effective_locale(),
    };
    let desc = InstallDescriptor::open_dir(dir, &cfg.manifest, locale)?;
    tracing::debug!(
        root = %desc.root().display(),
        locale = ?desc.locale().map(|l| l.to_string()),
        "opened install directory"
    );
    let feature_id = desc.feature_id();
    let version = desc.manifest().version.clone();
    let desc: Arc<dyn PluginDescriptor> = Arc::new(desc);
    Ok(AboutInfo::load(
        feature_id,
        version,
        Some(desc),
        &cfg.files,
        &TracingSink,
    ))
}

pub fn render_text(summary: &AboutSummary) -> String {
    let rows = [
        ("Feature", Some(summary.feature_id.as_str())),
        ("Product", summary.product_name.as_deref()),
        ("Provider", summary.provider_name.as_deref()),
        ("Version", summary.version.as_deref()),
        ("App name", summary.app_name.as_deref()),
        ("Window image", summary.window_image.as_deref()),
        ("About image", summary.about_image.as_deref()),
        ("Feature image", summary.feature_image.as_deref()),
        ("Image name", summary.feature_image_name.as_deref()),
        ("Image CRC-32", summary.feature_image_crc.as_deref()),
        ("Welcome page", summary.welcome_page.as_deref()),
    ];
    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{:<14} {}\n", label, value.unwrap_or("-")));
    }
    if let Some(text) = &summary.about_text {
        out.push('\n');
        out.push_str(text);
        out.push('\n');
    }
    out
}

pub fn run_show(cfg: &AboutConfig, dir: &Path, locale: Option<&str>, json: bool) -> Result<()> {
    let summary = load_about(cfg, dir, locale)?.summary();
    if json {
        println!("{}", summary.to_json()?);
    } else {
        print!("{}", render_text(&summary));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_about_reads_install_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("feature.toml"), "label = \"Demo\"\nversion = \"1.2\"\n").unwrap();
        fs::write(dir.path().join("about.ini"), "aboutText=Hello\nfeatureImage=f.bin\n").unwrap();
        fs::write(dir.path().join("f.bin"), "123456789").unwrap();

        let info = load_about(&AboutConfig::default(), dir.path(), Some("C")).unwrap();
        assert_eq!(info.product_name(), Some("Demo"));
        assert_eq!(info.version(), Some("1.2"));
        assert_eq!(info.about_text(), Some("Hello"));
        assert_eq!(info.feature_image_crc(), Some(0xCBF4_3926));

        let text = render_text(&info.summary());
        assert!(text.contains("Product        Demo\n"));
        assert!(text.contains("Image CRC-32   cbf43926\n"));
        assert!(text.contains("Provider       -\n"));
        assert!(text.ends_with("\nHello\n"));
    }

    #[test]
    fn load_about_missing_dir_is_err() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(load_about(&AboutConfig::default(), &missing, None).is_err());
    }
}
