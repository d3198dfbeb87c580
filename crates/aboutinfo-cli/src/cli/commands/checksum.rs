//! `aboutinfo checksum <dir>` – CRC-32 of the feature image.

use aboutinfo_core::config::AboutConfig;
use anyhow::{bail, Result};
use std::path::Path;

use super::load_about;

/// Print the checksum as 8 hex digits followed by the image name.
pub fn run_checksum(cfg: &AboutConfig, dir: &Path, locale: Option<&str>) -> Result<()> {
    let info = load_about(cfg, dir, locale)?;
    let Some(name) = info.feature_image_name() else {
        bail!("{} declares no feature image", dir.display());
    };
    match info.feature_image_crc() {
        Some(crc) => println!("{crc:08x}  {name}"),
        None => bail!("feature image {name} could not be read"),
    }
    Ok(())
}
