//! The about info of an installed feature.
//!
//! Populated once from the feature's `about.ini`, optionally localized through
//! `about.properties` and `about.mappings`. Product name, provider name and
//! feature label are read through to the plugin descriptor; the feature image
//! checksum is computed on first request.

mod image;
mod read;

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::checksum::{self, ChecksumCache};
use crate::config::AboutFiles;
use crate::error::AboutError;
use crate::locator::Locator;
use crate::report::{report_error, FailureSink};
use crate::resolver::{self, PluginDescriptor};

pub use image::ImageRef;
pub use read::{ABOUT_IMAGE, ABOUT_TEXT, APP_NAME, FEATURE_IMAGE, WELCOME_PAGE, WINDOW_IMAGE};

use read::{read_fields, AboutFields};

pub struct AboutInfo {
    feature_id: String,
    version: Option<String>,
    descriptor: Option<Arc<dyn PluginDescriptor>>,
    fields: AboutFields,
    crc: ChecksumCache,
}

impl AboutInfo {
    /// Unpopulated record: every about-file field is absent.
    pub fn empty(
        feature_id: impl Into<String>,
        version: Option<String>,
        descriptor: Option<Arc<dyn PluginDescriptor>>,
    ) -> Self {
        AboutInfo {
            feature_id: feature_id.into(),
            version,
            descriptor,
            fields: AboutFields::default(),
            crc: ChecksumCache::new(),
        }
    }

    /// Locate the configured about files under `$nl$` and parse them.
    ///
    /// A missing descriptor or missing primary file is reported once and
    /// yields an empty record. Missing properties/mappings files are silent.
    pub fn load(
        feature_id: impl Into<String>,
        version: Option<String>,
        descriptor: Option<Arc<dyn PluginDescriptor>>,
        files: &AboutFiles,
        sink: &dyn FailureSink,
    ) -> Self {
        let feature_id = feature_id.into();
        let Some(desc) = descriptor else {
            report_error(sink, &AboutError::MissingDescriptor {
                feature_id: feature_id.clone(),
            });
            return Self::empty(feature_id, version, None);
        };
        let Some(primary) = resolver::resolve(desc.as_ref(), Some(files.ini.as_str())) else {
            report_error(sink, &AboutError::PrimaryNotFound {
                name: files.ini.clone(),
            });
            return Self::empty(feature_id, version, Some(desc));
        };
        let properties = resolver::resolve(desc.as_ref(), Some(files.properties.as_str()));
        let mappings = resolver::resolve(desc.as_ref(), Some(files.mappings.as_str()));
        Self::parse(
            feature_id,
            version,
            desc,
            &primary,
            properties.as_ref(),
            mappings.as_ref(),
            sink,
        )
    }

    /// Parse the about files at the given locators.
    ///
    /// If the primary file cannot be read, the failure is reported once and
    /// the returned record is empty but usable.
    pub fn parse(
        feature_id: impl Into<String>,
        version: Option<String>,
        descriptor: Arc<dyn PluginDescriptor>,
        primary: &Locator,
        properties: Option<&Locator>,
        mappings: Option<&Locator>,
        sink: &dyn FailureSink,
    ) -> Self {
        let fields = read_fields(descriptor.as_ref(), primary, properties, mappings, sink)
            .unwrap_or_else(|err| {
                report_error(sink, &err);
                AboutFields::default()
            });
        AboutInfo {
            fields,
            ..Self::empty(feature_id, version, Some(descriptor))
        }
    }

    /// Like [`AboutInfo::parse`], but a primary-file failure is returned instead of reported.
    pub fn try_parse(
        feature_id: impl Into<String>,
        version: Option<String>,
        descriptor: Arc<dyn PluginDescriptor>,
        primary: &Locator,
        properties: Option<&Locator>,
        mappings: Option<&Locator>,
        sink: &dyn FailureSink,
    ) -> Result<Self, AboutError> {
        let fields = read_fields(descriptor.as_ref(), primary, properties, mappings, sink)?;
        Ok(AboutInfo {
            fields,
            ..Self::empty(feature_id, version, Some(descriptor))
        })
    }

    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    /// App name, used to identify the application to the windowing system. Never shown.
    pub fn app_name(&self) -> Option<&str> {
        self.fields.app_name.as_deref()
    }

    /// Shown in the window title and the About action.
    pub fn product_name(&self) -> Option<&str> {
        self.descriptor.as_deref()?.label()
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.descriptor.as_deref()?.provider_name()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn feature_label(&self) -> Option<&str> {
        self.descriptor.as_deref()?.label()
    }

    pub fn about_text(&self) -> Option<&str> {
        self.fields.about_text.as_deref()
    }

    pub fn window_image(&self) -> Option<&ImageRef> {
        self.fields.window_image.as_ref()
    }

    pub fn about_image(&self) -> Option<&ImageRef> {
        self.fields.about_image.as_ref()
    }

    pub fn feature_image(&self) -> Option<&ImageRef> {
        self.fields.feature_image.as_ref()
    }

    /// Feature image file name as written in the about file, resolved or not.
    pub fn feature_image_name(&self) -> Option<&str> {
        self.fields.feature_image_name.as_deref()
    }

    pub fn welcome_page(&self) -> Option<&Locator> {
        self.fields.welcome_page.as_ref()
    }

    /// CRC-32 of the feature image bytes.
    ///
    /// Computed on first call and cached, including the "no value" outcome.
    /// Unresolvable or unreadable images give `None` without any report.
    pub fn feature_image_crc(&self) -> Option<u32> {
        self.crc.get_or_compute(|| {
            let descriptor = self.descriptor.as_deref()?;
            let locator = resolver::resolve(descriptor, self.feature_image_name())?;
            let stream = descriptor.open(&locator).ok()?;
            checksum::crc32_reader(stream).ok()
        })
    }

    /// Snapshot of every accessor. Computes the checksum if needed.
    pub fn summary(&self) -> AboutSummary {
        let image = |i: Option<&ImageRef>| i.map(|i| i.locator().to_string());
        AboutSummary {
            feature_id: self.feature_id.clone(),
            product_name: self.product_name().map(str::to_owned),
            provider_name: self.provider_name().map(str::to_owned),
            version: self.version.clone(),
            feature_label: self.feature_label().map(str::to_owned),
            app_name: self.fields.app_name.clone(),
            about_text: self.fields.about_text.clone(),
            window_image: image(self.window_image()),
            about_image: image(self.about_image()),
            feature_image: image(self.feature_image()),
            feature_image_name: self.fields.feature_image_name.clone(),
            feature_image_crc: self.feature_image_crc().map(|c| format!("{c:08x}")),
            welcome_page: self.welcome_page().map(Locator::to_string),
        }
    }
}

impl fmt::Debug for AboutInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AboutInfo")
            .field("feature_id", &self.feature_id)
            .field("version", &self.version)
            .field("has_descriptor", &self.descriptor.is_some())
            .field("fields", &self.fields)
            .field("crc", &self.crc.state())
            .finish()
    }
}

/// Serializable view of an [`AboutInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutSummary {
    pub feature_id: String,
    pub product_name: Option<String>,
    pub provider_name: Option<String>,
    pub version: Option<String>,
    pub feature_label: Option<String>,
    pub app_name: Option<String>,
    pub about_text: Option<String>,
    pub window_image: Option<String>,
    pub about_image: Option<String>,
    pub feature_image: Option<String>,
    pub feature_image_name: Option<String>,
    /// Lowercase hex, 8 digits.
    pub feature_image_crc: Option<String>,
    pub welcome_page: Option<String>,
}

impl AboutSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
