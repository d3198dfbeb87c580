//! Populate about fields from the about file, its properties and mappings.

use super::image::ImageRef;
use crate::bundle::{load_bundle, Bundle};
use crate::error::{AboutError, BundleError};
use crate::locator::Locator;
use crate::mappings::MappingTable;
use crate::report::{report_error, FailureSink};
use crate::resolver::{self, PluginDescriptor};
use crate::substitute::substitute;

pub const WINDOW_IMAGE: &str = "windowImage";
pub const ABOUT_TEXT: &str = "aboutText";
pub const ABOUT_IMAGE: &str = "aboutImage";
pub const FEATURE_IMAGE: &str = "featureImage";
pub const WELCOME_PAGE: &str = "welcomePage";
pub const APP_NAME: &str = "appName";

/// Everything read from the about files. All fields default to absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AboutFields {
    pub app_name: Option<String>,
    pub about_text: Option<String>,
    pub window_image: Option<ImageRef>,
    pub about_image: Option<ImageRef>,
    pub feature_image: Option<ImageRef>,
    pub feature_image_name: Option<String>,
    pub welcome_page: Option<Locator>,
}

/// Read the primary file, then the optional bundles, then resolve every field.
///
/// Only a primary-file failure is returned; optional bundle failures are
/// reported to `sink` and the bundle is treated as absent.
pub(crate) fn read_fields(
    descriptor: &dyn PluginDescriptor,
    primary: &Locator,
    properties: Option<&Locator>,
    mappings: Option<&Locator>,
    sink: &dyn FailureSink,
) -> Result<AboutFields, AboutError> {
    let ini = load_bundle(descriptor, primary).map_err(|source| AboutError::PrimaryUnreadable {
        locator: primary.clone(),
        source,
    })?;

    let bundle = load_optional(descriptor, properties, sink, |locator, source| {
        AboutError::BundleUnreadable { locator, source }
    });
    let mappings_bundle = load_optional(descriptor, mappings, sink, |locator, source| {
        AboutError::MappingsUnreadable { locator, source }
    });
    let table = MappingTable::from_bundle(mappings_bundle.as_ref());

    let text = |key: &str| substitute(ini.get(key), bundle.as_ref(), &table);
    let locate = |key: &str| resolver::resolve(descriptor, ini.get(key));
    let image = |key: &str| locate(key).map(ImageRef::from_locator);

    let fields = AboutFields {
        window_image: image(WINDOW_IMAGE),
        about_text: text(ABOUT_TEXT),
        about_image: image(ABOUT_IMAGE),
        feature_image_name: ini
            .get(FEATURE_IMAGE)
            .filter(|n| !n.trim().is_empty())
            .map(str::to_owned),
        feature_image: image(FEATURE_IMAGE),
        welcome_page: locate(WELCOME_PAGE),
        app_name: text(APP_NAME),
    };
    tracing::debug!(
        primary = %primary,
        localized = bundle.is_some(),
        mappings = table.len(),
        "read about info"
    );
    Ok(fields)
}

/// Load an optional bundle. A missing locator is silent; a failed load is
/// reported once and yields `None`.
fn load_optional<F>(
    descriptor: &dyn PluginDescriptor,
    locator: Option<&Locator>,
    sink: &dyn FailureSink,
    wrap: F,
) -> Option<Bundle>
where
    F: FnOnce(Locator, BundleError) -> AboutError,
{
    let locator = locator?;
    match load_bundle(descriptor, locator) {
        Ok(bundle) => Some(bundle),
        Err(source) => {
            report_error(sink, &wrap(locator.clone(), source));
            None
        }
    }
}
