pub mod config;
pub mod logging;

pub mod about;
pub mod bundle;
pub mod checksum;
pub mod error;
pub mod install;
pub mod locale;
pub mod locator;
pub mod mappings;
pub mod report;
pub mod resolver;
pub mod substitute;

pub use about::{AboutInfo, AboutSummary, ImageRef};
pub use error::{AboutError, BundleError};
pub use locator::Locator;
pub use report::{FailureSink, TracingSink};
pub use resolver::PluginDescriptor;
