//! Image references handed to the presentation layer.

use crate::locator::Locator;

/// A resolved image. Decoding is left to whoever displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    locator: Locator,
}

impl ImageRef {
    pub fn from_locator(locator: Locator) -> Self {
        ImageRef { locator }
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }
}
