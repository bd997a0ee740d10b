//! The host environment shared by every widget on a page.

use crate::capability::{Capabilities, CapabilityFlags, Dimension};
use crate::host::Platform;
use crate::style::StylePropertyCache;
use crate::vendor::VendorPrefix;

/// A platform together with its memoized capabilities and style cache.
///
/// Widgets share one environment (typically through `Rc`), so capability
/// detection and property resolution happen once per host rather than
/// once per widget. Tests build a fresh environment per simulated host.
pub struct Environment<P: Platform> {
    platform: P,
    capabilities: Capabilities,
    styles: StylePropertyCache,
}

impl<P: Platform> Environment<P> {
    /// Wrap a platform. Detection runs lazily on first query.
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            capabilities: Capabilities::new(),
            styles: StylePropertyCache::new(),
        }
    }

    /// Wrap a platform and run every detection immediately, as happens
    /// when the widget script loads.
    pub fn detect(platform: P) -> Self {
        let env = Self::new(platform);
        let flags = env.flags();
        tracing::info!(?flags, "environment detected");
        env
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn styles(&self) -> &StylePropertyCache {
        &self.styles
    }

    pub fn is_desktop_class(&self) -> bool {
        self.capabilities.is_desktop_class(&self.platform)
    }

    pub fn supports_orientation(&self) -> bool {
        self.capabilities.supports_orientation(&self.platform)
    }

    pub fn supports_transform(&self, dimension: Dimension) -> bool {
        self.capabilities
            .supports_transform(&self.platform, dimension)
    }

    pub fn transform_prefix(&self) -> Option<VendorPrefix> {
        self.capabilities.transform_prefix(&self.platform)
    }

    pub fn flags(&self) -> CapabilityFlags {
        self.capabilities.flags(&self.platform)
    }
}
