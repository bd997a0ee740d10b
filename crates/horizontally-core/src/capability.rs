//! Load-time capability detection.
//!
//! Each query runs against the host once and is memoized for the lifetime
//! of the owning [`Capabilities`]. Detection never fails: a missing host
//! API simply reads as "unsupported".

use std::sync::OnceLock;

use bitflags::bitflags;

use crate::host::{HostElement, Platform, StyleSurface};
use crate::vendor::VendorPrefix;

/// User-agent fragments that classify a host as mobile (case-insensitive).
pub const MOBILE_SIGNATURES: &[&str] = &[
    "iphone",
    "ipod",
    "ipad",
    "android",
    "blackberry",
    "bb10",
    "mobi",
    "tablet",
    "opera mini",
    "nexus 7",
];

/// Value assigned to the probe element when testing 3D support.
const PROBE_3D_VALUE: &str = "translate3d(1px,1px,1px)";

bitflags! {
    /// Snapshot of everything detected about a host.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CapabilityFlags: u8 {
        /// The user agent does not look like a phone or tablet.
        const DESKTOP = 1 << 0;
        /// The host exposes device-orientation events.
        const ORIENTATION = 1 << 1;
        /// Some variant of the `transform` style property is settable.
        const TRANSFORM_2D = 1 << 2;
        /// A 3D transform survives into the computed style.
        const TRANSFORM_3D = 1 << 3;
    }
}

/// Transform dimension to test for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    TwoD,
    ThreeD,
}

/// Heuristic desktop classification of a user-agent string.
pub fn is_desktop_user_agent(user_agent: &str) -> bool {
    let user_agent = user_agent.to_lowercase();
    !MOBILE_SIGNATURES
        .iter()
        .any(|signature| user_agent.contains(signature))
}

/// First vendor variant whose `transform` field exists on `probe`.
pub fn probe_transform_prefix<S: StyleSurface + ?Sized>(probe: &S) -> Option<VendorPrefix> {
    VendorPrefix::ALL
        .into_iter()
        .find(|prefix| probe.has_property(&prefix.dom_name("transform")))
}

/// Whether a 3D transform applied through `prefix` is honored by the host.
///
/// The probe is attached to `<body>` so the host computes its style. When
/// the document has no body, a temporary one is attached to the root
/// element with overflow hidden. The document is left exactly as found:
/// the probe and any temporary body are detached and the root overflow is
/// restored.
pub fn probe_transform_3d<P: Platform>(
    platform: &P,
    probe: &P::Element,
    prefix: VendorPrefix,
) -> bool {
    let existing_body = platform.body();
    let mut temporary = None;

    let body = match existing_body {
        Some(body) => body,
        None => {
            let Some(root) = platform.document_element() else {
                return false;
            };
            let Some(body) = platform.create_element("body") else {
                return false;
            };
            let root_overflow = root.property("overflow").unwrap_or_default();
            root.set_property("overflow", "hidden");
            body.set_property("overflow", "hidden");
            body.set_property("background", "");
            platform.append_child(&root, &body);
            temporary = Some((root, root_overflow));
            body
        }
    };

    platform.append_child(&body, probe);
    probe.set_property(&prefix.dom_name("transform"), PROBE_3D_VALUE);
    let computed = platform.computed_style(probe, &prefix.css_name("transform"));
    platform.remove_child(&body, probe);

    if let Some((root, root_overflow)) = temporary {
        platform.remove_child(&root, &body);
        root.set_property("overflow", &root_overflow);
    }

    let supported = computed.is_some_and(|value| !value.is_empty() && value != "none");
    tracing::trace!(?prefix, supported, "3D transform probe finished");
    supported
}

/// Memoized capability queries for one host.
#[derive(Debug, Default)]
pub struct Capabilities {
    desktop: OnceLock<bool>,
    orientation: OnceLock<bool>,
    transform_prefix: OnceLock<Option<VendorPrefix>>,
    transform_3d: OnceLock<bool>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_desktop_class<P: Platform>(&self, platform: &P) -> bool {
        *self.desktop.get_or_init(|| {
            let desktop = is_desktop_user_agent(&platform.user_agent());
            tracing::debug!(desktop, "classified host");
            desktop
        })
    }

    pub fn supports_orientation<P: Platform>(&self, platform: &P) -> bool {
        *self.orientation.get_or_init(|| {
            let supported = platform.has_orientation_events();
            tracing::debug!(supported, "detected orientation support");
            supported
        })
    }

    /// Vendor variant of `transform` the host accepts, probed on a throwaway
    /// element.
    pub fn transform_prefix<P: Platform>(&self, platform: &P) -> Option<VendorPrefix> {
        *self.transform_prefix.get_or_init(|| {
            let prefix = platform
                .create_element("div")
                .and_then(|probe| probe_transform_prefix(&probe));
            tracing::debug!(?prefix, "detected transform support");
            prefix
        })
    }

    pub fn supports_transform<P: Platform>(&self, platform: &P, dimension: Dimension) -> bool {
        match dimension {
            Dimension::TwoD => self.transform_prefix(platform).is_some(),
            Dimension::ThreeD => *self.transform_3d.get_or_init(|| {
                let Some(prefix) = self.transform_prefix(platform) else {
                    return false;
                };
                let supported = platform
                    .create_element("div")
                    .is_some_and(|probe| probe_transform_3d(platform, &probe, prefix));
                tracing::debug!(supported, "detected 3D transform support");
                supported
            }),
        }
    }

    /// Run every query and collect the results.
    pub fn flags<P: Platform>(&self, platform: &P) -> CapabilityFlags {
        let mut flags = CapabilityFlags::empty();
        flags.set(CapabilityFlags::DESKTOP, self.is_desktop_class(platform));
        flags.set(
            CapabilityFlags::ORIENTATION,
            self.supports_orientation(platform),
        );
        flags.set(
            CapabilityFlags::TRANSFORM_2D,
            self.supports_transform(platform, Dimension::TwoD),
        );
        flags.set(
            CapabilityFlags::TRANSFORM_3D,
            self.supports_transform(platform, Dimension::ThreeD),
        );
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_user_agents() {
        assert!(is_desktop_user_agent(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/122.0 Safari/537.36"
        ));
        assert!(is_desktop_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0"
        ));
        assert!(is_desktop_user_agent(""));
    }

    #[test]
    fn test_mobile_user_agents() {
        assert!(!is_desktop_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15"
        ));
        assert!(!is_desktop_user_agent(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile Safari/537.36"
        ));
        assert!(!is_desktop_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(!is_desktop_user_agent("Mozilla/5.0 (BB10; Touch) AppleWebKit/537.10+"));
        assert!(!is_desktop_user_agent("something NEXUS 7 something"));
    }
}
