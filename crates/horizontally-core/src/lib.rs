//! Horizontally Core
//!
//! This crate contains the pieces every tilt widget shares: the host
//! abstraction, load-time capability detection, vendor-prefixed style
//! resolution and declarative settings.

pub mod capability;
pub mod environment;
pub mod error;
pub mod event;
pub mod host;
pub mod logging;
pub mod settings;
pub mod style;
pub mod vendor;

pub use capability::{Capabilities, CapabilityFlags, Dimension};
pub use environment::Environment;
pub use error::{WidgetError, WidgetResult};
pub use event::OrientationEvent;
pub use host::{HostElement, ListenerId, OrientationHandler, Platform, StyleSurface};
pub use settings::{AttrValue, Settings};
pub use style::StylePropertyCache;
pub use vendor::VendorPrefix;
