//! Horizontally - keep an element level while the device tilts
//!
//! Horizontally rotates a page element by the heading reported by the
//! device-orientation sensor. It is built from small crates:
//!
//! - **Core**: host traits, capability detection, vendor-prefixed style
//!   resolution and declarative `data-*` settings
//! - **Widget**: the tilt widget and its orientation subscription
//! - **Web**: the `web-sys` host and the `Horizontally` JavaScript class
//!
//! # Quick Start
//!
//! ```ignore
//! use horizontally::prelude::*;
//!
//! let env = Rc::new(Environment::detect(WebPlatform::new()?));
//! let widget = TiltWidget::new(Rc::clone(&env), element, None);
//! ```
//!
//! # Features
//!
//! - `widget` (default) - [`TiltWidget`] and friends
//! - `web` - browser bindings; only meaningful on `wasm32`

// Re-export core types
pub use horizontally_core as core;
pub use horizontally_core::logging;

// Re-export sub-crates based on features
#[cfg(feature = "widget")]
pub use horizontally_widget as widget;
#[cfg(feature = "widget")]
pub use horizontally_widget::{ListenerState, TiltWidget};

#[cfg(feature = "web")]
pub use horizontally_web as web;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use std::rc::Rc;

    pub use horizontally_core::{
        AttrValue, CapabilityFlags, Dimension, Environment, HostElement, OrientationEvent,
        Platform, Settings, StyleSurface, VendorPrefix, WidgetError, WidgetResult,
    };

    #[cfg(feature = "widget")]
    pub use horizontally_widget::{ListenerState, TiltWidget, apply_rotation};

    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    pub use horizontally_web::{JsHorizontally, WebElement, WebPlatform};
}
