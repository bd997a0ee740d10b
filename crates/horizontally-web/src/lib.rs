//! Browser bindings for Horizontally.
//!
//! On `wasm32` this crate provides [`WebPlatform`], the `web-sys`
//! implementation of the host traits, and the JavaScript-facing
//! `Horizontally` class. Loading the module publishes the constructor as
//! `window.Horizontally` for pages that do not use ES modules:
//!
//! ```js
//! var widget = new Horizontally(document.getElementById('logo'), { test: true });
//! widget.disable();
//! ```
//!
//! On other targets the crate only exposes the option conversion helpers
//! and the source of the published constructor.

pub mod global;
pub mod options;

pub use global::GLOBAL_NAME;

#[cfg(target_arch = "wasm32")]
mod binding;
#[cfg(target_arch = "wasm32")]
mod platform;

#[cfg(target_arch = "wasm32")]
pub use binding::{JsHorizontally, register_global};
#[cfg(target_arch = "wasm32")]
pub use platform::{WebElement, WebPlatform};
