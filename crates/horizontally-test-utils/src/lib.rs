//! Test utilities for Horizontally.
//!
//! This crate provides a scripted host for exercising widgets without a
//! browser.
//!
//! - [`user_agents`] - Representative desktop and mobile user-agent strings
//! - `MockPlatform` - In-memory document and orientation sensor that
//!   records every host call (requires `mock` feature)
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use horizontally_core::{OrientationEvent, Platform};
//! use horizontally_test_utils::MockPlatform;
//!
//! let platform = MockPlatform::new();
//! let id = platform.add_orientation_listener(Box::new(|event: &OrientationEvent| {
//!     assert_eq!(event.alpha, Some(10.0));
//! }));
//! assert!(id.is_some());
//!
//! platform.dispatch_orientation(OrientationEvent::with_alpha(10.0));
//! assert_eq!(platform.listener_count(), 1);
//! # }
//! ```

#[cfg(feature = "mock")]
pub mod mock_platform;
pub mod user_agents;

#[cfg(feature = "mock")]
pub use mock_platform::*;
