//! Tilt widget.
//!
//! [`TiltWidget`] rotates one element by the device heading reported by
//! the orientation sensor. The pieces are usable on their own:
//!
//! - [`applier`] - writes the rotation transform through the shared
//!   vendor-aware style cache
//! - [`listener`] - per-event handling and the RAII orientation
//!   subscription
//! - [`widget`] - the widget itself, tying settings, state and
//!   subscription together

pub mod applier;
pub mod listener;
pub mod widget;

pub use applier::apply_rotation;
pub use listener::{ListenerState, OrientationSubscription, TiltState};
pub use widget::TiltWidget;
