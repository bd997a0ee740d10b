//! Platform abstraction over the document and the orientation sensor.
//!
//! The widget never talks to a browser directly. Everything it needs from
//! the host goes through [`Platform`], which lets the same widget run on
//! `web-sys` in a page and on a recording mock in tests.
//!
//! # Borrow Checking Pattern
//!
//! All methods take `&self`. Element handles are cheap clones that refer
//! to the same host node, so implementations keep node state behind
//! shared ownership (the DOM itself, or `Arc<Mutex<_>>` in the mock).

use crate::event::OrientationEvent;

/// Identifies one orientation listener registered with a [`Platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Callback invoked for every orientation event.
pub type OrientationHandler = Box<dyn FnMut(&OrientationEvent)>;

/// An element's inline style declaration.
///
/// Names are DOM property names (`webkitTransformOrigin`), not dashed
/// CSS names.
pub trait StyleSurface {
    /// Whether the style object exposes a settable field with this name.
    fn has_property(&self, name: &str) -> bool;

    /// Current inline value, `None` if the field does not exist.
    fn property(&self, name: &str) -> Option<String>;

    /// Assign an inline value. Hosts ignore fields they do not know.
    fn set_property(&self, name: &str, value: &str);
}

/// Handle to a host element. Clones refer to the same node.
pub trait HostElement: StyleSurface + Clone {
    /// Raw attribute value, `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Short human-readable description used in traces.
    fn describe(&self) -> String;
}

/// Everything the widget needs from its host environment.
pub trait Platform {
    type Element: HostElement;

    /// The host's user-agent string.
    fn user_agent(&self) -> String;

    /// Whether the host exposes a device-orientation event type.
    fn has_orientation_events(&self) -> bool;

    /// Create a detached element with the given tag name.
    fn create_element(&self, tag: &str) -> Option<Self::Element>;

    /// The document's `<body>`, if one exists.
    fn body(&self) -> Option<Self::Element>;

    /// The document's root element (`<html>`).
    fn document_element(&self) -> Option<Self::Element>;

    fn append_child(&self, parent: &Self::Element, child: &Self::Element);

    fn remove_child(&self, parent: &Self::Element, child: &Self::Element);

    /// Computed value of a dashed CSS property such as `-webkit-transform`.
    fn computed_style(&self, element: &Self::Element, css_name: &str) -> Option<String>;

    /// Subscribe to device-orientation events.
    ///
    /// Returns `None` when the host could not register the listener.
    fn add_orientation_listener(&self, handler: OrientationHandler) -> Option<ListenerId>;

    /// Unsubscribe a listener. Unknown ids are ignored.
    fn remove_orientation_listener(&self, id: ListenerId);
}
