//! Mock implementation of Platform for testing.
//!
//! This module provides an in-memory document and orientation sensor that
//! record operations without touching a browser.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::{AHashMap, AHashSet};
use horizontally_core::vendor::VendorPrefix;
use horizontally_core::{
    HostElement, ListenerId, OrientationEvent, OrientationHandler, Platform, StyleSurface,
};
use parking_lot::Mutex;

use crate::user_agents::DESKTOP_CHROME;

/// Style fields every mock element exposes, whatever the transform setup.
const BASE_STYLE_FIELDS: &[&str] = &["overflow", "background", "position"];

/// Computed value reported for an accepted 2D transform.
const COMPUTED_MATRIX: &str = "matrix(1, 0, 0, 1, 1, 1)";

/// Computed value reported for an accepted 3D transform.
const COMPUTED_MATRIX_3D: &str = "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1)";

/// DOM style property name for a dashed CSS name, e.g. `-webkit-transform`
/// to `webkitTransform`.
fn dom_name_for(css_name: &str) -> String {
    VendorPrefix::ALL
        .into_iter()
        .filter(|prefix| *prefix != VendorPrefix::Unprefixed)
        .find_map(|prefix| {
            css_name
                .strip_prefix(prefix.css_prefix())
                .map(|logical| prefix.dom_name(logical))
        })
        .unwrap_or_else(|| VendorPrefix::Unprefixed.dom_name(css_name))
}

/// Records a host operation for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    CreateElement {
        element: usize,
        tag: String,
    },
    AppendChild {
        parent: usize,
        child: usize,
    },
    RemoveChild {
        parent: usize,
        child: usize,
    },
    SetStyle {
        element: usize,
        name: String,
        value: String,
    },
    ComputedStyle {
        element: usize,
        css_name: String,
    },
    AddListener {
        id: ListenerId,
    },
    RemoveListener {
        id: ListenerId,
    },
}

/// State shared by the platform and every element it creates.
#[derive(Debug, Default)]
struct MockHost {
    /// Transform-related style fields the simulated engine accepts.
    transform_fields: Mutex<AHashSet<String>>,
    /// Number of `has_property` probes across all elements.
    probes: AtomicUsize,
    calls: Mutex<Vec<HostCall>>,
    next_element: AtomicUsize,
}

impl MockHost {
    fn accepts(&self, name: &str) -> bool {
        BASE_STYLE_FIELDS.contains(&name) || self.transform_fields.lock().contains(name)
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().push(call);
    }
}

#[derive(Debug, Default)]
struct MockNode {
    tag: String,
    attributes: AHashMap<String, String>,
    style: AHashMap<String, String>,
    children: Vec<MockElement>,
}

/// Handle to an in-memory element. Clones share the same node.
#[derive(Clone)]
pub struct MockElement {
    id: usize,
    node: Arc<Mutex<MockNode>>,
    host: Arc<MockHost>,
}

impl MockElement {
    fn new(host: &Arc<MockHost>, tag: &str) -> Self {
        let id = host.next_element.fetch_add(1, Ordering::Relaxed);
        Self {
            id,
            node: Arc::new(Mutex::new(MockNode {
                tag: tag.to_string(),
                ..MockNode::default()
            })),
            host: Arc::clone(host),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn tag(&self) -> String {
        self.node.lock().tag.clone()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.node
            .lock()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Inline style value as stored, `None` if never set.
    pub fn style_value(&self, name: &str) -> Option<String> {
        self.node.lock().style.get(name).cloned()
    }

    pub fn children(&self) -> Vec<MockElement> {
        self.node.lock().children.clone()
    }

    pub fn child_ids(&self) -> Vec<usize> {
        self.node.lock().children.iter().map(|child| child.id).collect()
    }

    /// Whether `other` is this element or one of its descendants.
    pub fn contains(&self, other: &MockElement) -> bool {
        if self.id == other.id {
            return true;
        }
        self.children().iter().any(|child| child.contains(other))
    }
}

impl fmt::Debug for MockElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockElement")
            .field("id", &self.id)
            .field("tag", &self.tag())
            .finish()
    }
}

impl StyleSurface for MockElement {
    fn has_property(&self, name: &str) -> bool {
        self.host.probes.fetch_add(1, Ordering::Relaxed);
        self.host.accepts(name)
    }

    fn property(&self, name: &str) -> Option<String> {
        if !self.host.accepts(name) {
            return None;
        }
        Some(self.style_value(name).unwrap_or_default())
    }

    fn set_property(&self, name: &str, value: &str) {
        self.host.record(HostCall::SetStyle {
            element: self.id,
            name: name.to_string(),
            value: value.to_string(),
        });
        if !self.host.accepts(name) {
            return;
        }
        let mut node = self.node.lock();
        if value.is_empty() {
            node.style.remove(name);
        } else {
            node.style.insert(name.to_string(), value.to_string());
        }
    }
}

impl HostElement for MockElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.node.lock().attributes.get(name).cloned()
    }

    fn describe(&self) -> String {
        format!("<{} #{}>", self.tag(), self.id)
    }
}

/// Mock implementation of Platform for testing.
///
/// Starts as a desktop Chrome host with orientation events, an unprefixed
/// `transform`, 3D support and an `<html><body></body></html>` document.
/// Builder methods reshape it into other simulated browsers.
///
/// # Example
///
/// ```rust
/// use horizontally_core::Platform;
/// use horizontally_test_utils::MockPlatform;
///
/// let platform = MockPlatform::new()
///     .with_transform_fields(&["webkitTransform", "webkitTransformOrigin"])
///     .without_body();
///
/// assert!(platform.body().is_none());
/// assert!(platform.has_orientation_events());
/// ```
pub struct MockPlatform {
    host: Arc<MockHost>,
    root: MockElement,
    user_agent: String,
    orientation: bool,
    transform_3d: bool,
    listeners: RefCell<Vec<(ListenerId, OrientationHandler)>>,
    removed_while_dispatching: RefCell<Vec<ListenerId>>,
    dispatching: Cell<bool>,
    next_listener: Cell<u64>,
}

impl MockPlatform {
    pub fn new() -> Self {
        let host = Arc::new(MockHost::default());
        host.transform_fields
            .lock()
            .extend(["transform".to_string(), "transformOrigin".to_string()]);

        let root = MockElement::new(&host, "html");
        let body = MockElement::new(&host, "body");
        root.node.lock().children.push(body);

        Self {
            host,
            root,
            user_agent: DESKTOP_CHROME.to_string(),
            orientation: true,
            transform_3d: true,
            listeners: RefCell::new(Vec::new()),
            removed_while_dispatching: RefCell::new(Vec::new()),
            dispatching: Cell::new(false),
            next_listener: Cell::new(1),
        }
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn without_orientation(mut self) -> Self {
        self.orientation = false;
        self
    }

    /// Replace the accepted transform fields, e.g. only webkit-prefixed ones.
    pub fn with_transform_fields(self, fields: &[&str]) -> Self {
        {
            let mut accepted = self.host.transform_fields.lock();
            accepted.clear();
            accepted.extend(fields.iter().map(|field| field.to_string()));
        }
        self
    }

    /// Simulate an engine with no transform support at all.
    pub fn without_transform(self) -> Self {
        self.with_transform_fields(&[])
    }

    /// Simulate an engine that rejects 3D transform values.
    pub fn without_3d(mut self) -> Self {
        self.transform_3d = false;
        self
    }

    /// Simulate a document that has no `<body>` yet.
    pub fn without_body(self) -> Self {
        self.root.node.lock().children.retain(|child| child.tag() != "body");
        self
    }

    pub fn root(&self) -> MockElement {
        self.root.clone()
    }

    /// Create an element outside the document without recording a call.
    pub fn element(&self, tag: &str) -> MockElement {
        MockElement::new(&self.host, tag)
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<HostCall> {
        self.host.calls.lock().clone()
    }

    /// Clear recorded calls and the probe counter (useful between test steps).
    pub fn clear_calls(&self) {
        self.host.calls.lock().clear();
        self.host.probes.store(0, Ordering::Relaxed);
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.host.calls.lock().len()
    }

    /// Number of style-field probes made on any element.
    pub fn probe_count(&self) -> usize {
        self.host.probes.load(Ordering::Relaxed)
    }

    /// Style writes as `(element, name, value)`.
    pub fn style_writes(&self) -> Vec<(usize, String, String)> {
        self.host
            .calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                HostCall::SetStyle {
                    element,
                    name,
                    value,
                } => Some((*element, name.clone(), value.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn count_style_writes(&self) -> usize {
        self.host
            .calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::SetStyle { .. }))
            .count()
    }

    /// Count listener registrations, including ones later removed.
    pub fn count_listener_adds(&self) -> usize {
        self.host
            .calls
            .lock()
            .iter()
            .filter(|call| matches!(call, HostCall::AddListener { .. }))
            .count()
    }

    /// Number of currently subscribed orientation listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver an orientation event to every subscribed listener.
    ///
    /// Returns how many listeners ran. Listeners may subscribe or
    /// unsubscribe while the event is being delivered.
    pub fn dispatch_orientation(&self, event: OrientationEvent) -> usize {
        let mut active = std::mem::take(&mut *self.listeners.borrow_mut());
        let delivered = active.len();

        self.dispatching.set(true);
        for (_, handler) in active.iter_mut() {
            handler(&event);
        }
        self.dispatching.set(false);

        let removed = std::mem::take(&mut *self.removed_while_dispatching.borrow_mut());
        active.retain(|(id, _)| !removed.contains(id));

        let mut listeners = self.listeners.borrow_mut();
        let added = std::mem::take(&mut *listeners);
        *listeners = active;
        listeners.extend(added);

        delivered
    }

    fn computed_transform(&self, inline: &str) -> String {
        if inline.is_empty() || (inline.contains("3d") && !self.transform_3d) {
            "none".to_string()
        } else if inline.contains("3d") {
            COMPUTED_MATRIX_3D.to_string()
        } else {
            COMPUTED_MATRIX.to_string()
        }
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    type Element = MockElement;

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn has_orientation_events(&self) -> bool {
        self.orientation
    }

    fn create_element(&self, tag: &str) -> Option<MockElement> {
        let element = MockElement::new(&self.host, tag);
        self.host.record(HostCall::CreateElement {
            element: element.id,
            tag: tag.to_string(),
        });
        Some(element)
    }

    fn body(&self) -> Option<MockElement> {
        self.root
            .children()
            .into_iter()
            .find(|child| child.tag() == "body")
    }

    fn document_element(&self) -> Option<MockElement> {
        Some(self.root.clone())
    }

    fn append_child(&self, parent: &MockElement, child: &MockElement) {
        self.host.record(HostCall::AppendChild {
            parent: parent.id,
            child: child.id,
        });
        let mut node = parent.node.lock();
        node.children.retain(|existing| existing.id != child.id);
        node.children.push(child.clone());
    }

    fn remove_child(&self, parent: &MockElement, child: &MockElement) {
        self.host.record(HostCall::RemoveChild {
            parent: parent.id,
            child: child.id,
        });
        parent
            .node
            .lock()
            .children
            .retain(|existing| existing.id != child.id);
    }

    fn computed_style(&self, element: &MockElement, css_name: &str) -> Option<String> {
        self.host.record(HostCall::ComputedStyle {
            element: element.id,
            css_name: css_name.to_string(),
        });
        if !self.root.contains(element) {
            return Some(String::new());
        }

        let dom_name = dom_name_for(css_name);
        let inline = element.style_value(&dom_name).unwrap_or_default();
        let computed = if css_name.ends_with("transform") {
            self.computed_transform(&inline)
        } else if !inline.is_empty() {
            inline
        } else if css_name == "position" {
            "static".to_string()
        } else {
            String::new()
        };
        Some(computed)
    }

    fn add_orientation_listener(&self, handler: OrientationHandler) -> Option<ListenerId> {
        if !self.orientation {
            return None;
        }
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, handler));
        self.host.record(HostCall::AddListener { id });
        Some(id)
    }

    fn remove_orientation_listener(&self, id: ListenerId) {
        self.host.record(HostCall::RemoveListener { id });
        self.listeners
            .borrow_mut()
            .retain(|(existing, _)| *existing != id);
        if self.dispatching.get() {
            self.removed_while_dispatching.borrow_mut().push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_name_for_vendor_css_names() {
        assert_eq!(dom_name_for("transform"), "transform");
        assert_eq!(dom_name_for("-webkit-transform"), "webkitTransform");
        assert_eq!(dom_name_for("-moz-transform"), "MozTransform");
        assert_eq!(dom_name_for("-o-transform"), "OTransform");
        assert_eq!(dom_name_for("-ms-transform-origin"), "msTransformOrigin");
    }

    #[test]
    fn test_default_document() {
        let platform = MockPlatform::new();
        let body = platform.body().unwrap();
        assert_eq!(body.tag(), "body");
        assert_eq!(platform.root().child_ids(), vec![body.id()]);
        assert_eq!(platform.call_count(), 0);
    }

    #[test]
    fn test_style_fields() {
        let platform = MockPlatform::new().with_transform_fields(&["MozTransform"]);
        let element = platform.element("div");

        assert!(element.has_property("MozTransform"));
        assert!(!element.has_property("transform"));
        assert!(element.has_property("overflow"));
        assert_eq!(platform.probe_count(), 3);

        element.set_property("transform", "rotate(1deg)");
        assert_eq!(element.property("transform"), None);
        assert_eq!(platform.count_style_writes(), 1);

        element.set_property("MozTransform", "rotate(1deg)");
        assert_eq!(element.property("MozTransform").as_deref(), Some("rotate(1deg)"));
    }

    #[test]
    fn test_computed_style_requires_connection() {
        let platform = MockPlatform::new();
        let element = platform.element("div");
        element.set_property("transform", "translate3d(1px,1px,1px)");
        assert_eq!(platform.computed_style(&element, "transform").as_deref(), Some(""));

        let body = platform.body().unwrap();
        platform.append_child(&body, &element);
        assert_eq!(
            platform.computed_style(&element, "transform").as_deref(),
            Some(COMPUTED_MATRIX_3D)
        );
        assert_eq!(
            platform.computed_style(&element, "position").as_deref(),
            Some("static")
        );
    }

    #[test]
    fn test_listener_removed_during_dispatch() {
        let platform = std::rc::Rc::new(MockPlatform::new());
        let slot: std::rc::Rc<Cell<Option<ListenerId>>> = std::rc::Rc::new(Cell::new(None));

        let weak = std::rc::Rc::downgrade(&platform);
        let own_id = std::rc::Rc::clone(&slot);
        let id = platform
            .add_orientation_listener(Box::new(move |_: &OrientationEvent| {
                if let (Some(platform), Some(id)) = (weak.upgrade(), own_id.get()) {
                    platform.remove_orientation_listener(id);
                }
            }))
            .unwrap();
        slot.set(Some(id));

        assert_eq!(platform.dispatch_orientation(OrientationEvent::with_alpha(1.0)), 1);
        assert_eq!(platform.listener_count(), 0);
        assert_eq!(platform.dispatch_orientation(OrientationEvent::with_alpha(1.0)), 0);
    }

    #[test]
    fn test_no_listener_without_orientation() {
        let platform = MockPlatform::new().without_orientation();
        assert!(platform.add_orientation_listener(Box::new(|_: &OrientationEvent| {})).is_none());
        assert_eq!(platform.listener_count(), 0);
    }
}
