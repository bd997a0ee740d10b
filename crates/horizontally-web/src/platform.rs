//! `web-sys` implementation of the host traits.

use std::cell::{Cell, RefCell};

use horizontally_core::{
    HostElement, ListenerId, OrientationEvent, OrientationHandler, Platform, StyleSurface,
    WidgetError, WidgetResult,
};
use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{DeviceOrientationEvent, Document, HtmlElement, Window};

const ORIENTATION_EVENT: &str = "deviceorientation";

type OrientationClosure = Closure<dyn FnMut(DeviceOrientationEvent)>;

/// A DOM element with an inline style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebElement(pub HtmlElement);

impl WebElement {
    /// Accept any JS value that is an `HTMLElement`.
    pub fn from_js(value: JsValue) -> WidgetResult<Self> {
        if value.is_null() || value.is_undefined() {
            return Err(WidgetError::MissingElement);
        }
        value
            .dyn_into::<HtmlElement>()
            .map(WebElement)
            .map_err(|value| WidgetError::NoStyleSurface {
                received: value.js_typeof().as_string().unwrap_or_default(),
            })
    }

    fn style_field(&self, name: &str) -> JsValue {
        Reflect::get(&self.0.style(), &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
    }
}

impl StyleSurface for WebElement {
    fn has_property(&self, name: &str) -> bool {
        !self.style_field(name).is_undefined()
    }

    fn property(&self, name: &str) -> Option<String> {
        self.style_field(name).as_string()
    }

    fn set_property(&self, name: &str, value: &str) {
        match Reflect::set(
            &self.0.style(),
            &JsValue::from_str(name),
            &JsValue::from_str(value),
        ) {
            Ok(true) => {}
            Ok(false) => tracing::warn!("style.{} rejected the assignment", name),
            Err(err) => tracing::warn!("Failed to set style.{}: {:?}", name, err),
        }
    }
}

impl HostElement for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn describe(&self) -> String {
        let tag = self.0.tag_name().to_lowercase();
        let id = self.0.id();
        if id.is_empty() {
            format!("<{}>", tag)
        } else {
            format!("<{}#{}>", tag, id)
        }
    }
}

/// The current browser window and document.
///
/// Orientation listeners are kept alive here until they are removed.
pub struct WebPlatform {
    window: Window,
    document: Document,
    listeners: RefCell<Vec<(ListenerId, OrientationClosure)>>,
    next_listener: Cell<u64>,
}

impl WebPlatform {
    pub fn new() -> WidgetResult<Self> {
        let window = web_sys::window().ok_or_else(|| WidgetError::host("No window object available"))?;
        let document = window
            .document()
            .ok_or_else(|| WidgetError::host("No document available"))?;

        Ok(Self {
            window,
            document,
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(1),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn html_element(element: Option<web_sys::Element>) -> Option<WebElement> {
        element?.dyn_into::<HtmlElement>().ok().map(WebElement)
    }
}

impl Platform for WebPlatform {
    type Element = WebElement;

    fn user_agent(&self) -> String {
        self.window.navigator().user_agent().unwrap_or_default()
    }

    fn has_orientation_events(&self) -> bool {
        Reflect::get(&self.window, &JsValue::from_str("DeviceOrientationEvent"))
            .map(|value| value.is_truthy())
            .unwrap_or(false)
    }

    fn create_element(&self, tag: &str) -> Option<WebElement> {
        Self::html_element(self.document.create_element(tag).ok())
    }

    fn body(&self) -> Option<WebElement> {
        self.document.body().map(WebElement)
    }

    fn document_element(&self) -> Option<WebElement> {
        Self::html_element(self.document.document_element())
    }

    fn append_child(&self, parent: &WebElement, child: &WebElement) {
        if let Err(err) = parent.0.append_child(&child.0) {
            tracing::warn!("appendChild failed: {:?}", err);
        }
    }

    fn remove_child(&self, parent: &WebElement, child: &WebElement) {
        if let Err(err) = parent.0.remove_child(&child.0) {
            tracing::warn!("removeChild failed: {:?}", err);
        }
    }

    fn computed_style(&self, element: &WebElement, css_name: &str) -> Option<String> {
        let style = self.window.get_computed_style(&element.0).ok().flatten()?;
        style.get_property_value(css_name).ok()
    }

    fn add_orientation_listener(&self, mut handler: OrientationHandler) -> Option<ListenerId> {
        let closure = OrientationClosure::new(move |event: DeviceOrientationEvent| {
            handler(&OrientationEvent {
                alpha: event.alpha(),
                beta: event.beta(),
                gamma: event.gamma(),
                absolute: event.absolute(),
            });
        });

        if let Err(err) = self
            .window
            .add_event_listener_with_callback(ORIENTATION_EVENT, closure.as_ref().unchecked_ref())
        {
            tracing::error!("Failed to add orientation listener: {:?}", err);
            return None;
        }

        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, closure));
        Some(id)
    }

    fn remove_orientation_listener(&self, id: ListenerId) {
        let mut listeners = self.listeners.borrow_mut();
        let Some(index) = listeners.iter().position(|(existing, _)| *existing == id) else {
            return;
        };
        let (_, closure) = listeners.remove(index);
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(ORIENTATION_EVENT, closure.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to remove orientation listener: {:?}", err);
        }
    }
}
