//! JavaScript-facing `Horizontally` class.

use std::cell::OnceCell;
use std::rc::Rc;

use horizontally_core::{Environment, Settings, WidgetError};
use horizontally_widget::TiltWidget;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::global::{CONSTRUCTOR_SOURCE, FACTORY_PARAM, GLOBAL_NAME};
use crate::options::{OptionValue, settings_from_entries};
use crate::platform::{WebElement, WebPlatform};

thread_local! {
    static ENVIRONMENT: OnceCell<Rc<Environment<WebPlatform>>> = const { OnceCell::new() };
}

/// The page's environment, detected on first use and shared by every widget.
fn environment() -> Result<Rc<Environment<WebPlatform>>, WidgetError> {
    ENVIRONMENT.with(|cell| {
        if let Some(env) = cell.get() {
            return Ok(Rc::clone(env));
        }
        let env = Rc::new(Environment::detect(WebPlatform::new()?));
        Ok(Rc::clone(cell.get_or_init(|| env)))
    })
}

fn to_js_error(err: WidgetError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn option_value(value: JsValue) -> OptionValue {
    if value.is_undefined() {
        OptionValue::Undefined
    } else if value.is_null() {
        OptionValue::Null
    } else if let Some(flag) = value.as_bool() {
        OptionValue::Bool(flag)
    } else if let Some(number) = value.as_f64() {
        OptionValue::Number(number)
    } else if let Some(text) = value.as_string() {
        OptionValue::String(text)
    } else {
        OptionValue::Other
    }
}

/// Overrides from a plain options object; `None` for anything else.
fn settings_from_js(options: &JsValue) -> Option<Settings> {
    if !options.is_object() {
        return None;
    }
    let object: &Object = options.unchecked_ref();
    let entries = Object::keys(object).iter().filter_map(|key| {
        let name = key.as_string()?;
        let value = Reflect::get(options, &key).unwrap_or(JsValue::UNDEFINED);
        Some((name, option_value(value)))
    });
    Some(settings_from_entries(entries))
}

/// Tilt widget bound to one element.
#[wasm_bindgen(js_name = Horizontally)]
pub struct JsHorizontally {
    widget: TiltWidget<WebPlatform>,
}

#[wasm_bindgen(js_class = Horizontally)]
impl JsHorizontally {
    /// `new Horizontally(element, options?)`
    #[wasm_bindgen(constructor)]
    pub fn new(element: JsValue, options: JsValue) -> Result<JsHorizontally, JsValue> {
        let element = WebElement::from_js(element).map_err(to_js_error)?;
        let env = environment().map_err(to_js_error)?;
        let overrides = settings_from_js(&options);

        Ok(Self {
            widget: TiltWidget::new(env, element, overrides.as_ref()),
        })
    }

    pub fn enable(&mut self) {
        self.widget.enable();
    }

    pub fn disable(&mut self) {
        self.widget.disable();
    }

    #[wasm_bindgen(getter)]
    pub fn enabled(&self) -> bool {
        self.widget.is_enabled()
    }

    /// Last applied rotation in degrees.
    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.widget.rotation()
    }

    #[wasm_bindgen(getter)]
    pub fn test(&self) -> bool {
        self.widget.settings().test()
    }
}

/// Publish the constructor as `window.Horizontally`.
///
/// The published value is a plain JS function wrapping the factory
/// closure, so non-module pages can call it with `new`.
pub fn register_global() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
    let factory = Closure::<dyn Fn(JsValue, JsValue) -> Result<JsValue, JsValue>>::new(
        |element: JsValue, options: JsValue| JsHorizontally::new(element, options).map(JsValue::from),
    );
    let constructor = Function::new_with_args(FACTORY_PARAM, CONSTRUCTOR_SOURCE)
        .call1(&JsValue::NULL, factory.as_ref())?;
    Reflect::set(&window, &JsValue::from_str(GLOBAL_NAME), &constructor)?;
    // The global lives as long as the page.
    factory.forget();
    tracing::debug!("registered window.{}", GLOBAL_NAME);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    register_global()
}
