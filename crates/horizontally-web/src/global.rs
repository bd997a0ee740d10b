//! Source of the `window.Horizontally` constructor.
//!
//! Closures handed to JavaScript by wasm-bindgen are wrapped in arrow
//! functions, and arrow functions cannot be called with `new`. The global
//! is therefore a plain `function` that forwards to the factory closure.
//! A constructor that returns an object makes `new` yield that object, so
//! `new Horizontally(el)` and `Horizontally(el)` both return the widget.

/// Name the constructor is published under on `window`.
pub const GLOBAL_NAME: &str = "Horizontally";

/// Parameter of the wrapper builder: the factory closure.
pub const FACTORY_PARAM: &str = "factory";

/// Body of the wrapper builder. Called with the factory, it returns the
/// constructible function to publish.
pub const CONSTRUCTOR_SOURCE: &str =
    "return function Horizontally(element, options) { return factory(element, options); };";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_is_a_plain_function() {
        assert!(CONSTRUCTOR_SOURCE.starts_with("return function "));
        assert!(!CONSTRUCTOR_SOURCE.contains("=>"));
    }

    #[test]
    fn test_constructor_forwards_to_factory() {
        assert!(CONSTRUCTOR_SOURCE.contains(&format!("function {}(", GLOBAL_NAME)));
        assert!(CONSTRUCTOR_SOURCE.contains(&format!("return {}(element, options)", FACTORY_PARAM)));
    }
}
