//! Conversion of caller-supplied option objects into settings.

use horizontally_core::{AttrValue, Settings};

/// The shape of one property of a JavaScript options object.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Objects, functions and anything else without a settings mapping.
    Other,
}

impl OptionValue {
    /// Setting value for this property, if it has one.
    ///
    /// An explicit `null` is kept and overrides the default; `undefined`
    /// and non-primitive values are skipped.
    pub fn into_attr(self) -> Option<AttrValue> {
        match self {
            OptionValue::Null => Some(AttrValue::Null),
            OptionValue::Bool(value) => Some(AttrValue::Bool(value)),
            OptionValue::Number(value) => Some(AttrValue::Number(value)),
            OptionValue::String(value) => Some(AttrValue::Text(value)),
            OptionValue::Undefined | OptionValue::Other => None,
        }
    }
}

/// Build override settings from the own properties of an options object.
///
/// Every key is copied, recognized or not, so extensions can read their
/// own options back from the widget settings.
pub fn settings_from_entries<I, K>(entries: I) -> Settings
where
    I: IntoIterator<Item = (K, OptionValue)>,
    K: Into<String>,
{
    let mut settings = Settings::new();
    for (key, value) in entries {
        let key = key.into();
        match value.into_attr() {
            Some(value) => settings.insert(key, value),
            None => tracing::trace!(key = %key, "skipping option without a settings value"),
        }
    }
    settings
}
