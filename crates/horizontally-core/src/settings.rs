//! Widget settings resolved from defaults, overrides and `data-*` attributes.

use std::fmt;

use ahash::AHashMap;

use crate::host::HostElement;

/// A deserialized setting value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AttrValue {
    /// Deserialize a raw attribute string.
    ///
    /// Rules are applied in order: `"true"`, `"false"`, `"null"`, then any
    /// finite number. Everything else is kept as text.
    ///
    /// Numbers follow browser coercion: a whole-string decimal literal
    /// (surrounding whitespace allowed) is read as is. An unsigned
    /// `0x`/`0o`/`0b` literal counts as numeric but reads as its leading
    /// `0`, so `"0x10"` becomes `0`.
    pub fn deserialize(raw: &str) -> Self {
        match raw {
            "true" => return AttrValue::Bool(true),
            "false" => return AttrValue::Bool(false),
            "null" => return AttrValue::Null,
            _ => {}
        }

        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => AttrValue::Number(number),
            _ if is_radix_literal(trimmed) => AttrValue::Number(0.0),
            _ => AttrValue::Text(raw.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Unsigned hex, octal or binary integer literal such as `0x1F`.
fn is_radix_literal(value: &str) -> bool {
    let Some(rest) = value.strip_prefix('0') else {
        return false;
    };
    let mut chars = rest.chars();
    let radix = match chars.next() {
        Some('x' | 'X') => 16,
        Some('o' | 'O') => 8,
        Some('b' | 'B') => 2,
        _ => return false,
    };
    let digits = chars.as_str();
    !digits.is_empty() && digits.chars().all(|ch| ch.is_digit(radix))
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => write!(f, "null"),
            AttrValue::Bool(value) => write!(f, "{}", value),
            AttrValue::Number(value) => write!(f, "{}", value),
            AttrValue::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

/// Recognized options and their built-in defaults.
///
/// Each option can also be set declaratively with a `data-<name>` attribute.
pub const OPTIONS: &[(&str, AttrValue)] = &[("test", AttrValue::Bool(false))];

/// Flat key/value settings attached to a widget.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: AHashMap<String, AttrValue>,
}

impl Settings {
    /// Empty settings, typically used for caller overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings holding every option's built-in default.
    pub fn defaults() -> Self {
        let mut settings = Self::new();
        for (name, value) in OPTIONS {
            settings.insert(*name, value.clone());
        }
        settings
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// The `test` option.
    pub fn test(&self) -> bool {
        self.get("test").and_then(AttrValue::as_bool).unwrap_or(false)
    }

    /// Copy every entry of `other` over this one. Later calls win.
    pub fn merge(&mut self, other: &Settings) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Read the `data-<option>` attribute of every recognized option.
    ///
    /// Absent attributes and attributes that deserialize to null are left
    /// out so they cannot shadow a default.
    pub fn from_attributes<E: HostElement>(element: &E) -> Self {
        let mut settings = Self::new();
        for (name, _) in OPTIONS {
            let Some(raw) = element.attribute(&format!("data-{}", name)) else {
                continue;
            };
            let value = AttrValue::deserialize(&raw);
            if !value.is_null() {
                settings.insert(*name, value);
            }
        }
        settings
    }

    /// Resolve the settings for one widget.
    ///
    /// Merge order is defaults, then `overrides`, then declarative
    /// attributes, so markup wins over code on a key collision.
    pub fn resolve<E: HostElement>(element: &E, overrides: Option<&Settings>) -> Self {
        let mut settings = Self::defaults();
        if let Some(overrides) = overrides {
            settings.merge(overrides);
        }
        settings.merge(&Self::from_attributes(element));
        tracing::trace!(?settings, "resolved widget settings");
        settings
    }
}
