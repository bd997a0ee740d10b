//! Error types for widget construction.

use std::fmt;

/// Result alias used across the Horizontally crates.
pub type WidgetResult<T> = Result<T, WidgetError>;

/// Errors that can occur while wiring a widget to its host.
///
/// Detection and event handling never fail; these only surface at the
/// boundary where untyped host values are turned into elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// No target element was supplied (null or undefined).
    MissingElement,

    /// The supplied value is not an element with an inline style.
    NoStyleSurface {
        /// Description of what was received instead.
        received: String,
    },

    /// The host refused an operation.
    Host {
        /// Error message reported by the host.
        message: String,
    },
}

impl WidgetError {
    pub fn host(message: impl Into<String>) -> Self {
        WidgetError::Host {
            message: message.into(),
        }
    }
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::MissingElement => write!(f, "No target element supplied"),
            WidgetError::NoStyleSurface { received } => {
                write!(f, "Target has no style surface: {}", received)
            }
            WidgetError::Host { message } => write!(f, "Host error: {}", message),
        }
    }
}

impl std::error::Error for WidgetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            WidgetError::MissingElement.to_string(),
            "No target element supplied"
        );
        assert_eq!(
            WidgetError::NoStyleSurface {
                received: "number".to_string()
            }
            .to_string(),
            "Target has no style surface: number"
        );
        assert_eq!(
            WidgetError::host("no window").to_string(),
            "Host error: no window"
        );
    }
}
