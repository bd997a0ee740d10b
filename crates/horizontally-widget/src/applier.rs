//! Writes rotation transforms onto elements.

use horizontally_core::{Dimension, Environment, HostElement, Platform};

/// Logical property receiving the rotation.
pub const TRANSFORM: &str = "transform";

/// Logical property receiving the rotation pivot.
pub const TRANSFORM_ORIGIN: &str = "transform-origin";

/// Rotation pivot: the element's center.
pub const ROTATION_ORIGIN: &str = "50% 50%";

/// CSS value rotating by `degrees`, e.g. `rotate(47deg)`.
pub fn rotation_value(degrees: f64) -> String {
    format!("rotate({}deg)", degrees)
}

/// Rotate `element` by `degrees` around its center.
///
/// Does nothing when the host has no 2D transform support. Property names
/// are resolved through the environment's style cache, so the vendor
/// probe runs only for the first element ever rotated. Returns whether the
/// transform itself was written.
pub fn apply_rotation<P: Platform>(env: &Environment<P>, element: &P::Element, degrees: f64) -> bool {
    if !env.supports_transform(Dimension::TwoD) {
        return false;
    }

    tracing::debug!(element = %element.describe(), degrees, "applying rotation");

    let styles = env.styles();
    let rotated = styles.set(element, TRANSFORM, &rotation_value(degrees));
    styles.set(element, TRANSFORM_ORIGIN, ROTATION_ORIGIN);
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_value() {
        assert_eq!(rotation_value(47.0), "rotate(47deg)");
        assert_eq!(rotation_value(12.5), "rotate(12.5deg)");
        assert_eq!(rotation_value(-90.0), "rotate(-90deg)");
        assert_eq!(rotation_value(0.0), "rotate(0deg)");
    }
}
