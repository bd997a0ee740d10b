//! Drive a tilt widget from a simulated orientation sensor.
//!
//! Desktop browsers expose a virtual orientation sensor in their dev
//! tools. This example does the same against the mock host and logs every
//! style write the widget makes.
//!
//! Run with:
//!
//! ```text
//! cargo run -p horizontally --example virtual_sensor
//! ```

use horizontally::logging;
use horizontally::prelude::*;
use horizontally_test_utils::MockPlatform;

fn main() {
    logging::init();

    let env = Rc::new(Environment::detect(
        MockPlatform::new().with_transform_fields(&["webkitTransform", "webkitTransformOrigin"]),
    ));

    let element = env.platform().element("img");
    element.set_attribute("data-test", "true");
    if let Some(body) = env.platform().body() {
        env.platform().append_child(&body, &element);
    }

    let mut widget = TiltWidget::new(Rc::clone(&env), element, None);
    tracing::info!(test = widget.settings().test(), "widget ready");

    for step in 0..=8 {
        let alpha = f64::from(step) * 45.0;
        env.platform()
            .dispatch_orientation(OrientationEvent::with_alpha(alpha));
        tracing::info!(alpha, rotation = widget.rotation(), "sensor step");
    }

    widget.disable();
    env.platform()
        .dispatch_orientation(OrientationEvent::with_alpha(10.0));
    tracing::info!(rotation = widget.rotation(), "after disable");

    for (element, name, value) in env.platform().style_writes() {
        tracing::debug!(element, name = %name, value = %value, "style write");
    }
}
