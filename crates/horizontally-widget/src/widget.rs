//! The tilt widget.

use std::cell::RefCell;
use std::rc::Rc;

use horizontally_core::{Environment, HostElement, OrientationEvent, Platform, Settings};

use crate::listener::{
    ListenerState, OrientationSubscription, TiltState, handle_orientation, orientation_handler,
};

/// Rotates one element to counteract device tilt.
///
/// The widget enables itself on construction. While enabled it holds an
/// [`OrientationSubscription`]; disabling or dropping the widget releases
/// it.
///
/// # Example
///
/// ```rust,ignore
/// let env = Rc::new(Environment::detect(platform));
/// let mut widget = TiltWidget::new(Rc::clone(&env), element, None);
/// // ... orientation events rotate `element` ...
/// widget.disable();
/// ```
pub struct TiltWidget<P: Platform + 'static> {
    env: Rc<Environment<P>>,
    element: P::Element,
    settings: Settings,
    listener: ListenerState,
    state: Rc<RefCell<TiltState>>,
    subscription: Option<OrientationSubscription<P>>,
}

impl<P: Platform + 'static> TiltWidget<P>
where
    P::Element: 'static,
{
    /// Attach a widget to `element`.
    ///
    /// Settings are resolved from the built-in defaults, then `overrides`,
    /// then the element's `data-*` attributes.
    pub fn new(env: Rc<Environment<P>>, element: P::Element, overrides: Option<&Settings>) -> Self {
        let settings = Settings::resolve(&element, overrides);

        let mut widget = Self {
            env,
            element,
            settings,
            listener: ListenerState::Disabled,
            state: Rc::new(RefCell::new(TiltState::default())),
            subscription: None,
        };
        widget.initialise();
        widget
    }

    fn initialise(&mut self) {
        let position = self
            .env
            .platform()
            .computed_style(&self.element, "position");
        tracing::trace!(
            element = %self.element.describe(),
            position = position.as_deref().unwrap_or(""),
            "initialising tilt widget"
        );
        self.enable();
    }

    /// Start reacting to orientation events. Calling it again is a no-op.
    pub fn enable(&mut self) {
        if self.listener == ListenerState::Enabled {
            return;
        }
        self.listener = ListenerState::Enabled;

        if self.env.supports_orientation() {
            self.state.borrow_mut().portrait = None;
            let handler =
                orientation_handler(&self.env, self.element.clone(), Rc::clone(&self.state));
            self.subscription = OrientationSubscription::subscribe(&self.env, handler);
        }
    }

    /// Stop reacting to orientation events and release the listener.
    ///
    /// The element keeps its last rotation. Calling it again is a no-op.
    pub fn disable(&mut self) {
        if self.listener == ListenerState::Disabled {
            return;
        }
        self.listener = ListenerState::Disabled;
        self.subscription = None;
    }

    /// Feed one orientation event directly, bypassing the subscription.
    ///
    /// Disabled widgets ignore the event. Returns whether it was applied.
    pub fn handle_orientation(&self, event: &OrientationEvent) -> bool {
        if self.listener == ListenerState::Disabled {
            return false;
        }
        handle_orientation(&self.env, &self.element, &self.state, event)
    }

    pub fn is_enabled(&self) -> bool {
        self.listener == ListenerState::Enabled
    }

    pub fn listener_state(&self) -> ListenerState {
        self.listener
    }

    /// Whether an orientation listener is currently registered.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Last applied rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.state.borrow().rotation
    }

    pub fn portrait(&self) -> Option<bool> {
        self.state.borrow().portrait
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn element(&self) -> &P::Element {
        &self.element
    }

    pub fn environment(&self) -> &Rc<Environment<P>> {
        &self.env
    }
}
