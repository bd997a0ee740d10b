//! Orientation handling and listener lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use horizontally_core::{Environment, ListenerId, OrientationEvent, OrientationHandler, Platform};

use crate::applier::apply_rotation;

/// Whether a widget is reacting to orientation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListenerState {
    #[default]
    Disabled,
    Enabled,
}

/// Mutable per-widget state shared with the subscribed handler.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    /// Last applied rotation in degrees.
    pub rotation: f64,
    /// Last known portrait orientation, unset until the sensor reports it.
    pub portrait: Option<bool>,
}

/// Handle one orientation event for one element.
///
/// Only desktop-class hosts react: the widget simulates tilt on machines
/// whose sensor is virtual and leaves real mobile sensors alone. Events
/// without a heading are ignored. Returns whether the event was applied.
pub fn handle_orientation<P: Platform>(
    env: &Environment<P>,
    element: &P::Element,
    state: &RefCell<TiltState>,
    event: &OrientationEvent,
) -> bool {
    if !env.is_desktop_class() {
        return false;
    }
    let Some(degrees) = event.heading() else {
        tracing::trace!("orientation event without heading ignored");
        return false;
    };

    apply_rotation(env, element, degrees);
    state.borrow_mut().rotation = degrees;
    true
}

/// Build the handler a widget subscribes with.
///
/// The environment is held weakly: the platform owns the handler, so a
/// strong reference would keep the environment alive through itself.
pub(crate) fn orientation_handler<P: Platform + 'static>(
    env: &Rc<Environment<P>>,
    element: P::Element,
    state: Rc<RefCell<TiltState>>,
) -> OrientationHandler
where
    P::Element: 'static,
{
    let env = Rc::downgrade(env);
    Box::new(move |event: &OrientationEvent| {
        if let Some(env) = env.upgrade() {
            handle_orientation(&env, &element, &state, event);
        }
    })
}

/// A live orientation listener, removed from the platform on drop.
pub struct OrientationSubscription<P: Platform> {
    env: Rc<Environment<P>>,
    id: ListenerId,
}

impl<P: Platform> OrientationSubscription<P> {
    /// Register `handler` with the environment's platform.
    ///
    /// Returns `None` when the host has no orientation events or refused
    /// the listener.
    pub fn subscribe(env: &Rc<Environment<P>>, handler: OrientationHandler) -> Option<Self> {
        if !env.supports_orientation() {
            return None;
        }
        let id = env.platform().add_orientation_listener(handler)?;
        tracing::debug!(?id, "subscribed to orientation events");
        Some(Self {
            env: Rc::clone(env),
            id,
        })
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<P: Platform> Drop for OrientationSubscription<P> {
    fn drop(&mut self) {
        self.env.platform().remove_orientation_listener(self.id);
        tracing::debug!(id = ?self.id, "unsubscribed from orientation events");
    }
}

impl<P: Platform> std::fmt::Debug for OrientationSubscription<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrientationSubscription")
            .field("id", &self.id)
            .finish()
    }
}
