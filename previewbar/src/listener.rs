//! Listener registries and the callbacks a preview fans out to.

use std::rc::Rc;

/// Receives the scrubber's drag gestures.
pub trait ScrubListener {
    /// The user touched the scrubber.
    fn on_scrub_start(&self) {}

    /// The scrubber moved, by the user or programmatically.
    fn on_scrub_move(&self, _progress: i32, _from_user: bool) {}

    /// The user released the scrubber.
    fn on_scrub_stop(&self) {}
}

/// Told whenever the preview starts showing or hiding.
pub trait VisibilityListener {
    fn on_visibility_changed(&self, is_showing: bool);
}

impl<F: Fn(bool)> VisibilityListener for F {
    fn on_visibility_changed(&self, is_showing: bool) {
        self(is_showing)
    }
}

/// Populates the overlay for a position, e.g. by fetching a thumbnail.
///
/// Only called while the preview is showing or shown.
pub trait PreviewLoader {
    fn load_preview(&mut self, position: i64, max: i64);
}

impl<F: FnMut(i64, i64)> PreviewLoader for F {
    fn load_preview(&mut self, position: i64, max: i64) {
        self(position, max)
    }
}

/// Ordered set of listeners keyed by identity.
///
/// Notification order is registration order; registering the same listener
/// twice keeps the first registration.
pub struct ListenerSet<L: ?Sized> {
    listeners: Vec<Rc<L>>,
}

impl<L: ?Sized> Default for ListenerSet<L> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<L: ?Sized> ListenerSet<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the listener was already registered.
    pub fn add(&mut self, listener: Rc<L>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Returns false if the listener wasn't registered.
    pub fn remove(&mut self, listener: &Rc<L>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !same(l, listener));
        self.listeners.len() != before
    }

    pub fn contains(&self, listener: &Rc<L>) -> bool {
        self.listeners.iter().any(|l| same(l, listener))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<L>> {
        self.listeners.iter()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

// Compare data pointers only; vtable pointers of the same type may differ
// between codegen units.
fn same<L: ?Sized>(a: &Rc<L>, b: &Rc<L>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
