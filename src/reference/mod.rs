mod subscription;

use std::{cell::RefCell, rc::Rc};

pub use subscription::Subscription;

/// Helper type for a listener callback, which will be called with the new value whenever it
/// changes.
type Listener<T> = Rc<dyn Fn(&T)>;

/// Internal state of a [`Reference`]: the current value, and the ordered list of listeners to
/// notify when it changes.
struct ReferenceInner<T> {
    value: T,

    /// Registered listeners, each tagged with the id it was allocated at registration. Ids are
    /// used to remove the correct listener when a [`Subscription`] is cancelled.
    listeners: Vec<(usize, Listener<T>)>,

    /// The id that will be allocated to the next registered listener.
    next_listener_id: usize,
}

/// A boxed mutable value that can be observed. Cloning a [`Reference`] produces another handle to
/// the same value, allowing it to be shared between event handlers and bindings. Mutating the
/// value through [`Reference::set()`] notifies every registered listener exactly once, in
/// registration order, with the new value.
pub struct Reference<T> {
    inner: Rc<RefCell<ReferenceInner<T>>>,
}

impl<T> Reference<T> {
    /// Create a new reference holding the provided default value.
    pub fn new(default_value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ReferenceInner {
                value: default_value,
                listeners: Vec::new(),
                next_listener_id: 0,
            })),
        }
    }

    /// Run a closure against a borrow of the current value, returning its result. Useful when the
    /// value is expensive to clone, or only part of it is needed.
    pub fn with<F, U>(&self, f: F) -> U
    where
        F: FnOnce(&T) -> U,
    {
        f(&self.inner.borrow().value)
    }

    /// Register a listener to be called with the new value on every [`Reference::set()`]. The
    /// returned [`Subscription`] removes the listener when cancelled.
    pub fn on_update<F>(&self, callback: F) -> Subscription
    where
        F: 'static + Fn(&T),
        T: 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();

            let id = inner.next_listener_id;
            inner.next_listener_id += 1;

            inner.listeners.push((id, Rc::new(callback)));

            id
        };

        Subscription::new({
            // Hold a weak handle so a forgotten subscription doesn't keep the reference alive.
            let inner = Rc::downgrade(&self.inner);

            move || {
                if let Some(inner) = inner.upgrade() {
                    inner
                        .borrow_mut()
                        .listeners
                        .retain(|(listener_id, _)| *listener_id != id);
                }
            }
        })
    }
}

impl<T> Reference<T>
where
    T: Clone,
{
    /// Clone out the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the current value, notifying every registered listener with the new value.
    ///
    /// Listeners run after the internal borrow is released, so a listener is free to call
    /// [`Reference::get()`], [`Reference::set()`], or [`Reference::on_update()`] on the same
    /// reference.
    pub fn set(&self, value: T) {
        // Swap the value in and snapshot the listener list before releasing the borrow.
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();

            inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect::<Vec<_>>()
        };

        for listener in listeners {
            listener(&value);
        }
    }

    /// Replace the current value with the result of the provided closure, which will be called
    /// with the current value.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let value = f(&self.inner.borrow().value);
        self.set(value);
    }
}

impl<T> Clone for Reference<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}
