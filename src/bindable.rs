use crate::reference::{Reference, Subscription};

/// Capability for values that can be wired to a DOM property. The element builder checks each
/// attribute value for this capability rather than for a concrete type: anything that can produce
/// its current rendering and announce future changes can be bound.
pub trait Bindable {
    /// Produce the current rendering of the value.
    fn read(&self) -> String;

    /// Register a callback to be called with the new rendering on every change. The returned
    /// [`Subscription`] must stop deliveries when cancelled.
    fn subscribe(&self, update: Box<dyn Fn(&str)>) -> Subscription;
}

impl<T> Bindable for Reference<T>
where
    T: 'static + ToString + Clone,
{
    fn read(&self) -> String {
        self.with(|value| value.to_string())
    }

    fn subscribe(&self, update: Box<dyn Fn(&str)>) -> Subscription {
        self.on_update(move |value| update(&value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn reference_reads_as_string() {
        let count = Reference::new(42);
        assert_eq!(count.read(), "42");
    }

    #[test]
    fn reference_subscription_delivers_renderings() {
        let count = Reference::new(0);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = count.subscribe(Box::new({
            let seen = Rc::clone(&seen);
            move |value| seen.borrow_mut().push(value.to_string())
        }));

        count.set(1);
        count.set(2);
        assert_eq!(*seen.borrow(), vec!["1", "2"]);

        subscription.cancel();
        count.set(3);
        assert_eq!(seen.borrow().len(), 2);
    }
}
