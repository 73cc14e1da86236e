/// Helper type for the deferred removal of a listener from whatever collection is holding it.
pub type CancelFn = Box<dyn FnOnce()>;

/// Handle to a registered update listener. Cancelling the subscription removes the listener from
/// the source it was registered against, and is the hook that element lifecycles use to dispose of
/// bindings when they are removed from the DOM.
///
/// Dropping the handle without calling [`Subscription::cancel()`] leaves the listener registered
/// for the life of the source.
pub struct Subscription {
    cancel: CancelFn,
}

impl Subscription {
    /// Create a new subscription around the provided cancel callback.
    pub(crate) fn new<F>(cancel: F) -> Self
    where
        F: 'static + FnOnce(),
    {
        Self {
            cancel: Box::new(cancel),
        }
    }

    /// Remove the listener this subscription was created for. No further updates will be
    /// delivered to it.
    pub fn cancel(self) {
        (self.cancel)();
    }
}
