use std::cell::RefCell;

use crate::remember;

/// State holder pattern: a pure reducer from the previous state and an event to
/// the next state. Holders carry their own configuration (bounds, limits), so
/// `reduce` takes `&self`.
pub trait StateHolder: 'static {
    type State: Clone;
    type Event;

    fn reduce(&self, state: &Self::State, event: Self::Event) -> Self::State;
}

/// Remembers the value seen on the previous observation.
///
/// `track` hands back what was stored by the previous call (or `None` the first
/// time) and only then stores the new value.
#[derive(Clone, Debug, Default)]
pub struct PreviousValue<T> {
    stored: Option<T>,
}

impl<T> PreviousValue<T> {
    pub fn new() -> Self {
        Self { stored: None }
    }

    pub fn track(&mut self, value: T) -> Option<T> {
        self.stored.replace(value)
    }

    /// The value the next `track` call would return.
    pub fn peek(&self) -> Option<&T> {
        self.stored.as_ref()
    }
}

/// Slot-backed [`PreviousValue`]: returns the value passed on the previous
/// compose pass of this call site.
pub fn remember_previous<T: Clone + 'static>(value: T) -> Option<T> {
    let slot = remember(|| RefCell::new(PreviousValue::<T>::new()));
    slot.borrow_mut().track(value)
}
