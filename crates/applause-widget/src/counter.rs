//! The bounded clap counter.
//!
//! [`ClapRules`] is the pure transition function; [`ClapStore`] owns the
//! current state for one widget instance, decides when a reset applies and
//! publishes the reset token.

use std::cell::RefCell;
use std::rc::Rc;

use applause_core::{PreviousValue, Role, Semantics, Signal, StateHolder, signal};

use crate::config::ClapConfig;

pub type Callback = Rc<dyn Fn()>;

/// One revision of the counter. Replaced wholesale on every transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClapState {
    /// Claps by this user, never above the configured maximum.
    pub count: u32,
    /// Claps by everyone, including this user.
    pub total_count: u32,
    /// Set by the first increment; nothing here clears it.
    pub is_clicked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClapEvent {
    Increment,
    Reset,
}

/// The counter's transition function.
#[derive(Clone, Debug, PartialEq)]
pub struct ClapRules {
    pub max_user_clap: u32,
    pub initial: ClapState,
}

impl StateHolder for ClapRules {
    type State = ClapState;
    type Event = ClapEvent;

    fn reduce(&self, state: &ClapState, event: ClapEvent) -> ClapState {
        match event {
            ClapEvent::Increment => {
                let max = self.max_user_clap;
                // The bound is checked against the count before this click, so
                // the click that reaches the maximum still adds to the total.
                let total_count = if state.count < max {
                    state.total_count.saturating_add(1)
                } else {
                    state.total_count
                };
                ClapState {
                    count: state.count.saturating_add(1).min(max),
                    total_count,
                    is_clicked: true,
                }
            }
            // Once engaged the button stays engaged, even across resets.
            ClapEvent::Reset => ClapState {
                is_clicked: self.initial.is_clicked || state.is_clicked,
                ..self.initial
            },
        }
    }
}

struct StoreInner {
    rules: ClapRules,
    state: ClapState,
    // Count as of the last settle point: mount, or the last applied reset.
    settled: PreviousValue<u32>,
}

/// Counter state of one widget instance. Clones share the same state.
#[derive(Clone)]
pub struct ClapStore {
    inner: Rc<RefCell<StoreInner>>,
    reset_token: Signal<u64>,
}

impl ClapStore {
    /// Captures `config.initial` as the snapshot every reset returns to.
    pub fn new(config: &ClapConfig) -> Self {
        let rules = ClapRules {
            max_user_clap: config.max_user_clap,
            initial: config.initial,
        };
        let mut settled = PreviousValue::new();
        settled.track(config.initial.count);
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                state: rules.initial,
                rules,
                settled,
            })),
            reset_token: signal(0),
        }
    }

    pub fn state(&self) -> ClapState {
        self.inner.borrow().state
    }

    pub fn max_user_clap(&self) -> u32 {
        self.inner.borrow().rules.max_user_clap
    }

    /// Changes each time a reset applies. Subscribe to react to resets.
    pub fn reset_token(&self) -> Signal<u64> {
        self.reset_token.clone()
    }

    pub fn resets(&self) -> u64 {
        self.reset_token.get()
    }

    pub fn increment(&self) -> ClapState {
        let mut inner = self.inner.borrow_mut();
        let next = inner.rules.reduce(&inner.state, ClapEvent::Increment);
        if next == inner.state {
            log::trace!("clap: increment absorbed at {}", next.count);
        } else {
            log::debug!(
                "clap: count {} -> {}, total {} -> {}",
                inner.state.count,
                next.count,
                inner.state.total_count,
                next.total_count
            );
        }
        inner.state = next;
        next
    }

    /// Restores the initial count and total if the count moved since mount or
    /// since the last applied reset. Returns whether the reset applied.
    pub fn reset(&self) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.settled.peek() == Some(&inner.state.count) {
                log::trace!("clap: reset ignored; count has not moved");
                return false;
            }
            let next = inner.rules.reduce(&inner.state, ClapEvent::Reset);
            inner.state = next;
            inner.settled.track(next.count);
        }
        self.reset_token.update(|t| *t += 1);
        log::debug!("clap: reset applied (#{})", self.reset_token.get());
        true
    }

    /// Props for the clickable element. The internal increment runs before
    /// the caller's extra handler.
    pub fn toggler_props(&self, extras: TogglerExtras) -> TogglerProps {
        let state = self.state();
        let store = self.clone();
        let extra = extras.on_click;
        let on_click: Callback = Rc::new(move || {
            store.increment();
            if let Some(extra) = &extra {
                extra();
            }
        });
        TogglerProps {
            on_click,
            semantics: Semantics::new(Role::Button)
                .label(extras.label.unwrap_or_else(|| "clap".to_string()))
                .pressed(state.is_clicked),
        }
    }

    pub fn counter_props(&self, extras: CounterExtras) -> CounterProps {
        let count = self.state().count;
        let mut semantics = Semantics::new(Role::Meter).range(count, 0, self.max_user_clap());
        if let Some(label) = extras.label {
            semantics = semantics.label(label);
        }
        CounterProps { count, semantics }
    }
}

#[derive(Clone, Default)]
pub struct TogglerExtras {
    /// Runs after the count has been incremented.
    pub on_click: Option<Callback>,
    pub label: Option<String>,
}

#[derive(Clone)]
pub struct TogglerProps {
    pub on_click: Callback,
    pub semantics: Semantics,
}

impl TogglerProps {
    pub fn click(&self) {
        (self.on_click)()
    }
}

impl std::fmt::Debug for TogglerProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TogglerProps")
            .field("on_click", &"<callback>")
            .field("semantics", &self.semantics)
            .finish()
    }
}

#[derive(Clone, Debug, Default)]
pub struct CounterExtras {
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterProps {
    pub count: u32,
    pub semantics: Semantics,
}
