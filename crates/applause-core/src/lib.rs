//! # Runtime, Effects, and Timers
//!
//! `applause-core` is the small reactive runtime the widgets are composed on.
//! A component is an ordinary function that is called once per frame by a
//! [`Scheduler`]; everything it needs to keep between frames lives in
//! `remember*` slots.
//!
//! ## Remembered state
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use applause_core::*;
//!
//! let mut sched = Scheduler::new(Rc::new(TestClock::default()));
//! for _ in 0..3 {
//!     sched.frame(|| {
//!         let renders = remember(|| Cell::new(0u32));
//!         renders.set(renders.get() + 1);
//!     });
//! }
//! let seen = sched.frame(|| remember(|| Cell::new(0u32)).get());
//! assert_eq!(seen, Some(3));
//! ```
//!
//! `remember` is order‑based: the Nth call in a compose pass always refers to
//! the Nth stored value, so every `remember` and effect call must run on every
//! pass.
//!
//! ## Effects
//!
//! Effects never run while a component is composing. They are queued with
//! [`post_commit`] and run after the pass, in declaration order:
//!
//! - [`after_mount_effect`] runs when its key changes, but never on the first
//!   frame, so nothing animates on a widget's initial appearance.
//! - [`disposable_effect`] / [`after_mount_disposable_effect`] return a
//!   [`Dispose`] that runs before the next activation and on unmount.
//! - [`remember_previous`] hands back the value from the previous frame.
//!
//! ## Timers
//!
//! [`timers::set_timeout`] returns a `Dispose` that cancels the timer. Return it
//! from a disposable effect and the timer cannot fire after the component is
//! gone.

pub mod animation;
pub mod effects;
pub mod effects_ext;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod state;
pub mod tests;
pub mod timers;

pub use animation::*;
pub use effects::*;
pub use effects_ext::*;
pub use runtime::*;
pub use scope::*;
pub use semantics::*;
pub use signal::*;
pub use state::*;
