//! # The clap button
//!
//! A button that counts a user's claps against a shared total, plays a burst
//! animation on every clap and can be reset.
//!
//! The pieces, leaves first:
//!
//! - [`ClapRules`]: the pure transition function of the bounded counter.
//! - [`ClapStore`]: current state, reset gating, the reset token, and the
//!   toggler/counter prop getters.
//! - [`TargetRegistry`]: role → handle map the renderer fills as elements
//!   mount.
//! - [`ClapTimeline`]: builds the five-primitive timeline once all targets
//!   are present and replays it on demand.
//! - [`ClapController`]: wires it all together inside a compose pass.
//!
//! ```rust
//! use std::rc::Rc;
//! use applause_core::{Scheduler, TestClock};
//! use applause_motion::{RecordingEngine, TargetHandle};
//! use applause_widget::{ClapConfig, ClapController, ROLE_ATTR};
//!
//! let clock = Rc::new(TestClock::default());
//! let mut sched = Scheduler::new(clock.clone());
//! let clap = ClapController::new(ClapConfig::classic(), RecordingEngine::new(), clock);
//!
//! let view = sched
//!     .frame(|| {
//!         let view = clap.compose();
//!         for (id, role) in [(1, "button"), (2, "count-label"), (3, "total-label")] {
//!             (view.registrar)(TargetHandle::new(id).with_attr(ROLE_ATTR, role));
//!         }
//!         view
//!     })
//!     .unwrap();
//!
//! view.toggler.click();
//! sched.frame(|| clap.compose());
//! assert_eq!(clap.store().state().count, 1);
//! assert_eq!(clap.timeline().borrow().engine().plays(), 1);
//! ```

pub mod config;
pub mod controller;
pub mod counter;
pub mod error;
pub mod registry;
pub mod timeline;

pub use config::*;
pub use controller::*;
pub use counter::*;
pub use error::*;
pub use registry::*;
pub use timeline::*;
