//! Animation descriptors for Applause widgets.
//!
//! Widgets describe their motion as [`Primitive`]s attached to
//! [`TargetHandle`]s, collect them in a [`Timeline`] and hand that to a
//! [`MotionEngine`]. Nothing here draws; engines do.

pub mod engine;
pub mod primitive;
pub mod target;
pub mod tests;
pub mod timeline;

pub use engine::*;
pub use primitive::*;
pub use target::*;
pub use timeline::*;
