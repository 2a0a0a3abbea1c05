//! Declarative animation primitives.
//!
//! A primitive says *what* should move and *when*; computing the frames in
//! between is the [`MotionEngine`](crate::MotionEngine)'s job. The one
//! exception is [`Tween::sample`], which evaluates property values so engines
//! and tests share a single reading of chained phases.

use applause_core::{AnimationSpec, Interpolate};
use smallvec::SmallVec;
use web_time::Duration;

use crate::target::{TargetHandle, TargetId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Property {
    Scale,
    Opacity,
    /// Vertical offset in layout units; negative values move up.
    TranslateY,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    pub from: f32,
    pub to: f32,
}

impl ValueRange {
    pub fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    pub fn at(&self, t: f32) -> f32 {
        self.from.interpolate(&self.to, t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyRange {
    pub property: Property,
    pub values: ValueRange,
}

/// A set of property ranges animated together under one timing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phase {
    pub ranges: SmallVec<[PropertyRange; 2]>,
    pub spec: AnimationSpec,
}

/// Property interpolation on one target, made of phases that play back to
/// back. A phase is scheduled when the previous one ends and then waits out
/// its own delay.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub target: TargetHandle,
    pub phases: SmallVec<[Phase; 2]>,
}

impl Tween {
    pub fn new(target: TargetHandle, spec: AnimationSpec) -> Self {
        let mut phases = SmallVec::new();
        phases.push(Phase {
            ranges: SmallVec::new(),
            spec,
        });
        Self { target, phases }
    }

    /// Adds a property range to the most recent phase.
    pub fn animate(mut self, property: Property, from: f32, to: f32) -> Self {
        if let Some(phase) = self.phases.last_mut() {
            phase.ranges.push(PropertyRange {
                property,
                values: ValueRange::new(from, to),
            });
        }
        self
    }

    /// Chains a new phase that starts once the current last phase has ended.
    pub fn then(mut self, spec: AnimationSpec) -> Self {
        self.phases.push(Phase {
            ranges: SmallVec::new(),
            spec,
        });
        self
    }

    /// When each phase is scheduled, relative to the start of the tween.
    pub fn phase_offsets(&self) -> SmallVec<[Duration; 2]> {
        let mut at = Duration::ZERO;
        self.phases
            .iter()
            .map(|p| {
                let start = at;
                at += p.spec.span();
                start
            })
            .collect()
    }

    pub fn span(&self) -> Duration {
        self.phases.iter().map(|p| p.spec.span()).sum()
    }

    /// Value of every animated property at `elapsed`. Before a property's first
    /// phase is scheduled it holds that phase's starting value; later phases
    /// take over from earlier ones once they are scheduled.
    pub fn sample(&self, elapsed: Duration) -> SmallVec<[(Property, f32); 3]> {
        let mut out: SmallVec<[(Property, f32); 3]> = SmallVec::new();
        for (phase, offset) in self.phases.iter().zip(self.phase_offsets()) {
            for range in &phase.ranges {
                let slot = out.iter().position(|(p, _)| *p == range.property);
                let value = if elapsed >= offset {
                    range.values.at(phase.spec.progress(elapsed - offset))
                } else if slot.is_none() {
                    range.values.from
                } else {
                    continue;
                };
                match slot {
                    Some(i) => out[i].1 = value,
                    None => out.push((range.property, value)),
                }
            }
        }
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Circle,
    Polygon,
}

/// Particles radiating out from the center of a target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Burst {
    pub center: TargetHandle,
    pub shape: Shape,
    pub count: u32,
    /// Distance of the particles from the center.
    pub radius: ValueRange,
    /// Spread angle in degrees.
    pub angle: f32,
    /// Size of each particle.
    pub particle_radius: ValueRange,
    pub spec: AnimationSpec,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    Tween(Tween),
    Burst(Burst),
}

impl Primitive {
    pub fn span(&self) -> Duration {
        match self {
            Primitive::Tween(t) => t.span(),
            Primitive::Burst(b) => b.spec.span(),
        }
    }

    pub fn target(&self) -> TargetId {
        match self {
            Primitive::Tween(t) => t.target.id(),
            Primitive::Burst(b) => b.center.id(),
        }
    }
}

impl From<Tween> for Primitive {
    fn from(t: Tween) -> Self {
        Primitive::Tween(t)
    }
}

impl From<Burst> for Primitive {
    fn from(b: Burst) -> Self {
        Primitive::Burst(b)
    }
}
