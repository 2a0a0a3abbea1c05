use std::rc::Rc;

use applause_core::{AnimationSpec, Clock, Easing};
use applause_motion::{
    Burst, MotionEngine, Primitive, Property, Shape, TargetHandle, TargetId, Timeline, Tween,
    ValueRange,
};
use web_time::Duration;

use crate::registry::ClapTargets;

const PARTICLES: u32 = 5;

/// Particle curve of both bursts: a fast start that settles early.
pub const BURST_EASING: Easing = Easing::CubicBezier {
    x1: 0.1,
    y1: 1.0,
    x2: 0.3,
    y2: 1.0,
};

/// Curve of the label fades, the engine's usual default.
pub const LABEL_EASING: Easing = Easing::SineOut;

/// The five primitives of one clap, all derived from the base duration `d`:
///
/// | primitive | target | plays | easing |
/// |---|---|---|---|
/// | scale 1.3 → 1 | button | `0..d` | ease-out |
/// | triangle burst | button | `0..d` | [`BURST_EASING`] |
/// | circle burst | button | `0..d` | [`BURST_EASING`] |
/// | fade in and rise, then fade out | count label | `0..d/2`, then `d..1.5d` | [`LABEL_EASING`] |
/// | fade in, nudged up | total label | `1.5d..2.5d` | [`LABEL_EASING`] |
pub fn clap_primitives(
    button: &TargetHandle,
    count: &TargetHandle,
    total: &TargetHandle,
    d: Duration,
) -> [Primitive; 5] {
    let half = d / 2;
    let label = |duration| AnimationSpec::tween(duration, LABEL_EASING);

    let scale = Tween::new(button.clone(), AnimationSpec::tween(d, Easing::EaseOut))
        .animate(Property::Scale, 1.3, 1.0);

    let triangles = Burst {
        center: button.clone(),
        shape: Shape::Polygon,
        count: PARTICLES,
        radius: ValueRange::new(50.0, 95.0),
        angle: 30.0,
        particle_radius: ValueRange::new(6.0, 0.0),
        spec: AnimationSpec::tween(d, BURST_EASING),
    };

    let circles = Burst {
        center: button.clone(),
        shape: Shape::Circle,
        count: PARTICLES,
        radius: ValueRange::new(50.0, 75.0),
        angle: 25.0,
        particle_radius: ValueRange::new(3.0, 0.0),
        spec: AnimationSpec::tween(d, BURST_EASING),
    };

    let count_label = Tween::new(count.clone(), label(half))
        .animate(Property::Opacity, 0.0, 1.0)
        .animate(Property::TranslateY, 0.0, -30.0)
        .then(label(half).with_delay(half))
        .animate(Property::Opacity, 1.0, 0.0)
        .animate(Property::TranslateY, -30.0, -80.0);

    let total_label = Tween::new(total.clone(), label(d).with_delay(d * 3 / 2))
        .animate(Property::Opacity, 0.0, 1.0)
        .animate(Property::TranslateY, 0.0, -3.0);

    [
        scale.into(),
        triangles.into(),
        circles.into(),
        count_label.into(),
        total_label.into(),
    ]
}

/// Builds the clap timeline once all targets are known and replays it on
/// demand.
///
/// Until every target is registered the composer holds a placeholder timeline,
/// so `replay` is always safe. A build happens once per distinct set of
/// target handles; a half-registered set never produces a partial timeline.
pub struct ClapTimeline<E: MotionEngine> {
    engine: E,
    clock: Rc<dyn Clock>,
    base_duration: Duration,
    timeline: Timeline,
    built_for: Option<[TargetId; 3]>,
    builds: usize,
}

impl<E: MotionEngine> ClapTimeline<E> {
    pub fn new(engine: E, clock: Rc<dyn Clock>, base_duration: Duration) -> Self {
        Self {
            engine,
            clock,
            base_duration,
            timeline: Timeline::placeholder(),
            built_for: None,
            builds: 0,
        }
    }

    /// Builds the timeline if `targets` is complete and differs from the set
    /// the current timeline was built for. Returns whether a build happened.
    pub fn sync(&mut self, targets: &ClapTargets) -> bool {
        let Some((button, count, total)) = targets.complete() else {
            log::trace!("clap timeline: targets incomplete; build deferred");
            return false;
        };
        let ids = [button.id(), count.id(), total.id()];
        if self.built_for == Some(ids) {
            return false;
        }

        // Clear whatever an earlier build left on the button.
        self.engine.reset_transform(button);

        let mut timeline = Timeline::new();
        timeline.add(clap_primitives(button, count, total, self.base_duration));
        self.engine.prepare(&timeline);

        self.timeline = timeline;
        self.built_for = Some(ids);
        self.builds += 1;
        log::debug!(
            "clap timeline: built #{} for {:?} ({:?} long)",
            self.builds,
            ids,
            self.timeline.duration()
        );
        true
    }

    /// Restarts the timeline from zero. A no-op until the timeline is built.
    pub fn replay(&mut self) -> bool {
        if !self.timeline.replay(self.clock.now()) {
            return false;
        }
        self.engine.play(&self.timeline);
        true
    }

    pub fn is_ready(&self) -> bool {
        !self.timeline.is_placeholder()
    }

    pub fn builds(&self) -> usize {
        self.builds
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn is_running(&self) -> bool {
        self.timeline.is_running(self.clock.now())
    }
}
