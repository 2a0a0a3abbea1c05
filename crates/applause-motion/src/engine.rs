use crate::target::{TargetHandle, TargetId};
use crate::timeline::Timeline;

/// The collaborator that turns descriptors into pixels.
///
/// Implementations must accept any timeline built from valid ranges, and
/// `play` must be safe to call again while a previous playback is running.
pub trait MotionEngine {
    /// Drops any inline transform on `target`, back to an identity scale.
    fn reset_transform(&mut self, target: &TargetHandle);

    /// A timeline was (re)built and will be played later.
    fn prepare(&mut self, _timeline: &Timeline) {}

    /// Plays `timeline` from its start.
    fn play(&mut self, timeline: &Timeline);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    ResetTransform(TargetId),
    Prepared { primitives: usize },
    Played { primitives: usize, plays: u64 },
}

/// Headless engine that records what it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct RecordingEngine {
    events: Vec<EngineEvent>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    pub fn plays(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, EngineEvent::Played { .. }))
            .count()
    }

    pub fn prepared(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, EngineEvent::Prepared { .. }))
            .count()
    }
}

impl MotionEngine for RecordingEngine {
    fn reset_transform(&mut self, target: &TargetHandle) {
        log::debug!("engine: reset transform on {:?}", target.id());
        self.events.push(EngineEvent::ResetTransform(target.id()));
    }

    fn prepare(&mut self, timeline: &Timeline) {
        self.events.push(EngineEvent::Prepared {
            primitives: timeline.primitives().len(),
        });
    }

    fn play(&mut self, timeline: &Timeline) {
        log::debug!(
            "engine: play #{} ({} primitives, {:?})",
            timeline.plays(),
            timeline.primitives().len(),
            timeline.duration()
        );
        self.events.push(EngineEvent::Played {
            primitives: timeline.primitives().len(),
            plays: timeline.plays(),
        });
    }
}
