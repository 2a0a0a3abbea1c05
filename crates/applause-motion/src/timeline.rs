use smallvec::SmallVec;
use web_time::{Duration, Instant};

use crate::primitive::Primitive;

/// Primitives played back together under one `replay`.
///
/// A placeholder stands in until the real timeline can be built: it accepts
/// `replay` and does nothing.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    primitives: SmallVec<[Primitive; 5]>,
    placeholder: bool,
    started_at: Option<Instant>,
    plays: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder() -> Self {
        Self {
            placeholder: true,
            ..Self::default()
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn add(&mut self, primitives: impl IntoIterator<Item = Primitive>) -> &mut Self {
        if self.placeholder {
            log::warn!("timeline: primitives added to a placeholder are ignored");
            return self;
        }
        self.primitives.extend(primitives);
        self
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Length of the longest primitive.
    pub fn duration(&self) -> Duration {
        self.primitives
            .iter()
            .map(Primitive::span)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Restarts playback from zero. A replay while already running restarts
    /// rather than queueing. Returns `false` on a placeholder.
    pub fn replay(&mut self, now: Instant) -> bool {
        if self.placeholder {
            log::trace!("timeline: replay on placeholder ignored");
            return false;
        }
        self.started_at = Some(now);
        self.plays += 1;
        true
    }

    /// How many times playback has been (re)started.
    pub fn plays(&self) -> u64 {
        self.plays
    }

    /// Playback position, pinned at the end once finished and at zero before
    /// the first play.
    pub fn position(&self, now: Instant) -> Duration {
        match self.started_at {
            Some(start) => now.saturating_duration_since(start).min(self.duration()),
            None => Duration::ZERO,
        }
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_duration_since(start) < self.duration())
    }
}
