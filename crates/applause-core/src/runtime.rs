use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::Clock;
use crate::scope::Scope;

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

/// Slot storage of one component instance, plus the effects queued by the
/// compose pass currently running against it.
#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    post_commit: Vec<Box<dyn FnOnce()>>,
}

impl Composer {
    fn begin(&mut self) {
        self.cursor = 0;
        self.post_commit.clear();
    }
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;

        if cursor >= c.slots.len() {
            let rc: Rc<T> = Rc::new(init());
            c.slots.push(Box::new(rc.clone()));
            return rc;
        }

        if let Some(rc) = c.slots[cursor].downcast_ref::<Rc<T>>() {
            rc.clone()
        } else {
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 Slots are positional, so calls must not be made conditionally.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            c.slots[cursor] = Box::new(rc.clone());
            rc
        }
    })
}

/// Queues `f` to run after the current compose pass has finished, in the order
/// the calls were made.
pub fn post_commit(f: impl FnOnce() + 'static) {
    COMPOSER.with(|c| c.borrow_mut().post_commit.push(Box::new(f)));
}

/// Drives one component instance through its frames.
///
/// Each frame advances the thread's timers, composes with this instance's
/// slots installed, then runs the effects the pass queued.
pub struct Scheduler {
    composer: Composer,
    scope: Option<Scope>,
    clock: Rc<dyn Clock>,
    frames: u64,
}

impl Scheduler {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            composer: Composer::default(),
            scope: Some(Scope::new()),
            clock,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_mounted(&self) -> bool {
        self.scope.is_some()
    }

    /// Runs one frame. Returns `None` once the instance has been unmounted.
    pub fn frame<R>(&mut self, build: impl FnOnce() -> R) -> Option<R> {
        let Some(scope) = self.scope.clone() else {
            log::warn!("scheduler: frame requested after unmount; ignoring");
            return None;
        };

        crate::timers::advance_to(self.clock.now());

        self.composer.begin();
        COMPOSER.with(|c| std::mem::swap(&mut *c.borrow_mut(), &mut self.composer));
        let out = scope.run(build);
        COMPOSER.with(|c| std::mem::swap(&mut *c.borrow_mut(), &mut self.composer));

        let effects = std::mem::take(&mut self.composer.post_commit);
        log::trace!(
            "scheduler: frame {} committed; {} post-commit effects",
            self.frames,
            effects.len()
        );
        scope.run(|| {
            for effect in effects {
                effect();
            }
        });

        self.frames += 1;
        Some(out)
    }

    /// Tears the instance down: every registered cleanup runs and all slots are
    /// dropped. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(scope) = self.scope.take() {
            log::debug!("scheduler: unmounting after {} frames", self.frames);
            scope.dispose();
            self.composer = Composer::default();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.unmount();
    }
}
