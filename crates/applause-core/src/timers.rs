//! One cancellable timer queue per thread, standing in for the event loop's
//! timeouts. The [`Scheduler`](crate::Scheduler) advances it at the start
//! of every frame.

use std::cell::RefCell;

use slotmap::{SlotMap, new_key_type};
use web_time::{Duration, Instant};

use crate::Dispose;

new_key_type! {
    pub struct TimerId;
}

struct Timer {
    due: Instant,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct TimerQueue {
    timers: SlotMap<TimerId, Timer>,
    now: Option<Instant>,
}

impl TimerQueue {
    fn now(&self) -> Instant {
        self.now.unwrap_or_else(Instant::now)
    }

    fn next_due(&self, now: Instant) -> Option<TimerId> {
        self.timers
            .iter()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| t.due)
            .map(|(id, _)| id)
    }
}

thread_local! {
    static TIMERS: RefCell<TimerQueue> = RefCell::new(TimerQueue::default());
}

/// Schedules `f` to run once `delay` has elapsed on the queue's clock.
/// Running the returned `Dispose` cancels the timer if it has not fired yet.
pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) -> Dispose {
    let id = TIMERS.with(|q| {
        let mut q = q.borrow_mut();
        let due = q.now() + delay;
        q.timers.insert(Timer {
            due,
            callback: Box::new(f),
        })
    });
    log::trace!("timers: scheduled {id:?} in {delay:?}");
    Dispose::new(move || clear_timeout(id))
}

/// Cancels a pending timer. Unknown or already fired ids are ignored.
pub fn clear_timeout(id: TimerId) {
    let removed = TIMERS.with(|q| q.borrow_mut().timers.remove(id));
    if removed.is_some() {
        log::trace!("timers: cancelled {id:?}");
    }
}

/// Moves the queue's clock to `now` and fires every timer that is due, earliest
/// first. Callbacks may schedule or cancel other timers. Returns how many fired.
pub fn advance_to(now: Instant) -> usize {
    TIMERS.with(|q| {
        let mut q = q.borrow_mut();
        if q.now.is_some_and(|prev| now < prev) {
            log::warn!("timers: clock moved backwards; keeping the later time");
            return;
        }
        q.now = Some(now);
    });

    let mut fired = 0;
    loop {
        // Borrow is released before the callback runs.
        let next = TIMERS.with(|q| {
            let mut q = q.borrow_mut();
            let now = q.now();
            q.next_due(now).and_then(|id| q.timers.remove(id))
        });
        let Some(timer) = next else { break };
        (timer.callback)();
        fired += 1;
    }
    fired
}

/// Number of timers waiting to fire.
pub fn pending() -> usize {
    TIMERS.with(|q| q.borrow().timers.len())
}
