#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::effects_ext::*;
    use crate::scope::*;
    use crate::signal::*;
    use crate::state::*;
    use crate::timers;
    use crate::{Dispose, Scheduler, post_commit, remember};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use web_time::{Duration, Instant};

    fn scheduler() -> (Scheduler, TestClock) {
        let clock = TestClock::new(Instant::now());
        (Scheduler::new(Rc::new(clock.clone())), clock)
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscriber_can_read_back() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = sig.subscribe({
            let sig = sig.clone();
            let seen = seen.clone();
            move |v| seen.borrow_mut().push((*v, sig.get()))
        });

        sig.set(7);
        sig.unsubscribe(id);
        sig.set(8);
        assert_eq!(*seen.borrow(), vec![(7, 7)]);
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let scope = Scope::new();
        for n in 1..=2 {
            let order = order.clone();
            scope.add_disposer(move || order.borrow_mut().push(n));
        }

        assert!(order.borrow().is_empty());
        scope.dispose();
        scope.dispose();
        assert_eq!(*order.borrow(), vec![1, 2]);
        assert!(scope.is_disposed());
    }

    #[test]
    fn test_dropping_last_scope_handle_runs_cleanups() {
        let ran = Rc::new(Cell::new(false));
        {
            let scope = Scope::new();
            let ran = ran.clone();
            scope.add_disposer(move || ran.set(true));
        }
        assert!(ran.get());
    }

    #[test]
    fn test_disposer_added_after_dispose_runs_immediately() {
        let ran = Rc::new(Cell::new(false));
        let scope = Scope::new();
        scope.dispose();
        scope.add_disposer({
            let ran = ran.clone();
            move || ran.set(true)
        });
        assert!(ran.get());
    }

    #[test]
    fn test_dispose_runs_once() {
        let n = Rc::new(Cell::new(0));
        let d = Dispose::new({
            let n = n.clone();
            move || n.set(n.get() + 1)
        });
        let d2 = d.clone();
        d.run();
        d2.run();
        assert_eq!(n.get(), 1);
        assert!(d2.is_disposed());
    }

    #[test]
    fn test_slots_survive_frames() {
        let (mut sched, _) = scheduler();
        for _ in 0..3 {
            sched.frame(|| {
                let n = remember(|| Cell::new(0));
                n.set(n.get() + 1);
            });
        }
        let n = sched.frame(|| remember(|| Cell::new(0)).get());
        assert_eq!(n, Some(3));
    }

    #[test]
    fn test_schedulers_keep_separate_slots() {
        let (mut a, _) = scheduler();
        let (mut b, _) = scheduler();
        a.frame(|| remember(|| Cell::new(1)).set(10));
        b.frame(|| remember(|| Cell::new(2)).set(20));
        assert_eq!(a.frame(|| remember(|| Cell::new(0)).get()), Some(10));
        assert_eq!(b.frame(|| remember(|| Cell::new(0)).get()), Some(20));
    }

    #[test]
    fn test_post_commit_runs_after_compose_in_order() {
        let (mut sched, _) = scheduler();
        let log = Rc::new(RefCell::new(Vec::new()));
        sched.frame(|| {
            let l = log.clone();
            post_commit(move || l.borrow_mut().push("first"));
            let l = log.clone();
            post_commit(move || l.borrow_mut().push("second"));
            log.borrow_mut().push("compose");
        });
        assert_eq!(*log.borrow(), vec!["compose", "first", "second"]);
    }

    #[test]
    fn test_previous_value_tracker() {
        let mut prev = PreviousValue::new();
        assert_eq!(prev.track(1), None);
        assert_eq!(prev.track(2), Some(1));
        assert_eq!(prev.peek(), Some(&2));
        assert_eq!(prev.track(2), Some(2));
    }

    #[test]
    fn test_remember_previous_across_frames() {
        let (mut sched, _) = scheduler();
        let seen: Vec<Option<u32>> = [5, 6, 6, 9]
            .into_iter()
            .filter_map(|v| sched.frame(|| remember_previous(v)))
            .collect();
        assert_eq!(seen, vec![None, Some(5), Some(6), Some(6)]);
    }

    #[test]
    fn test_after_mount_effect_skips_first_frame() {
        let (mut sched, _) = scheduler();
        let runs = Rc::new(RefCell::new(Vec::new()));
        for key in [0, 0, 1, 1, 2, 1] {
            sched.frame(|| {
                let runs = runs.clone();
                after_mount_effect(key, move || runs.borrow_mut().push(key));
            });
        }
        assert_eq!(*runs.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn test_after_mount_effect_never_runs_on_unchanged_mount() {
        let (mut sched, _) = scheduler();
        let runs = Rc::new(Cell::new(0));
        for _ in 0..4 {
            sched.frame(|| {
                let runs = runs.clone();
                after_mount_effect("same", move || runs.set(runs.get() + 1));
            });
        }
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn test_disposable_effect_cleans_up_on_key_change_and_unmount() {
        let (mut sched, _) = scheduler();
        let events = Rc::new(RefCell::new(Vec::new()));
        for key in [1, 1, 2] {
            sched.frame(|| {
                let events = events.clone();
                disposable_effect(key, move || {
                    events.borrow_mut().push(format!("start {key}"));
                    Dispose::new(move || events.borrow_mut().push(format!("stop {key}")))
                });
            });
        }
        sched.unmount();
        assert_eq!(
            *events.borrow(),
            vec!["start 1", "stop 1", "start 2", "stop 2"]
        );
    }

    #[test]
    fn test_after_mount_disposable_effect_skips_first_frame() {
        let (mut sched, _) = scheduler();
        let starts = Rc::new(Cell::new(0));
        for key in [0u64, 0, 1] {
            sched.frame(|| {
                let starts = starts.clone();
                after_mount_disposable_effect(key, move || {
                    starts.set(starts.get() + 1);
                    Dispose::noop()
                });
            });
        }
        assert_eq!(starts.get(), 1);
    }

    #[test]
    fn test_frame_after_unmount_is_ignored() {
        let (mut sched, _) = scheduler();
        sched.frame(|| ());
        sched.unmount();
        assert!(!sched.is_mounted());
        assert_eq!(sched.frame(|| 1), None);
    }

    #[test]
    fn test_timers_fire_in_due_order() {
        let (mut sched, clock) = scheduler();
        sched.frame(|| ());
        let order = Rc::new(RefCell::new(Vec::new()));
        let _late = timers::set_timeout(Duration::from_millis(200), {
            let order = order.clone();
            move || order.borrow_mut().push("late")
        });
        let _early = timers::set_timeout(Duration::from_millis(100), {
            let order = order.clone();
            move || order.borrow_mut().push("early")
        });

        clock.advance(Duration::from_millis(150));
        sched.frame(|| ());
        assert_eq!(*order.borrow(), vec!["early"]);

        clock.advance(Duration::from_millis(50));
        sched.frame(|| ());
        assert_eq!(*order.borrow(), vec!["early", "late"]);
        assert_eq!(timers::pending(), 0);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let (mut sched, clock) = scheduler();
        sched.frame(|| ());
        let fired = Rc::new(Cell::new(false));
        let cancel = timers::set_timeout(Duration::from_millis(10), {
            let fired = fired.clone();
            move || fired.set(true)
        });
        cancel.run();
        clock.advance(Duration::from_millis(20));
        sched.frame(|| ());
        assert!(!fired.get());
    }

    #[test]
    fn test_easing_endpoints() {
        for e in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::SineOut,
            Easing::CubicBezier {
                x1: 0.1,
                y1: 1.0,
                x2: 0.3,
                y2: 1.0,
            },
        ] {
            assert!(e.interpolate(0.0).abs() < 1e-6);
            assert!((e.interpolate(1.0) - 1.0).abs() < 1e-6);
        }
        assert!((Easing::EaseOut.interpolate(0.5) - 0.75).abs() < 1e-6);
        assert!((Easing::SineOut.interpolate(0.5) - 0.5f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_cubic_bezier_easing() {
        // cubic-bezier(0, 0, 1, 1) is the identity.
        let linear = Easing::CubicBezier {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        };
        for t in [0.1, 0.25, 0.5, 0.9] {
            assert!((linear.interpolate(t) - t).abs() < 1e-3);
        }

        let snappy = Easing::CubicBezier {
            x1: 0.1,
            y1: 1.0,
            x2: 0.3,
            y2: 1.0,
        };
        let mut last = 0.0;
        for i in 1..=20 {
            let v = snappy.interpolate(i as f32 / 20.0);
            assert!(v >= last - 1e-4);
            last = v;
        }
        assert!(snappy.interpolate(0.2) > 0.6);
    }

    #[test]
    fn test_animation_progress_respects_delay() {
        let spec = AnimationSpec::tween(Duration::from_millis(100), Easing::Linear)
            .with_delay(Duration::from_millis(50));
        assert_eq!(spec.span(), Duration::from_millis(150));
        assert_eq!(spec.progress(Duration::from_millis(40)), 0.0);
        assert!((spec.progress(Duration::from_millis(100)) - 0.5).abs() < 1e-4);
        assert_eq!(spec.progress(Duration::from_millis(400)), 1.0);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let a = SystemClock.now();
        let b = SystemClock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_test_clock_clones_share_time() {
        let t0 = Instant::now();
        let a = TestClock::new(t0);
        let b = a.clone();
        a.advance(Duration::from_millis(250));
        assert_eq!(b.now(), t0 + Duration::from_millis(250));
    }
}
