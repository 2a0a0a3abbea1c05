use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{Dispose, PreviousValue, current_scope, post_commit, remember};

struct MountSkip<K> {
    mounted: Cell<bool>,
    deps: RefCell<PreviousValue<K>>,
}

/// Runs `effect` after the commit whenever `key` differs from the previous
/// pass, but never on the first pass. The first pass only records the key and
/// marks the call site as mounted.
pub fn after_mount_effect<K: PartialEq + Clone + 'static>(key: K, effect: impl FnOnce() + 'static) {
    let slot = remember(|| MountSkip::<K> {
        mounted: Cell::new(false),
        deps: RefCell::new(PreviousValue::new()),
    });

    let prev = slot.deps.borrow_mut().track(key.clone());
    if !slot.mounted.replace(true) {
        log::trace!("after_mount_effect: first activation suppressed");
        return;
    }
    if prev.as_ref() != Some(&key) {
        post_commit(effect);
    }
}

struct KeyedCleanup<K> {
    mounted: Cell<bool>,
    deps: RefCell<PreviousValue<K>>,
    cleanup: Rc<RefCell<Option<Dispose>>>,
}

/// cleanup on key change or unmount
pub fn disposable_effect<K: PartialEq + Clone + 'static>(
    key: K,
    effect: impl FnOnce() -> Dispose + 'static,
) {
    keyed_disposable(key, false, effect);
}

/// Like [`disposable_effect`], but the first activation is suppressed.
pub fn after_mount_disposable_effect<K: PartialEq + Clone + 'static>(
    key: K,
    effect: impl FnOnce() -> Dispose + 'static,
) {
    keyed_disposable(key, true, effect);
}

fn keyed_disposable<K: PartialEq + Clone + 'static>(
    key: K,
    skip_mount: bool,
    effect: impl FnOnce() -> Dispose + 'static,
) {
    let slot = remember(|| {
        let cleanup: Rc<RefCell<Option<Dispose>>> = Rc::new(RefCell::new(None));
        // One unmount disposer per call site, installed when the slot is created.
        if let Some(scope) = current_scope() {
            let cleanup = cleanup.clone();
            scope.add_disposer(move || run_cleanup(&cleanup));
        }
        KeyedCleanup::<K> {
            mounted: Cell::new(false),
            deps: RefCell::new(PreviousValue::new()),
            cleanup,
        }
    });

    let prev = slot.deps.borrow_mut().track(key.clone());
    let first = !slot.mounted.replace(true);
    if first && skip_mount {
        return;
    }
    if prev.as_ref() == Some(&key) {
        return;
    }

    let cleanup = slot.cleanup.clone();
    post_commit(move || {
        run_cleanup(&cleanup);
        let d = effect();
        *cleanup.borrow_mut() = Some(d);
    });
}

fn run_cleanup(slot: &RefCell<Option<Dispose>>) {
    let pending = slot.borrow_mut().take();
    if let Some(d) = pending {
        d.run();
    }
}
