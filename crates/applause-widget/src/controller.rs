use std::cell::RefCell;
use std::rc::Rc;

use applause_core::{
    Clock, Role, Semantics, Signal, after_mount_disposable_effect, after_mount_effect,
    post_commit, signal, timers,
};
use applause_motion::MotionEngine;

use crate::config::ClapConfig;
use crate::counter::{
    ClapState, ClapStore, CounterExtras, CounterProps, TogglerExtras, TogglerProps,
};
use crate::registry::{Registrar, TargetRegistry};
use crate::timeline::ClapTimeline;

/// Told about every count change after it has committed.
pub type OnClap = Rc<dyn Fn(ClapState)>;

/// Caller-supplied additions to the props the controller hands out.
#[derive(Clone, Default)]
pub struct ClapExtras {
    pub toggler: TogglerExtras,
    pub counter: CounterExtras,
    /// Receives the committed state whenever the count changes. Never called
    /// for the first frame, nor for clicks absorbed at the maximum.
    pub on_clap: Option<OnClap>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TotalProps {
    pub total_count: u32,
    pub semantics: Semantics,
}

/// Everything the renderer needs for one frame of the widget, passed down
/// explicitly to each piece.
#[derive(Clone)]
pub struct ClapView {
    pub state: ClapState,
    pub toggler: TogglerProps,
    pub counter: CounterProps,
    pub total: TotalProps,
    /// A reset is being "synced".
    pub uploading: bool,
    /// Stable across frames; call it with each element as it mounts.
    pub registrar: Registrar,
}

impl std::fmt::Debug for ClapView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClapView")
            .field("state", &self.state)
            .field("toggler", &self.toggler)
            .field("counter", &self.counter)
            .field("total", &self.total)
            .field("uploading", &self.uploading)
            .finish_non_exhaustive()
    }
}

/// Composition root of a clap widget.
///
/// Call [`compose`](Self::compose) inside a [`Scheduler`](applause_core::Scheduler)
/// frame. Post-commit effects run in this order:
/// 1. build the timeline once every target has registered,
/// 2. replay it when the count changed (never on the first frame),
/// 3. hand the new state to [`ClapExtras::on_clap`] on that same change,
/// 4. raise the upload indicator when a reset applied, and clear it after
///    `upload_delay` unless another reset or unmount cancels the timer.
pub struct ClapController<E: MotionEngine + 'static> {
    config: ClapConfig,
    store: ClapStore,
    registry: TargetRegistry,
    timeline: Rc<RefCell<ClapTimeline<E>>>,
    uploading: Signal<bool>,
}

impl<E: MotionEngine + 'static> ClapController<E> {
    pub fn new(config: ClapConfig, engine: E, clock: Rc<dyn Clock>) -> Self {
        let timeline = ClapTimeline::new(engine, clock, config.base_duration);
        Self {
            store: ClapStore::new(&config),
            registry: TargetRegistry::new(),
            timeline: Rc::new(RefCell::new(timeline)),
            uploading: signal(false),
            config,
        }
    }

    pub fn config(&self) -> &ClapConfig {
        &self.config
    }

    pub fn store(&self) -> &ClapStore {
        &self.store
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    pub fn timeline(&self) -> Rc<RefCell<ClapTimeline<E>>> {
        self.timeline.clone()
    }

    pub fn uploading(&self) -> Signal<bool> {
        self.uploading.clone()
    }

    pub fn reset(&self) -> bool {
        self.store.reset()
    }

    pub fn compose(&self) -> ClapView {
        self.compose_with(ClapExtras::default())
    }

    pub fn compose_with(&self, extras: ClapExtras) -> ClapView {
        let state = self.store.state();
        let resets = self.store.resets();

        {
            let timeline = self.timeline.clone();
            let registry = self.registry.clone();
            post_commit(move || {
                timeline.borrow_mut().sync(&registry.targets());
            });
        }

        {
            let timeline = self.timeline.clone();
            after_mount_effect(state.count, move || {
                timeline.borrow_mut().replay();
            });
        }

        {
            let on_clap = extras.on_clap.clone();
            after_mount_effect(state.count, move || {
                if let Some(on_clap) = on_clap {
                    on_clap(state);
                }
            });
        }

        {
            let uploading = self.uploading.clone();
            let delay = self.config.upload_delay;
            after_mount_disposable_effect(resets, move || {
                log::info!("clap: syncing reset #{resets}");
                uploading.set(true);
                timers::set_timeout(delay, move || {
                    log::info!("clap: reset #{resets} synced");
                    uploading.set(false);
                })
            });
        }

        ClapView {
            state,
            toggler: self.store.toggler_props(extras.toggler),
            counter: self.store.counter_props(extras.counter),
            total: TotalProps {
                total_count: state.total_count,
                semantics: Semantics::new(Role::Text).label(format!("{} claps", state.total_count)),
            },
            uploading: self.uploading.get(),
            registrar: self.registry.registrar(),
        }
    }
}
