use std::rc::Rc;

use anyhow::{Context, Result};
use applause_core::{Clock, Scheduler, SystemClock, TestClock};
use applause_motion::{RecordingEngine, TargetHandle};
use applause_widget::{ClapConfig, ClapController, ClapState, ClapView, ROLE_ATTR};
use web_time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn env_u32(name: &str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a non-negative integer, got {raw:?}")),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("reading {name}")),
    }
}

/// Classic preset, overridden by `APPLAUSE_*` variables. Also returns how many
/// clicks to simulate.
fn config_from_env() -> Result<(ClapConfig, u32)> {
    let mut config = ClapConfig::classic();
    if let Some(max) = env_u32("APPLAUSE_MAX")? {
        config = config.with_max(max);
    }
    let initial = ClapState {
        count: env_u32("APPLAUSE_INITIAL_COUNT")?.unwrap_or(config.initial.count),
        total_count: env_u32("APPLAUSE_INITIAL_TOTAL")?.unwrap_or(config.initial.total_count),
        ..config.initial
    };
    let clicks = env_u32("APPLAUSE_CLICKS")?.unwrap_or(config.max_user_clap + 1);
    Ok((config.with_initial(initial), clicks))
}

/// Virtual time by default; `APPLAUSE_REALTIME=1` runs on the wall clock and
/// actually waits.
enum DemoClock {
    Virtual(TestClock),
    Real,
}

impl DemoClock {
    fn from_env() -> Result<Self> {
        Ok(match env_u32("APPLAUSE_REALTIME")? {
            Some(v) if v != 0 => DemoClock::Real,
            _ => DemoClock::Virtual(TestClock::default()),
        })
    }

    fn shared(&self) -> Rc<dyn Clock> {
        match self {
            DemoClock::Virtual(clock) => Rc::new(clock.clone()),
            DemoClock::Real => Rc::new(SystemClock),
        }
    }

    fn advance(&self, by: Duration) {
        match self {
            DemoClock::Virtual(clock) => clock.advance(by),
            DemoClock::Real => std::thread::sleep(by),
        }
    }
}

/// What a renderer would do on first paint: announce each element.
fn mount(view: &ClapView) {
    for (id, role) in [(1, "button"), (2, "count-label"), (3, "total-label")] {
        (view.registrar)(TargetHandle::new(id).with_attr(ROLE_ATTR, role));
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let (config, clicks) = config_from_env()?;
    log::info!(
        "Starting clap console: max {}, initial {:?}, {clicks} clicks",
        config.max_user_clap,
        config.initial
    );

    let clock = DemoClock::from_env()?;
    let mut sched = Scheduler::new(clock.shared());
    let upload_delay = config.upload_delay;
    let clap = ClapController::new(config, RecordingEngine::new(), clock.shared());

    sched
        .frame(|| mount(&clap.compose()))
        .context("widget unmounted before first frame")?;
    {
        let composer = clap.timeline();
        let composer = composer.borrow();
        println!(
            "{}",
            serde_json::to_string_pretty(composer.timeline().primitives())?
        );
    }

    for _ in 0..clicks {
        let view = sched.frame(|| clap.compose()).context("widget unmounted")?;
        view.toggler.click();
        clock.advance(FRAME);
    }
    let view = sched.frame(|| clap.compose()).context("widget unmounted")?;
    println!("after clicks: {}", serde_json::to_string(&view.state)?);

    if !clap.reset() {
        log::info!("nothing to reset");
    }
    sched.frame(|| clap.compose());
    let view = sched.frame(|| clap.compose()).context("widget unmounted")?;
    println!(
        "after reset: {} (uploading: {})",
        serde_json::to_string(&view.state)?,
        view.uploading
    );

    clock.advance(upload_delay);
    let view = sched.frame(|| clap.compose()).context("widget unmounted")?;
    println!("synced: uploading {}", view.uploading);

    let plays = clap.timeline().borrow().engine().plays();
    log::info!("{plays} animation replays over {} frames", sched.frames());
    sched.unmount();
    Ok(())
}
