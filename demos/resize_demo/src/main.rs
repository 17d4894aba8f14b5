//! Plays a scripted resize session against the in-memory viewport and logs
//! what a component using `use_is_mobile` would render.
//!
//! `RUST_LOG=debug cargo run -p resize_demo -- [threshold_px] [debounce_ms]`

use std::rc::Rc;

use anyhow::Context;
use viewport_core::prelude::*;
use viewport_core::testing::FakeViewport;

enum Step {
    Resize(f64, f64),
    Wait(u64),
}

const SCRIPT: &[Step] = &[
    Step::Resize(900.0, 1200.0),
    Step::Wait(20),
    Step::Resize(700.0, 1200.0),
    Step::Wait(20),
    Step::Resize(375.0, 812.0),
    Step::Wait(200),
    Step::Resize(812.0, 375.0),
    Step::Wait(200),
    Step::Resize(1280.0, 800.0),
    Step::Wait(200),
];

fn arg(n: usize, default: f64) -> anyhow::Result<f64> {
    match std::env::args().nth(n) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("argument {n} ({raw:?}) is not a number")),
        None => Ok(default),
    }
}

fn describe(value: ViewportClassification) -> String {
    match value {
        ViewportClassification::IsMobile(m) => format!("isMobile={m}"),
        ViewportClassification::WithOrientation {
            is_mobile,
            orientation,
        } => format!("isMobile={is_mobile} orientation={orientation}"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let threshold = arg(1, DEFAULT_MOBILE_SCREEN_SIZE)?;
    let debounce = arg(2, 100.0)?;
    let options = IsMobileOptions::default().debounce(debounce).with_orientation();

    let viewport = FakeViewport::new(1440.0, 900.0);
    let timers = viewport.test_timers();
    let host: Rc<dyn ViewportCapability> = Rc::new(viewport.clone());
    let composition = Composition::new();

    let render = || -> anyhow::Result<()> {
        let value = composition
            .compose(|| use_is_mobile(&host, threshold, options))
            .context("use_is_mobile")?;
        let (w, h) = viewport.size();
        log::info!(
            "t={:>4}ms {w}x{h}: {}",
            timers.now().as_millis(),
            describe(value)
        );
        Ok(())
    };

    render()?;
    for step in SCRIPT {
        match *step {
            Step::Resize(w, h) => viewport.resize(w, h),
            Step::Wait(ms) => timers.advance_ms(ms),
        }
        render()?;
    }

    composition.dispose();
    log::info!(
        "unmounted: {} listeners left, {:?}",
        viewport.active_listeners(),
        viewport.stats()
    );
    Ok(())
}
