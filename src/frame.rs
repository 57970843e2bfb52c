//! Frame scheduling abstraction.
//!
//! The library never owns a render loop. The host supplies the "run this
//! callback before the next repaint" primitive by installing a
//! [`FrameScheduler`]; a timer-driven fallback keeps animations working in
//! headless hosts and tests.

use instant::Instant;
use std::sync::OnceLock;
use std::time::Duration;

use crate::registry::registry;

/// A one-shot frame callback, handed the timestamp of the frame it runs in.
pub type FrameCallback = Box<dyn FnOnce(Instant) + Send + 'static>;

/// Host-supplied frame scheduling primitive (object-safe version).
pub trait FrameScheduler: Send + Sync + 'static {
    /// Schedule `callback` to run before the next frame is drawn.
    fn request_frame(&self, callback: FrameCallback);
}

/// Timer-driven frame source: each requested frame fires from a short-lived
/// thread after a fixed interval. This is the fallback for hosts without a
/// display loop.
pub struct IntervalFrames {
    interval: Duration,
}

impl IntervalFrames {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn at_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }
}

impl Default for IntervalFrames {
    fn default() -> Self {
        Self::at_fps(60)
    }
}

impl FrameScheduler for IntervalFrames {
    fn request_frame(&self, callback: FrameCallback) {
        let interval = self.interval;
        std::thread::spawn(move || {
            std::thread::sleep(interval);
            callback(Instant::now());
        });
    }
}

/// Global frame scheduler instance.
static SCHEDULER: OnceLock<Box<dyn FrameScheduler>> = OnceLock::new();

/// Install the host's frame scheduler. Later calls are ignored, so install
/// before starting the first animation.
pub fn init_frame_scheduler(scheduler: Box<dyn FrameScheduler>) {
    if SCHEDULER.set(scheduler).is_err() {
        log::warn!("frame scheduler already installed, ignoring");
    }
}

/// The installed frame scheduler, falling back to [`IntervalFrames`].
pub fn frame_scheduler() -> &'static dyn FrameScheduler {
    SCHEDULER
        .get_or_init(|| Box::new(IntervalFrames::default()))
        .as_ref()
}

/// Request the next tick of the shared animation loop.
pub(crate) fn arm_loop() {
    frame_scheduler().request_frame(Box::new(animate_loop));
}

/// One tick of the shared loop: advance every live animation, fire the
/// collected callbacks with the registry lock released, and re-arm only
/// while animations remain in flight.
fn animate_loop(now: Instant) {
    let Ok(mut reg) = registry().lock() else {
        return;
    };
    let frame = reg.advance(now);
    drop(reg);

    for (on_update, values) in frame.updates {
        on_update(&values);
    }
    for on_complete in frame.completed {
        on_complete();
    }

    if frame.rearm {
        arm_loop();
    }
}
