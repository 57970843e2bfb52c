//! The animation facade: configure a tween over named properties, start
//! it, and get called back as it advances.
//!
//! ```no_run
//! use std::time::Duration;
//! use tweenlet::{Animation, AnimationOptions};
//!
//! let animation = Animation::play(
//!     100.0,
//!     200.0,
//!     AnimationOptions::new()
//!         .duration(Duration::from_millis(500))
//!         .on_update_value(|value| println!("at {value}"))
//!         .on_finish(|| println!("done, one way or the other")),
//! )
//! .unwrap();
//! # let _ = animation;
//! ```

use instant::Instant;
use std::sync::Arc;
use std::time::Duration;

use crate::easing::Easing;
use crate::frame::arm_loop;
use crate::registry::{registry, AnimationId, DoneFn, Entry, UpdateFn};
use crate::tween::{Tween, Values};
use crate::{Result, TweenError};

/// Property key used by the single-value [`Animation::play`] form.
const SCALAR_KEY: &str = "value";

/// Configuration for one animation.
///
/// All fields have defaults: 250 ms duration, [`Easing::CubicOut`], and
/// no-op callbacks.
#[derive(Default)]
pub struct AnimationOptions {
    duration: Option<Duration>,
    easing: Option<Easing>,
    on_update: Option<Arc<UpdateFn>>,
    on_complete: Option<Arc<DoneFn>>,
    on_stop: Option<Arc<DoneFn>>,
    on_finish: Option<Arc<DoneFn>>,
}

impl AnimationOptions {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::default()
    }

    /// Target length of the animation. Defaults to 250 ms.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Easing curve. Defaults to [`Easing::CubicOut`].
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Called each frame with the current property values.
    pub fn on_update<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Values) + Send + Sync + 'static,
    {
        self.on_update = Some(Arc::new(callback));
        self
    }

    /// Single-value form of [`on_update`](Self::on_update) for animations
    /// built with [`Animation::play`]: receives the bare value instead of
    /// a one-key property map.
    pub fn on_update_value<F>(self, callback: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_update(move |values: &Values| {
            if let Some(value) = values.get(SCALAR_KEY) {
                callback(*value);
            }
        })
    }

    /// Called once when the animation runs its full duration.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_complete = Some(Arc::new(callback));
        self
    }

    /// Called once when the animation is interrupted by [`Animation::stop`].
    pub fn on_stop<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_stop = Some(Arc::new(callback));
        self
    }

    /// Called once after the animation reaches either terminal state,
    /// following the completion or interruption callback. Honored by
    /// [`Animation::play`] only.
    pub fn on_finish<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_finish = Some(Arc::new(callback));
        self
    }

    fn resolved_duration(&self) -> Duration {
        self.duration.unwrap_or(Self::DEFAULT_DURATION)
    }

    fn resolved_easing(&self) -> Easing {
        self.easing.unwrap_or_default()
    }
}

/// Handle to one animation.
///
/// Constructing allocates a unique id but starts nothing; [`start`]
/// registers the animation with the process-wide registry and, when the
/// registry was idle, arms the shared frame loop. Dropping the handle does
/// not stop the animation.
///
/// [`start`]: Animation::start
pub struct Animation {
    id: AnimationId,
    entry: Option<Entry>,
}

impl Animation {
    /// Build an animation advancing every property in `from` towards its
    /// counterpart in `to`.
    ///
    /// The two maps must cover the same property names.
    pub fn new(from: Values, to: Values, options: AnimationOptions) -> Result<Self> {
        if from.len() != to.len() || !from.keys().all(|key| to.contains_key(key)) {
            return Err(TweenError::PropertyMismatch(property_diff(&from, &to)));
        }

        let tween = Tween::new(
            from,
            to,
            options.resolved_duration(),
            options.resolved_easing(),
        );
        Ok(Self {
            id: AnimationId::next(),
            entry: Some(Entry {
                tween,
                on_update: options.on_update,
                on_complete: options.on_complete,
                on_stop: options.on_stop,
            }),
        })
    }

    /// Single-value convenience form: animates one bare value from
    /// `start_value` to `end_value` and starts immediately.
    ///
    /// Use [`AnimationOptions::on_update_value`] to observe the scalar.
    /// The options' `on_finish` callback fires exactly once after either
    /// completion or interruption. The returned handle may still be used
    /// to [`stop`](Animation::stop) the animation.
    pub fn play(start_value: f64, end_value: f64, options: AnimationOptions) -> Result<Self> {
        let AnimationOptions {
            duration,
            easing,
            on_update,
            on_complete,
            on_stop,
            on_finish,
        } = options;

        // Both terminal paths run the finish callback; only one of them can
        // ever fire because the registry yields each entry exactly once.
        let (on_complete, on_stop) = match on_finish {
            Some(on_finish) => {
                let finish = on_finish.clone();
                let complete: Arc<DoneFn> = Arc::new(move || {
                    if let Some(callback) = &on_complete {
                        callback();
                    }
                    finish();
                });
                let stop: Arc<DoneFn> = Arc::new(move || {
                    if let Some(callback) = &on_stop {
                        callback();
                    }
                    on_finish();
                });
                (Some(complete), Some(stop))
            }
            None => (on_complete, on_stop),
        };

        let from = Values::from([(SCALAR_KEY.to_string(), start_value)]);
        let to = Values::from([(SCALAR_KEY.to_string(), end_value)]);
        let mut animation = Animation::new(
            from,
            to,
            AnimationOptions {
                duration,
                easing,
                on_update,
                on_complete,
                on_stop,
                on_finish: None,
            },
        )?;
        animation.start();
        Ok(animation)
    }

    pub fn id(&self) -> AnimationId {
        self.id
    }

    /// Register with the liveness registry and begin advancing on frame
    /// ticks. Arms the shared frame loop when the registry was idle.
    /// Calling again after the first start is a no-op.
    pub fn start(&mut self) {
        let Some(entry) = self.entry.take() else {
            log::debug!("animation {} already started", self.id);
            return;
        };
        let arm = match registry().lock() {
            Ok(mut reg) => reg.insert(self.id, entry, Instant::now()),
            Err(_) => return,
        };
        if arm {
            arm_loop();
        }
    }

    /// Interrupt the animation. Its stop callback fires exactly once; a
    /// stop after completion, after a previous stop, or before start has
    /// no effect.
    pub fn stop(&self) {
        let entry = match registry().lock() {
            Ok(mut reg) => reg.interrupt(self.id),
            Err(_) => None,
        };
        if let Some(entry) = entry {
            if let Some(on_stop) = entry.on_stop {
                on_stop();
            }
        }
    }

    /// Whether the animation is currently mid-flight.
    pub fn is_active(&self) -> bool {
        registry()
            .lock()
            .map(|reg| reg.contains(self.id))
            .unwrap_or(false)
    }
}

fn property_diff(from: &Values, to: &Values) -> String {
    let mut from_keys: Vec<&str> = from.keys().map(String::as_str).collect();
    let mut to_keys: Vec<&str> = to.keys().map(String::as_str).collect();
    from_keys.sort_unstable();
    to_keys.sort_unstable();
    format!("from [{}] vs to [{}]", from_keys.join(", "), to_keys.join(", "))
}
