//! The interpolation core: a time-driven tween over named numeric
//! properties.

use instant::Instant;
use std::collections::HashMap;
use std::time::Duration;

use crate::easing::Easing;

/// Named numeric properties being animated, e.g. `{"x": 100.0, "y": 200.0}`.
pub type Values = HashMap<String, f64>;

/// Values that can be interpolated between two endpoints.
pub trait Lerp {
    /// Interpolate between self and other by factor t (0.0 to 1.0).
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Values {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self.iter()
            .map(|(key, start)| {
                let end = other.get(key).copied().unwrap_or(*start);
                (key.clone(), start.lerp(&end, t))
            })
            .collect()
    }
}

/// A tween between two sets of property values.
#[derive(Debug, Clone)]
pub struct Tween {
    from: Values,
    to: Values,
    duration: Duration,
    easing: Easing,
    started_at: Option<Instant>,
}

impl Tween {
    pub fn new(from: Values, to: Values, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            started_at: None,
        }
    }

    /// Begin advancing from the given instant.
    pub fn begin(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Raw progress (0.0 to 1.0) at the given instant.
    ///
    /// 0.0 before [`begin`](Self::begin); a zero duration reports 1.0.
    pub fn progress(&self, now: Instant) -> f64 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Whether the tween has run its full duration.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.started_at.is_some() && self.progress(now) >= 1.0
    }

    /// The eased property values at the given instant.
    ///
    /// Once progress reaches 1.0 this returns the end values exactly.
    pub fn sample(&self, now: Instant) -> Values {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to.clone();
        }
        self.from.lerp(&self.to, self.easing.apply(progress))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }
}
