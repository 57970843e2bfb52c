//! Easing curves for tween progress.
//!
//! Each curve maps a normalized progress value in `[0.0, 1.0]` to an eased
//! progress value. `Out` curves start fast and decelerate (pop-out, slide-in
//! with braking), `In` curves start slow and accelerate (escape, fade-away).
//! Within each family the order from gentle to aggressive is Quadratic,
//! Cubic, Quartic, Circular, Quintic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Result, TweenError};

/// Named easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    QuadraticOut,
    /// The default curve.
    #[default]
    CubicOut,
    QuarticOut,
    CircularOut,
    QuinticOut,
    QuadraticIn,
    CubicIn,
    QuarticIn,
    CircularIn,
    QuinticIn,
}

impl Easing {
    /// Every supported curve, in table order.
    pub const ALL: [Easing; 10] = [
        Easing::QuadraticOut,
        Easing::CubicOut,
        Easing::QuarticOut,
        Easing::CircularOut,
        Easing::QuinticOut,
        Easing::QuadraticIn,
        Easing::CubicIn,
        Easing::QuarticIn,
        Easing::CircularIn,
        Easing::QuinticIn,
    ];

    /// Apply the curve to a normalized time value (0.0 to 1.0).
    ///
    /// Input is clamped to `[0.0, 1.0]`; every curve maps 0.0 to exactly 0.0
    /// and 1.0 to exactly 1.0 and is monotonic in between.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::QuadraticOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::QuarticOut => 1.0 - (1.0 - t).powi(4),
            Easing::CircularOut => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Easing::QuinticOut => 1.0 - (1.0 - t).powi(5),
            Easing::QuadraticIn => t * t,
            Easing::CubicIn => t * t * t,
            Easing::QuarticIn => t.powi(4),
            Easing::CircularIn => 1.0 - (1.0 - t * t).sqrt(),
            Easing::QuinticIn => t.powi(5),
        }
    }

    /// The curve's table name.
    pub fn name(&self) -> &'static str {
        match self {
            Easing::QuadraticOut => "QuadraticOut",
            Easing::CubicOut => "CubicOut",
            Easing::QuarticOut => "QuarticOut",
            Easing::CircularOut => "CircularOut",
            Easing::QuinticOut => "QuinticOut",
            Easing::QuadraticIn => "QuadraticIn",
            Easing::CubicIn => "CubicIn",
            Easing::QuarticIn => "QuarticIn",
            Easing::CircularIn => "CircularIn",
            Easing::QuinticIn => "QuinticIn",
        }
    }

    /// Look up a curve by its table name.
    pub fn from_name(name: &str) -> Option<Easing> {
        Easing::ALL.iter().copied().find(|e| e.name() == name)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self> {
        Easing::from_name(s).ok_or_else(|| TweenError::UnknownEasing(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing} at 0.0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing} at 1.0");
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in Easing::ALL {
            let mut previous = easing.apply(0.0);
            for i in 1..=100 {
                let current = easing.apply(i as f64 / 100.0);
                assert!(current >= previous, "{easing} decreased at step {i}");
                previous = current;
            }
        }
    }

    #[test]
    fn test_out_leads_and_in_trails_linear() {
        // Out curves cover more than half the distance at the midpoint,
        // In curves less.
        for easing in [
            Easing::QuadraticOut,
            Easing::CubicOut,
            Easing::QuarticOut,
            Easing::CircularOut,
            Easing::QuinticOut,
        ] {
            assert!(easing.apply(0.5) > 0.5, "{easing} at 0.5");
        }
        for easing in [
            Easing::QuadraticIn,
            Easing::CubicIn,
            Easing::QuarticIn,
            Easing::CircularIn,
            Easing::QuinticIn,
        ] {
            assert!(easing.apply(0.5) < 0.5, "{easing} at 0.5");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::CubicOut.apply(-1.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(2.0), 1.0);
    }

    #[test]
    fn test_default_is_cubic_out() {
        assert_eq!(Easing::default(), Easing::CubicOut);
    }

    #[test]
    fn test_name_round_trip() {
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>().unwrap(), easing);
        }
        assert!(matches!(
            "Bounce".parse::<Easing>(),
            Err(TweenError::UnknownEasing(_))
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Easing::QuinticIn).unwrap();
        assert_eq!(json, "\"QuinticIn\"");
        let parsed: Easing = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Easing::QuinticIn);
    }
}
