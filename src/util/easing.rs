//! Easing curves applied to each leg of an auto-reversing effect.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]` with `f(0) = 0` and `f(1) = 1`,
//! so the forward and reversed legs of an effect meet without a jump.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for effect curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Constant speed. Matches a basic layer animation with no timing curve.
    #[default]
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Smoothstep: slow at both ends, so the dot lingers at the top and
    /// bottom of each bounce.
    EaseInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Evaluate the curve at `t`. Input is clamped to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}
