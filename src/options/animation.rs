use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// How the per-dot phase delay is chosen.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum StaggerMode {
    /// Spread one bounce leg across the row.
    #[default]
    DurationFraction,
    /// Use `fixed_delay_ms` between every pair of dots.
    Fixed,
}

/// Effect timing and selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Length of one bounce (and fade) leg in milliseconds.
    #[schemars(title = "Bounce Duration", range(min = 50, max = 2000))]
    pub bounce_duration_ms: u64,
    /// Attach the vertical bounce.
    #[schemars(title = "Bounce")]
    pub bounce: bool,
    /// Attach the opacity fade.
    #[schemars(title = "Fade")]
    pub fade: bool,
    /// Opacity at the start of each fade leg.
    #[schemars(title = "Fade From", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub fade_from: f32,
    /// Opacity at the end of each fade leg.
    #[schemars(title = "Fade To", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub fade_to: f32,
    /// Per-dot delay policy.
    #[schemars(title = "Stagger")]
    pub stagger: StaggerMode,
    /// Delay used by [`StaggerMode::Fixed`], in milliseconds.
    #[schemars(title = "Fixed Delay", range(min = 0, max = 2000))]
    pub fixed_delay_ms: u64,
    /// Curve applied to each leg.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            bounce_duration_ms: 350,
            bounce: true,
            fade: false,
            fade_from: 1.0,
            fade_to: 0.5,
            stagger: StaggerMode::DurationFraction,
            fixed_delay_ms: 330,
            easing: EasingFunction::Linear,
        }
    }
}
