//! Indicator options with TOML preset support.
//!
//! Every animator parameter can be stored in a TOML preset. All sections use
//! `#[serde(default)]`, so a partial file (e.g. only `[animation]`) fills the
//! rest from defaults.
//!
//! Durations are stored in whole milliseconds; converting a config rounds
//! to the nearest one.

mod animation;
mod dots;

use std::path::Path;

pub use animation::{AnimationOptions, StaggerMode};
pub use dots::DotOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::{AnimatorConfig, EffectSet, FadeRange, StaggerPolicy};
use crate::error::DotwaveError;
use crate::geometry::Color;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct IndicatorOptions {
    /// Dot count, color and bounce travel.
    pub dots: DotOptions,
    /// Timing and effect selection.
    pub animation: AnimationOptions,
}

impl IndicatorOptions {
    /// Options matching the three-dot bounce-and-fade indicator.
    #[must_use]
    pub fn pulse() -> Self {
        Self::from(&AnimatorConfig::pulse())
    }

    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(IndicatorOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, DotwaveError> {
        let content = std::fs::read_to_string(path).map_err(DotwaveError::Io)?;
        toml::from_str(&content)
            .map_err(|e| DotwaveError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), DotwaveError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DotwaveError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DotwaveError::Io)?;
        }
        std::fs::write(path, content).map_err(DotwaveError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

impl From<&IndicatorOptions> for AnimatorConfig {
    fn from(options: &IndicatorOptions) -> Self {
        let anim = &options.animation;
        let stagger = match anim.stagger {
            StaggerMode::DurationFraction => StaggerPolicy::DurationFraction,
            StaggerMode::Fixed => {
                StaggerPolicy::Fixed(Duration::from_millis(anim.fixed_delay_ms))
            }
        };
        Self {
            dot_count: options.dots.count.max(2),
            bounce_offset: options.dots.bounce_offset,
            bounce_duration: Duration::from_millis(anim.bounce_duration_ms),
            effects: EffectSet {
                bounce: anim.bounce,
                fade: anim.fade,
            },
            fade: FadeRange {
                from: anim.fade_from,
                to: anim.fade_to,
            },
            stagger,
            easing: anim.easing,
            dot_color: Color(options.dots.color),
        }
    }
}

impl From<&AnimatorConfig> for IndicatorOptions {
    fn from(config: &AnimatorConfig) -> Self {
        let (stagger, fixed_delay_ms) = match config.stagger {
            StaggerPolicy::DurationFraction => (
                StaggerMode::DurationFraction,
                AnimationOptions::default().fixed_delay_ms,
            ),
            StaggerPolicy::Fixed(delay) => {
                (StaggerMode::Fixed, round_millis(delay))
            }
        };
        Self {
            dots: DotOptions {
                count: config.dot_count,
                color: config.dot_color.0,
                bounce_offset: config.bounce_offset,
            },
            animation: AnimationOptions {
                bounce_duration_ms: round_millis(config.bounce_duration),
                bounce: config.effects.bounce,
                fade: config.effects.fade,
                fade_from: config.fade.from,
                fade_to: config.fade.to,
                stagger,
                fixed_delay_ms,
                easing: config.easing,
            },
        }
    }
}

fn round_millis(d: Duration) -> u64 {
    ((d.as_nanos() + 500_000) / 1_000_000) as u64
}
