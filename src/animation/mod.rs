//! Staggered dot-wave animation.
//!
//! A [`DotWaveAnimator`] owns a row of [`DotElement`]s and attaches
//! [`AnimationEffect`]s to them one dot at a time, creating the wave.

pub mod animator;
pub mod dot;
pub mod effect;
pub mod schedule;

pub use animator::{AnimatorConfig, DotWaveAnimator, FadeRange};
pub use dot::{AttachedEffect, Circle, DotElement, DotRenderState};
pub use effect::{AnimationEffect, EffectKind, EffectSet};
pub use schedule::{
    AttachSchedule, PendingAttach, SessionId, StaggerPolicy, PULSE_DOT_DELAY,
};
