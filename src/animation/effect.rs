//! Named, infinitely repeating, auto-reversing effect descriptors.

use std::fmt;

use web_time::Duration;

use crate::util::easing::EasingFunction;

/// The property an effect drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Vertical offset of the dot's position.
    Bounce,
    /// Opacity of the dot's fill.
    Fade,
}

impl EffectKind {
    /// Every kind, in attach order.
    pub const ALL: [Self; 2] = [Self::Bounce, Self::Fade];

    /// Key the effect is stored under on a dot. Attaching an effect with an
    /// existing key replaces the previous one.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bounce => "bounce",
            Self::Fade => "fade",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which effects a session attaches to each dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectSet {
    /// Attach the vertical bounce.
    pub bounce: bool,
    /// Attach the opacity fade.
    pub fade: bool,
}

impl EffectSet {
    /// Bounce only (the configurable N-dot indicator).
    pub const BOUNCE: Self = Self {
        bounce: true,
        fade: false,
    };
    /// Bounce and fade together (the fixed three-dot indicator).
    pub const BOUNCE_AND_FADE: Self = Self {
        bounce: true,
        fade: true,
    };
    /// Nothing attaches; a session still starts and stops normally.
    pub const NONE: Self = Self {
        bounce: false,
        fade: false,
    };

    /// Whether `kind` is enabled.
    #[must_use]
    pub const fn contains(self, kind: EffectKind) -> bool {
        match kind {
            EffectKind::Bounce => self.bounce,
            EffectKind::Fade => self.fade,
        }
    }

    /// Enabled kinds in attach order.
    pub fn iter(self) -> impl Iterator<Item = EffectKind> {
        EffectKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }

    /// True if no effect is enabled.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.bounce && !self.fade
    }
}

impl Default for EffectSet {
    fn default() -> Self {
        Self::BOUNCE
    }
}

/// Stateless description of a continuous transform.
///
/// The value travels from `from` to `to` over `duration`, then back over the
/// same duration, forever. One full cycle therefore lasts `2 × duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationEffect {
    /// Driven property.
    pub kind: EffectKind,
    /// Value at the start of each forward leg.
    pub from: f32,
    /// Value at the end of each forward leg.
    pub to: f32,
    /// Length of one leg.
    pub duration: Duration,
    /// Curve applied to each leg.
    pub easing: EasingFunction,
}

impl AnimationEffect {
    /// Vertical bounce moving the dot down by `offset` and back.
    #[must_use]
    pub fn bounce(offset: f32, duration: Duration) -> Self {
        Self {
            kind: EffectKind::Bounce,
            from: 0.0,
            to: offset,
            duration,
            easing: EasingFunction::Linear,
        }
    }

    /// Opacity fade between `from` and `to`.
    #[must_use]
    pub fn fade(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            kind: EffectKind::Fade,
            from,
            to,
            duration,
            easing: EasingFunction::Linear,
        }
    }

    /// Replace the per-leg curve.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Forward-leg progress in `[0, 1]` after `elapsed` since attach,
    /// folded so the reversed leg runs back down.
    #[must_use]
    pub fn leg_progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let phase = (elapsed.as_secs_f64() / self.duration.as_secs_f64()) % 2.0;
        let folded = if phase <= 1.0 { phase } else { 2.0 - phase };
        folded as f32
    }

    /// Effect value after `elapsed` since attach.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let t = self.easing.evaluate(self.leg_progress(elapsed));
        self.from + (self.to - self.from) * t
    }
}
