//! The circular dot primitive and its attached effects.

use glam::Vec2;
use rustc_hash::FxHashMap;
use web_time::Duration;

use super::effect::{AnimationEffect, EffectKind};
use crate::geometry::{Color, Rect};

/// A filled circle. The corner radius is always half the diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    frame: Rect,
}

impl Circle {
    /// Circle of `diameter` at the origin.
    #[must_use]
    pub fn new(diameter: f32) -> Self {
        let d = diameter.max(0.0);
        Self {
            frame: Rect::new(Vec2::ZERO, Vec2::splat(d)),
        }
    }

    /// Bounding square.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Diameter.
    #[must_use]
    pub fn diameter(&self) -> f32 {
        self.frame.size.x
    }

    /// Corner radius that makes the square a circle.
    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.frame.size.x * 0.5
    }

    /// Move without resizing.
    pub fn set_origin(&mut self, origin: Vec2) {
        self.frame.origin = origin;
    }

    /// Resize around the current origin. Negative values collapse to zero.
    pub fn set_diameter(&mut self, diameter: f32) {
        self.frame.size = Vec2::splat(diameter.max(0.0));
    }
}

/// An effect together with the time it was attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachedEffect {
    /// The descriptor.
    pub effect: AnimationEffect,
    /// Clock time at which the effect began.
    pub attached_at: Duration,
}

impl AttachedEffect {
    /// Effect value at `now`. Times before the attach read as the start.
    #[must_use]
    pub fn sample(&self, now: Duration) -> f32 {
        self.effect.sample(now.saturating_sub(self.attached_at))
    }
}

/// What the host renderer draws for one dot on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotRenderState {
    /// Frame including the current bounce offset.
    pub frame: Rect,
    /// Corner radius for the circle.
    pub corner_radius: f32,
    /// Current opacity (1.0 when no fade is attached).
    pub opacity: f32,
    /// Fill color with the opacity folded into alpha.
    pub fill: Color,
}

/// One dot of the indicator.
#[derive(Debug, Clone)]
pub struct DotElement {
    shape: Circle,
    fill: Color,
    effects: FxHashMap<&'static str, AttachedEffect>,
}

impl DotElement {
    /// Dot of `diameter` filled with `fill`, no effects attached.
    #[must_use]
    pub fn new(diameter: f32, fill: Color) -> Self {
        Self {
            shape: Circle::new(diameter),
            fill,
            effects: FxHashMap::default(),
        }
    }

    /// Resting frame (no effect applied).
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.shape.frame()
    }

    /// The shape primitive.
    #[must_use]
    pub fn shape(&self) -> &Circle {
        &self.shape
    }

    /// Place and size the dot.
    pub fn set_frame(&mut self, origin: Vec2, diameter: f32) {
        self.shape.set_diameter(diameter);
        self.shape.set_origin(origin);
    }

    /// Fill color.
    #[must_use]
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Recolor in place; attached effects are untouched.
    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    /// Attach `effect` under its kind's key, replacing any previous one.
    pub fn attach(&mut self, effect: AnimationEffect, now: Duration) {
        let _ = self.effects.insert(
            effect.kind.key(),
            AttachedEffect {
                effect,
                attached_at: now,
            },
        );
    }

    /// Detach the effect of `kind`. Returns whether one was attached.
    pub fn detach(&mut self, kind: EffectKind) -> bool {
        self.effects.remove(kind.key()).is_some()
    }

    /// The attached effect of `kind`, if any.
    #[must_use]
    pub fn effect(&self, kind: EffectKind) -> Option<&AttachedEffect> {
        self.effects.get(kind.key())
    }

    /// Number of attached effects.
    #[must_use]
    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// Sample every attached effect at `now`.
    #[must_use]
    pub fn render_state(&self, now: Duration) -> DotRenderState {
        let offset = self
            .effect(EffectKind::Bounce)
            .map_or(0.0, |a| a.sample(now));
        let opacity = self
            .effect(EffectKind::Fade)
            .map_or(1.0, |a| a.sample(now))
            .clamp(0.0, 1.0);
        DotRenderState {
            frame: self.shape.frame().translated(Vec2::new(0.0, offset)),
            corner_radius: self.shape.corner_radius(),
            opacity,
            fill: self.fill.with_opacity(opacity),
        }
    }
}
