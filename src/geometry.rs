//! Frame geometry and color primitives shared by the animator and the cell.
//!
//! Coordinates are y-down: `origin` is the top-left corner of a frame and a
//! positive y offset moves content toward the bottom edge.

use glam::Vec2;

/// Axis-aligned rectangle in parent coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    /// Rectangle from origin and size.
    #[must_use]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle from scalar components.
    #[must_use]
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Right edge.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.x
    }

    /// Bottom edge.
    #[must_use]
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.y
    }

    /// Same size with the origin moved to zero: the frame as seen from inside.
    #[must_use]
    pub fn bounds(&self) -> Self {
        Self {
            origin: Vec2::ZERO,
            size: self.size,
        }
    }

    /// True if either dimension is zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.size.x == 0.0 || self.size.y == 0.0
    }

    /// Copy translated by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            origin: self.origin + offset,
            size: self.size,
        }
    }
}

/// Four-sided padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    /// Top inset.
    pub top: f32,
    /// Left inset.
    pub left: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Right inset.
    pub right: f32,
}

impl EdgeInsets {
    /// No padding.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Insets in top, left, bottom, right order.
    #[must_use]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

/// Straight-alpha RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Opaque white (default dot fill).
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    /// Fully transparent.
    pub const CLEAR: Self = Self([0.0, 0.0, 0.0, 0.0]);
    /// Neutral light gray used for incoming bubbles.
    pub const LIGHT_GRAY: Self = Self([0.902, 0.902, 0.922, 1.0]);

    /// Opaque color from RGB.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }

    /// Alpha component.
    #[must_use]
    pub fn alpha(self) -> f32 {
        self.0[3]
    }

    /// Copy with alpha multiplied by `opacity` (clamped to `[0, 1]`).
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let [r, g, b, a] = self.0;
        Self([r, g, b, a * opacity.clamp(0.0, 1.0)])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from(rgba: [f32; 4]) -> Self {
        Self(rgba)
    }
}
