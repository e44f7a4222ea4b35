//! The list cell that hosts a typing indicator inside a message bubble.
//!
//! The cell re-derives its bubble color and placement on every
//! configuration of a (possibly recycled) row. It never decides on its own
//! when the dots move; the host forwards typing signals to the animator.

pub mod display;
pub mod placement;

use glam::Vec2;

pub use display::{DisplayPolicy, ItemPosition, MessageList, SolidColor};
pub use placement::{
    container_frame, container_origin, indicator_frame, AvatarHorizontal,
    AvatarPosition, AvatarVertical, LayoutAttributes,
};

use crate::animation::DotWaveAnimator;
use crate::error::DotwaveError;
use crate::geometry::{Color, Rect};

/// Shape drawn behind the message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BubbleStyle {
    /// No background shape.
    #[default]
    None,
    /// Rounded bubble.
    Bubble,
}

/// The styled container the indicator is drawn inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageContainer {
    frame: Rect,
    background_color: Color,
    style: BubbleStyle,
}

impl MessageContainer {
    /// Frame in cell coordinates.
    #[must_use]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Bubble fill.
    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Bubble shape.
    #[must_use]
    pub fn style(&self) -> BubbleStyle {
        self.style
    }

    /// Content is always clipped to the container.
    #[must_use]
    pub fn clips_to_bounds(&self) -> bool {
        true
    }
}

impl Default for MessageContainer {
    fn default() -> Self {
        Self {
            frame: Rect::ZERO,
            background_color: Color::CLEAR,
            style: BubbleStyle::None,
        }
    }
}

/// A list cell showing a typing indicator.
#[derive(Debug)]
pub struct TypingIndicatorCell {
    container: MessageContainer,
    indicator: DotWaveAnimator,
}

impl TypingIndicatorCell {
    /// Cell with a classic indicator on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_indicator(DotWaveAnimator::new(Rect::ZERO))
    }

    /// Cell hosting a caller-built indicator.
    #[must_use]
    pub fn with_indicator(indicator: DotWaveAnimator) -> Self {
        Self {
            container: MessageContainer::default(),
            indicator,
        }
    }

    /// The bubble.
    #[must_use]
    pub fn container(&self) -> &MessageContainer {
        &self.container
    }

    /// The indicator.
    #[must_use]
    pub fn indicator(&self) -> &DotWaveAnimator {
        &self.indicator
    }

    /// The indicator, for start/stop and tuning by the host.
    pub fn indicator_mut(&mut self) -> &mut DotWaveAnimator {
        &mut self.indicator
    }

    /// Color the bubble for `message` through the list's display policy.
    pub fn configure<M>(
        &mut self,
        message: &M,
        position: ItemPosition,
        list: &MessageList<M>,
    ) -> Result<(), DotwaveError> {
        self.container.background_color = list.background_color(message, position)?;
        self.container.style = BubbleStyle::Bubble;
        Ok(())
    }

    /// Apply a layout pass: place the container, then fill it with the
    /// indicator. The container must be placed first since the indicator
    /// frame is derived from it.
    pub fn apply(&mut self, attributes: &LayoutAttributes) -> Result<(), DotwaveError> {
        self.container.frame = container_frame(attributes)?;
        self.indicator.set_frame(indicator_frame(self.container.frame));
        Ok(())
    }

    /// Whether a tap at `point` belongs to the cell content. The indicator
    /// has no interactive content.
    #[must_use]
    pub fn can_handle_touch(&self, _point: Vec2) -> bool {
        false
    }

    /// Forward a "partner is typing" signal.
    pub fn start_typing(&mut self) {
        self.indicator.start_animating();
    }

    /// Forward a "partner stopped typing" signal.
    pub fn stop_typing(&mut self) {
        self.indicator.stop_animating();
    }
}

impl Default for TypingIndicatorCell {
    fn default() -> Self {
        Self::new()
    }
}
