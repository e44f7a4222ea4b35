//! Placement of the message container from host layout attributes.
//!
//! The host list computes sizes; this module only turns them into an origin.
//! Attributes are read, never written.

use glam::Vec2;

use crate::error::DotwaveError;
use crate::geometry::{EdgeInsets, Rect};

/// Vertical anchor of the avatar relative to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarVertical {
    /// Aligned with the top of the cell.
    CellTop,
    /// Aligned with the top of the message container.
    MessageTop,
    /// Vertically centered on the message container.
    MessageCenter,
    /// Aligned with the bottom of the message container.
    #[default]
    MessageBottom,
    /// Aligned with the bottom of the cell.
    CellBottom,
}

/// Side of the cell the avatar (and therefore the bubble) sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarHorizontal {
    /// Leading edge (incoming messages).
    CellLeading,
    /// Trailing edge (outgoing messages).
    CellTrailing,
    /// Not yet resolved to a side. Placement rejects this.
    #[default]
    Natural,
}

/// Avatar anchor on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AvatarPosition {
    /// Side of the cell.
    pub horizontal: AvatarHorizontal,
    /// Vertical anchor.
    pub vertical: AvatarVertical,
}

impl AvatarPosition {
    /// Position from both anchors.
    #[must_use]
    pub const fn new(horizontal: AvatarHorizontal, vertical: AvatarVertical) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Per-cell geometry produced by the host's layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutAttributes {
    /// Avatar anchor.
    pub avatar_position: AvatarPosition,
    /// Cell frame; only its size matters for placement.
    pub frame: Rect,
    /// Size of the message container.
    pub message_container_size: Vec2,
    /// Padding around the message container.
    pub message_container_padding: EdgeInsets,
    /// Size of the label above the whole cell content.
    pub cell_top_label_size: Vec2,
    /// Size of the label directly above the message.
    pub message_top_label_size: Vec2,
    /// Size of the label directly below the message.
    pub message_bottom_label_size: Vec2,
}

/// Top-left corner of the message container inside the cell.
///
/// Bottom-anchored avatars pin the container above the bottom label; every
/// other anchor stacks it below the top labels.
pub fn container_origin(attributes: &LayoutAttributes) -> Result<Vec2, DotwaveError> {
    let padding = attributes.message_container_padding;
    let container = attributes.message_container_size;

    let y = match attributes.avatar_position.vertical {
        AvatarVertical::MessageBottom => {
            attributes.frame.height()
                - padding.bottom
                - attributes.message_bottom_label_size.y
                - container.y
                - padding.top
        }
        _ => {
            attributes.cell_top_label_size.y
                + attributes.message_top_label_size.y
                + padding.top
        }
    };

    let x = match attributes.avatar_position.horizontal {
        AvatarHorizontal::CellLeading => padding.left,
        AvatarHorizontal::CellTrailing => {
            attributes.frame.width() - container.x - padding.right
        }
        AvatarHorizontal::Natural => {
            return Err(DotwaveError::AvatarPositionUnresolved)
        }
    };

    Ok(Vec2::new(x, y))
}

/// Frame of the message container: the computed origin with the container
/// size taken verbatim from the attributes.
pub fn container_frame(attributes: &LayoutAttributes) -> Result<Rect, DotwaveError> {
    let origin = container_origin(attributes)?;
    Ok(Rect::new(origin, attributes.message_container_size))
}

/// Frame of the indicator inside its container: the full container bounds.
#[must_use]
pub fn indicator_frame(container: Rect) -> Rect {
    container.bounds()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(position: AvatarPosition) -> LayoutAttributes {
        LayoutAttributes {
            avatar_position: position,
            frame: Rect::from_xywh(0.0, 0.0, 300.0, 100.0),
            message_container_size: Vec2::new(200.0, 40.0),
            message_container_padding: EdgeInsets::new(5.0, 12.0, 10.0, 20.0),
            cell_top_label_size: Vec2::new(300.0, 8.0),
            message_top_label_size: Vec2::new(300.0, 6.0),
            message_bottom_label_size: Vec2::new(300.0, 15.0),
        }
    }

    #[test]
    fn bottom_anchored_container_sits_above_bottom_label() {
        let attrs = attributes(AvatarPosition::new(
            AvatarHorizontal::CellLeading,
            AvatarVertical::MessageBottom,
        ));
        let origin = container_origin(&attrs).unwrap();
        assert_eq!(origin.y, 100.0 - 10.0 - 15.0 - 40.0 - 5.0);
        assert_eq!(origin.y, 30.0);
    }

    #[test]
    fn other_anchors_stack_below_top_labels() {
        for vertical in [
            AvatarVertical::CellTop,
            AvatarVertical::MessageTop,
            AvatarVertical::MessageCenter,
            AvatarVertical::CellBottom,
        ] {
            let attrs = attributes(AvatarPosition::new(
                AvatarHorizontal::CellLeading,
                vertical,
            ));
            assert_eq!(container_origin(&attrs).unwrap().y, 8.0 + 6.0 + 5.0);
        }
    }

    #[test]
    fn leading_uses_left_padding() {
        let attrs = attributes(AvatarPosition::new(
            AvatarHorizontal::CellLeading,
            AvatarVertical::MessageBottom,
        ));
        assert_eq!(container_origin(&attrs).unwrap().x, 12.0);
    }

    #[test]
    fn trailing_hugs_right_edge() {
        let attrs = attributes(AvatarPosition::new(
            AvatarHorizontal::CellTrailing,
            AvatarVertical::MessageBottom,
        ));
        let frame = container_frame(&attrs).unwrap();
        assert_eq!(frame.origin, Vec2::new(80.0, 30.0));
        assert_eq!(frame.size, Vec2::new(200.0, 40.0));
    }

    #[test]
    fn unresolved_side_is_rejected() {
        let attrs = attributes(AvatarPosition::new(
            AvatarHorizontal::Natural,
            AvatarVertical::MessageBottom,
        ));
        assert!(matches!(
            container_frame(&attrs),
            Err(DotwaveError::AvatarPositionUnresolved)
        ));
    }

    #[test]
    fn indicator_fills_container_bounds() {
        let container = Rect::from_xywh(80.0, 30.0, 200.0, 40.0);
        assert_eq!(
            indicator_frame(container),
            Rect::from_xywh(0.0, 0.0, 200.0, 40.0)
        );
    }
}
