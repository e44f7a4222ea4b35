//! The display-policy collaborator that colors message bubbles.

use crate::error::DotwaveError;
use crate::geometry::Color;

/// Position of an item in the host list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ItemPosition {
    /// Section index.
    pub section: usize,
    /// Item index within the section.
    pub item: usize,
}

impl ItemPosition {
    /// Position from section and item.
    #[must_use]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// Resolves presentation details for messages of type `M`.
pub trait DisplayPolicy<M> {
    /// Bubble background for `message` at `position` in `list`.
    fn background_color(
        &self,
        message: &M,
        position: ItemPosition,
        list: &MessageList<M>,
    ) -> Color;
}

/// One color for every bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor(pub Color);

impl<M> DisplayPolicy<M> for SolidColor {
    fn background_color(&self, _: &M, _: ItemPosition, _: &MessageList<M>) -> Color {
        self.0
    }
}

/// The host list context a cell is configured within.
pub struct MessageList<M> {
    display_policy: Option<Box<dyn DisplayPolicy<M>>>,
}

impl<M> MessageList<M> {
    /// List with no display policy. Configuring a cell against it fails.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display_policy: None,
        }
    }

    /// List whose bubbles are colored by `policy`.
    #[must_use]
    pub fn with_display_policy(policy: impl DisplayPolicy<M> + 'static) -> Self {
        Self {
            display_policy: Some(Box::new(policy)),
        }
    }

    /// Install or replace the display policy.
    pub fn set_display_policy(&mut self, policy: impl DisplayPolicy<M> + 'static) {
        self.display_policy = Some(Box::new(policy));
    }

    /// The display policy; its absence is a configuration error.
    pub fn display_policy(&self) -> Result<&dyn DisplayPolicy<M>, DotwaveError> {
        self.display_policy
            .as_deref()
            .ok_or(DotwaveError::MissingDisplayPolicy)
    }

    /// Resolve the bubble background for `message` at `position`.
    pub fn background_color(
        &self,
        message: &M,
        position: ItemPosition,
    ) -> Result<Color, DotwaveError> {
        Ok(self
            .display_policy()?
            .background_color(message, position, self))
    }
}

impl<M> Default for MessageList<M> {
    fn default() -> Self {
        Self::new()
    }
}
