//! Shared utilities: time sources and easing curves.

pub mod clock;
pub mod easing;
