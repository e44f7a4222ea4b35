use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Dot row appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Dots", inline)]
#[serde(default)]
pub struct DotOptions {
    /// Number of dots in the row (at least 2).
    #[schemars(title = "Dot Count", range(min = 2, max = 12))]
    pub count: usize,
    /// RGBA fill.
    #[schemars(skip)]
    pub color: [f32; 4],
    /// Downward travel of the bounce, in points.
    #[schemars(title = "Bounce Offset", range(min = 0.0, max = 30.0), extend("step" = 0.5))]
    pub bounce_offset: f32,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            count: 3,
            color: [1.0, 1.0, 1.0, 1.0],
            bounce_offset: 7.5,
        }
    }
}
