//! Crate-level error types.

use std::fmt;

/// Errors produced by the dotwave crate.
///
/// [`MissingDisplayPolicy`](Self::MissingDisplayPolicy) and
/// [`AvatarPositionUnresolved`](Self::AvatarPositionUnresolved) are caller
/// contract violations upstream of the cell. They are never retried.
#[derive(Debug)]
pub enum DotwaveError {
    /// The message list has no display policy to resolve bubble colors.
    MissingDisplayPolicy,
    /// The layout pass left the avatar on the `natural` side.
    AvatarPositionUnresolved,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for DotwaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDisplayPolicy => {
                write!(f, "message list has no display policy")
            }
            Self::AvatarPositionUnresolved => write!(
                f,
                "avatar horizontal position must be resolved before layout"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for DotwaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DotwaveError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
