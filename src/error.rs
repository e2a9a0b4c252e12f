//! Error type shared by the automaton, configuration and FFI layers.

use thiserror::Error;

/// Errors raised by the rock-paper-scissors automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A cell read during a step holds a code outside the three live states.
    #[error("cell ({x}, {y}) holds invalid state code {code}")]
    InvalidState { x: i16, y: i16, code: u8 },

    /// A raw code offered at a boundary is not a live state.
    #[error("invalid cell code {0}")]
    InvalidCell(u8),

    /// A configuration value was rejected before any grid was built.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Source and destination buffers of a step differ in size.
    #[error("dimension mismatch: source {source_dim}, destination {target_dim}")]
    DimensionMismatch { source_dim: i16, target_dim: i16 },

    /// The simulation hit an invalid state earlier and must be reset.
    #[error("simulation halted after an invalid state; reset required")]
    Halted,

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for AutomatonError {
    fn from(err: toml::de::Error) -> Self {
        AutomatonError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AutomatonError>;
