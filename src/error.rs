//! Errors raised when external box data crosses into the geometry core.

/// Which legacy box encoding a rejected value was detected as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// `{x, y, width, height}`.
    Flat,
    /// `{topLeft, bottomRight, width, height}`.
    Nested,
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Nested => write!(f, "nested"),
        }
    }
}

/// Error returned by [`crate::bbox::normalize_for_boundary`].
///
/// This is the only error the geometry functions produce. Degenerate shapes
/// and out-of-range coordinates are not errors.
#[derive(Debug, thiserror::Error)]
pub enum InvalidShapeError {
    /// The value has neither a `topLeft` field nor both `x` and `y` fields.
    #[error("invalid shape: value matches neither the flat nor the nested box encoding")]
    UnrecognizedEncoding,
    /// The encoding was recognized but a present field is not a number.
    #[error("invalid shape: malformed {encoding} box: {source}")]
    Malformed {
        encoding: Encoding,
        #[source]
        source: serde_json::Error,
    },
}
