use crate::units::FloatValue;
use thiserror::Error;

/// Error type for invalid operations.
///
/// Out-of-range numeric inputs are deliberately absent: they are clamped at the
/// calculator boundary and never surface as errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorridorError {
    #[error("{0}")]
    Error(String),
    #[error("Invalid {kind}: {value:?}")]
    InvalidParameter { kind: String, value: String },
    #[error("Model undefined for these inputs: total energy penalty of {total_penalty_pct}% leaves no delivered energy")]
    DegenerateModel { total_penalty_pct: FloatValue },
    #[error("Heatmap axis {axis} needs at least 2 steps, got {steps}")]
    InvalidAxis { axis: String, steps: usize },
    #[error("Could not read model configuration: {0}")]
    Config(String),
}

impl CorridorError {
    /// Shorthand for an [`CorridorError::InvalidParameter`] error.
    pub fn invalid(kind: &str, value: impl Into<String>) -> Self {
        CorridorError::InvalidParameter {
            kind: kind.to_string(),
            value: value.into(),
        }
    }

    /// True when the error means "no number exists for these inputs" rather than bad input.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, CorridorError::DegenerateModel { .. })
    }
}

/// Convenience type for `Result<T, CorridorError>`.
pub type CorridorResult<T> = Result<T, CorridorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message_names_the_kind() {
        let err = CorridorError::invalid("boundary", "WTT");
        assert_eq!(err.to_string(), "Invalid boundary: \"WTT\"");
        assert!(!err.is_degenerate());
    }

    #[test]
    fn degenerate_model_is_flagged() {
        let err = CorridorError::DegenerateModel {
            total_penalty_pct: 104.0,
        };
        assert!(err.is_degenerate());
        assert!(err.to_string().contains("104"));
    }
}
