//! Error types for parabolic_aim.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AimError {
    #[error("no motion: origin and target need no launch velocity")]
    NoMotion,

    #[error("no finite launch velocity (horizontal={horizontal}, vertical={vertical})")]
    NonFinite { horizontal: f32, vertical: f32 },

    #[error("invalid {label}: '{value}', expected a number")]
    InvalidNumber { label: &'static str, value: String },

    #[error("{0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("plot error: {0}")]
    Plot(String),
}

impl AimError {
    /// Whether this error means the solver found no launch velocity, as
    /// opposed to a problem with input or output handling.
    pub fn is_unsolvable(&self) -> bool {
        matches!(self, Self::NoMotion | Self::NonFinite { .. })
    }
}

pub type Result<T> = std::result::Result<T, AimError>;

#[cfg(test)]
mod tests {
    use super::AimError;

    #[test]
    fn solver_failures_are_unsolvable() {
        assert!(AimError::NoMotion.is_unsolvable());
        assert!(
            AimError::NonFinite {
                horizontal: f32::NAN,
                vertical: 0.0
            }
            .is_unsolvable()
        );
        assert!(!AimError::Plot("backend".to_string()).is_unsolvable());
    }

    #[test]
    fn invalid_number_names_the_field() {
        let err = AimError::InvalidNumber {
            label: "target_x",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid target_x: 'abc', expected a number");
    }
}
