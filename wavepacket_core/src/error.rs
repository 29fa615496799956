//! Error types for wave-packet operations
//!
//! Every failure in this crate is synchronous and local: an operation either
//! returns its full result or one of these errors. There is no retry path and
//! no partial output.

use std::fmt;

use crate::evaluate::Axis;

/// Result type alias for wave-packet operations
pub type PacketResult<T> = Result<T, PacketError>;

/// Error type covering construction, synthesis, framing and rendering
#[derive(Debug, Clone, PartialEq)]
pub enum PacketError {
    /// Frequency and amplitude arrays disagree in length
    ShapeMismatch { frequencies: usize, amplitudes: usize },

    /// Operation requires at least one spectral component
    EmptyPacket { operation: String },

    /// Evaluation request is missing its sweep array or fixed value
    MissingAxisValue { axis: Axis, missing: String },

    /// Animation step must be strictly positive
    NonPositiveStep { step: f64 },

    /// Spectral analysis needs at least two uniformly spaced samples
    InvalidSampling { samples: usize },

    /// A save was requested without a destination path
    MissingOutputPath,

    /// The plotting backend rejected a drawing operation
    Render { details: String },
}

impl fmt::Display for PacketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacketError::ShapeMismatch {
                frequencies,
                amplitudes,
            } => {
                write!(
                    f,
                    "Shape mismatch: {} frequencies but {} amplitudes; the arrays must be parallel",
                    frequencies, amplitudes
                )
            }
            PacketError::EmptyPacket { operation } => {
                write!(
                    f,
                    "Empty packet: '{}' requires at least one (frequency, amplitude) component",
                    operation
                )
            }
            PacketError::MissingAxisValue { axis, missing } => {
                write!(
                    f,
                    "Missing value for {:?}-axis evaluation: {} was not supplied",
                    axis, missing
                )
            }
            PacketError::NonPositiveStep { step } => {
                write!(f, "Invalid frame step {}: step must be > 0", step)
            }
            PacketError::InvalidSampling { samples } => {
                write!(
                    f,
                    "Invalid sampling: got {} time samples, spectral analysis needs at least 2",
                    samples
                )
            }
            PacketError::MissingOutputPath => {
                write!(f, "Missing output path: save was requested without a destination")
            }
            PacketError::Render { details } => {
                write!(f, "Render failed: {}", details)
            }
        }
    }
}

impl std::error::Error for PacketError {}

// Convenience constructors for common error patterns
impl PacketError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(frequencies: usize, amplitudes: usize) -> Self {
        PacketError::ShapeMismatch {
            frequencies,
            amplitudes,
        }
    }

    /// Create an empty packet error
    pub fn empty_packet(operation: impl Into<String>) -> Self {
        PacketError::EmptyPacket {
            operation: operation.into(),
        }
    }

    /// Create a missing axis value error
    pub fn missing_axis_value(axis: Axis, missing: impl Into<String>) -> Self {
        PacketError::MissingAxisValue {
            axis,
            missing: missing.into(),
        }
    }

    /// Create a non-positive step error
    pub fn non_positive_step(step: f64) -> Self {
        PacketError::NonPositiveStep { step }
    }

    /// Create an invalid sampling error
    pub fn invalid_sampling(samples: usize) -> Self {
        PacketError::InvalidSampling { samples }
    }

    /// Create a render error from any displayable backend failure
    pub fn render(details: impl Into<String>) -> Self {
        PacketError::Render {
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = PacketError::shape_mismatch(3, 2);
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
        assert!(msg.contains("parallel"));
    }

    #[test]
    fn test_empty_packet_display() {
        let err = PacketError::empty_packet("components");
        let msg = err.to_string();
        assert!(msg.contains("components"));
    }

    #[test]
    fn test_missing_axis_value_display() {
        let err = PacketError::missing_axis_value(Axis::Position, "fixed instant t");
        let msg = err.to_string();
        assert!(msg.contains("Position"));
        assert!(msg.contains("fixed instant t"));
    }

    #[test]
    fn test_invalid_sampling_display() {
        let err = PacketError::invalid_sampling(1);
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = PacketError::shape_mismatch(3, 2);
        let err2 = PacketError::shape_mismatch(3, 2);
        let err3 = PacketError::shape_mismatch(3, 1);

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PacketError>();
    }
}
