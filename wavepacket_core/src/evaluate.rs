//! Plot-data evaluation requests.
//!
//! [`WavePacket::evaluate`] turns an axis choice plus sweep/fixed values into
//! a synthesized sample sequence with display labels. It returns data only;
//! rendering belongs to a collaborator (see [`crate::plot`]).

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::{PacketError, PacketResult};
use crate::packet::WavePacket;

/// Axis a waveform is swept along. Invalid axes are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Sweep over positions at a fixed instant
    Position,
    /// Sweep over instants at a fixed position
    Time,
}

impl Axis {
    /// Axis title for the sweep dimension.
    pub fn label(&self) -> &'static str {
        match self {
            Axis::Position => "x (m)",
            Axis::Time => "t (s)",
        }
    }
}

/// An evaluation request: which axis to sweep, the sweep samples, and the
/// fixed complementary scalar.
///
/// The optional fields mirror the loose calling convention this engine
/// replaces; [`WavePacket::evaluate`] validates them and fails with
/// `MissingAxisValue` instead of silently doing nothing.
#[derive(Debug, Clone)]
pub struct EvalRequest {
    pub axis: Axis,
    pub sweep: Option<Array1<f64>>,
    pub fixed: Option<f64>,
}

impl EvalRequest {
    /// Request a position sweep at a fixed instant.
    pub fn along_position(positions: Array1<f64>, fixed_time: f64) -> Self {
        Self {
            axis: Axis::Position,
            sweep: Some(positions),
            fixed: Some(fixed_time),
        }
    }

    /// Request a time sweep at a fixed position.
    pub fn along_time(times: Array1<f64>, fixed_position: f64) -> Self {
        Self {
            axis: Axis::Time,
            sweep: Some(times),
            fixed: Some(fixed_position),
        }
    }
}

/// Synthesized samples plus the labels a renderer needs.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Amplitude samples, parallel to the request's sweep array
    pub samples: Array1<f64>,
    /// Sweep-axis title ("x (m)" or "t (s)")
    pub axis_label: &'static str,
    /// Fixed-value annotation, e.g. "Wave packet at t = 0.5 s"
    pub annotation: String,
}

impl WavePacket {
    /// Synthesize the waveform described by `request`.
    ///
    /// Dispatches to the position or time synthesis and attaches display
    /// labels. No rendering happens here.
    ///
    /// # Errors
    /// * `MissingAxisValue` when the sweep array or fixed value is absent.
    /// * `EmptyPacket` when the packet has no components.
    pub fn evaluate(&self, request: &EvalRequest) -> PacketResult<Evaluation> {
        let (sweep_name, fixed_name) = match request.axis {
            Axis::Position => ("position samples", "fixed instant t"),
            Axis::Time => ("time samples", "fixed position x"),
        };
        let sweep = request
            .sweep
            .as_ref()
            .ok_or_else(|| PacketError::missing_axis_value(request.axis, sweep_name))?;
        let fixed = request
            .fixed
            .ok_or_else(|| PacketError::missing_axis_value(request.axis, fixed_name))?;

        let (samples, annotation) = match request.axis {
            Axis::Position => (
                self.synthesize_along_position(sweep.view(), fixed)?,
                format!("Wave packet at t = {} s", fixed),
            ),
            Axis::Time => (
                self.synthesize_along_time(sweep.view(), fixed)?,
                format!("Wave packet at x = {} m", fixed),
            ),
        };
        Ok(Evaluation {
            samples,
            axis_label: request.axis.label(),
            annotation,
        })
    }
}
