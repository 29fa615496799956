//! Dispersion relations mapping frequency to wavenumber.
//!
//! A dispersion relation encodes the propagation physics of the medium: given
//! the packet's frequencies it produces the wavenumber of every component.
//! The named variants carry their scalar parameters bound at construction
//! time, so callers only ever pass the frequency array.

use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

use ndarray::{Array1, ArrayView1};

/// Stored function object for caller-supplied dispersion physics.
///
/// Must be a pure, deterministic, total function over the supported frequency
/// domain, returning one wavenumber per input frequency.
pub type DispersionFn = Arc<dyn Fn(ArrayView1<f64>) -> Array1<f64> + Send + Sync>;

/// Closed set of dispersion relations, with ω = 2πf.
#[derive(Clone)]
pub enum Dispersion {
    /// ω = √(ck²), so k = ω/√c (non-dispersive medium, c is the squared phase velocity)
    Linear { c: f64 },
    /// ω = √(ck), so k = ω²/c
    Quadratic { c: f64 },
    /// ω = √(ck³), so k = ω^(2/3)/c^(1/3)
    Cubic { c: f64 },
    /// ω = √(b + ck²), so k = √(|ω² − b|/c); b is the frequency gap
    Gapped { b: f64, c: f64 },
    /// Caller-supplied relation with its parameters already captured
    Custom(DispersionFn),
}

impl Dispersion {
    /// Map the full frequency array to wavenumbers.
    ///
    /// Output length always equals input length for the named variants; a
    /// `Custom` relation is trusted to honor the same contract.
    pub fn wavenumbers(&self, frequencies: ArrayView1<f64>) -> Array1<f64> {
        match self {
            Dispersion::Linear { c } => frequencies.mapv(|f| 2.0 * PI * f / c.sqrt()),
            Dispersion::Quadratic { c } => frequencies.mapv(|f| (2.0 * PI * f).powi(2) / c),
            Dispersion::Cubic { c } => {
                frequencies.mapv(|f| (2.0 * PI * f).powf(2.0 / 3.0) / c.cbrt())
            }
            Dispersion::Gapped { b, c } => {
                frequencies.mapv(|f| (((2.0 * PI * f).powi(2) - b).abs() / c).sqrt())
            }
            Dispersion::Custom(relation) => relation(frequencies),
        }
    }
}

impl fmt::Debug for Dispersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispersion::Linear { c } => f.debug_struct("Linear").field("c", c).finish(),
            Dispersion::Quadratic { c } => f.debug_struct("Quadratic").field("c", c).finish(),
            Dispersion::Cubic { c } => f.debug_struct("Cubic").field("c", c).finish(),
            Dispersion::Gapped { b, c } => {
                f.debug_struct("Gapped").field("b", b).field("c", c).finish()
            }
            Dispersion::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
