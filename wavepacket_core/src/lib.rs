//! # Wavepacket Core
//!
//! A classical wave-packet synthesis and spectral-analysis engine. A packet
//! is a superposition of cosine components, each a (frequency, amplitude)
//! pair, tied together by a dispersion relation mapping frequency to
//! wavenumber. The engine samples the packet along position or time, sequences
//! animation frames, and computes discrete power spectra.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::{array, Array1};
//! use wavepacket_core::{Dispersion, WavePacket};
//!
//! let packet = WavePacket::new(
//!     array![1.0, 2.0],
//!     array![0.5, 0.25],
//!     Dispersion::Linear { c: 1.0 },
//! )
//! .unwrap();
//!
//! let positions = Array1::linspace(-5.0, 5.0, 101);
//! let waveform = packet.synthesize_along_position(positions.view(), 0.0).unwrap();
//! assert_eq!(waveform.len(), 101);
//!
//! // At x = 0, t = 0 every cosine is 1, so the center equals the amplitude sum
//! assert!((waveform[50] - 0.75).abs() < 1e-12);
//! ```
//!
//! ## Core Modules
//!
//! - [`packet`] - Packet construction, component listing and synthesis
//! - [`dispersion`] - Dispersion relations with bound parameters
//! - [`spectral`] - Discrete power spectrum via FFT
//! - [`animate`] - Animation-frame sequencing
//! - [`plot`] - PNG rendering of engine outputs
//! - [`config`] - Session configuration via TOML
//! - [`logging`] - JSON line-delimited run logging

pub mod animate;
pub mod config;
pub mod dispersion;
pub mod error;
pub mod evaluate;
pub mod logging;
pub mod packet;
pub mod plot;
pub mod progress;
pub mod spectral;

pub use animate::{Frame, FrameSet};
pub use config::{ConfigError, SessionConfig};
pub use dispersion::{Dispersion, DispersionFn};
pub use error::{PacketError, PacketResult};
pub use evaluate::{Axis, EvalRequest, Evaluation};
pub use packet::{Component, ComponentOrder, WavePacket};
pub use plot::{render_frames, render_power_spectrum, render_waveform, PlotOptions};
pub use progress::{Progress, Silent, StderrProgress};
pub use spectral::PowerSpectrum;
