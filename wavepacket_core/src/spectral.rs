//! Discrete power spectrum of the packet's time-domain waveform.
//!
//! Synthesizes the waveform over a uniformly sampled time axis, forward
//! transforms it and keeps the nonnegative-frequency half of the spectrum.
//! Coefficients follow the unnormalized forward-DFT convention, so a pure
//! cosine of amplitude A sampled on an exact bin peaks at power (A·M/2)².

use ndarray::ArrayView1;
use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::{PacketError, PacketResult};
use crate::packet::WavePacket;

/// Frequency bins, complex coefficients and powers of one spectrum.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSpectrum {
    /// Bin center frequencies, `frequencies[j] = j / (M·Δt)`
    pub frequencies: Vec<f64>,
    /// First M/2+1 forward-DFT coefficients of the real waveform
    pub coefficients: Vec<Complex<f64>>,
    /// Squared coefficient magnitudes, parallel to `frequencies`
    pub powers: Vec<f64>,
}

impl PowerSpectrum {
    /// Number of retained frequency bins.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Index of the strongest bin, if any.
    pub fn dominant_bin(&self) -> Option<usize> {
        self.powers
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(index, _)| index)
    }

    /// Center frequency of the strongest bin, if any.
    pub fn dominant_frequency(&self) -> Option<f64> {
        self.dominant_bin().map(|index| self.frequencies[index])
    }
}

impl WavePacket {
    /// Power spectrum of the time-domain waveform at a fixed position.
    ///
    /// The sample spacing Δt is taken from the first two entries of `times`
    /// only. Known limitation, kept on purpose: non-uniform spacing beyond
    /// the first interval is not detected and silently mis-scales the
    /// frequency bins. Callers own the uniform-sampling guarantee.
    ///
    /// # Errors
    /// * `InvalidSampling` when `times` has fewer than 2 samples.
    /// * `EmptyPacket` when the packet has no components.
    pub fn power_spectrum(
        &self,
        times: ArrayView1<'_, f64>,
        fixed_position: f64,
    ) -> PacketResult<PowerSpectrum> {
        if times.len() < 2 {
            return Err(PacketError::invalid_sampling(times.len()));
        }
        let waveform = self.synthesize_along_time(times, fixed_position)?;
        let samples = times.len();
        let dt = times[1] - times[0];

        let mut buffer: Vec<Complex<f64>> = waveform
            .iter()
            .map(|&value| Complex::new(value, 0.0))
            .collect();
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(samples);
        fft.process(&mut buffer);

        // Real input: bins above M/2 mirror the ones below, drop them
        let bins = samples / 2 + 1;
        buffer.truncate(bins);

        let frequencies: Vec<f64> = (0..bins)
            .map(|j| j as f64 / (samples as f64 * dt))
            .collect();
        let powers: Vec<f64> = buffer.iter().map(|c| c.norm_sqr()).collect();

        Ok(PowerSpectrum {
            frequencies,
            coefficients: buffer,
            powers,
        })
    }
}
